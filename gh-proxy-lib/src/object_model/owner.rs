use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Owner {
    #[serde(rename = "login")]
    pub login: String,
}
