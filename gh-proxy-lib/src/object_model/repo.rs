use super::owner::Owner;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Repo {
    #[serde(rename = "id")]
    pub id: u64,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "full_name")]
    pub full_name: String,

    #[serde(rename = "private")]
    pub private: bool,

    #[serde(rename = "owner")]
    pub owner: Owner,

    #[serde(rename = "html_url")]
    pub html_url: String,

    /// API URL of the repository resource
    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u64,

    #[serde(rename = "subscribers_count")]
    pub subscribers_count: u64,

    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "default_branch")]
    pub default_branch: String,
}
