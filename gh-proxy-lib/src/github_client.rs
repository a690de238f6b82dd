use crate::error::GitHubClientError;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repo;
use crate::repo_id::RepoId;
use crate::result::GitHubClientResult;
use anyhow::anyhow;
use log::{debug, Level};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;

pub struct GitHubClient {
    url: Url,
    token: Option<String>,
    client: ClientWithMiddleware,
}

impl GitHubClient {
    /// Binds a client to `url`, which may point at the public API or at a
    /// proxy. Any path prefix on `url` is kept for every request.
    pub fn new<U>(url: U, token: Option<&str>) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url
            .into_url()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        debug!("using base URL {url}");

        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::new(Level::Debug))
            .build();

        Ok(Self {
            url,
            token: token.map(String::from),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.url
    }

    pub async fn get_repo(&self, repo_id: &RepoId) -> GitHubClientResult<Repo> {
        self.get::<Repo>(
            self.url
                .join(&format!("repos/{}/{}", repo_id.owner(), repo_id.name()))
                .map_err(|e| GitHubClientError::Other(anyhow!(e)))?,
        )
        .await
    }

    async fn get<T>(&self, url: Url) -> GitHubClientResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request_builder = self
            .client
            .get(url)
            .header(USER_AGENT, "gh-proxy-lib")
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        // The proxy normally injects its own tokens
        if let Some(token) = &self.token {
            request_builder = request_builder.bearer_auth(token);
        }

        request_builder
            .send()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
            .error_for_status()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
            .json::<T>()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))
    }
}
