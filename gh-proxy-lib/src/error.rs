use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("invalid repository identifier \"{0}\": expected owner/name")]
    InvalidRepoId(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
