mod error;
mod github_client;
mod logging_middleware;
mod object_model;
mod repo_id;
mod result;
mod summary;

pub use self::error::GitHubClientError;
pub use self::github_client::GitHubClient;
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{Owner, Repo};
pub use self::repo_id::RepoId;
pub use self::result::GitHubClientResult;
pub use self::summary::write_summary;
