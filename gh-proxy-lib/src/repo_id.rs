use crate::error::GitHubClientError;
use crate::result::GitHubClientResult;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Repository identifier of the form `owner/name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn new(owner: &str, name: &str) -> GitHubClientResult<Self> {
        fn is_valid_part(s: &str) -> bool {
            // "." and ".." would be resolved as dot-segments by URL joins
            !matches!(s, "" | "." | "..")
                && s
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }

        if !is_valid_part(owner) || !is_valid_part(name) {
            return Err(GitHubClientError::InvalidRepoId(format!("{owner}/{name}")));
        }

        Ok(Self {
            owner: String::from(owner),
            name: String::from(name),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = GitHubClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((owner, name)) = s.split_once('/') else {
            return Err(GitHubClientError::InvalidRepoId(String::from(s)));
        };

        Self::new(owner, name).map_err(|_| GitHubClientError::InvalidRepoId(String::from(s)))
    }
}

impl Display for RepoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
