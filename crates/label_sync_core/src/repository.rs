//! Repository identifier parsing.

use std::{fmt, str::FromStr};

use crate::Error;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Identifies a repository as `owner/name`.
///
/// # Examples
///
/// ```
/// use label_sync_core::RepositoryId;
///
/// let repo: RepositoryId = "octocat/hello-world".parse().unwrap();
/// assert_eq!(repo.owner(), "octocat");
/// assert_eq!(repo.name(), "hello-world");
/// assert_eq!(repo.to_string(), "octocat/hello-world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Creates an identifier from its parts, rejecting empty or slash-containing parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let name = name.into();

        let is_valid_part = |part: &str| !part.is_empty() && !part.contains('/');
        if !is_valid_part(&owner) || !is_valid_part(&name) {
            return Err(Error::InvalidRepository(format!("{}/{}", owner, name)));
        }

        Ok(Self { owner, name })
    }

    /// The user or organization owning the repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Web page listing the repository labels.
    pub fn labels_url(&self) -> String {
        format!("https://github.com/{}/{}/labels", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| Error::InvalidRepository(trimmed.to_string()))?;

        Self::new(owner.trim(), name.trim())
            .map_err(|_| Error::InvalidRepository(trimmed.to_string()))
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
