//! Label domain types.
//!
//! This module contains the type representing a GitHub issue and pull request
//! label, used both for labels read from the API and for labels sent to it.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label on a repository.
///
/// The same shape is used when listing labels and as the request body when
/// creating or updating one. Any extra fields GitHub returns (`id`, `url`,
/// `default`, ...) are ignored on deserialization.
///
/// # Fields
///
/// * `name` - The name of the label, unique within a repository
/// * `color` - The hex color code without the leading `#`
/// * `description` - Optional short description
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label::new("bug", "d73a4a");
/// assert_eq!(label.name, "bug");
/// assert!(label.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// The color of the label as six hex digits, e.g. `d73a4a`
    pub color: String,

    /// The description of the label, omitted from request bodies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Label {
    /// Creates a label without a description.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    /// Returns the label with the given description set.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
