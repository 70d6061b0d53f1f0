//! Loading of the desired label set from a YAML file.
//!
//! The file holds a list of labels:
//!
//! ```yaml
//! - name: bug
//!   color: d73a4a
//!   description: Something isn't working
//! - name: feature
//!   color: 00ff00
//! ```
//!
//! Values are validated but never rewritten, so a label sent to GitHub has
//! exactly the name and color written in the file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use github_client::Label;
use tracing::{debug, info};

use crate::{Error, LabelSet, LabelSyncResult};

#[cfg(test)]
#[path = "desired_state_tests.rs"]
mod tests;

/// Default name of the desired-state file, relative to the working directory.
pub const DEFAULT_LABELS_FILENAME: &str = "labels.yml";

/// Reads and parses the desired label set from `path`.
///
/// # Errors
///
/// * `Error::LabelFileNotFound` if the file does not exist
/// * `Error::ReadLabelFile` if it cannot be read
/// * `Error::ParseLabelFile` if it is not a YAML list of labels
/// * `Error::InvalidLabel` if a label has an empty name or a malformed color
pub fn load_desired_labels(path: &Path) -> LabelSyncResult<LabelSet> {
    debug!("Loading desired labels from {:?}", path);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::LabelFileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::ReadLabelFile {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let labels = parse_desired_labels(&content, path)?;
    info!(
        path = %path.display(),
        label_count = labels.len(),
        "Loaded desired labels"
    );
    Ok(labels)
}

/// Parses a desired-state document. `source` is only used in error messages.
///
/// An empty document (or one holding only comments) is an empty set.
pub fn parse_desired_labels(content: &str, source: &Path) -> LabelSyncResult<LabelSet> {
    if is_blank_document(content) {
        return Ok(LabelSet::new());
    }

    let labels: Option<Vec<Label>> =
        serde_yaml::from_str(content).map_err(|e| Error::ParseLabelFile {
            path: PathBuf::from(source),
            source: e,
        })?;
    let labels = labels.unwrap_or_default();

    for label in &labels {
        validate_label(label)?;
    }

    Ok(LabelSet::from_labels(labels))
}

/// Checks that a label can be sent to GitHub unchanged.
pub fn validate_label(label: &Label) -> LabelSyncResult<()> {
    if label.name.trim().is_empty() {
        return Err(Error::InvalidLabel {
            name: label.name.clone(),
            reason: "name must not be empty".to_string(),
        });
    }

    if label.color.len() != 6 || !label.color.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidLabel {
            name: label.name.clone(),
            reason: format!(
                "color '{}' must be six hex digits without a leading '#'",
                label.color
            ),
        });
    }

    Ok(())
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}
