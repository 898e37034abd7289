//! Error adapter for `Result`-based boundaries.

use crate::error::Issues;

/// A failed parse, packaged as a standard error.
///
/// `ParseError` wraps the full issue list and displays the first issue's
/// message as its summary. It is produced by [`try_parse`](crate::try_parse)
/// for call sites that want `?` propagation instead of inspecting a
/// validation result.
///
/// # Example
///
/// ```rust
/// use assay::{try_parse, Schema};
/// use serde_json::json;
///
/// let err = try_parse(&Schema::string(), &json!(42)).unwrap_err();
/// assert_eq!(err.to_string(), "expected string, got number");
/// assert_eq!(err.issues().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{summary}")]
pub struct ParseError {
    summary: String,
    issues: Issues,
}

impl ParseError {
    /// Creates an error from a non-empty issue list.
    pub fn new(issues: Issues) -> Self {
        Self {
            summary: issues.first().message.clone(),
            issues,
        }
    }

    /// Returns every issue that caused the failure.
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    /// Consumes the error, returning the issue list.
    pub fn into_issues(self) -> Issues {
        self.issues
    }
}

impl From<Issues> for ParseError {
    fn from(issues: Issues) -> Self {
        Self::new(issues)
    }
}
