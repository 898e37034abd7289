//! Issue types for validation failures.
//!
//! This module provides the closed [`IssueKind`] taxonomy, the [`Issue`]
//! record with its path and message, the non-empty [`Issues`] collection, and
//! the [`ParseError`] adapter for call sites that prefer `Result` errors.

mod issue;
mod parse_error;

pub use issue::{Issue, IssueKind, Issues};
pub use parse_error::ParseError;
