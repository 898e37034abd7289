//! Validation issue types.
//!
//! This module provides [`Issue`] for single validation failures and
//! [`Issues`] for accumulating multiple failures.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::path::Path;

/// The closed set of issue codes.
///
/// Codes display and serialize in snake_case (`invalid_type`, `too_small`, ...),
/// which is the form used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The value's runtime kind did not match the schema.
    InvalidType,
    /// The value was not the expected literal or enum member.
    InvalidLiteral,
    /// No member of a union accepted the value.
    InvalidUnion,
    /// A length or numeric lower bound was violated.
    TooSmall,
    /// A length or numeric upper bound was violated.
    TooBig,
    /// The number was not a multiple of the required step.
    NotMultipleOf,
    /// The number was not integral.
    NotInteger,
    /// The number was NaN or infinite.
    NotFinite,
    /// A value that must not be empty was empty.
    Empty,
    /// A user-defined or structural check failed.
    Custom,
}

impl IssueKind {
    /// Returns the snake_case code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidType => "invalid_type",
            IssueKind::InvalidLiteral => "invalid_literal",
            IssueKind::InvalidUnion => "invalid_union",
            IssueKind::TooSmall => "too_small",
            IssueKind::TooBig => "too_big",
            IssueKind::NotMultipleOf => "not_multiple_of",
            IssueKind::NotInteger => "not_integer",
            IssueKind::NotFinite => "not_finite",
            IssueKind::Empty => "empty",
            IssueKind::Custom => "custom",
        }
    }
}

impl Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
///
/// `Issue` records what went wrong and where:
/// - **code**: The [`IssueKind`] for programmatic handling
/// - **message**: Human-readable description of the failure
/// - **path**: Where in the input the failure occurred
/// - **expected** / **got**: Optional descriptions, filled in by type and literal checks
///
/// # Example
///
/// ```rust
/// use assay::{Issue, IssueKind, Path};
///
/// let issue = Issue::new(IssueKind::TooSmall, Path::root().push_name("age"), "expected >= 18")
///     .with_expected(">= 18")
///     .with_got("12");
///
/// assert_eq!(issue.code, IssueKind::TooSmall);
/// assert_eq!(issue.to_string(), "age: expected >= 18 (expected: >= 18) (got: 12)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// The issue code.
    pub code: IssueKind,
    /// Human-readable error message.
    pub message: String,
    /// The path to the value that failed validation.
    pub path: Path,
    /// Description of what was expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Description of what was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub got: Option<String>,
}

impl Issue {
    /// Creates a new issue with the given code, path and message.
    pub fn new(code: IssueKind, path: Path, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path,
            expected: None,
            got: None,
        }
    }

    /// Creates an `invalid_type` issue for a value of kind `got` where `expected` was required.
    pub fn invalid_type(path: Path, expected: impl Into<String>, got: impl Into<String>) -> Self {
        let expected = expected.into();
        let got = got.into();
        Self::new(
            IssueKind::InvalidType,
            path,
            format!("expected {}, got {}", expected, got),
        )
        .with_expected(expected)
        .with_got(got)
    }

    /// Creates a `custom` issue.
    pub fn custom(path: Path, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Custom, path, message)
    }

    /// Creates a `too_small` issue.
    pub fn too_small(path: Path, message: impl Into<String>) -> Self {
        Self::new(IssueKind::TooSmall, path, message)
    }

    /// Creates a `too_big` issue.
    pub fn too_big(path: Path, message: impl Into<String>) -> Self {
        Self::new(IssueKind::TooBig, path, message)
    }

    /// Sets the "expected" description and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the "got" description and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Renders the issue in its wire form: `{ code, message, path }`.
    pub fn to_value(&self) -> Value {
        json!({
            "code": self.code.as_str(),
            "message": self.message,
            "path": self.path.to_value(),
        })
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for Issue {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
};

/// A non-empty, ordered collection of issues.
///
/// `Issues` wraps a `NonEmptyVec<Issue>`, so a failed validation always
/// explains itself: there is no way to build a failure carrying zero issues.
///
/// # Combining Issues
///
/// `Issues` implements `Semigroup`, preserving order:
///
/// ```rust
/// use assay::{Issue, Issues, Path};
/// use stillwater::prelude::*;
///
/// let first = Issues::single(Issue::custom(Path::root().push_name("name"), "required"));
/// let second = Issues::single(Issue::custom(Path::root().push_name("email"), "invalid"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().message, "required");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates an `Issues` containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates an `Issues` from a `NonEmptyVec`.
    pub fn from_non_empty(issues: NonEmptyVec<Issue>) -> Self {
        Self(issues)
    }

    /// Creates an `Issues` from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Returns the number of issues in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained issues, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns all issues at the specified path.
    pub fn at_path(&self, path: &Path) -> Vec<&Issue> {
        self.0.iter().filter(|i| &i.path == path).collect()
    }

    /// Returns all issues with the specified code.
    pub fn with_code(&self, code: IssueKind) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.code == code).collect()
    }

    /// Returns the codes of all issues, in order.
    pub fn codes(&self) -> Vec<IssueKind> {
        self.0.iter().map(|i| i.code).collect()
    }

    /// Returns the first issue in the collection.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Converts this collection into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<Issue> {
        &self.0
    }

    /// Renders every issue in its wire form, as a JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(self.0.iter().map(Issue::to_value).collect())
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl Serialize for Issues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = Box<dyn Iterator<Item = &'a Issue> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issues>();
    assert_sync::<Issues>();
};
