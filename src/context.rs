//! Per-parse validation context.
//!
//! This module provides [`Context`], which carries the current path and a
//! private issue accumulator down the validation call tree.

use stillwater::Validation;

use crate::error::{Issue, Issues};
use crate::path::{Path, PathKey};
use crate::result::ParseResult;

/// Tracks where validation currently is and what has gone wrong there.
///
/// A context's accumulator belongs to that context alone. [`Context::child`]
/// and [`Context::fork`] hand out fresh, empty accumulators, so a nested or
/// exploratory parse can never write into its parent. A composite that wants a
/// child's issues must read them from the child's failure and [`absorb`] them.
///
/// [`absorb`]: Context::absorb
///
/// # Example
///
/// ```rust
/// use assay::{Context, Issue};
///
/// let mut ctx = Context::root();
/// let child = ctx.child("email");
/// assert_eq!(child.path().to_string(), "email");
///
/// ctx.push(Issue::custom(ctx.path().clone(), "broken"));
/// assert!(ctx.err::<()>(Vec::new()).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    path: Path,
    accumulated: Vec<Issue>,
}

impl Context {
    /// Creates a context at the root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a context at the given path.
    pub fn at(path: Path) -> Self {
        Self {
            path,
            accumulated: Vec::new(),
        }
    }

    /// Returns the current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends an issue to this context's accumulator.
    pub fn push(&mut self, issue: Issue) {
        self.accumulated.push(issue);
    }

    /// Appends every issue from a child's failure, preserving order.
    pub fn absorb(&mut self, issues: Issues) {
        self.accumulated.extend(issues);
    }

    /// Returns a fresh context one level deeper, with an empty accumulator.
    pub fn child(&self, key: impl Into<PathKey>) -> Context {
        Context::at(self.path.child(key))
    }

    /// Returns a fresh context at the same path, with an empty accumulator.
    ///
    /// Used for trial parses whose issues must not leak when abandoned.
    pub fn fork(&self) -> Context {
        Context::at(self.path.clone())
    }

    /// Returns true if any issues have been pushed.
    pub fn has_issues(&self) -> bool {
        !self.accumulated.is_empty()
    }

    /// Returns the issues pushed so far.
    pub fn issues(&self) -> &[Issue] {
        &self.accumulated
    }

    /// Wraps a value in a success. The accumulator is not consulted.
    pub fn ok<T>(&self, value: T) -> ParseResult<T> {
        Validation::Success(value)
    }

    /// Produces a failure.
    ///
    /// Accumulated issues take precedence; `fallback` is used only when
    /// nothing was pushed. If both are empty, a generic `custom` issue at the
    /// current path stands in, so a failure always carries at least one issue.
    pub fn err<T>(&self, fallback: impl IntoIterator<Item = Issue>) -> ParseResult<T> {
        let issues = if self.accumulated.is_empty() {
            Issues::from_vec(fallback.into_iter().collect())
        } else {
            Issues::from_vec(self.accumulated.clone())
        };
        Validation::Failure(issues.unwrap_or_else(|| {
            Issues::single(Issue::custom(self.path.clone(), "validation failed"))
        }))
    }

    /// Produces a failure from a single issue, subject to the same precedence as [`Context::err`].
    pub fn fail<T>(&self, issue: Issue) -> ParseResult<T> {
        self.err([issue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;
    use crate::result::ParseResultExt;

    #[test]
    fn test_child_has_own_accumulator() {
        let mut parent = Context::root();
        parent.push(Issue::custom(Path::root(), "parent"));

        let child = parent.child("name");
        assert!(!child.has_issues());
        assert_eq!(child.path(), &Path::root().push_name("name"));
    }

    #[test]
    fn test_child_pushes_do_not_reach_parent() {
        let parent = Context::root();
        let mut child = parent.child(0usize);
        child.push(Issue::custom(child.path().clone(), "child"));

        assert!(child.has_issues());
        assert!(!parent.has_issues());
    }

    #[test]
    fn test_fork_keeps_path() {
        let ctx = Context::at(Path::root().push_name("a"));
        let forked = ctx.fork();
        assert_eq!(forked.path(), ctx.path());
        assert!(!forked.has_issues());
    }

    #[test]
    fn test_err_prefers_accumulated() {
        let mut ctx = Context::root();
        ctx.push(Issue::custom(Path::root(), "accumulated"));

        let issues = ctx
            .err::<()>([Issue::custom(Path::root(), "fallback")])
            .unwrap_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.first().message, "accumulated");
    }

    #[test]
    fn test_err_uses_fallback_when_empty() {
        let ctx = Context::root();
        let issues = ctx
            .err::<()>([Issue::too_small(Path::root(), "fallback")])
            .unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::TooSmall);
    }

    #[test]
    fn test_err_never_empty() {
        let ctx = Context::at(Path::root().push_name("x"));
        let issues = ctx.err::<()>(Vec::new()).unwrap_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.first().code, IssueKind::Custom);
        assert_eq!(issues.first().path.to_string(), "x");
    }

    #[test]
    fn test_ok_ignores_accumulator() {
        let mut ctx = Context::root();
        ctx.push(Issue::custom(Path::root(), "ignored"));
        assert_eq!(ctx.ok(5).unwrap_value(), 5);
    }

    #[test]
    fn test_absorb_preserves_order() {
        let mut ctx = Context::root();
        let issues = Issues::from_vec(vec![
            Issue::custom(Path::root(), "a"),
            Issue::custom(Path::root(), "b"),
        ])
        .unwrap();
        ctx.absorb(issues);
        let messages: Vec<_> = ctx.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
