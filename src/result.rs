//! The two-variant outcome of every validation step.
//!
//! A step either succeeds with a value or fails with a non-empty, ordered list
//! of [`Issues`]. The outcome type is stillwater's `Validation`, the same type
//! composites use to accumulate failures.

use stillwater::Validation;

use crate::error::Issues;

/// The result of validating a value: `Success(T)` or `Failure(Issues)`.
pub type ParseResult<T> = Validation<T, Issues>;

/// Accessors for [`ParseResult`] that name the variant they expect.
pub trait ParseResultExt<T> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure. The panic message lists the issues.
    fn unwrap_value(self) -> T;

    /// Returns the issues of a failure.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success.
    fn unwrap_issues(self) -> Issues;

    /// Borrows the issues of a failure, or `None` on success.
    fn issues(&self) -> Option<&Issues>;
}

impl<T> ParseResultExt<T> for ParseResult<T> {
    fn unwrap_value(self) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(issues) => {
                panic!("called `unwrap_value` on a failed parse: {}", issues)
            }
        }
    }

    fn unwrap_issues(self) -> Issues {
        match self {
            Validation::Success(_) => panic!("called `unwrap_issues` on a successful parse"),
            Validation::Failure(issues) => issues,
        }
    }

    fn issues(&self) -> Option<&Issues> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(issues) => Some(issues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Issue;
    use crate::path::Path;

    #[test]
    fn test_success_accessors() {
        let result: ParseResult<i32> = Validation::Success(7);
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert!(result.issues().is_none());
        assert_eq!(result.unwrap_value(), 7);
    }

    #[test]
    fn test_failure_accessors() {
        let result: ParseResult<i32> =
            Validation::Failure(Issues::single(Issue::custom(Path::root(), "bad")));
        assert!(result.is_failure());
        assert_eq!(result.issues().map(Issues::len), Some(1));
        assert_eq!(result.unwrap_issues().first().message, "bad");
    }

    #[test]
    #[should_panic(expected = "unwrap_value")]
    fn test_unwrap_value_on_failure_panics() {
        let result: ParseResult<i32> =
            Validation::Failure(Issues::single(Issue::custom(Path::root(), "bad")));
        result.unwrap_value();
    }

    #[test]
    #[should_panic(expected = "unwrap_issues")]
    fn test_unwrap_issues_on_success_panics() {
        let result: ParseResult<i32> = Validation::Success(1);
        result.unwrap_issues();
    }
}
