//! Structural paths for locating values inside validated input.
//!
//! This module provides [`Path`] and [`PathKey`]. Every [`Issue`](crate::Issue)
//! carries a `Path` naming the exact location that failed, addressed the same
//! way the value itself is addressed.

use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::Value;

/// One step into a nested value.
///
/// Object and record entries are addressed by name, array and tuple elements
/// by zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathKey {
    /// An object or record key (e.g., `user`, `email`)
    Name(String),
    /// An array or tuple position (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathKey {
    /// Creates a named key.
    pub fn name(name: impl Into<String>) -> Self {
        PathKey::Name(name.into())
    }

    /// Creates an index key.
    pub fn index(idx: usize) -> Self {
        PathKey::Index(idx)
    }

    /// Renders the key in its wire form: a JSON string or integer.
    pub fn to_value(&self) -> Value {
        match self {
            PathKey::Name(name) => Value::String(name.clone()),
            PathKey::Index(idx) => Value::from(*idx),
        }
    }
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        PathKey::Name(name.to_string())
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        PathKey::Name(name)
    }
}

impl From<&String> for PathKey {
    fn from(name: &String) -> Self {
        PathKey::Name(name.clone())
    }
}

impl From<usize> for PathKey {
    fn from(idx: usize) -> Self {
        PathKey::Index(idx)
    }
}

/// An immutable path to a location inside a validated value.
///
/// Paths grow by one key per nesting level. Appending never modifies the
/// original; it returns a new path.
///
/// # Example
///
/// ```rust
/// use assay::Path;
///
/// let path = Path::root()
///     .push_name("users")
///     .push_index(0)
///     .push_name("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Path {
    keys: Vec<PathKey>,
}

impl Path {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a sequence of keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<PathKey>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with `key` appended.
    pub fn child(&self, key: impl Into<PathKey>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend(self.keys.iter().cloned());
        keys.push(key.into());
        Self { keys }
    }

    /// Returns a new path with a named key appended.
    pub fn push_name(&self, name: impl Into<String>) -> Self {
        self.child(PathKey::Name(name.into()))
    }

    /// Returns a new path with an index key appended.
    pub fn push_index(&self, idx: usize) -> Self {
        self.child(PathKey::Index(idx))
    }

    /// Returns true if this is the root path (no keys).
    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of keys in this path.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this path has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the keys, outermost first.
    pub fn keys(&self) -> impl Iterator<Item = &PathKey> {
        self.keys.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.keys.split_last()?;
        Some(Self {
            keys: init.to_vec(),
        })
    }

    /// Returns the last key, or None if this is root.
    pub fn last(&self) -> Option<&PathKey> {
        self.keys.last()
    }

    /// Renders the path in its wire form: a JSON array of strings and integers.
    pub fn to_value(&self) -> Value {
        Value::Array(self.keys.iter().map(PathKey::to_value).collect())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            match key {
                PathKey::Name(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathKey::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
