//! Zero-cost type-level tags for validated output.
//!
//! The [`brand`](crate::action::brand), [`flavor`](crate::action::flavor) and
//! [`readonly`](crate::action::readonly) actions leave values untouched.
//! Deserializing the validated value into one of these wrappers with
//! [`parse_into`](crate::parse_into) is what carries the tag into the type
//! system.
//!
//! # Example
//!
//! ```rust
//! use assay::{action, parse_into, Brand, Schema};
//! use serde_json::json;
//!
//! struct UserId;
//!
//! let schema = Schema::pipe(
//!     Schema::integer(),
//!     vec![action::min_value(1.0), action::brand::<UserId>()],
//! );
//! let id: Brand<u64, UserId> = parse_into(&schema, &json!(42)).into_result().unwrap();
//! assert_eq!(*id, 42);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with `B`. Only produced by deserialization or [`Brand::new`],
/// so a plain `T` never converts into it implicitly.
#[repr(transparent)]
pub struct Brand<T, B> {
    value: T,
    tag: PhantomData<fn() -> B>,
}

impl<T, B> Brand<T, B> {
    /// Tags `value` explicitly.
    pub fn new(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    /// Removes the tag.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// A value tagged with `F` that converts freely from a plain `T`.
#[repr(transparent)]
pub struct Flavor<T, F> {
    value: T,
    tag: PhantomData<fn() -> F>,
}

impl<T, F> Flavor<T, F> {
    /// Removes the tag.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, F> From<T> for Flavor<T, F> {
    fn from(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }
}

/// A value that can be read but not mutated through the wrapper.
#[repr(transparent)]
pub struct Readonly<T> {
    value: T,
}

impl<T> Readonly<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

macro_rules! impl_marker {
    ($name:ident < T $(, $tag:ident)? >, $wrap:expr) => {
        impl<T $(, $tag)?> Deref for $name<T $(, $tag)?> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.value
            }
        }

        impl<T: Clone $(, $tag)?> Clone for $name<T $(, $tag)?> {
            fn clone(&self) -> Self {
                $wrap(self.value.clone())
            }
        }

        impl<T: fmt::Debug $(, $tag)?> fmt::Debug for $name<T $(, $tag)?> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.value).finish()
            }
        }

        impl<T: PartialEq $(, $tag)?> PartialEq for $name<T $(, $tag)?> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<T: Serialize $(, $tag)?> Serialize for $name<T $(, $tag)?> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.value.serialize(serializer)
            }
        }

        impl<'de, T: Deserialize<'de> $(, $tag)?> Deserialize<'de> for $name<T $(, $tag)?> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                T::deserialize(deserializer).map($wrap)
            }
        }
    };
}

impl_marker!(Brand<T, B>, Brand::new);
impl_marker!(Flavor<T, F>, Flavor::from);
impl_marker!(Readonly<T>, Readonly::new);
