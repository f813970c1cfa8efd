//! Errors raised while building or querying a set.

use std::fmt;

use thiserror::Error;

use crate::primitive::SetKind;

/// What an alias collided with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollisionTarget {
    /// A declared member name.
    Name(String),
    /// An alias already registered for the named member.
    Alias { owner: String },
}

impl fmt::Display for CollisionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "the member name `{name}`"),
            Self::Alias { owner } => write!(f, "an alias already registered for `{owner}`"),
        }
    }
}

/// Construction failure. No partially built set is ever produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("member `{name}` repeats value {value} already held by `{existing}`")]
    DuplicateValue {
        name: String,
        existing: String,
        value: String,
    },

    #[error("member name `{name}` is declared more than once")]
    DuplicateName { name: String },

    #[error("alias `{alias}` of `{member}` collides with {target}")]
    Collision {
        alias: String,
        member: String,
        target: CollisionTarget,
    },

    #[error("member declared without a name")]
    EmptyName,

    #[error("alias `{alias}` is listed twice in one annotation")]
    DuplicateAlias { alias: String },

    #[error("alias names must not be empty")]
    EmptyAlias,

    #[error("`{name}` requests an automatic value, but the value type has no auto sequence")]
    AutoUnsupported { name: String },

    /// The highest value so far has no successor: the type overflowed, or
    /// the value lies outside the auto sequence.
    #[error("no automatic value follows the highest declared value for `{name}`")]
    AutoOverflow { name: String },

    #[error("flag member `{name}` has value {value}, which is not a single bit")]
    NotSingleBit { name: String, value: String },
}

/// A name or alias that resolved to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no member or alias named `{key}`")]
    NotFound { key: String },
}

/// A flag-only operation requested from a set of another kind.
///
/// Typed sets make this impossible; it only surfaces through runtime-kinded
/// wrappers such as loaded definition tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KindError {
    #[error("expected a {expected} set, found a {found} set")]
    InvalidKind { expected: SetKind, found: SetKind },
}
