//! Values of plain sets declared in a table.

use std::fmt;

use allium_core::{Primitive, SetKind};
use serde::{Deserialize, Serialize};

/// An integer or text member value.
///
/// Integers follow the integer auto sequence. Text values order after every
/// integer and have no successor, so an auto entry declared after any text
/// value is rejected by the builder.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    Int(i64),
    Text(String),
}

impl TableValue {
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl Primitive for TableValue {
    fn auto_start(kind: SetKind) -> Option<Self> {
        i64::auto_start(kind).map(Self::Int)
    }

    fn auto_after(&self, kind: SetKind) -> Option<Self> {
        match self {
            Self::Int(value) => value.auto_after(kind).map(Self::Int),
            Self::Text(_) => None,
        }
    }

    fn is_single_bit(&self) -> bool {
        matches!(self, Self::Int(value) if value.is_single_bit())
    }
}

impl fmt::Display for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i64> for TableValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for TableValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
