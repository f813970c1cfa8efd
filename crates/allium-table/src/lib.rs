//! Definition tables: enumeration and flag sets declared in JSON.
//!
//! A table document lists one or more sets. Each member entry is either a
//! bare name (auto value) or an object with a name, an optional value and
//! optional aliases:
//!
//! ```json
//! { "sets": [ { "name": "Permission", "kind": "flag",
//!               "members": [ "read", { "name": "write", "aliases": ["w"] } ] } ] }
//! ```
//!
//! Loading a set runs the same builder as the typed API and yields a
//! [`LoadedSet`] whose kind is only known at runtime.

pub mod value;
pub use value::TableValue;

pub mod document;
pub use document::{MemberEntry, MemberSpec, SetTable, TableDocument, TableKind};

pub mod loaded;
pub use loaded::{AnySet, LoadedSet, MemberView};

pub mod error;
pub use error::TableError;
