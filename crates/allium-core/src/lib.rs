//! Core types for aliased enumeration sets.
//!
//! This crate provides the building blocks shared by every set flavor:
//! - Declarations (`Declaration`, `AliasAnnotation`, `aliased`, `auto`)
//! - The value discipline (`Primitive`, `SetKind`)
//! - Finalized members (`Member`) and their lookup table (`MemberTable`)
//! - The two-pass builder (`SetBuilder`) and the plain set (`EnumSet`)
//! - Build and lookup errors
//!
//! Flag sets live in `allium-flags` and reuse the same builder and table.

// Declaration-time values
pub mod alias;
pub use alias::{AliasAnnotation, Declaration, Declared, aliased, auto};

// Value discipline for auto assignment and flag bits
pub mod primitive;
pub use primitive::{Primitive, SetKind};

// Finalized members
pub mod member;
pub use member::{Member, MemberRef};

// Name / alias / value maps shared by every set flavor
pub mod table;
pub use table::MemberTable;

// Two-pass builder
pub mod builder;
pub use builder::{FromTable, SetBuilder};

// Plain enumeration sets
pub mod set;
pub use set::{EnumSet, EnumSetBuilder};

// Errors
pub mod error;
pub use error::{BuildError, CollisionTarget, KindError, LookupError};
