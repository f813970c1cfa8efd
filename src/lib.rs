//! Enumeration and flag sets whose members can be looked up by alias.
//!
//! `allium` re-exports the workspace crates:
//!
//! - `allium-core`: alias annotations, the two-pass builder, plain sets
//! - `allium-flags`: flag sets with cached composite members
//! - `allium-table`: sets declared in JSON definition tables (as [`table`])
//!
//! ```
//! use allium::{FlagSet, auto};
//!
//! let perms = FlagSet::<u8>::builder()
//!     .declare("read", auto(["r"])?)
//!     .declare("write", auto(["w"])?)
//!     .auto("exec")
//!     .build()?;
//!
//! let rw = perms.parse("r, w", ", ")?;
//! assert_eq!(*rw.value(), 0b011);
//! assert_eq!(perms.render(&rw), "read|write");
//! assert!(std::sync::Arc::ptr_eq(&rw, &perms.composite(0b011)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use allium_core::{
    AliasAnnotation, BuildError, CollisionTarget, Declaration, Declared, EnumSet, EnumSetBuilder,
    FromTable, KindError, LookupError, Member, MemberRef, MemberTable, Primitive, SetBuilder,
    SetKind, aliased, auto,
};
pub use allium_flags::{FlagBits, FlagSet, FlagSetBuilder, Members};

/// JSON definition tables.
pub mod table {
    pub use allium_table::*;
}
