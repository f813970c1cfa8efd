//! Flag sets for allium enumerations.
//!
//! A flag set is an enumeration whose canonical members are single bits.
//! Any integer maps to a member: a canonical one when the value is exactly
//! one declared bit, otherwise an unnamed composite that is synthesized on
//! first request and cached, so equal composite values share one instance.
//!
//! ```
//! use allium_flags::{FlagSet, auto};
//!
//! let flags = FlagSet::<u32>::builder()
//!     .declare("x", auto(["foo"])?)
//!     .declare("y", auto(["bar"])?)
//!     .declare("z", auto(["baz"])?)
//!     .build()?;
//!
//! let xz = flags.union(flags.get("foo")?, flags.get("baz")?);
//! assert_eq!(*xz.value(), 0b101);
//! assert_eq!(flags.render(&xz), "x|z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub use bits::FlagBits;

pub mod flag_set;
pub use flag_set::{FlagSet, FlagSetBuilder, Members};

pub use allium_core::{
    AliasAnnotation, BuildError, Declaration, Declared, LookupError, Member, MemberRef, SetKind,
    aliased, auto,
};
