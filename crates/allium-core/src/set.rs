//! Plain enumeration sets.

use std::ops::Deref;

use crate::builder::{FromTable, SetBuilder};
use crate::primitive::{Primitive, SetKind};
use crate::table::MemberTable;

/// Builder producing an [`EnumSet`].
pub type EnumSetBuilder<V> = SetBuilder<V, EnumSet<V>>;

/// A finalized plain enumeration: unique values, no composition.
///
/// Lookup, iteration and membership by value come from [`MemberTable`]
/// through `Deref`.
///
/// ```
/// use allium_core::EnumSet;
///
/// let colors = EnumSet::<u8>::builder()
///     .auto("red")
///     .auto("green")
///     .value("blue", 10)
///     .build()?;
///
/// let values: Vec<u8> = colors.iter().map(|m| *m.value()).collect();
/// assert_eq!(values, [1, 2, 10]);
/// # Ok::<(), allium_core::BuildError>(())
/// ```
#[derive(Debug)]
pub struct EnumSet<V> {
    table: MemberTable<V>,
}

impl<V: Primitive> EnumSet<V> {
    pub fn builder() -> EnumSetBuilder<V> {
        SetBuilder::new()
    }

    pub const fn table(&self) -> &MemberTable<V> {
        &self.table
    }
}

impl<V: Primitive> FromTable<V> for EnumSet<V> {
    const KIND: SetKind = SetKind::Plain;

    fn from_table(table: MemberTable<V>) -> Self {
        Self { table }
    }
}

impl<V: Primitive> Deref for EnumSet<V> {
    type Target = MemberTable<V>;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl<'a, V: Primitive> IntoIterator for &'a EnumSet<V> {
    type Item = &'a crate::member::MemberRef<V>;
    type IntoIter = std::slice::Iter<'a, crate::member::MemberRef<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

#[cfg(test)]
#[path = "../tests/set_tests.rs"]
mod tests;
