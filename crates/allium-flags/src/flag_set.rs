//! Flag sets and composite members.
//!
//! Canonical members come from the shared builder with [`SetKind::Flag`], so
//! every canonical value is a single bit and no two canonical members share
//! a bit. Everything else is a composite:
//!
//! | Request | Result |
//! |---------|--------|
//! | value equal to a canonical bit | that canonical member |
//! | any other value, including 0 | cached unnamed composite |
//!
//! Composites keep the full requested value, bits without a canonical owner
//! included. The cache only grows; it is bounded by the values actually
//! requested.

use std::ops::Deref;
use std::sync::Arc;

use allium_core::{
    FromTable, LookupError, Member, MemberRef, MemberTable, SetBuilder, SetKind,
};
use dashmap::DashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::bits::FlagBits;

/// Builder producing a [`FlagSet`].
pub type FlagSetBuilder<B> = SetBuilder<B, FlagSet<B>>;

/// Canonical members of a decomposed value, in ascending bit order.
pub type Members<B> = SmallVec<[MemberRef<B>; 8]>;

/// A finalized flag set.
///
/// Safe to share between threads. Concurrent first requests for the same
/// composite value resolve to a single instance.
#[derive(Debug)]
pub struct FlagSet<B: FlagBits> {
    table: MemberTable<B>,
    /// Member indices sorted by bit position.
    bit_order: Vec<usize>,
    /// Union of all canonical bits.
    mask: B,
    composites: DashMap<B, MemberRef<B>>,
}

impl<B: FlagBits> FromTable<B> for FlagSet<B> {
    const KIND: SetKind = SetKind::Flag;

    fn from_table(table: MemberTable<B>) -> Self {
        let mut bit_order: Vec<usize> = (0..table.len()).collect();
        bit_order.sort_by_key(|&index| table.members()[index].value().bit_position());
        let mask = table
            .iter()
            .fold(B::zero(), |mask, member| mask | *member.value());

        Self {
            table,
            bit_order,
            mask,
            composites: DashMap::new(),
        }
    }
}

impl<B: FlagBits> FlagSet<B> {
    pub fn builder() -> FlagSetBuilder<B> {
        SetBuilder::new()
    }

    pub const fn table(&self) -> &MemberTable<B> {
        &self.table
    }

    /// Union of every canonical bit.
    pub fn mask(&self) -> B {
        self.mask
    }

    /// Bits of `value` that no canonical member owns.
    pub fn uncovered(&self, value: B) -> B {
        value & !self.mask
    }

    /// Canonical members whose bit is set in `value`, lowest bit first.
    ///
    /// Uncovered bits are ignored here; [`composite`](Self::composite) keeps
    /// them.
    pub fn decompose(&self, value: B) -> Members<B> {
        let members = self.table.members();
        self.bit_order
            .iter()
            .map(|&index| &members[index])
            .filter(|member| {
                let bit = *member.value();
                value & bit == bit
            })
            .cloned()
            .collect()
    }

    /// The member representing `value`.
    ///
    /// Returns the canonical member when `value` is one declared bit, and
    /// otherwise the cached composite for `value`, creating it on first use.
    /// Never fails.
    pub fn composite(&self, value: B) -> MemberRef<B> {
        if let Some(member) = self.table.by_value(&value) {
            return Arc::clone(member);
        }
        if let Some(existing) = self.composites.get(&value) {
            return Arc::clone(existing.value());
        }

        // The entry API holds the shard lock, so racing first requests agree
        // on one instance.
        let entry = self.composites.entry(value).or_insert_with(|| {
            trace!(value = ?value, "synthesized composite member");
            Arc::new(Member::composite(value))
        });
        Arc::clone(entry.value())
    }

    /// `a | b`
    pub fn union(&self, a: &Member<B>, b: &Member<B>) -> MemberRef<B> {
        self.composite(*a.value() | *b.value())
    }

    /// `a & b`
    pub fn intersection(&self, a: &Member<B>, b: &Member<B>) -> MemberRef<B> {
        self.composite(*a.value() & *b.value())
    }

    /// `a & !b`
    pub fn difference(&self, a: &Member<B>, b: &Member<B>) -> MemberRef<B> {
        self.composite(*a.value() & !*b.value())
    }

    /// `a ^ b`
    pub fn symmetric_difference(&self, a: &Member<B>, b: &Member<B>) -> MemberRef<B> {
        self.composite(*a.value() ^ *b.value())
    }

    /// Canonical bits not set in `a`. Uncovered bits of `a` are dropped.
    pub fn complement(&self, a: &Member<B>) -> MemberRef<B> {
        self.composite(!*a.value() & self.mask)
    }

    /// Whether every bit of `b` is also set in `a`.
    pub fn contains(&self, a: &Member<B>, b: &Member<B>) -> bool {
        let bits = *b.value();
        *a.value() & bits == bits
    }

    /// Union of any number of members; the empty union is [`empty`](Self::empty).
    pub fn union_all<'a, I>(&self, members: I) -> MemberRef<B>
    where
        I: IntoIterator<Item = &'a Member<B>>,
    {
        let value = members
            .into_iter()
            .fold(B::zero(), |acc, member| acc | *member.value());
        self.composite(value)
    }

    /// The "no flags" member.
    pub fn empty(&self) -> MemberRef<B> {
        self.composite(B::zero())
    }

    /// The member holding every canonical bit.
    pub fn all(&self) -> MemberRef<B> {
        self.composite(self.mask)
    }

    /// Parse `separator`-joined names or aliases into their union.
    ///
    /// ```
    /// use allium_flags::{FlagSet, auto};
    ///
    /// let flags = FlagSet::<u8>::builder()
    ///     .declare("x", auto(["foo"])?)
    ///     .declare("y", auto(["bar"])?)
    ///     .build()?;
    ///
    /// assert_eq!(*flags.parse("foo, y", ", ")?.value(), 0b11);
    /// assert!(flags.parse("foo, nope", ", ").is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(&self, text: &str, separator: &str) -> Result<MemberRef<B>, LookupError> {
        if text.is_empty() {
            return Ok(self.empty());
        }
        if separator.is_empty() {
            return self.table.get(text).map(Arc::clone);
        }

        let mut value = B::zero();
        for piece in text.split(separator) {
            value = value | *self.table.get(piece)?.value();
        }
        Ok(self.composite(value))
    }

    /// Human-readable form: the name of a canonical member, `x|z` for a
    /// composite, with any uncovered remainder appended as a number. The
    /// empty value renders as `0`.
    pub fn render(&self, member: &Member<B>) -> String {
        if let Some(name) = member.name() {
            return name.to_string();
        }

        let value = *member.value();
        if value.is_zero() {
            return "0".to_string();
        }

        let mut parts: Vec<String> = self
            .decompose(value)
            .iter()
            .filter_map(|member| member.name().map(str::to_string))
            .collect();
        let rest = self.uncovered(value);
        if !rest.is_zero() {
            parts.push(format!("{rest:?}"));
        }
        parts.join("|")
    }

    /// Number of composites synthesized so far.
    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }
}

impl<B: FlagBits> Deref for FlagSet<B> {
    type Target = MemberTable<B>;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl<'a, B: FlagBits> IntoIterator for &'a FlagSet<B> {
    type Item = &'a MemberRef<B>;
    type IntoIter = std::slice::Iter<'a, MemberRef<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

#[cfg(test)]
#[path = "../tests/flag_set_tests.rs"]
mod tests;
