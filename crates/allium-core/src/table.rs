//! Lookup tables of a finalized set.
//!
//! `MemberTable` owns the canonical members in declaration order plus three
//! indexes into them:
//!
//! | Index | Key | Entries |
//! |-------|-----|---------|
//! | names | declared name | one per declared name, including alias-style repeats |
//! | aliases | alias string | one per alias |
//! | values | underlying value | one per canonical member |
//!
//! The builder guarantees that no string is both a name and an alias, so the
//! two-tier lookup below is unambiguous.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::error::LookupError;
use crate::member::MemberRef;
use crate::primitive::{Primitive, SetKind};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Finalized members of one set and the maps that resolve to them.
#[derive(Debug)]
pub struct MemberTable<V> {
    kind: SetKind,
    members: Vec<MemberRef<V>>,
    names: FxIndexMap<String, usize>,
    aliases: FxIndexMap<String, usize>,
    values: FxHashMap<V, usize>,
}

impl<V: Primitive> MemberTable<V> {
    pub(crate) fn new(
        kind: SetKind,
        members: Vec<MemberRef<V>>,
        names: FxIndexMap<String, usize>,
        aliases: FxIndexMap<String, usize>,
        values: FxHashMap<V, usize>,
    ) -> Self {
        Self {
            kind,
            members,
            names,
            aliases,
            values,
        }
    }

    pub const fn kind(&self) -> SetKind {
        self.kind
    }

    /// Number of canonical members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Canonical members in declaration order.
    pub fn members(&self) -> &[MemberRef<V>] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberRef<V>> {
        self.members.iter()
    }

    /// Resolve a name or alias.
    ///
    /// Aliases are consulted first and names second. Matching is exact and
    /// case-sensitive.
    pub fn lookup(&self, key: &str) -> Option<&MemberRef<V>> {
        self.aliases
            .get(key)
            .or_else(|| self.names.get(key))
            .map(|&index| &self.members[index])
    }

    /// [`lookup`](Self::lookup) as a `Result`.
    pub fn get(&self, key: &str) -> Result<&MemberRef<V>, LookupError> {
        self.lookup(key).ok_or_else(|| LookupError::NotFound {
            key: key.to_string(),
        })
    }

    /// The canonical member holding `value`.
    pub fn by_value(&self, value: &V) -> Option<&MemberRef<V>> {
        self.values.get(value).map(|&index| &self.members[index])
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.values.contains_key(value)
    }

    /// Every declared name with the member it resolves to, in declaration
    /// order. Alias-style repeats appear under their own name.
    pub fn names(&self) -> impl Iterator<Item = (&str, &MemberRef<V>)> + '_ {
        self.names
            .iter()
            .map(|(name, &index)| (name.as_str(), &self.members[index]))
    }

    /// Every alias with the member that owns it, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &MemberRef<V>)> + '_ {
        self.aliases
            .iter()
            .map(|(alias, &index)| (alias.as_str(), &self.members[index]))
    }
}

impl<'a, V: Primitive> IntoIterator for &'a MemberTable<V> {
    type Item = &'a MemberRef<V>;
    type IntoIter = std::slice::Iter<'a, MemberRef<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
