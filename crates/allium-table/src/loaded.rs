//! Sets whose kind is decided by the table rather than the type system.

use std::fmt;

use allium_core::{EnumSet, KindError, Member, SetKind};
use allium_flags::FlagSet;

use crate::value::TableValue;

/// A built set of either kind.
#[derive(Debug)]
pub enum AnySet {
    Plain(EnumSet<TableValue>),
    Flag(FlagSet<u64>),
}

impl AnySet {
    pub const fn kind(&self) -> SetKind {
        match self {
            Self::Plain(_) => SetKind::Plain,
            Self::Flag(_) => SetKind::Flag,
        }
    }
}

/// A named set loaded from a definition table.
#[derive(Debug)]
pub struct LoadedSet {
    name: String,
    set: AnySet,
}

impl LoadedSet {
    pub const fn new(name: String, set: AnySet) -> Self {
        Self { name, set }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> SetKind {
        self.set.kind()
    }

    pub const fn set(&self) -> &AnySet {
        &self.set
    }

    pub fn as_plain(&self) -> Result<&EnumSet<TableValue>, KindError> {
        match &self.set {
            AnySet::Plain(set) => Ok(set),
            AnySet::Flag(_) => Err(self.kind_error(SetKind::Plain)),
        }
    }

    /// The flag set, or [`KindError::InvalidKind`] for a plain set.
    pub fn as_flags(&self) -> Result<&FlagSet<u64>, KindError> {
        match &self.set {
            AnySet::Flag(set) => Ok(set),
            AnySet::Plain(_) => Err(self.kind_error(SetKind::Flag)),
        }
    }

    fn kind_error(&self, expected: SetKind) -> KindError {
        KindError::InvalidKind {
            expected,
            found: self.kind(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.set {
            AnySet::Plain(set) => set.len(),
            AnySet::Flag(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a name or alias to a view of its member.
    pub fn lookup(&self, key: &str) -> Option<MemberView> {
        match &self.set {
            AnySet::Plain(set) => set.lookup(key).map(|member| MemberView::from_member(member)),
            AnySet::Flag(set) => set.lookup(key).map(|member| MemberView::from_member(member)),
        }
    }

    /// Canonical members in declaration order.
    pub fn members(&self) -> Vec<MemberView> {
        match &self.set {
            AnySet::Plain(set) => set.iter().map(|member| MemberView::from_member(member)).collect(),
            AnySet::Flag(set) => set.iter().map(|member| MemberView::from_member(member)).collect(),
        }
    }
}

/// Kind-erased snapshot of a member, for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberView {
    pub name: Option<String>,
    pub value: String,
    pub aliases: Vec<String>,
}

impl MemberView {
    pub fn from_member<V: fmt::Display>(member: &Member<V>) -> Self {
        Self {
            name: member.name().map(str::to_string),
            value: member.value().to_string(),
            aliases: member.aliases().to_vec(),
        }
    }
}

impl fmt::Display for MemberView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} = {}", self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        if !self.aliases.is_empty() {
            write!(f, " (aliases: {})", self.aliases.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/loaded_tests.rs"]
mod tests;
