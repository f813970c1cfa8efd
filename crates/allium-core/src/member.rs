//! Finalized set members.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a member.
///
/// Sets hand out clones of the same `Arc`, so two handles to one member are
/// identical under [`Arc::ptr_eq`], not merely equal by value.
pub type MemberRef<V> = Arc<Member<V>>;

/// One element of a finalized set.
///
/// Named members are created once when a set is finalized. Flag sets also
/// synthesize unnamed *composite* members for unions of canonical bits; those
/// carry neither a name nor aliases.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member<V> {
    name: Option<Box<str>>,
    value: V,
    aliases: Box<[String]>,
}

impl<V> Member<V> {
    pub(crate) fn named(name: String, value: V, aliases: Vec<String>) -> Self {
        Self {
            name: Some(name.into_boxed_str()),
            value,
            aliases: aliases.into_boxed_slice(),
        }
    }

    /// Create an unnamed composite member.
    pub fn composite(value: V) -> Self {
        Self {
            name: None,
            value,
            aliases: Box::default(),
        }
    }

    /// Declared name, or `None` for a composite.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Alias lookup names in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub const fn is_composite(&self) -> bool {
        self.name.is_none()
    }
}

impl<V: fmt::Debug> fmt::Display for Member<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "<composite {:?}>", self.value),
        }
    }
}
