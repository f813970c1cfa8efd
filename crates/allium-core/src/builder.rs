//! Two-pass set builder.
//!
//! Pass 1 walks the declarations in order, resolving auto values with a
//! running counter and rejecting unintended duplicate values. Pass 2 builds
//! the alias index from the fully resolved members and rejects collisions.
//! `build` consumes the builder, so a finalized set can never gain members.

use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::alias::{Declaration, Declared};
use crate::error::{BuildError, CollisionTarget};
use crate::member::{Member, MemberRef};
use crate::primitive::{Primitive, SetKind};
use crate::table::{FxIndexMap, MemberTable};

/// A set type that can be produced from a resolved [`MemberTable`].
pub trait FromTable<V: Primitive>: Sized {
    /// Drives auto assignment and value validation.
    const KIND: SetKind;

    fn from_table(table: MemberTable<V>) -> Self;
}

/// Collects `(name, declaration)` pairs for a set of type `S`.
#[derive(Debug)]
pub struct SetBuilder<V, S> {
    declarations: Vec<(String, Declaration<V>)>,
    _set: PhantomData<fn() -> S>,
}

impl<V: Primitive, S: FromTable<V>> Default for SetBuilder<V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Primitive, S: FromTable<V>> SetBuilder<V, S> {
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            _set: PhantomData,
        }
    }

    /// Start from an ordered list of declarations.
    pub fn from_declarations<I, N>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (N, Declaration<V>)>,
        N: Into<String>,
    {
        Self {
            declarations: declarations
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration))
                .collect(),
            _set: PhantomData,
        }
    }

    /// Declare a member with an explicit value.
    pub fn value(self, name: impl Into<String>, value: V) -> Self {
        self.declare(name, Declaration::Value(value))
    }

    /// Declare a member with the next auto value.
    pub fn auto(self, name: impl Into<String>) -> Self {
        self.declare(name, Declaration::Auto)
    }

    pub fn declare(mut self, name: impl Into<String>, declaration: impl Into<Declaration<V>>) -> Self {
        self.declarations.push((name.into(), declaration.into()));
        self
    }

    /// Number of declarations collected so far.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Finalize the set.
    pub fn build(self) -> Result<S, BuildError> {
        let table = resolve(S::KIND, self.declarations)?;
        Ok(S::from_table(table))
    }
}

struct Pending<V> {
    name: String,
    value: V,
    aliases: Vec<String>,
}

fn resolve<V: Primitive>(
    kind: SetKind,
    declarations: Vec<(String, Declaration<V>)>,
) -> Result<MemberTable<V>, BuildError> {
    let mut pending: Vec<Pending<V>> = Vec::with_capacity(declarations.len());
    let mut names: FxIndexMap<String, usize> = FxIndexMap::default();
    let mut values: FxHashMap<V, usize> = FxHashMap::default();
    let mut highest: Option<V> = None;

    // Pass 1: concrete values, in declaration order.
    for (name, declaration) in declarations {
        if name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if names.contains_key(&name) {
            return Err(BuildError::DuplicateName { name });
        }

        let alias_style = declaration.is_alias_style();
        let (declared, aliases) = match declaration {
            Declaration::Value(value) => (Declared::Value(value), Vec::new()),
            Declaration::Auto => (Declared::Auto, Vec::new()),
            Declaration::Aliased(annotation) => annotation.into_parts(),
        };
        let value = match declared {
            Declared::Value(value) => value,
            Declared::Auto => next_auto(kind, highest.as_ref(), &name)?,
        };

        if kind == SetKind::Flag && !value.is_single_bit() {
            return Err(BuildError::NotSingleBit {
                name,
                value: format!("{value:?}"),
            });
        }
        trace!(name = %name, value = ?value, alias_style, "resolved declaration");

        highest = Some(match &highest {
            Some(current) => current.watermark(&value, kind),
            None => value.clone(),
        });

        let index = match values.get(&value) {
            Some(&existing) if alias_style => {
                pending[existing].aliases.extend(aliases);
                existing
            }
            Some(&existing) => {
                return Err(BuildError::DuplicateValue {
                    name,
                    existing: pending[existing].name.clone(),
                    value: format!("{value:?}"),
                });
            }
            None => {
                let index = pending.len();
                values.insert(value.clone(), index);
                pending.push(Pending {
                    name: name.clone(),
                    value,
                    aliases,
                });
                index
            }
        };
        names.insert(name, index);
    }

    // Pass 2: alias index over resolved members.
    let mut aliases: FxIndexMap<String, usize> = FxIndexMap::default();
    for (index, member) in pending.iter().enumerate() {
        for alias in &member.aliases {
            if names.contains_key(alias) {
                return Err(BuildError::Collision {
                    alias: alias.clone(),
                    member: member.name.clone(),
                    target: CollisionTarget::Name(alias.clone()),
                });
            }
            if let Some(&owner) = aliases.get(alias) {
                return Err(BuildError::Collision {
                    alias: alias.clone(),
                    member: member.name.clone(),
                    target: CollisionTarget::Alias {
                        owner: pending[owner].name.clone(),
                    },
                });
            }
            aliases.insert(alias.clone(), index);
        }
    }

    let members: Vec<MemberRef<V>> = pending
        .into_iter()
        .map(|p| Arc::new(Member::named(p.name, p.value, p.aliases)))
        .collect();

    debug!(
        kind = %kind,
        members = members.len(),
        names = names.len(),
        aliases = aliases.len(),
        "finalized set"
    );

    Ok(MemberTable::new(kind, members, names, aliases, values))
}

fn next_auto<V: Primitive>(kind: SetKind, highest: Option<&V>, name: &str) -> Result<V, BuildError> {
    let Some(start) = V::auto_start(kind) else {
        return Err(BuildError::AutoUnsupported {
            name: name.to_string(),
        });
    };
    match highest {
        None => Ok(start),
        Some(current) => current.auto_after(kind).ok_or_else(|| BuildError::AutoOverflow {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
