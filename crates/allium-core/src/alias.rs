//! Declaration-time values.
//!
//! A set is declared as an ordered list of `(name, Declaration)` pairs. A
//! declaration is a raw value, the auto sentinel, or an [`AliasAnnotation`]
//! that pairs either of those with extra lookup names. Annotations are plain
//! data: the builder consumes them and nothing of them survives except the
//! alias strings attached to the resulting member.
//!
//! ```
//! use allium_core::{EnumSet, aliased, auto};
//!
//! let set = EnumSet::<u32>::builder()
//!     .declare("x", auto(["foo"])?)
//!     .declare("y", aliased(10, ["bar", "baz"])?)
//!     .build()?;
//!
//! assert_eq!(set.lookup("foo").map(|m| *m.value()), Some(1));
//! assert_eq!(set.lookup("baz").map(|m| *m.value()), Some(10));
//! # Ok::<(), allium_core::BuildError>(())
//! ```

use crate::error::BuildError;

/// The value half of an annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declared<V> {
    /// An explicit value.
    Value(V),
    /// Assign the next value of the set's auto sequence.
    Auto,
}

/// A value (or the auto sentinel) together with alias lookup names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasAnnotation<V> {
    value: Declared<V>,
    aliases: Vec<String>,
}

impl<V> AliasAnnotation<V> {
    /// Create an annotation, rejecting empty or repeated alias strings.
    pub fn new<I, S>(value: Declared<V>, aliases: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.into();
            if alias.is_empty() {
                return Err(BuildError::EmptyAlias);
            }
            if collected.contains(&alias) {
                return Err(BuildError::DuplicateAlias { alias });
            }
            collected.push(alias);
        }
        Ok(Self {
            value,
            aliases: collected,
        })
    }

    pub fn value(&self) -> &Declared<V> {
        &self.value
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn into_parts(self) -> (Declared<V>, Vec<String>) {
        (self.value, self.aliases)
    }
}

/// One entry of a set declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration<V> {
    /// A raw value with no alias semantics.
    Value(V),
    /// The plain auto sentinel.
    Auto,
    /// An alias-style declaration.
    ///
    /// Only alias-style declarations may repeat a value that an earlier
    /// member already holds; the repeat becomes another lookup name for that
    /// member instead of a second member.
    Aliased(AliasAnnotation<V>),
}

impl<V> Declaration<V> {
    pub const fn is_alias_style(&self) -> bool {
        matches!(self, Self::Aliased(_))
    }
}

impl<V> From<AliasAnnotation<V>> for Declaration<V> {
    fn from(annotation: AliasAnnotation<V>) -> Self {
        Self::Aliased(annotation)
    }
}

/// Declare an explicit value with alias lookup names.
pub fn aliased<V, I, S>(value: V, aliases: I) -> Result<AliasAnnotation<V>, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AliasAnnotation::new(Declared::Value(value), aliases)
}

/// Declare an automatically assigned value with alias lookup names.
///
/// With no names this is exactly [`Declaration::Auto`], so unaliased and
/// aliased-but-unnamed autos are indistinguishable to the builder.
pub fn auto<V, I, S>(aliases: I) -> Result<Declaration<V>, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let annotation = AliasAnnotation::new(Declared::Auto, aliases)?;
    if annotation.aliases.is_empty() {
        Ok(Declaration::Auto)
    } else {
        Ok(Declaration::Aliased(annotation))
    }
}

#[cfg(test)]
#[path = "../tests/alias_tests.rs"]
mod tests;
