//! Table document schema and loading.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use allium_core::{
    AliasAnnotation, BuildError, Declaration, Declared, FromTable, Primitive, SetBuilder, SetKind,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableError;
use crate::loaded::{AnySet, LoadedSet};
use crate::value::TableValue;

/// A whole definition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDocument {
    pub sets: Vec<SetTable>,
}

/// One declared set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetTable {
    pub name: String,
    #[serde(default)]
    pub kind: TableKind,
    pub members: Vec<MemberEntry>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    #[default]
    Plain,
    Flag,
}

impl From<TableKind> for SetKind {
    fn from(kind: TableKind) -> Self {
        match kind {
            TableKind::Plain => SetKind::Plain,
            TableKind::Flag => SetKind::Flag,
        }
    }
}

/// A member entry: a bare name, or an object with value and aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Name(String),
    Spec(MemberSpec),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TableValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl MemberEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Spec(spec) => &spec.name,
        }
    }
}

impl TableDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = text.parse()?;
        debug!(path = %path.display(), "read definition table");
        Ok(document)
    }

    /// The set called `name`.
    pub fn set(&self, name: &str) -> Result<&SetTable, TableError> {
        self.sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| TableError::UnknownSet {
                name: name.to_string(),
            })
    }

    /// The only set of the document.
    pub fn single(&self) -> Result<&SetTable, TableError> {
        match self.sets.as_slice() {
            [] => Err(TableError::Empty),
            [set] => Ok(set),
            sets => Err(TableError::AmbiguousSet { count: sets.len() }),
        }
    }

    /// [`set`](Self::set) when a name is given, otherwise [`single`](Self::single).
    pub fn select(&self, name: Option<&str>) -> Result<&SetTable, TableError> {
        match name {
            Some(name) => self.set(name),
            None => self.single(),
        }
    }
}

impl FromStr for TableDocument {
    type Err = TableError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(text)?)
    }
}

impl SetTable {
    pub fn kind(&self) -> SetKind {
        self.kind.into()
    }

    /// Build the declared set.
    pub fn load(&self) -> Result<LoadedSet, TableError> {
        let set = match self.kind {
            TableKind::Plain => AnySet::Plain(self.build(|raw| Some(raw.clone()))?),
            TableKind::Flag => AnySet::Flag(
                self.build(|raw| raw.as_int().and_then(|value| u64::try_from(value).ok()))?,
            ),
        };
        debug!(
            set = %self.name,
            kind = %self.kind(),
            members = self.members.len(),
            "loaded set from definition table"
        );
        Ok(LoadedSet::new(self.name.clone(), set))
    }

    fn build<V, S>(&self, convert: impl Fn(&TableValue) -> Option<V>) -> Result<S, TableError>
    where
        V: Primitive,
        S: FromTable<V>,
    {
        let mut builder = SetBuilder::<V, S>::new();
        for entry in &self.members {
            builder = builder.declare(entry.name(), self.declaration(entry, &convert)?);
        }
        builder.build().map_err(|source| self.build_error(source))
    }

    /// Map an entry onto a builder declaration.
    ///
    /// | value | aliases | declaration |
    /// |-------|---------|-------------|
    /// | none | none | auto |
    /// | none | some | `auto(aliases)` |
    /// | some | none | raw value |
    /// | some | some | `aliased(value, aliases)` |
    fn declaration<V>(
        &self,
        entry: &MemberEntry,
        convert: impl FnOnce(&TableValue) -> Option<V>,
    ) -> Result<Declaration<V>, TableError> {
        let spec = match entry {
            MemberEntry::Name(_) => return Ok(Declaration::Auto),
            MemberEntry::Spec(spec) => spec,
        };
        let value = match &spec.value {
            None => Declared::Auto,
            Some(raw) => Declared::Value(
                convert(raw).ok_or_else(|| self.invalid_flag_value(entry, raw))?,
            ),
        };
        if spec.aliases.is_empty() {
            return Ok(match value {
                Declared::Value(value) => Declaration::Value(value),
                Declared::Auto => Declaration::Auto,
            });
        }
        AliasAnnotation::new(value, spec.aliases.iter().cloned())
            .map(Declaration::from)
            .map_err(|source| self.build_error(source))
    }

    fn build_error(&self, source: BuildError) -> TableError {
        TableError::Build {
            set: self.name.clone(),
            source,
        }
    }

    fn invalid_flag_value(&self, entry: &MemberEntry, raw: &TableValue) -> TableError {
        TableError::InvalidFlagValue {
            set: self.name.clone(),
            member: entry.name().to_string(),
            value: raw.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/document_tests.rs"]
mod tests;
