//! Named type arena
//!
//! Records, enums and fixed types are stored once, keyed by name. Fields refer
//! to records through the name, so a record can reach itself through any
//! chain of references.

use std::collections::{BTreeMap, BTreeSet};

use super::{EnumType, Field, FixedType, RecordDefinition};
use crate::codegen::names::check_type_name;
use crate::error::{CodegenError, Result};

/// A type that carries its own name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedType {
    Fixed(FixedType),
    Enum(EnumType),
    Record(RecordDefinition),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Fixed(fixed) => fixed.name(),
            NamedType::Enum(enumeration) => enumeration.name(),
            NamedType::Record(record) => record.name(),
        }
    }

    /// The field shape used when this type is referenced
    pub fn field(&self) -> Field {
        match self {
            NamedType::Fixed(fixed) => Field::Fixed(fixed.clone()),
            NamedType::Enum(enumeration) => Field::Enum(enumeration.clone()),
            NamedType::Record(record) => Field::Record(record.name().to_string()),
        }
    }
}

/// All named types of one schema snapshot
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    types: BTreeMap<String, NamedType>,
    /// Records whose fields are still being built
    declared: BTreeSet<String>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a record name before its fields exist, so the fields can
    /// refer back to it.
    pub fn declare_record(&mut self, name: &str) -> Result<()> {
        check_type_name(name)?;
        match self.types.get(name) {
            Some(NamedType::Record(_)) | None => {
                self.declared.insert(name.to_string());
                Ok(())
            }
            Some(_) => Err(CodegenError::DuplicateType { name: name.to_string() }),
        }
    }

    /// Add a named type. Redefining a name with an identical shape is a no-op;
    /// any other redefinition is an error.
    pub fn define(&mut self, named: NamedType) -> Result<()> {
        let name = named.name().to_string();

        if let Some(existing) = self.types.get(&name) {
            if *existing == named {
                return Ok(());
            }
            return Err(CodegenError::DuplicateType { name });
        }
        if self.declared.contains(&name) && !matches!(named, NamedType::Record(_)) {
            return Err(CodegenError::DuplicateType { name });
        }

        self.declared.remove(&name);
        self.types.insert(name, named);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// Resolve a by-name reference into a field shape
    pub fn resolve(&self, name: &str) -> Result<Field> {
        if let Some(named) = self.types.get(name) {
            return Ok(named.field());
        }
        if self.declared.contains(name) {
            return Ok(Field::Record(name.to_string()));
        }
        Err(CodegenError::UnknownType { name: name.to_string() })
    }

    /// Look up a record definition
    pub fn record(&self, name: &str) -> Result<&RecordDefinition> {
        match self.types.get(name) {
            Some(NamedType::Record(record)) => Ok(record),
            _ => Err(CodegenError::UnknownType { name: name.to_string() }),
        }
    }

    /// All named types, sorted by name
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
