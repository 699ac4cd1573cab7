//! Schema Type Model
//!
//! A closed set of field shapes, plus records and the name-keyed arena that
//! lets records refer to each other (and to themselves) without owning each
//! other. Everything here is immutable once constructed; code generation only
//! reads it.

mod namespace;
mod record;

pub use namespace::{NamedType, Namespace};
pub use record::{RecordDefinition, RecordField};

use std::collections::HashSet;

use crate::codegen::names::{canonical_name, check_type_name, to_pascal_case, variant_name};
use crate::error::{CodegenError, Result};

// =============================================================================
// Field
// =============================================================================

/// The shape of a value on the wire.
///
/// Records are referenced by name only; their definitions live in a
/// [`Namespace`]. This is what allows cyclic schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Null,
    Bool,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed(FixedType),
    Enum(EnumType),
    Array(Box<Field>),
    Map(Box<Field>),
    Union(UnionType),
    Record(String),
}

impl Field {
    /// Canonical name of this shape
    pub fn name(&self) -> String {
        canonical_name(self)
    }

    /// Primitive field for an Avro primitive type name
    pub fn primitive(type_name: &str) -> Option<Field> {
        let field = match type_name {
            "null" => Field::Null,
            "boolean" => Field::Bool,
            "int" => Field::Int,
            "long" => Field::Long,
            "float" => Field::Float,
            "double" => Field::Double,
            "bytes" => Field::Bytes,
            "string" => Field::String,
            _ => return None,
        };
        Some(field)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

// =============================================================================
// Fixed
// =============================================================================

/// A named blob of exactly `size` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedType {
    name: String,
    size: usize,
}

impl FixedType {
    pub fn new(name: impl Into<String>, size: usize) -> Result<Self> {
        let name = name.into();
        check_type_name(&name)?;
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

// =============================================================================
// Enum
// =============================================================================

/// A named enumeration; the wire value is the symbol's position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    symbols: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Result<Self> {
        let name = name.into();
        check_type_name(&name)?;

        if symbols.is_empty() {
            return Err(CodegenError::InvalidEnum {
                name,
                reason: "no symbols".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if to_pascal_case(symbol).is_empty() {
                return Err(CodegenError::InvalidEnum {
                    name,
                    reason: format!("symbol {:?} has no letters or digits to name a variant", symbol),
                });
            }
            let variant = variant_name(symbol);
            if !seen.insert(variant.clone()) {
                return Err(CodegenError::InvalidEnum {
                    name,
                    reason: format!("symbol {} collides with another symbol as {}", symbol, variant),
                });
            }
        }

        Ok(Self { name, symbols })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols in declaration (ordinal) order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

// =============================================================================
// Union
// =============================================================================

/// An ordered set of alternative shapes, discriminated by branch index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    branches: Vec<Field>,
}

impl UnionType {
    pub fn new(branches: Vec<Field>) -> Result<Self> {
        let union = Self { branches };
        let name = canonical_name(&Field::Union(union.clone()));

        if union.branches.is_empty() {
            return Err(CodegenError::InvalidUnion {
                name,
                reason: "no branches".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for branch in &union.branches {
            if matches!(branch, Field::Union(_)) {
                return Err(CodegenError::InvalidUnion {
                    name,
                    reason: "unions may not directly contain unions".to_string(),
                });
            }
            if !seen.insert(branch.name()) {
                return Err(CodegenError::InvalidUnion {
                    name,
                    reason: format!("branch {} appears more than once", branch.name()),
                });
            }
        }

        Ok(union)
    }

    pub fn branches(&self) -> &[Field] {
        &self.branches
    }
}
