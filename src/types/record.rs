//! Record definitions

use std::collections::HashSet;

use super::Field;
use crate::codegen::names::{check_type_name, member_name};
use crate::error::{CodegenError, Result};

/// One named field of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    pub field: Field,
    pub doc: Option<String>,
}

impl RecordField {
    pub fn new(name: impl Into<String>, field: Field) -> Self {
        Self {
            name: name.into(),
            field,
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Struct member this field is stored in
    pub fn member(&self) -> String {
        member_name(&self.name)
    }
}

/// A named, ordered list of fields.
///
/// Field order is both the wire order and the struct layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefinition {
    name: String,
    doc: Option<String>,
    fields: Vec<RecordField>,
}

impl RecordDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<RecordField>) -> Result<Self> {
        let name = name.into();
        check_type_name(&name)?;

        let mut members = HashSet::new();
        for field in &fields {
            let member = field.member();
            if !members.insert(member.clone()) {
                return Err(CodegenError::DuplicateField { record: name, member });
            }
        }

        Ok(Self { name, doc: None, fields })
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }
}
