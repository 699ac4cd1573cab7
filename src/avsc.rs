//! Avro Schema Front-End
//!
//! Reads Avro JSON schema documents (`.avsc`) into a [`Namespace`].
//!
//! Supported: primitive names (bare or as `{"type": "int"}`), `record` and
//! `error` with `fields`, `enum` with `symbols`, `fixed` with `size`, `array`
//! with `items`, `map` with `values`, unions as JSON arrays, and references
//! to previously declared named types. Dotted full names are reduced to their
//! last segment. Defaults, aliases and logical types are ignored.
//!
//! Several documents may be parsed into the same namespace, in order; later
//! documents may refer to types declared by earlier ones.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CodegenError, Result};
use crate::types::{
    EnumType, Field, FixedType, NamedType, Namespace, RecordDefinition, RecordField, UnionType,
};

const NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Accumulates named types from one or more schema documents
#[derive(Debug, Clone)]
pub struct SchemaParser {
    name_pattern: Regex,
    namespace: Namespace,
}

impl SchemaParser {
    pub fn new() -> Result<Self> {
        let name_pattern = Regex::new(NAME_PATTERN)
            .map_err(|e| CodegenError::InvalidSchema(format!("name pattern: {}", e)))?;
        Ok(Self {
            name_pattern,
            namespace: Namespace::new(),
        })
    }

    /// Parse one schema document. A top-level JSON array declares each of
    /// its elements rather than an anonymous union.
    pub fn parse_str(&mut self, text: &str) -> Result<()> {
        let value: Value = serde_json::from_str(text)?;
        match &value {
            Value::Array(schemas) => {
                for schema in schemas {
                    self.parse_schema(schema)?;
                }
            }
            schema => {
                self.parse_schema(schema)?;
            }
        }
        Ok(())
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "parsing schema");
        let text = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&text)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn into_namespace(self) -> Namespace {
        self.namespace
    }

    /// Parse any schema value into the field shape it denotes
    pub fn parse_schema(&mut self, value: &Value) -> Result<Field> {
        match value {
            Value::String(name) => self.resolve(name),
            Value::Array(branches) => {
                let branches = branches
                    .iter()
                    .map(|b| self.parse_schema(b))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Field::Union(UnionType::new(branches)?))
            }
            Value::Object(obj) => self.parse_object(obj),
            other => Err(CodegenError::InvalidSchema(format!("unexpected schema value: {}", other))),
        }
    }

    fn parse_object(&mut self, obj: &Map<String, Value>) -> Result<Field> {
        let type_name = match obj.get("type") {
            Some(Value::String(type_name)) => type_name.as_str(),
            Some(nested) => return self.parse_schema(nested),
            None => return Err(CodegenError::InvalidSchema("schema object without \"type\"".to_string())),
        };

        match type_name {
            "record" | "error" => self.parse_record(obj),
            "enum" => {
                let name = self.required_name(obj)?;
                let symbols = match obj.get("symbols") {
                    Some(Value::Array(symbols)) => symbols
                        .iter()
                        .map(|s| match s.as_str() {
                            Some(symbol) => self.check_name(symbol),
                            None => Err(CodegenError::InvalidSchema(format!("enum {} has a non-string symbol", name))),
                        })
                        .collect::<Result<Vec<_>>>()?,
                    _ => return Err(missing(&name, "symbols")),
                };
                let enumeration = EnumType::new(name, symbols)?;
                self.namespace.define(NamedType::Enum(enumeration.clone()))?;
                Ok(Field::Enum(enumeration))
            }
            "fixed" => {
                let name = self.required_name(obj)?;
                let size = obj
                    .get("size")
                    .and_then(Value::as_u64)
                    .ok_or_else(|| missing(&name, "size"))?;
                let size = usize::try_from(size)
                    .map_err(|_| CodegenError::InvalidSchema(format!("fixed {} is too large", name)))?;
                let fixed = FixedType::new(name, size)?;
                self.namespace.define(NamedType::Fixed(fixed.clone()))?;
                Ok(Field::Fixed(fixed))
            }
            "array" => {
                let items = obj.get("items").ok_or_else(|| missing("array", "items"))?;
                Ok(Field::Array(Box::new(self.parse_schema(items)?)))
            }
            "map" => {
                let values = obj.get("values").ok_or_else(|| missing("map", "values"))?;
                Ok(Field::Map(Box::new(self.parse_schema(values)?)))
            }
            other => self.resolve(other),
        }
    }

    fn parse_record(&mut self, obj: &Map<String, Value>) -> Result<Field> {
        let name = self.required_name(obj)?;
        self.namespace.declare_record(&name)?;

        let fields = match obj.get("fields") {
            Some(Value::Array(fields)) => fields,
            _ => return Err(missing(&name, "fields")),
        };

        let mut record_fields = Vec::with_capacity(fields.len());
        for field in fields {
            let field = field
                .as_object()
                .ok_or_else(|| CodegenError::InvalidSchema(format!("record {} has a non-object field", name)))?;
            let field_name = match field.get("name").and_then(Value::as_str) {
                Some(field_name) => self.check_name(field_name)?,
                None => return Err(missing(&name, "field name")),
            };
            let schema = field.get("type").ok_or_else(|| missing(&field_name, "type"))?;

            let mut record_field = RecordField::new(field_name, self.parse_schema(schema)?);
            if let Some(doc) = field.get("doc").and_then(Value::as_str) {
                record_field = record_field.with_doc(doc);
            }
            record_fields.push(record_field);
        }

        let mut record = RecordDefinition::new(name.clone(), record_fields)?;
        if let Some(doc) = obj.get("doc").and_then(Value::as_str) {
            record = record.with_doc(doc);
        }
        self.namespace.define(NamedType::Record(record))?;
        debug!(record = %name, "record parsed");
        Ok(Field::Record(name))
    }

    /// A primitive type name or a reference to a declared named type
    fn resolve(&self, name: &str) -> Result<Field> {
        if let Some(primitive) = Field::primitive(name) {
            return Ok(primitive);
        }
        let short = self.check_name(short_name(name))?;
        self.namespace.resolve(&short)
    }

    fn required_name(&self, obj: &Map<String, Value>) -> Result<String> {
        match obj.get("name").and_then(Value::as_str) {
            Some(name) => self.check_name(short_name(name)),
            None => Err(CodegenError::InvalidSchema("named type without \"name\"".to_string())),
        }
    }

    fn check_name(&self, name: &str) -> Result<String> {
        if self.name_pattern.is_match(name) {
            Ok(name.to_string())
        } else {
            Err(CodegenError::InvalidName { name: name.to_string() })
        }
    }
}

/// Last segment of a dotted full name
fn short_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn missing(owner: &str, what: &str) -> CodegenError {
    CodegenError::InvalidSchema(format!("{} is missing {:?}", owner, what))
}

/// Expand inputs into schema files: files are kept as given, directories are
/// walked for `*.avsc` in sorted order.
pub fn collect_schema_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| CodegenError::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| input.clone()),
                source: e.into(),
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().map(|ext| ext == "avsc").unwrap_or(false) {
                found.push(path.to_path_buf());
            }
        }
        debug!(dir = %input.display(), schemas = found.len(), "collected schemas");
        files.extend(found);
    }
    Ok(files)
}

/// Parse a single schema document into a fresh namespace
pub fn parse(text: &str) -> Result<Namespace> {
    let mut parser = SchemaParser::new()?;
    parser.parse_str(text)?;
    Ok(parser.into_namespace())
}
