//! Error types for the code generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Code generation errors
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("Type {name} is already defined with a different shape")]
    DuplicateType { name: String },

    #[error("Type name {name} is reserved in generated code")]
    ReservedName { name: String },

    #[error("Invalid name: {name:?}")]
    InvalidName { name: String },

    #[error("Invalid union {name}: {reason}")]
    InvalidUnion { name: String, reason: String },

    #[error("Invalid enum {name}: {reason}")]
    InvalidEnum { name: String, reason: String },

    #[error("Record {record} has more than one field named {member}")]
    DuplicateField { record: String, member: String },

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Conflicting definitions of {key} in {file}")]
    ConflictingDefinition { file: String, key: String },

    #[error("Codec snippet not found: {0}")]
    MissingSnippet(String),

    #[error("Generated file {file} is not valid Rust: {message}\n\nContents:\n{contents}")]
    Render {
        file: String,
        message: String,
        contents: String,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
