//! Avro Code Generator
//!
//! Compiles Avro schemas into Rust source: one struct or enum per named type,
//! plus statically generated binary encoders and decoders that follow the Avro
//! binary encoding byte for byte.
//!
//! ## Pipeline
//!
//! ```text
//! *.avsc --avsc--> Namespace --codegen--> Package --render--> files --sink--> disk
//! ```
//!
//! ## Generated package layout
//!
//! ```text
//! avro/
//! ├── mod.rs            # pub mod + pub use for every file
//! ├── primitive.rs      # shared wire codec and per-shape glue
//! ├── linked_node.rs    # one file per record, enum, fixed and union
//! └── union_null_linked_node.rs
//! ```
//!
//! The hand-written part of the codec lives in [`wire`] and is compiled and
//! tested as part of this crate; the generator copies the same text into
//! every `primitive.rs`.

pub mod avsc;
pub mod codegen;
pub mod config;
pub mod error;
pub mod sink;
pub mod types;
pub mod wire;

pub use codegen::{generate, generate_files, GeneratedOutput, Package, RenderedFile};
pub use config::AvrogenConfig;
pub use error::{CodegenError, Result};
pub use types::{Field, NamedType, Namespace, RecordDefinition, RecordField};
