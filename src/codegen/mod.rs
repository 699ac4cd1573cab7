//! Code Generation
//!
//! Turns a [`Namespace`] into a package of Rust source files.
//!
//! Architecture:
//! - `names`: canonical names and identifier rendering (pure functions)
//! - `codec`: the static wire codec snippets copied into `primitive.rs`
//! - `field` / `record`: per-shape declarations and write/read glue
//! - `package`: the deduplicating file registry and deterministic renderer
//!
//! Registration is a single sequential pass over the namespace; rendering
//! happens afterwards and never mutates the package.

pub mod codec;
pub mod names;
pub mod package;

mod field;
mod record;

use tracing::info;

pub use package::{Constant, File, Package, RenderedFile, RoutineKey};

use crate::error::Result;
use crate::types::{NamedType, Namespace};

// =============================================================================
// Generated Output
// =============================================================================

/// Output from code generation
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Rendered files, sorted by name, including the module index
    pub files: Vec<RenderedFile>,
    /// Number of named schema types the package was generated from
    pub type_count: usize,
}

// =============================================================================
// Public API
// =============================================================================

/// Register every named type of `ns` into a fresh package.
///
/// Records get their struct plus serialize and deserialize routines; enums
/// and fixed types that stand alone get their declaration and glue.
pub fn generate(ns: &Namespace, package: &str) -> Result<Package> {
    info!(package, types = ns.len(), "generating package");

    let mut pkg = Package::new(package);
    for named in ns.types() {
        match named {
            NamedType::Record(record) => {
                record.add_serializer(ns, &mut pkg)?;
                record.add_deserializer(ns, &mut pkg)?;
            }
            other => {
                let field = other.field();
                field.register_serializer(ns, &mut pkg)?;
                field.register_deserializer(ns, &mut pkg)?;
            }
        }
    }

    info!(package, files = pkg.files().len(), "package registered");
    Ok(pkg)
}

/// Generate and render in one step.
///
/// `sources` names the schema inputs for the provenance comment. With
/// `validate`, every file is parsed before anything is returned.
pub fn generate_files(ns: &Namespace, package: &str, sources: &[String], validate: bool) -> Result<GeneratedOutput> {
    let pkg = generate(ns, package)?;
    let files = if validate {
        pkg.render(sources)?
    } else {
        pkg.render_unvalidated(sources)
    };

    Ok(GeneratedOutput {
        files,
        type_count: ns.len(),
    })
}
