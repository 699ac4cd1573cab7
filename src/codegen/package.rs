//! Package and File Registry
//!
//! A `Package` maps output file names to `File`s. A `File` holds four
//! deduplicating collections (imports, constants, type declarations and
//! routines). Inserting under an existing key with the same content is a
//! no-op, which is how ten `int` fields contribute the int codec once;
//! inserting different content under an existing key is an error.
//!
//! All collections are ordered maps, so rendering an unchanged package always
//! produces byte-identical text.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, trace};

use super::names::{escape_keyword, INDEX_FILE};
use crate::error::{CodegenError, Result};

// =============================================================================
// Routine Keys
// =============================================================================

/// Key of a routine: the type it is attached to (empty for free routines)
/// plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutineKey {
    pub target: String,
    pub name: String,
}

impl RoutineKey {
    /// A routine in an `impl` block of `target`
    pub fn attached(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            name: name.into(),
        }
    }

    /// A free function
    pub fn free(name: impl Into<String>) -> Self {
        Self {
            target: String::new(),
            name: name.into(),
        }
    }

    pub fn is_free(&self) -> bool {
        self.target.is_empty()
    }
}

/// Attached routines sort before free routines, then by target and name.
impl Ord for RoutineKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.is_free(), &self.target, &self.name).cmp(&(other.is_free(), &other.target, &other.name))
    }
}

impl PartialOrd for RoutineKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RoutineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_free() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}::{}", self.target, self.name)
        }
    }
}

// =============================================================================
// Constants
// =============================================================================

/// Value of a generated `pub const`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    Usize(usize),
}

impl Constant {
    fn render(&self, name: &str) -> String {
        match self {
            Constant::Usize(value) => format!("pub const {}: usize = {};", name, value),
        }
    }
}

// =============================================================================
// File
// =============================================================================

/// One generated source file
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    imports: BTreeSet<String>,
    constants: BTreeMap<String, Constant>,
    types: BTreeMap<String, String>,
    routines: BTreeMap<RoutineKey, String>,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: BTreeSet::new(),
            constants: BTreeMap::new(),
            types: BTreeMap::new(),
            routines: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_import(&mut self, path: impl Into<String>) {
        self.imports.insert(path.into());
    }

    /// Add a constant. Returns whether it was newly inserted.
    pub fn add_constant(&mut self, name: impl Into<String>, value: Constant) -> Result<bool> {
        insert_unique(&self.name, &mut self.constants, name.into(), value)
    }

    /// Add a type declaration. Returns whether it was newly inserted.
    pub fn add_type(&mut self, name: impl Into<String>, source: impl Into<String>) -> Result<bool> {
        insert_unique(&self.name, &mut self.types, name.into(), source.into())
    }

    /// Add a routine. Returns whether it was newly inserted.
    pub fn add_routine(&mut self, key: RoutineKey, source: impl Into<String>) -> Result<bool> {
        insert_unique(&self.name, &mut self.routines, key, source.into())
    }

    pub fn has_routine(&self, key: &RoutineKey) -> bool {
        self.routines.contains_key(key)
    }

    /// Imports, sorted
    pub fn imports(&self) -> Vec<&str> {
        self.imports.iter().map(String::as_str).collect()
    }

    /// Constant names, sorted
    pub fn constants(&self) -> Vec<&str> {
        self.constants.keys().map(String::as_str).collect()
    }

    /// Declared type names, sorted
    pub fn types(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Routine keys in render order
    pub fn routines(&self) -> Vec<RoutineKey> {
        self.routines.keys().cloned().collect()
    }

    /// Render the file: provenance, module header, imports, constants,
    /// types, routines.
    pub fn render(&self, package: &str, sources: &[String]) -> String {
        let mut sections = vec![provenance(sources)];

        sections.push(format!(
            "//! Package `{}`: generated types and wire codecs.\n#![allow(dead_code, unused_imports, unused_variables)]",
            package
        ));

        if !self.imports.is_empty() {
            let imports: Vec<String> = self.imports.iter().map(|i| format!("use {};", i)).collect();
            sections.push(imports.join("\n"));
        }

        if !self.constants.is_empty() {
            let constants: Vec<String> = self
                .constants
                .iter()
                .map(|(name, value)| value.render(name))
                .collect();
            sections.push(constants.join("\n"));
        }

        sections.extend(self.types.values().cloned());
        sections.extend(self.routines.values().cloned());

        let mut output = sections.join("\n\n");
        output.push('\n');
        output
    }
}

fn insert_unique<K, V>(file: &str, map: &mut BTreeMap<K, V>, key: K, value: V) -> Result<bool>
where
    K: Ord + fmt::Display,
    V: PartialEq,
{
    match map.get(&key) {
        Some(existing) if *existing == value => {
            trace!(file, key = %key, "already registered");
            Ok(false)
        }
        Some(_) => Err(CodegenError::ConflictingDefinition {
            file: file.to_string(),
            key: key.to_string(),
        }),
        None => {
            debug!(file, key = %key, "registered");
            map.insert(key, value);
            Ok(true)
        }
    }
}

fn provenance(sources: &[String]) -> String {
    let mut comment = String::from("// Code generated by avrogen. DO NOT EDIT.");
    if !sources.is_empty() {
        comment.push_str("\n// Source: ");
        comment.push_str(&sources.join(" "));
    }
    comment
}

// =============================================================================
// Package
// =============================================================================

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: String,
    pub contents: String,
}

/// All files of one generation run
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    files: BTreeMap<String, File>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a file, creating it on first use
    pub fn file_mut(&mut self, name: &str) -> &mut File {
        self.files
            .entry(name.to_string())
            .or_insert_with(|| File::new(name))
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    /// File names, sorted
    pub fn files(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Render every file plus the module index, checking that each parses
    /// as Rust.
    pub fn render(&self, sources: &[String]) -> Result<Vec<RenderedFile>> {
        let rendered = self.render_unvalidated(sources);
        for file in &rendered {
            validate(file)?;
        }
        Ok(rendered)
    }

    /// Render without syntax validation
    pub fn render_unvalidated(&self, sources: &[String]) -> Vec<RenderedFile> {
        let mut rendered: Vec<RenderedFile> = self
            .files
            .values()
            .map(|file| RenderedFile {
                name: file.name().to_string(),
                contents: file.render(&self.name, sources),
            })
            .collect();

        rendered.push(RenderedFile {
            name: INDEX_FILE.to_string(),
            contents: self.render_index(sources),
        });
        rendered.sort_by(|a, b| a.name.cmp(&b.name));
        rendered
    }

    fn render_index(&self, sources: &[String]) -> String {
        let modules: Vec<String> = self
            .files
            .keys()
            .map(|name| escape_keyword(name.trim_end_matches(".rs")))
            .collect();

        let declarations: Vec<String> = modules.iter().map(|m| format!("pub mod {};", m)).collect();
        let exports: Vec<String> = modules.iter().map(|m| format!("pub use self::{}::*;", m)).collect();

        let mut sections = vec![
            provenance(sources),
            format!("//! Package `{}`.", self.name),
        ];
        if !modules.is_empty() {
            sections.push(declarations.join("\n"));
            sections.push(exports.join("\n"));
        }

        let mut output = sections.join("\n\n");
        output.push('\n');
        output
    }
}

fn validate(file: &RenderedFile) -> Result<()> {
    syn::parse_file(&file.contents).map_err(|e| CodegenError::Render {
        file: file.name.clone(),
        message: e.to_string(),
        contents: file.contents.clone(),
    })?;
    Ok(())
}
