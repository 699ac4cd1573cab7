//! Output sinks for rendered files

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::codegen::RenderedFile;
use crate::error::{CodegenError, Result};

/// Accepts rendered files, one at a time
pub trait Sink {
    fn write(&mut self, file: &RenderedFile) -> Result<()>;

    /// Write every file, stopping at the first failure
    fn write_all(&mut self, files: &[RenderedFile]) -> Result<()> {
        for file in files {
            self.write(file)?;
        }
        Ok(())
    }
}

/// Writes files into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Sink for DirectorySink {
    fn write(&mut self, file: &RenderedFile) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| CodegenError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.root.join(&file.name);
        fs::write(&path, &file.contents).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        Ok(())
    }
}

/// Keeps files in memory, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl Sink for MemorySink {
    fn write(&mut self, file: &RenderedFile) -> Result<()> {
        self.files.insert(file.name.clone(), file.contents.clone());
        Ok(())
    }
}
