//! Static codec snippets
//!
//! The hand-written part of the wire codec, embedded from `src/wire/snippets`.
//! Each snippet knows which file item it becomes (type declaration or free
//! routine), which imports it needs and which other snippets it calls.

use include_dir::{include_dir, Dir};
use tracing::trace;

use super::names::CODEC_FILE;
use super::package::{Package, RoutineKey};
use crate::error::{CodegenError, Result};

static SNIPPETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/wire/snippets");

/// One item of the static codec library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snippet {
    // Helper types
    ByteWriter,
    StringWriter,
    ByteReader,
    DecodeError,

    // Varint core
    EncodeInt,
    DecodeInt,

    // Primitive codecs
    WriteNull,
    ReadNull,
    WriteBool,
    ReadBool,
    WriteInt,
    ReadInt,
    WriteLong,
    ReadLong,
    WriteFloat,
    ReadFloat,
    WriteDouble,
    ReadDouble,
    WriteBytes,
    ReadBytes,
    WriteString,
    ReadString,

    // Block framing for arrays and maps
    WriteBlocks,
    ReadBlocks,
}

impl Snippet {
    /// Item name, also the snippet's file stem
    pub fn name(self) -> &'static str {
        match self {
            Snippet::ByteWriter => "ByteWriter",
            Snippet::StringWriter => "StringWriter",
            Snippet::ByteReader => "ByteReader",
            Snippet::DecodeError => "DecodeError",
            Snippet::EncodeInt => "encode_int",
            Snippet::DecodeInt => "decode_int",
            Snippet::WriteNull => "write_null",
            Snippet::ReadNull => "read_null",
            Snippet::WriteBool => "write_bool",
            Snippet::ReadBool => "read_bool",
            Snippet::WriteInt => "write_int",
            Snippet::ReadInt => "read_int",
            Snippet::WriteLong => "write_long",
            Snippet::ReadLong => "read_long",
            Snippet::WriteFloat => "write_float",
            Snippet::ReadFloat => "read_float",
            Snippet::WriteDouble => "write_double",
            Snippet::ReadDouble => "read_double",
            Snippet::WriteBytes => "write_bytes",
            Snippet::ReadBytes => "read_bytes",
            Snippet::WriteString => "write_string",
            Snippet::ReadString => "read_string",
            Snippet::WriteBlocks => "write_blocks",
            Snippet::ReadBlocks => "read_blocks",
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            Snippet::ByteWriter => "byte_writer",
            Snippet::StringWriter => "string_writer",
            Snippet::ByteReader => "byte_reader",
            Snippet::DecodeError => "decode_error",
            other => other.name(),
        }
    }

    fn is_type(self) -> bool {
        matches!(
            self,
            Snippet::ByteWriter | Snippet::StringWriter | Snippet::ByteReader | Snippet::DecodeError
        )
    }

    /// Snippets this one refers to
    pub fn deps(self) -> &'static [Snippet] {
        use Snippet::*;
        match self {
            ByteWriter | StringWriter | DecodeError => &[],
            ByteReader => &[DecodeError],
            EncodeInt => &[ByteWriter],
            DecodeInt => &[ByteReader, DecodeError],
            WriteNull => &[],
            ReadNull => &[DecodeError],
            WriteBool => &[ByteWriter],
            ReadBool => &[ByteReader, DecodeError],
            WriteInt | WriteLong => &[EncodeInt],
            ReadInt | ReadLong => &[DecodeInt, DecodeError],
            WriteFloat | WriteDouble => &[],
            ReadFloat | ReadDouble => &[ByteReader, DecodeError],
            WriteBytes => &[WriteLong],
            ReadBytes => &[ReadLong, DecodeError],
            WriteString => &[WriteLong, StringWriter],
            ReadString => &[ReadBytes, DecodeError],
            WriteBlocks => &[EncodeInt],
            ReadBlocks => &[DecodeInt, DecodeError],
        }
    }

    fn imports(self) -> &'static [&'static str] {
        match self {
            Snippet::DecodeError => &["std::fmt", "std::io"],
            _ => &["std::io"],
        }
    }

    /// Source text of the snippet
    pub fn source(self) -> Result<&'static str> {
        let path = format!("{}.rs", self.file_stem());
        SNIPPETS
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
            .map(str::trim_end)
            .ok_or_else(|| CodegenError::MissingSnippet(path))
    }

    /// Add this snippet and everything it depends on to the codec file
    pub fn register(self, pkg: &mut Package) -> Result<()> {
        let source = self.source()?;
        let file = pkg.file_mut(CODEC_FILE);
        let inserted = if self.is_type() {
            file.add_type(self.name(), source)?
        } else {
            file.add_routine(RoutineKey::free(self.name()), source)?
        };
        if !inserted {
            trace!(snippet = self.name(), "codec snippet already registered");
            return Ok(());
        }

        for import in self.imports() {
            file.add_import(*import);
        }

        for dep in self.deps() {
            dep.register(pkg)?;
        }
        Ok(())
    }
}
