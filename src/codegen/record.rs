//! Record Codegen
//!
//! A record becomes a struct in its own file, an attached `serialize` routine
//! and a free `deserialize_<name>` routine. Both walk the fields in declared
//! order, which is the wire order.

use tracing::debug;

use super::codec::Snippet;
use super::field::{HASH_MAP, IO, SIBLINGS};
use super::names::{deserializer_name, file_name, reader_name, writer_name};
use super::package::{Package, RoutineKey};
use crate::error::Result;
use crate::types::{Namespace, RecordDefinition};

impl RecordDefinition {
    /// Struct declaration with one public member per field
    pub fn struct_definition(&self) -> String {
        let mut output = String::new();
        if let Some(doc) = self.doc() {
            push_doc(&mut output, doc, "");
        }
        output.push_str("#[derive(Debug, Clone, PartialEq)]\n");

        if self.fields().is_empty() {
            output.push_str(&format!("pub struct {} {{}}", self.name()));
            return output;
        }

        output.push_str(&format!("pub struct {} {{\n", self.name()));
        for field in self.fields() {
            if let Some(doc) = &field.doc {
                push_doc(&mut output, doc, "    ");
            }
            output.push_str(&format!("    pub {}: {},\n", field.member(), field.field.rust_type()));
        }
        output.push('}');
        output
    }

    /// Declare the struct and every named type its fields use
    pub fn register_type(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        let file = pkg.file_mut(&file_name(self.name()));
        if !file.add_type(self.name(), self.struct_definition())? {
            return Ok(());
        }
        file.add_import(IO);
        file.add_import(SIBLINGS);
        if self.fields().iter().any(|f| f.field.needs_hash_map()) {
            file.add_import(HASH_MAP);
        }

        for field in self.fields() {
            field.field.register_type(ns, pkg)?;
        }
        Ok(())
    }

    /// Add the struct, its `serialize` routine and every field writer
    pub fn add_serializer(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        self.register_type(ns, pkg)?;

        let mut source = String::new();
        source.push_str(&format!("impl {} {{\n", self.name()));
        source.push_str("    /// Write this record in the binary encoding.\n");
        source.push_str("    pub fn serialize<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {\n");
        for field in self.fields() {
            source.push_str(&format!(
                "        {}(&self.{}, w)?;\n",
                writer_name(&field.field.name()),
                field.member()
            ));
        }
        source.push_str("        Ok(())\n    }\n}");

        let file = pkg.file_mut(&file_name(self.name()));
        if !file.add_routine(RoutineKey::attached(self.name(), "serialize"), source)? {
            return Ok(());
        }
        debug!(record = self.name(), fields = self.fields().len(), "record serializer added");

        for field in self.fields() {
            field.field.register_serializer(ns, pkg)?;
        }
        Ok(())
    }

    /// Add the struct, its `deserialize_<name>` routine and every field reader
    pub fn add_deserializer(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        self.register_type(ns, pkg)?;

        let routine = deserializer_name(self.name());
        let mut source = String::new();
        source.push_str(&format!("/// Read a `{}` from the binary encoding.\n", self.name()));
        source.push_str(&format!(
            "pub fn {}<R: io::Read + ?Sized>(r: &mut R) -> Result<{}, DecodeError> {{\n",
            routine,
            self.name()
        ));
        if self.fields().is_empty() {
            source.push_str(&format!("    Ok({} {{}})\n}}", self.name()));
        } else {
            source.push_str(&format!("    Ok({} {{\n", self.name()));
            for field in self.fields() {
                source.push_str(&format!("        {}: {}(r)?,\n", field.member(), reader_name(&field.field.name())));
            }
            source.push_str("    })\n}");
        }

        let file = pkg.file_mut(&file_name(self.name()));
        if !file.add_routine(RoutineKey::free(routine), source)? {
            return Ok(());
        }
        debug!(record = self.name(), fields = self.fields().len(), "record deserializer added");

        Snippet::DecodeError.register(pkg)?;

        for field in self.fields() {
            field.field.register_deserializer(ns, pkg)?;
        }
        Ok(())
    }
}

fn push_doc(output: &mut String, doc: &str, indent: &str) {
    for line in doc.lines() {
        let line = line.trim();
        if line.is_empty() {
            output.push_str(&format!("{}///\n", indent));
        } else {
            output.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
}
