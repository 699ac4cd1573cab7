//! Field Variant Codegen
//!
//! For every field shape: its Rust representation, its declared type (if it
//! has one) and its write/read glue in the shared codec file.
//!
//! Every registration inserts under its canonical key first and only then
//! visits what it depends on. A second request for the same key finds the
//! entry already present and stops, which is what terminates cyclic record
//! graphs.

use super::codec::Snippet;
use super::names::{
    deserializer_name, file_name, reader_name, size_constant, variant_name, writer_name, CODEC_FILE,
};
use super::package::{Constant, Package, RoutineKey};
use crate::error::Result;
use crate::types::{EnumType, Field, FixedType, Namespace, UnionType};

pub(crate) const IO: &str = "std::io";
pub(crate) const HASH_MAP: &str = "std::collections::HashMap";
pub(crate) const SIBLINGS: &str = "super::*";

// =============================================================================
// Representation
// =============================================================================

impl Field {
    /// Rust type holding a value of this shape
    pub fn rust_type(&self) -> String {
        match self {
            Field::Null => "()".to_string(),
            Field::Bool => "bool".to_string(),
            Field::Int => "i32".to_string(),
            Field::Long => "i64".to_string(),
            Field::Float => "f32".to_string(),
            Field::Double => "f64".to_string(),
            Field::Bytes => "Vec<u8>".to_string(),
            Field::String => "String".to_string(),
            Field::Fixed(fixed) => fixed.name().to_string(),
            Field::Enum(enumeration) => enumeration.name().to_string(),
            Field::Array(items) => format!("Vec<{}>", items.rust_type()),
            Field::Map(values) => format!("HashMap<String, {}>", values.rust_type()),
            Field::Union(_) => self.name(),
            Field::Record(name) => format!("Box<{}>", name),
        }
    }

    /// Type the write routine borrows (`str` rather than `String`, slices
    /// rather than vectors, the record rather than its box)
    pub fn writer_param(&self) -> String {
        match self {
            Field::Bytes => "[u8]".to_string(),
            Field::String => "str".to_string(),
            Field::Array(items) => format!("[{}]", items.rust_type()),
            Field::Record(name) => name.clone(),
            other => other.rust_type(),
        }
    }

    /// Whether [`Field::rust_type`] mentions `HashMap`
    pub fn needs_hash_map(&self) -> bool {
        match self {
            Field::Map(_) => true,
            Field::Array(items) => items.needs_hash_map(),
            _ => false,
        }
    }

    fn writer(&self) -> String {
        writer_name(&self.name())
    }

    fn reader(&self) -> String {
        reader_name(&self.name())
    }

    fn writer_signature(&self) -> String {
        format!(
            "pub fn {}<W: io::Write + ?Sized>(r: &{}, w: &mut W) -> io::Result<()>",
            self.writer(),
            self.writer_param()
        )
    }

    fn reader_signature(&self) -> String {
        format!(
            "pub fn {}<R: io::Read + ?Sized>(r: &mut R) -> Result<{}, DecodeError>",
            self.reader(),
            self.rust_type()
        )
    }
}

// =============================================================================
// Type Registration
// =============================================================================

impl Field {
    /// Declare the named types this shape needs. Primitives declare nothing.
    pub fn register_type(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        match self {
            Field::Null
            | Field::Bool
            | Field::Int
            | Field::Long
            | Field::Float
            | Field::Double
            | Field::Bytes
            | Field::String => Ok(()),
            Field::Fixed(fixed) => register_fixed(fixed, pkg),
            Field::Enum(enumeration) => register_enum(enumeration, pkg),
            Field::Array(items) => items.register_type(ns, pkg),
            Field::Map(values) => values.register_type(ns, pkg),
            Field::Union(union) => register_union(self, union, ns, pkg),
            Field::Record(name) => ns.record(name)?.register_type(ns, pkg),
        }
    }
}

fn register_fixed(fixed: &FixedType, pkg: &mut Package) -> Result<()> {
    let name = fixed.name();
    let size = size_constant(name);

    let mut decl = String::new();
    decl.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    decl.push_str(&format!("pub struct {}(pub [u8; {}]);", name, size));

    let file = pkg.file_mut(&file_name(name));
    if !file.add_type(name, decl)? {
        return Ok(());
    }
    file.add_constant(size.clone(), Constant::Usize(fixed.size()))?;

    let mut try_from = String::new();
    try_from.push_str(&format!("impl TryFrom<&[u8]> for {} {{\n", name));
    try_from.push_str("    type Error = std::array::TryFromSliceError;\n\n");
    try_from.push_str("    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {\n");
    try_from.push_str(&format!("        <[u8; {}]>::try_from(bytes).map({})\n", size, name));
    try_from.push_str("    }\n}");
    file.add_routine(RoutineKey::attached(name, "try_from"), try_from)?;
    Ok(())
}

fn register_enum(enumeration: &EnumType, pkg: &mut Package) -> Result<()> {
    let name = enumeration.name();
    let variants: Vec<String> = enumeration.symbols().iter().map(|s| variant_name(s)).collect();

    let mut decl = String::new();
    decl.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    decl.push_str(&format!("pub enum {} {{\n", name));
    for variant in &variants {
        decl.push_str(&format!("    {},\n", variant));
    }
    decl.push('}');

    let file = pkg.file_mut(&file_name(name));
    if !file.add_type(name, decl)? {
        return Ok(());
    }

    let mut from_ordinal = String::new();
    from_ordinal.push_str(&format!("impl {} {{\n", name));
    from_ordinal.push_str("    /// Symbol at a wire ordinal, if in range.\n");
    from_ordinal.push_str("    pub fn from_ordinal(ordinal: i64) -> Option<Self> {\n");
    from_ordinal.push_str("        match ordinal {\n");
    for (ordinal, variant) in variants.iter().enumerate() {
        from_ordinal.push_str(&format!("            {} => Some({}::{}),\n", ordinal, name, variant));
    }
    from_ordinal.push_str("            _ => None,\n");
    from_ordinal.push_str("        }\n    }\n}");
    file.add_routine(RoutineKey::attached(name, "from_ordinal"), from_ordinal)?;

    let mut symbol = String::new();
    symbol.push_str(&format!("impl {} {{\n", name));
    symbol.push_str("    /// Symbol as declared in the schema.\n");
    symbol.push_str("    pub fn symbol(&self) -> &'static str {\n");
    symbol.push_str("        match self {\n");
    for (variant, declared) in variants.iter().zip(enumeration.symbols()) {
        symbol.push_str(&format!("            {}::{} => {:?},\n", name, variant, declared));
    }
    symbol.push_str("        }\n    }\n}");
    file.add_routine(RoutineKey::attached(name, "symbol"), symbol)?;
    Ok(())
}

fn register_union(field: &Field, union: &UnionType, ns: &Namespace, pkg: &mut Package) -> Result<()> {
    let name = field.name();

    let mut decl = String::new();
    decl.push_str("#[derive(Debug, Clone, PartialEq)]\n");
    decl.push_str(&format!("pub enum {} {{\n", name));
    for branch in union.branches() {
        if branch.is_null() {
            decl.push_str("    Null,\n");
        } else {
            decl.push_str(&format!("    {}({}),\n", branch.name(), branch.rust_type()));
        }
    }
    decl.push('}');

    let file = pkg.file_mut(&file_name(&name));
    if !file.add_type(name.as_str(), decl)? {
        return Ok(());
    }
    file.add_import(SIBLINGS);
    if union.branches().iter().any(Field::needs_hash_map) {
        file.add_import(HASH_MAP);
    }

    let mut branch = String::new();
    branch.push_str(&format!("impl {} {{\n", name));
    branch.push_str("    /// Position of the active branch in the declared branch list.\n");
    branch.push_str("    pub fn branch(&self) -> usize {\n");
    branch.push_str("        match self {\n");
    for (index, b) in union.branches().iter().enumerate() {
        branch.push_str(&format!("            {} => {},\n", variant_pattern(&name, b, "_"), index));
    }
    branch.push_str("        }\n    }\n}");
    file.add_routine(RoutineKey::attached(name.as_str(), "branch"), branch)?;

    for b in union.branches() {
        b.register_type(ns, pkg)?;
    }
    Ok(())
}

/// `Union::Null` or `Union::Branch(binding)`
fn variant_pattern(union: &str, branch: &Field, binding: &str) -> String {
    if branch.is_null() {
        format!("{}::Null", union)
    } else {
        format!("{}::{}({})", union, branch.name(), binding)
    }
}

// =============================================================================
// Serializers
// =============================================================================

impl Field {
    /// Emit the write routine for this shape and everything it calls
    pub fn register_serializer(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        match self {
            Field::Null => Snippet::WriteNull.register(pkg),
            Field::Bool => Snippet::WriteBool.register(pkg),
            Field::Int => Snippet::WriteInt.register(pkg),
            Field::Long => Snippet::WriteLong.register(pkg),
            Field::Float => Snippet::WriteFloat.register(pkg),
            Field::Double => Snippet::WriteDouble.register(pkg),
            Field::Bytes => Snippet::WriteBytes.register(pkg),
            Field::String => Snippet::WriteString.register(pkg),
            Field::Fixed(fixed) => {
                let body = "    w.write_all(&r.0)".to_string();
                if add_glue(pkg, self.writer(), self.writer_signature(), body, false)? {
                    register_fixed(fixed, pkg)?;
                }
                Ok(())
            }
            Field::Enum(enumeration) => {
                let body = "    encode_int(w, *r as i64)".to_string();
                if add_glue(pkg, self.writer(), self.writer_signature(), body, false)? {
                    register_enum(enumeration, pkg)?;
                    Snippet::EncodeInt.register(pkg)?;
                }
                Ok(())
            }
            Field::Array(items) => {
                let body = format!("    write_blocks(w, r.iter(), |item, w| {}(item, w))", items.writer());
                if add_glue(pkg, self.writer(), self.writer_signature(), body, self.needs_hash_map())? {
                    Snippet::WriteBlocks.register(pkg)?;
                    items.register_serializer(ns, pkg)?;
                }
                Ok(())
            }
            Field::Map(values) => {
                let mut body = String::new();
                body.push_str("    write_blocks(w, r.iter(), |(key, value), w| {\n");
                body.push_str("        write_string(key, w)?;\n");
                body.push_str(&format!("        {}(value, w)\n", values.writer()));
                body.push_str("    })");
                if add_glue(pkg, self.writer(), self.writer_signature(), body, true)? {
                    Snippet::WriteBlocks.register(pkg)?;
                    Snippet::WriteString.register(pkg)?;
                    values.register_serializer(ns, pkg)?;
                }
                Ok(())
            }
            Field::Union(union) => {
                let name = self.name();
                let mut body = String::from("    match r {\n");
                for (index, branch) in union.branches().iter().enumerate() {
                    let value = if branch.is_null() { "&()" } else { "v" };
                    body.push_str(&format!("        {} => {{\n", variant_pattern(&name, branch, "v")));
                    body.push_str(&format!("            encode_int(w, {})?;\n", index));
                    body.push_str(&format!("            {}({}, w)\n", branch.writer(), value));
                    body.push_str("        }\n");
                }
                body.push_str("    }");
                if add_glue(pkg, self.writer(), self.writer_signature(), body, false)? {
                    self.register_type(ns, pkg)?;
                    Snippet::EncodeInt.register(pkg)?;
                    for branch in union.branches() {
                        branch.register_serializer(ns, pkg)?;
                    }
                }
                Ok(())
            }
            Field::Record(name) => {
                let body = "    r.serialize(w)".to_string();
                if add_glue(pkg, self.writer(), self.writer_signature(), body, false)? {
                    ns.record(name)?.add_serializer(ns, pkg)?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// Deserializers
// =============================================================================

impl Field {
    /// Emit the read routine for this shape and everything it calls
    pub fn register_deserializer(&self, ns: &Namespace, pkg: &mut Package) -> Result<()> {
        match self {
            Field::Null => Snippet::ReadNull.register(pkg),
            Field::Bool => Snippet::ReadBool.register(pkg),
            Field::Int => Snippet::ReadInt.register(pkg),
            Field::Long => Snippet::ReadLong.register(pkg),
            Field::Float => Snippet::ReadFloat.register(pkg),
            Field::Double => Snippet::ReadDouble.register(pkg),
            Field::Bytes => Snippet::ReadBytes.register(pkg),
            Field::String => Snippet::ReadString.register(pkg),
            Field::Fixed(fixed) => {
                let mut body = String::new();
                body.push_str(&format!("    let mut buf = [0u8; {}];\n", size_constant(fixed.name())));
                body.push_str("    r.read_exact_bytes(&mut buf)?;\n");
                body.push_str(&format!("    Ok({}(buf))", fixed.name()));
                if add_glue(pkg, self.reader(), self.reader_signature(), body, false)? {
                    register_fixed(fixed, pkg)?;
                    Snippet::ByteReader.register(pkg)?;
                    Snippet::DecodeError.register(pkg)?;
                }
                Ok(())
            }
            Field::Enum(enumeration) => {
                let name = enumeration.name();
                let mut body = String::new();
                body.push_str("    let ordinal = decode_int(r)?;\n");
                body.push_str(&format!(
                    "    {}::from_ordinal(ordinal).ok_or(DecodeError::InvalidEnumOrdinal {{ type_name: {:?}, ordinal }})",
                    name, name
                ));
                if add_glue(pkg, self.reader(), self.reader_signature(), body, false)? {
                    register_enum(enumeration, pkg)?;
                    Snippet::DecodeInt.register(pkg)?;
                    Snippet::DecodeError.register(pkg)?;
                }
                Ok(())
            }
            Field::Array(items) => {
                let mut body = String::new();
                body.push_str("    let mut items = Vec::new();\n");
                body.push_str("    read_blocks(r, |r| {\n");
                body.push_str(&format!("        items.push({}(r)?);\n", items.reader()));
                body.push_str("        Ok(())\n");
                body.push_str("    })?;\n");
                body.push_str("    Ok(items)");
                if add_glue(pkg, self.reader(), self.reader_signature(), body, self.needs_hash_map())? {
                    Snippet::ReadBlocks.register(pkg)?;
                    items.register_deserializer(ns, pkg)?;
                }
                Ok(())
            }
            Field::Map(values) => {
                let mut body = String::new();
                body.push_str("    let mut items = HashMap::new();\n");
                body.push_str("    read_blocks(r, |r| {\n");
                body.push_str("        let key = read_string(r)?;\n");
                body.push_str(&format!("        items.insert(key, {}(r)?);\n", values.reader()));
                body.push_str("        Ok(())\n");
                body.push_str("    })?;\n");
                body.push_str("    Ok(items)");
                if add_glue(pkg, self.reader(), self.reader_signature(), body, true)? {
                    Snippet::ReadBlocks.register(pkg)?;
                    Snippet::ReadString.register(pkg)?;
                    values.register_deserializer(ns, pkg)?;
                }
                Ok(())
            }
            Field::Union(union) => {
                let name = self.name();
                let mut body = String::from("    match decode_int(r)? {\n");
                for (index, branch) in union.branches().iter().enumerate() {
                    if branch.is_null() {
                        body.push_str(&format!("        {} => {{\n", index));
                        body.push_str("            read_null(r)?;\n");
                        body.push_str(&format!("            Ok({}::Null)\n", name));
                        body.push_str("        }\n");
                    } else {
                        body.push_str(&format!(
                            "        {} => Ok({}::{}({}(r)?)),\n",
                            index,
                            name,
                            branch.name(),
                            branch.reader()
                        ));
                    }
                }
                body.push_str(&format!(
                    "        index => Err(DecodeError::InvalidUnionIndex {{ type_name: {:?}, index }}),\n",
                    name
                ));
                body.push_str("    }");
                if add_glue(pkg, self.reader(), self.reader_signature(), body, false)? {
                    self.register_type(ns, pkg)?;
                    Snippet::DecodeInt.register(pkg)?;
                    Snippet::DecodeError.register(pkg)?;
                    for branch in union.branches() {
                        branch.register_deserializer(ns, pkg)?;
                    }
                }
                Ok(())
            }
            Field::Record(name) => {
                let body = format!("    {}(r).map(Box::new)", deserializer_name(name));
                if add_glue(pkg, self.reader(), self.reader_signature(), body, false)? {
                    ns.record(name)?.add_deserializer(ns, pkg)?;
                }
                Ok(())
            }
        }
    }
}

/// Add a glue routine to the codec file. Returns whether it was new, in
/// which case the caller registers what the routine calls.
fn add_glue(pkg: &mut Package, name: String, signature: String, body: String, hash_map: bool) -> Result<bool> {
    let source = format!("{} {{\n{}\n}}", signature, body);
    let file = pkg.file_mut(CODEC_FILE);
    if !file.add_routine(RoutineKey::free(name), source)? {
        return Ok(false);
    }
    file.add_import(IO);
    file.add_import(SIBLINGS);
    if hash_map {
        file.add_import(HASH_MAP);
    }
    Ok(true)
}
