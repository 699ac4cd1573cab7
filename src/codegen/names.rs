//! Name Resolution
//!
//! Canonical names are derived purely from a field's shape and are the keys of
//! every deduplicating collection in the generated package:
//!
//! - Primitives map to fixed tokens (`Int`, `Long`, `String`, `Null`, ...)
//! - Fixed, enum and record references use their declared name verbatim
//! - `Array(X)` is `"Array" + name(X)`, `Map(X)` is `"Map" + name(X)`
//! - `Union(a, b, ..)` is `"Union" + name(a) + name(b) + ..` in branch order
//!
//! Everything else in this module is rendering: casing, keyword escaping and
//! the file/routine names built on top of a canonical name.

use crate::error::{CodegenError, Result};
use crate::types::Field;

/// Name of the shared file holding the wire codec routines
pub const CODEC_FILE: &str = "primitive.rs";

/// Name of the module index rendered alongside the generated files
pub const INDEX_FILE: &str = "mod.rs";

/// Names that would shadow std/prelude items or the codec's own types
/// once glob-imported into a generated module, plus the generic parameters
/// of the generated writers and readers.
const RESERVED_NAMES: &[&str] = &[
    "String", "Vec", "Option", "Result", "Box", "Rc", "Arc",
    "HashMap", "HashSet", "BTreeMap", "BTreeSet", "RefCell", "Cell",
    "Mutex", "RwLock", "Debug", "Clone", "Default", "Copy", "Send", "Sync",
    "Some", "None", "Ok", "Err", "Sized", "Drop", "Fn", "FnMut", "FnOnce",
    "Iterator", "PartialEq", "Eq", "Hash", "From", "Into", "TryFrom", "ToString",
    "bool", "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize", "f32", "f64", "str",
    "io", "fmt",
    "Null", "Bool", "Int", "Long", "Float", "Double", "Bytes", "Blocks",
    "ByteWriter", "StringWriter", "ByteReader", "DecodeError",
    "W", "R",
];

/// Identifiers that cannot be written as raw identifiers
const UNRAWABLE: &[&str] = &["self", "Self", "super", "crate", "_"];

const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
    "try",
];

// =============================================================================
// Canonical Names
// =============================================================================

/// Deterministic identifier for a field shape.
///
/// Equal shapes yield equal names. Reordering union branches yields a
/// different name.
pub fn canonical_name(field: &Field) -> String {
    match field {
        Field::Null => "Null".to_string(),
        Field::Bool => "Bool".to_string(),
        Field::Int => "Int".to_string(),
        Field::Long => "Long".to_string(),
        Field::Float => "Float".to_string(),
        Field::Double => "Double".to_string(),
        Field::Bytes => "Bytes".to_string(),
        Field::String => "String".to_string(),
        Field::Fixed(fixed) => fixed.name().to_string(),
        Field::Enum(enumeration) => enumeration.name().to_string(),
        Field::Record(name) => name.clone(),
        Field::Array(items) => format!("Array{}", canonical_name(items)),
        Field::Map(values) => format!("Map{}", canonical_name(values)),
        Field::Union(union) => {
            let mut name = String::from("Union");
            for branch in union.branches() {
                name.push_str(&canonical_name(branch));
            }
            name
        }
    }
}

/// Name of the write routine for a canonical name (`write_array_int`)
pub fn writer_name(canonical: &str) -> String {
    format!("write_{}", to_snake_case(canonical))
}

/// Name of the read routine for a canonical name (`read_array_int`)
pub fn reader_name(canonical: &str) -> String {
    format!("read_{}", to_snake_case(canonical))
}

/// Name of a record's top-level deserialize routine
pub fn deserializer_name(record: &str) -> String {
    format!("deserialize_{}", to_snake_case(record))
}

/// Constant holding the size of a fixed type (`MD5_SIZE`)
pub fn size_constant(fixed: &str) -> String {
    format!("{}_SIZE", to_snake_case(fixed).to_ascii_uppercase())
}

// =============================================================================
// Files and Modules
// =============================================================================

/// Module name for a declared type, without raw-identifier escaping
pub fn module_name(type_name: &str) -> String {
    let snake = to_snake_case(type_name);
    if UNRAWABLE.contains(&snake.as_str()) {
        format!("{}_", snake)
    } else {
        snake
    }
}

/// Output file holding a declared type (`linked_node.rs`)
pub fn file_name(type_name: &str) -> String {
    format!("{}.rs", module_name(type_name))
}

/// Reject type names that cannot be declared in a generated package.
///
/// A type may not share its spelling with its own module, since both live in
/// the type namespace of the package index.
pub fn check_type_name(name: &str) -> Result<()> {
    let module = module_name(name);
    if RESERVED_NAMES.contains(&name) || escape_keyword(name) != name || module == "mod" || module == name {
        return Err(CodegenError::ReservedName { name: name.to_string() });
    }
    Ok(())
}

// =============================================================================
// Casing
// =============================================================================

/// Escape an identifier that collides with a Rust keyword
pub fn escape_keyword(ident: &str) -> String {
    if UNRAWABLE.contains(&ident) {
        format!("{}_", ident)
    } else if KEYWORDS.contains(&ident) {
        format!("r#{}", ident)
    } else {
        ident.to_string()
    }
}

/// Struct member name for a schema field name
pub fn member_name(field_name: &str) -> String {
    escape_keyword(&to_snake_case(field_name))
}

/// Enum variant name for a schema symbol (`DIAMOND_SUIT` -> `DiamondSuit`)
pub fn variant_name(symbol: &str) -> String {
    escape_keyword(&to_pascal_case(symbol))
}

/// Convert to PascalCase. Words written entirely in capitals are lowered
/// after their first letter, other words keep their inner casing.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for word in s.split(|c| c == '_' || c == '-' || c == ' ') {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        result.push(first.to_ascii_uppercase());

        let shouting = !word.chars().any(|c| c.is_ascii_lowercase());
        for c in chars {
            if shouting {
                result.push(c.to_ascii_lowercase());
            } else {
                result.push(c);
            }
        }
    }

    result
}

/// Convert to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else if c == '-' || c == ' ' {
            result.push('_');
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    result
}
