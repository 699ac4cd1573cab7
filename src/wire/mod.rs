//! Wire Codec Library
//!
//! The fixed part of the binary codec: zigzag varints, little-endian floats,
//! length-prefixed bytes, block-framed collections and the decode fault type.
//!
//! Each item lives in its own file under `snippets/`. The files are compiled
//! here, and the generator copies the same text into the shared codec file of
//! every generated package, so what is tested here is what gets emitted.

use std::fmt;
use std::io;

include!("snippets/byte_writer.rs");
include!("snippets/string_writer.rs");
include!("snippets/byte_reader.rs");
include!("snippets/decode_error.rs");

include!("snippets/encode_int.rs");
include!("snippets/decode_int.rs");

include!("snippets/write_null.rs");
include!("snippets/read_null.rs");
include!("snippets/write_bool.rs");
include!("snippets/read_bool.rs");
include!("snippets/write_int.rs");
include!("snippets/read_int.rs");
include!("snippets/write_long.rs");
include!("snippets/read_long.rs");
include!("snippets/write_float.rs");
include!("snippets/read_float.rs");
include!("snippets/write_double.rs");
include!("snippets/read_double.rs");
include!("snippets/write_bytes.rs");
include!("snippets/read_bytes.rs");
include!("snippets/write_string.rs");
include!("snippets/read_string.rs");

include!("snippets/write_blocks.rs");
include!("snippets/read_blocks.rs");
