// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

use std::collections::HashMap;
use std::fmt;
use std::io;
use super::*;

/// Exact-length input, available on every `io::Read`.
pub trait ByteReader: io::Read {
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        self.read_exact(buf)?;
        Ok(())
    }
}

impl<R: io::Read + ?Sized> ByteReader for R {}

/// Byte-at-a-time output, available on every `io::Write`.
pub trait ByteWriter: io::Write {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }
}

impl<W: io::Write + ?Sized> ByteWriter for W {}

/// Malformed input found while decoding.
#[derive(Debug)]
pub enum DecodeError {
    UnexpectedEof,
    InvalidBool(u8),
    InvalidEnumOrdinal { type_name: &'static str, ordinal: i64 },
    InvalidUnionIndex { type_name: &'static str, index: i64 },
    NegativeLength(i64),
    TooManyItems(i64),
    IntOutOfRange(i64),
    VarintOverflow,
    InvalidUtf8(std::str::Utf8Error),
    Io(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeError::InvalidBool(byte) => write!(f, "invalid boolean byte {:#04x}", byte),
            DecodeError::InvalidEnumOrdinal { type_name, ordinal } => {
                write!(f, "ordinal {} out of range for enum {}", ordinal, type_name)
            }
            DecodeError::InvalidUnionIndex { type_name, index } => {
                write!(f, "branch index {} out of range for union {}", index, type_name)
            }
            DecodeError::NegativeLength(len) => write!(f, "negative length {}", len),
            DecodeError::TooManyItems(count) => write!(f, "collection of {} items exceeds the limit", count),
            DecodeError::IntOutOfRange(value) => write!(f, "value {} does not fit in an int", value),
            DecodeError::VarintOverflow => write!(f, "varint longer than 10 bytes"),
            DecodeError::InvalidUtf8(err) => write!(f, "invalid UTF-8 in string: {}", err),
            DecodeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(err) => Some(err),
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::UnexpectedEof
        } else {
            DecodeError::Io(err)
        }
    }
}

/// Raw UTF-8 content output, available on every `io::Write`.
pub trait StringWriter: io::Write {
    fn write_utf8(&mut self, s: &str) -> io::Result<()> {
        self.write_all(s.as_bytes())
    }
}

impl<W: io::Write + ?Sized> StringWriter for W {}

/// Read a base-128 varint and undo the zigzag mapping.
pub fn decode_int<R: io::Read + ?Sized>(r: &mut R) -> Result<i64, DecodeError> {
    let mut value: u64 = 0;
    let mut shift = 0;
    loop {
        let byte = r.read_byte()?;
        // The tenth byte may only carry the top bit.
        if shift == 63 && byte > 1 {
            return Err(DecodeError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
    }
    Ok((value >> 1) as i64 ^ -((value & 1) as i64))
}

/// Zigzag-map `n`, then emit it as a little-endian base-128 varint.
pub fn encode_int<W: io::Write + ?Sized>(w: &mut W, n: i64) -> io::Result<()> {
    let mut value = ((n << 1) ^ (n >> 63)) as u64;
    while value & !0x7f != 0 {
        w.write_byte((value & 0x7f) as u8 | 0x80)?;
        value >>= 7;
    }
    w.write_byte(value as u8)
}

pub fn read_array_int<R: io::Read + ?Sized>(r: &mut R) -> Result<Vec<i32>, DecodeError> {
    let mut items = Vec::new();
    read_blocks(r, |r| {
        items.push(read_int(r)?);
        Ok(())
    })?;
    Ok(items)
}

/// Read counted blocks until the empty block, calling `read_item` once per item.
///
/// A negative count is followed by the block's size in bytes, which is skipped.
/// At most `i32::MAX` items are read in total, which also bounds the loop for
/// items that take no bytes on the wire (`null`, empty records).
pub fn read_blocks<R, F>(r: &mut R, mut read_item: F) -> Result<(), DecodeError>
where
    R: io::Read + ?Sized,
    F: FnMut(&mut R) -> Result<(), DecodeError>,
{
    const MAX_ITEMS: i64 = i32::MAX as i64;
    let mut total: i64 = 0;
    loop {
        let mut count = decode_int(r)?;
        if count == 0 {
            return Ok(());
        }
        if count < 0 {
            decode_int(r)?;
            count = count.checked_neg().ok_or(DecodeError::NegativeLength(count))?;
        }
        total = total.saturating_add(count);
        if total > MAX_ITEMS {
            return Err(DecodeError::TooManyItems(total));
        }
        for _ in 0..count {
            read_item(&mut *r)?;
        }
    }
}

pub fn read_bool<R: io::Read + ?Sized>(r: &mut R) -> Result<bool, DecodeError> {
    match r.read_byte()? {
        0 => Ok(false),
        1 => Ok(true),
        byte => Err(DecodeError::InvalidBool(byte)),
    }
}

/// Read a length-prefixed byte string without trusting the length for allocation.
pub fn read_bytes<R: io::Read + ?Sized>(r: &mut R) -> Result<Vec<u8>, DecodeError> {
    let len = read_long(r)?;
    let len = u64::try_from(len).map_err(|_| DecodeError::NegativeLength(len))?;
    let mut buf = Vec::new();
    let mut limited = io::Read::take(&mut *r, len);
    io::Read::read_to_end(&mut limited, &mut buf)?;
    if (buf.len() as u64) < len {
        return Err(DecodeError::UnexpectedEof);
    }
    Ok(buf)
}

pub fn read_double<R: io::Read + ?Sized>(r: &mut R) -> Result<f64, DecodeError> {
    let mut buf = [0u8; 8];
    r.read_exact_bytes(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

pub fn read_float<R: io::Read + ?Sized>(r: &mut R) -> Result<f32, DecodeError> {
    let mut buf = [0u8; 4];
    r.read_exact_bytes(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

pub fn read_int<R: io::Read + ?Sized>(r: &mut R) -> Result<i32, DecodeError> {
    let value = decode_int(r)?;
    i32::try_from(value).map_err(|_| DecodeError::IntOutOfRange(value))
}

pub fn read_linked_node<R: io::Read + ?Sized>(r: &mut R) -> Result<Box<LinkedNode>, DecodeError> {
    deserialize_linked_node(r).map(Box::new)
}

pub fn read_long<R: io::Read + ?Sized>(r: &mut R) -> Result<i64, DecodeError> {
    decode_int(r)
}

pub fn read_map_string<R: io::Read + ?Sized>(r: &mut R) -> Result<HashMap<String, String>, DecodeError> {
    let mut items = HashMap::new();
    read_blocks(r, |r| {
        let key = read_string(r)?;
        items.insert(key, read_string(r)?);
        Ok(())
    })?;
    Ok(items)
}

pub fn read_md5<R: io::Read + ?Sized>(r: &mut R) -> Result<Md5, DecodeError> {
    let mut buf = [0u8; MD5_SIZE];
    r.read_exact_bytes(&mut buf)?;
    Ok(Md5(buf))
}

pub fn read_null<R: io::Read + ?Sized>(_r: &mut R) -> Result<(), DecodeError> {
    Ok(())
}

pub fn read_string<R: io::Read + ?Sized>(r: &mut R) -> Result<String, DecodeError> {
    let bytes = read_bytes(r)?;
    String::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8(err.utf8_error()))
}

pub fn read_suit<R: io::Read + ?Sized>(r: &mut R) -> Result<Suit, DecodeError> {
    let ordinal = decode_int(r)?;
    Suit::from_ordinal(ordinal).ok_or(DecodeError::InvalidEnumOrdinal { type_name: "Suit", ordinal })
}

pub fn read_union_null_linked_node<R: io::Read + ?Sized>(r: &mut R) -> Result<UnionNullLinkedNode, DecodeError> {
    match decode_int(r)? {
        0 => {
            read_null(r)?;
            Ok(UnionNullLinkedNode::Null)
        }
        1 => Ok(UnionNullLinkedNode::LinkedNode(read_linked_node(r)?)),
        index => Err(DecodeError::InvalidUnionIndex { type_name: "UnionNullLinkedNode", index }),
    }
}

pub fn read_union_null_string<R: io::Read + ?Sized>(r: &mut R) -> Result<UnionNullString, DecodeError> {
    match decode_int(r)? {
        0 => {
            read_null(r)?;
            Ok(UnionNullString::Null)
        }
        1 => Ok(UnionNullString::String(read_string(r)?)),
        index => Err(DecodeError::InvalidUnionIndex { type_name: "UnionNullString", index }),
    }
}

pub fn write_array_int<W: io::Write + ?Sized>(r: &[i32], w: &mut W) -> io::Result<()> {
    write_blocks(w, r.iter(), |item, w| write_int(item, w))
}

/// Write every item as a single counted block, then the terminating empty block.
pub fn write_blocks<W, I, F>(w: &mut W, items: I, mut write_item: F) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: ExactSizeIterator,
    F: FnMut(I::Item, &mut W) -> io::Result<()>,
{
    if items.len() > 0 {
        encode_int(w, items.len() as i64)?;
        for item in items {
            write_item(item, &mut *w)?;
        }
    }
    encode_int(w, 0)
}

pub fn write_bool<W: io::Write + ?Sized>(r: &bool, w: &mut W) -> io::Result<()> {
    w.write_byte(u8::from(*r))
}

pub fn write_bytes<W: io::Write + ?Sized>(r: &[u8], w: &mut W) -> io::Result<()> {
    write_long(&(r.len() as i64), w)?;
    w.write_all(r)
}

pub fn write_double<W: io::Write + ?Sized>(r: &f64, w: &mut W) -> io::Result<()> {
    w.write_all(&r.to_le_bytes())
}

pub fn write_float<W: io::Write + ?Sized>(r: &f32, w: &mut W) -> io::Result<()> {
    w.write_all(&r.to_le_bytes())
}

pub fn write_int<W: io::Write + ?Sized>(r: &i32, w: &mut W) -> io::Result<()> {
    encode_int(w, i64::from(*r))
}

pub fn write_linked_node<W: io::Write + ?Sized>(r: &LinkedNode, w: &mut W) -> io::Result<()> {
    r.serialize(w)
}

pub fn write_long<W: io::Write + ?Sized>(r: &i64, w: &mut W) -> io::Result<()> {
    encode_int(w, *r)
}

pub fn write_map_string<W: io::Write + ?Sized>(r: &HashMap<String, String>, w: &mut W) -> io::Result<()> {
    write_blocks(w, r.iter(), |(key, value), w| {
        write_string(key, w)?;
        write_string(value, w)
    })
}

pub fn write_md5<W: io::Write + ?Sized>(r: &Md5, w: &mut W) -> io::Result<()> {
    w.write_all(&r.0)
}

pub fn write_null<W: io::Write + ?Sized>(_r: &(), _w: &mut W) -> io::Result<()> {
    Ok(())
}

pub fn write_string<W: io::Write + ?Sized>(r: &str, w: &mut W) -> io::Result<()> {
    write_long(&(r.len() as i64), w)?;
    w.write_utf8(r)
}

pub fn write_suit<W: io::Write + ?Sized>(r: &Suit, w: &mut W) -> io::Result<()> {
    encode_int(w, *r as i64)
}

pub fn write_union_null_linked_node<W: io::Write + ?Sized>(r: &UnionNullLinkedNode, w: &mut W) -> io::Result<()> {
    match r {
        UnionNullLinkedNode::Null => {
            encode_int(w, 0)?;
            write_null(&(), w)
        }
        UnionNullLinkedNode::LinkedNode(v) => {
            encode_int(w, 1)?;
            write_linked_node(v, w)
        }
    }
}

pub fn write_union_null_string<W: io::Write + ?Sized>(r: &UnionNullString, w: &mut W) -> io::Result<()> {
    match r {
        UnionNullString::Null => {
            encode_int(w, 0)?;
            write_null(&(), w)
        }
        UnionNullString::String(v) => {
            encode_int(w, 1)?;
            write_string(v, w)
        }
    }
}
