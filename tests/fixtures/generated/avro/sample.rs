// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

use std::collections::HashMap;
use std::io;
use super::*;

/// Every field shape at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub count: i32,
    pub total: i64,
    pub ratio: f32,
    pub precise: f64,
    pub flag: bool,
    pub payload: Vec<u8>,
    /// Free-form label
    pub label: String,
    pub digest: Md5,
    pub suit: Suit,
    pub scores: Vec<i32>,
    pub tags: HashMap<String, String>,
    pub nickname: UnionNullString,
}

impl Sample {
    /// Write this record in the binary encoding.
    pub fn serialize<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write_int(&self.count, w)?;
        write_long(&self.total, w)?;
        write_float(&self.ratio, w)?;
        write_double(&self.precise, w)?;
        write_bool(&self.flag, w)?;
        write_bytes(&self.payload, w)?;
        write_string(&self.label, w)?;
        write_md5(&self.digest, w)?;
        write_suit(&self.suit, w)?;
        write_array_int(&self.scores, w)?;
        write_map_string(&self.tags, w)?;
        write_union_null_string(&self.nickname, w)?;
        Ok(())
    }
}

/// Read a `Sample` from the binary encoding.
pub fn deserialize_sample<R: io::Read + ?Sized>(r: &mut R) -> Result<Sample, DecodeError> {
    Ok(Sample {
        count: read_int(r)?,
        total: read_long(r)?,
        ratio: read_float(r)?,
        precise: read_double(r)?,
        flag: read_bool(r)?,
        payload: read_bytes(r)?,
        label: read_string(r)?,
        digest: read_md5(r)?,
        suit: read_suit(r)?,
        scores: read_array_int(r)?,
        tags: read_map_string(r)?,
        nickname: read_union_null_string(r)?,
    })
}
