// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

use std::io;
use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedNode {
    pub value: i32,
    pub next: UnionNullLinkedNode,
}

impl LinkedNode {
    /// Write this record in the binary encoding.
    pub fn serialize<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write_int(&self.value, w)?;
        write_union_null_linked_node(&self.next, w)?;
        Ok(())
    }
}

/// Read a `LinkedNode` from the binary encoding.
pub fn deserialize_linked_node<R: io::Read + ?Sized>(r: &mut R) -> Result<LinkedNode, DecodeError> {
    Ok(LinkedNode {
        value: read_int(r)?,
        next: read_union_null_linked_node(r)?,
    })
}
