// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum UnionNullString {
    Null,
    String(String),
}

impl UnionNullString {
    /// Position of the active branch in the declared branch list.
    pub fn branch(&self) -> usize {
        match self {
            UnionNullString::Null => 0,
            UnionNullString::String(_) => 1,
        }
    }
}
