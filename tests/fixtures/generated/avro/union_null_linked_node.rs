// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum UnionNullLinkedNode {
    Null,
    LinkedNode(Box<LinkedNode>),
}

impl UnionNullLinkedNode {
    /// Position of the active branch in the declared branch list.
    pub fn branch(&self) -> usize {
        match self {
            UnionNullLinkedNode::Null => 0,
            UnionNullLinkedNode::LinkedNode(_) => 1,
        }
    }
}
