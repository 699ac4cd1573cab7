// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`: generated types and wire codecs.
#![allow(dead_code, unused_imports, unused_variables)]

pub const MD5_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5(pub [u8; MD5_SIZE]);

impl TryFrom<&[u8]> for Md5 {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; MD5_SIZE]>::try_from(bytes).map(Md5)
    }
}
