// Code generated by avrogen. DO NOT EDIT.
// Source: tests/fixtures/schemas/linked_node.avsc tests/fixtures/schemas/sample.avsc

//! Package `avro`.

pub mod linked_node;
pub mod md5;
pub mod primitive;
pub mod sample;
pub mod suit;
pub mod union_null_linked_node;
pub mod union_null_string;

pub use self::linked_node::*;
pub use self::md5::*;
pub use self::primitive::*;
pub use self::sample::*;
pub use self::suit::*;
pub use self::union_null_linked_node::*;
pub use self::union_null_string::*;
