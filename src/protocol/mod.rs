mod cursor;
pub mod insert;
pub mod primitive;
pub mod response;
pub mod r#trait;

#[cfg(test)]
mod primitive_test;

pub use cursor::{ByteCursor, decode_length_prefixed_string, decode_varint};
pub use r#trait::{ResultSetHandler, TypeHandle, TypeResolver};
