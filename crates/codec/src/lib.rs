//! Wire codec for AMM instruction payloads
//!
//! Little-endian, sequential, unpadded encoding of the primitive types the
//! on-chain deserializer understands, plus a `WireType` schema and a dynamic
//! `Value` model that is encoded and decoded by interpreting the schema.

pub mod error;
pub mod json;
pub mod reader;
pub mod schema;
pub mod value;
pub mod writer;

pub use error::*;
pub use reader::InstructionReader;
pub use schema::{Field, WireType};
pub use value::{decode_fields, decode_value, encode_fields, encode_value, Value};
pub use writer::InstructionWriter;
