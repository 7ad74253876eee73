//! Wire type schema
//!
//! A `WireType` describes how one field is laid out on the wire. Schemas are
//! plain `'static` data so that instruction tables can be declared as
//! constants. Layout rules mirror the on-chain deserializer:
//!
//! - integers are little-endian and fixed width
//! - `Option<T>` is a one byte tag (`0` none, `1` some) followed by `T` if present
//! - enums without payload are a single variant index byte
//! - structs are their fields concatenated in declared order, no padding
//! - vectors carry a `u32` element count prefix

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    U8,
    U16,
    U32,
    U64,
    I64,
    Bool,
    FixedBytes(usize),
    PublicKey,
    Option(&'static WireType),
    /// Unit-only enum, variant names in index order
    Enum(&'static [&'static str]),
    Struct(&'static [Field]),
    Vec(&'static WireType),
}

/// A named, typed field inside a struct or argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: WireType,
}

impl Field {
    pub const fn new(name: &'static str, ty: WireType) -> Self {
        Self { name, ty }
    }
}

impl WireType {
    /// Encoded size when it does not depend on the value
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            WireType::U8 | WireType::Bool | WireType::Enum(_) => Some(1),
            WireType::U16 => Some(2),
            WireType::U32 => Some(4),
            WireType::U64 | WireType::I64 => Some(8),
            WireType::FixedBytes(n) => Some(*n),
            WireType::PublicKey => Some(32),
            WireType::Option(_) | WireType::Vec(_) => None,
            WireType::Struct(fields) => fields
                .iter()
                .try_fold(0usize, |acc, f| f.ty.fixed_size().map(|s| acc + s)),
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, WireType::Option(_))
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireType::U8 => write!(f, "u8"),
            WireType::U16 => write!(f, "u16"),
            WireType::U32 => write!(f, "u32"),
            WireType::U64 => write!(f, "u64"),
            WireType::I64 => write!(f, "i64"),
            WireType::Bool => write!(f, "bool"),
            WireType::FixedBytes(n) => write!(f, "[u8; {}]", n),
            WireType::PublicKey => write!(f, "pubkey"),
            WireType::Option(inner) => write!(f, "Option<{}>", inner),
            WireType::Enum(variants) => write!(f, "enum({})", variants.join("|")),
            WireType::Struct(fields) => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.ty)?;
                }
                write!(f, "}}")
            }
            WireType::Vec(inner) => write!(f, "Vec<{}>", inner),
        }
    }
}
