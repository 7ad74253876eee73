//! Dynamic values and schema-driven encode/decode
//!
//! `decode_value(ty, encode_value(ty, v))` reproduces `v` exactly and consumes
//! exactly the bytes that were written.

use crate::error::CodecError;
use crate::reader::InstructionReader;
use crate::schema::{Field, WireType};
use crate::writer::InstructionWriter;
use solana_program::pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I64(i64),
    Bool(bool),
    Bytes(Vec<u8>),
    PublicKey(Pubkey),
    Option(Option<Box<Value>>),
    /// Variant index of a unit enum
    Enum(u8),
    /// Field values in declared order
    Struct(Vec<Value>),
    Vec(Vec<Value>),
}

impl Value {
    pub fn none() -> Self {
        Value::Option(None)
    }

    pub fn some(inner: impl Into<Value>) -> Self {
        Value::Option(Some(Box::new(inner.into())))
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(v) => Some(*v as u64),
            Value::U16(v) => Some(*v as u64),
            Value::U32(v) => Some(*v as u64),
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pubkey(&self) -> Option<Pubkey> {
        match self {
            Value::PublicKey(key) => Some(*key),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<Option<&Value>> {
        match self {
            Value::Option(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }

    /// Raw bytes of this value when used as a PDA seed
    pub fn seed_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Value::U8(v) => Some(vec![*v]),
            Value::U16(v) => Some(v.to_le_bytes().to_vec()),
            Value::U32(v) => Some(v.to_le_bytes().to_vec()),
            Value::U64(v) => Some(v.to_le_bytes().to_vec()),
            Value::I64(v) => Some(v.to_le_bytes().to_vec()),
            Value::Bytes(b) => Some(b.clone()),
            Value::PublicKey(key) => Some(key.to_bytes().to_vec()),
            _ => None,
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Pubkey> for Value {
    fn from(v: Pubkey) -> Self {
        Value::PublicKey(v)
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(v: [u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Option(v.map(|inner| Box::new(inner.into())))
    }
}

fn mismatch(field: &str, ty: &WireType) -> CodecError {
    CodecError::TypeMismatch {
        field: field.to_string(),
        expected: ty.to_string(),
    }
}

/// Encode `value` as `ty`. `field` names the value in errors.
pub fn encode_value(
    field: &str,
    ty: &WireType,
    value: &Value,
    w: &mut InstructionWriter,
) -> Result<(), CodecError> {
    match (ty, value) {
        (WireType::U8, Value::U8(v)) => w.write_u8(*v),
        (WireType::U16, Value::U16(v)) => w.write_u16(*v),
        (WireType::U32, Value::U32(v)) => w.write_u32(*v),
        (WireType::U64, Value::U64(v)) => w.write_u64(*v),
        (WireType::I64, Value::I64(v)) => w.write_i64(*v),
        (WireType::Bool, Value::Bool(v)) => w.write_bool(*v),
        (WireType::FixedBytes(n), Value::Bytes(bytes)) => {
            if bytes.len() != *n {
                return Err(CodecError::LengthMismatch {
                    field: field.to_string(),
                    expected: *n,
                    actual: bytes.len(),
                });
            }
            w.write_bytes(bytes);
        }
        (WireType::PublicKey, Value::PublicKey(key)) => w.write_pubkey(key),
        (WireType::Option(_), Value::Option(None)) => w.write_u8(0),
        (WireType::Option(inner), Value::Option(Some(v))) => {
            w.write_u8(1);
            encode_value(field, inner, v, w)?;
        }
        (WireType::Enum(variants), Value::Enum(idx)) => {
            if *idx as usize >= variants.len() {
                return Err(CodecError::InvalidEnumVariant {
                    variant: *idx,
                    count: variants.len(),
                });
            }
            w.write_u8(*idx);
        }
        (WireType::Struct(fields), Value::Struct(values)) => {
            if fields.len() != values.len() {
                return Err(mismatch(field, ty));
            }
            for (f, v) in fields.iter().zip(values) {
                encode_value(&format!("{}.{}", field, f.name), &f.ty, v, w)?;
            }
        }
        (WireType::Vec(inner), Value::Vec(items)) => {
            let len = u32::try_from(items.len()).map_err(|_| CodecError::VecTooLong(items.len()))?;
            w.write_u32(len);
            for item in items {
                encode_value(field, inner, item, w)?;
            }
        }
        _ => return Err(mismatch(field, ty)),
    }
    Ok(())
}

/// Decode one value of type `ty` from the reader's current position.
pub fn decode_value(ty: &WireType, r: &mut InstructionReader) -> Result<Value, CodecError> {
    Ok(match ty {
        WireType::U8 => Value::U8(r.read_u8()?),
        WireType::U16 => Value::U16(r.read_u16()?),
        WireType::U32 => Value::U32(r.read_u32()?),
        WireType::U64 => Value::U64(r.read_u64()?),
        WireType::I64 => Value::I64(r.read_i64()?),
        WireType::Bool => Value::Bool(r.read_bool()?),
        WireType::FixedBytes(n) => Value::Bytes(r.read_slice(*n)?.to_vec()),
        WireType::PublicKey => Value::PublicKey(r.read_pubkey()?),
        WireType::Option(inner) => {
            if r.read_option_tag()? {
                Value::Option(Some(Box::new(decode_value(inner, r)?)))
            } else {
                Value::Option(None)
            }
        }
        WireType::Enum(variants) => {
            let variant = r.read_u8()?;
            if variant as usize >= variants.len() {
                return Err(CodecError::InvalidEnumVariant {
                    variant,
                    count: variants.len(),
                });
            }
            Value::Enum(variant)
        }
        WireType::Struct(fields) => Value::Struct(
            fields
                .iter()
                .map(|f| decode_value(&f.ty, r))
                .collect::<Result<_, _>>()?,
        ),
        WireType::Vec(inner) => {
            let len = r.read_u32()? as usize;
            // Cap the preallocation by what the remaining bytes could hold.
            let mut items = Vec::with_capacity(len.min(r.remaining()));
            for _ in 0..len {
                items.push(decode_value(inner, r)?);
            }
            Value::Vec(items)
        }
    })
}

/// Encode an ordered field list, values matched positionally.
pub fn encode_fields(
    fields: &[Field],
    values: &[Value],
    w: &mut InstructionWriter,
) -> Result<(), CodecError> {
    for (f, v) in fields.iter().zip(values) {
        encode_value(f.name, &f.ty, v, w)?;
    }
    Ok(())
}

/// Decode an ordered field list.
pub fn decode_fields(
    fields: &[Field],
    r: &mut InstructionReader,
) -> Result<Vec<Value>, CodecError> {
    fields.iter().map(|f| decode_value(&f.ty, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ROYALTY: WireType = WireType::Option(&WireType::U16);
    const SIDE: WireType = WireType::Enum(&["Bid", "Ask"]);
    const ORDER: &[Field] = &[
        Field::new("side", SIDE),
        Field::new("price", WireType::U64),
        Field::new("memo", WireType::Option(&WireType::FixedBytes(4))),
    ];

    fn encode(ty: &WireType, v: &Value) -> Vec<u8> {
        let mut w = InstructionWriter::new();
        encode_value("test", ty, v, &mut w).unwrap();
        w.into_inner()
    }

    fn decode(ty: &WireType, bytes: &[u8]) -> Result<Value, CodecError> {
        let mut r = InstructionReader::new(bytes);
        let v = decode_value(ty, &mut r)?;
        r.finish()?;
        Ok(v)
    }

    #[test]
    fn test_option_u16_none_and_some() {
        assert_eq!(encode(&ROYALTY, &Value::none()), vec![0]);
        assert_eq!(encode(&ROYALTY, &Value::some(250u16)), vec![1, 250, 0]);

        assert_eq!(decode(&ROYALTY, &[0]).unwrap(), Value::none());
        assert_eq!(decode(&ROYALTY, &[1, 250, 0]).unwrap(), Value::some(250u16));
    }

    #[test]
    fn test_option_only_consumes_payload_when_present() {
        let mut r = InstructionReader::new(&[0, 9, 9]);
        assert_eq!(decode_value(&ROYALTY, &mut r).unwrap(), Value::none());
        assert_eq!(r.offset(), 1);
    }

    #[test]
    fn test_struct_is_packed_in_field_order() {
        let order = Value::Struct(vec![
            Value::Enum(1),
            Value::U64(5),
            Value::some([1u8, 2, 3, 4]),
        ]);
        let bytes = encode(&WireType::Struct(ORDER), &order);
        assert_eq!(bytes, vec![1, 5, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 3, 4]);
        assert_eq!(decode(&WireType::Struct(ORDER), &bytes).unwrap(), order);
    }

    #[test]
    fn test_vec_has_u32_prefix() {
        let ty = WireType::Vec(&WireType::U8);
        let v = Value::Vec(vec![Value::U8(7), Value::U8(8)]);
        assert_eq!(encode(&ty, &v), vec![2, 0, 0, 0, 7, 8]);
        assert_eq!(decode(&ty, &[2, 0, 0, 0, 7, 8]).unwrap(), v);
        assert!(decode(&ty, &[255, 255, 255, 255, 7]).is_err());
    }

    #[test]
    fn test_type_mismatch_names_field() {
        let mut w = InstructionWriter::new();
        let err = encode_value("max_amount", &WireType::U64, &Value::U16(1), &mut w).unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeMismatch {
                field: "max_amount".into(),
                expected: "u64".into()
            }
        );
    }

    #[test]
    fn test_fixed_bytes_length_checked() {
        let mut w = InstructionWriter::new();
        let err = encode_value("pool_id", &WireType::FixedBytes(32), &Value::Bytes(vec![0; 31]), &mut w);
        assert!(matches!(err, Err(CodecError::LengthMismatch { expected: 32, actual: 31, .. })));
        assert!(decode(&WireType::FixedBytes(32), &[0; 31]).is_err());
    }

    #[test]
    fn test_enum_variant_range() {
        assert!(decode(&SIDE, &[2]).is_err());
        let mut w = InstructionWriter::new();
        assert!(encode_value("side", &SIDE, &Value::Enum(2), &mut w).is_err());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        assert_eq!(decode(&WireType::U8, &[1, 2]), Err(CodecError::TrailingBytes(1)));
    }

    #[test]
    fn test_seed_bytes() {
        let key = Pubkey::new_unique();
        assert_eq!(Value::PublicKey(key).seed_bytes().unwrap(), key.to_bytes().to_vec());
        assert_eq!(Value::U16(0x0102).seed_bytes().unwrap(), vec![2, 1]);
        assert!(Value::none().seed_bytes().is_none());
    }

    const SCHEMAS: &[WireType] = &[
        WireType::U8,
        WireType::U16,
        WireType::U32,
        WireType::U64,
        WireType::I64,
        WireType::Bool,
        WireType::FixedBytes(32),
        WireType::PublicKey,
        ROYALTY,
        SIDE,
        WireType::Struct(ORDER),
        WireType::Vec(&WireType::Option(&WireType::U64)),
        WireType::Option(&WireType::Struct(ORDER)),
    ];

    fn value_of(ty: &'static WireType) -> BoxedStrategy<Value> {
        match *ty {
            WireType::U8 => any::<u8>().prop_map(Value::U8).boxed(),
            WireType::U16 => any::<u16>().prop_map(Value::U16).boxed(),
            WireType::U32 => any::<u32>().prop_map(Value::U32).boxed(),
            WireType::U64 => any::<u64>().prop_map(Value::U64).boxed(),
            WireType::I64 => any::<i64>().prop_map(Value::I64).boxed(),
            WireType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
            WireType::FixedBytes(n) => proptest::collection::vec(any::<u8>(), n)
                .prop_map(Value::Bytes)
                .boxed(),
            WireType::PublicKey => any::<[u8; 32]>()
                .prop_map(|b| Value::PublicKey(Pubkey::new_from_array(b)))
                .boxed(),
            WireType::Option(inner) => proptest::option::of(value_of(inner))
                .prop_map(|v| Value::Option(v.map(Box::new)))
                .boxed(),
            WireType::Enum(variants) => (0..variants.len() as u8).prop_map(Value::Enum).boxed(),
            WireType::Struct(fields) => fields
                .iter()
                .map(|f| value_of(&f.ty))
                .collect::<Vec<_>>()
                .prop_map(Value::Struct)
                .boxed(),
            WireType::Vec(inner) => proptest::collection::vec(value_of(inner), 0..5)
                .prop_map(Value::Vec)
                .boxed(),
        }
    }

    fn typed_value() -> impl Strategy<Value = (&'static WireType, Value)> {
        proptest::sample::select(SCHEMAS.iter().collect::<Vec<_>>())
            .prop_flat_map(|ty| value_of(ty).prop_map(move |v| (ty, v)))
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode((ty, v) in typed_value()) {
            let bytes = encode(ty, &v);
            let mut r = InstructionReader::new(&bytes);
            prop_assert_eq!(decode_value(ty, &mut r).unwrap(), v);
            prop_assert_eq!(r.offset(), bytes.len());
            if let Some(size) = ty.fixed_size() {
                prop_assert_eq!(bytes.len(), size);
            }
        }

        #[test]
        fn prop_truncated_value_never_decodes((ty, v) in typed_value(), cut in 1usize..8) {
            let bytes = encode(ty, &v);
            let cut = cut.min(bytes.len());
            prop_assert!(decode(ty, &bytes[..bytes.len() - cut]).is_err());
        }
    }
}
