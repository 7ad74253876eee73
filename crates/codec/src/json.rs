//! Schema-guided JSON conversion
//!
//! Public keys are base58 strings, fixed byte arrays are arrays of numbers,
//! enums are variant names, `Option` is `null` or the inner value and structs
//! are objects keyed by field name.

use crate::error::CodecError;
use crate::schema::WireType;
use crate::value::Value;
use serde_json::{json, Map, Value as Json};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;

fn invalid(field: &str, reason: impl Into<String>) -> CodecError {
    CodecError::InvalidJson {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn uint(field: &str, json: &Json, max: u64) -> Result<u64, CodecError> {
    let v = json
        .as_u64()
        .ok_or_else(|| invalid(field, "expected an unsigned integer"))?;
    if v > max {
        return Err(invalid(field, format!("{} exceeds {}", v, max)));
    }
    Ok(v)
}

/// Convert a JSON value into a `Value` of type `ty`.
pub fn from_json(field: &str, ty: &WireType, json: &Json) -> Result<Value, CodecError> {
    Ok(match ty {
        WireType::U8 => Value::U8(uint(field, json, u8::MAX as u64)? as u8),
        WireType::U16 => Value::U16(uint(field, json, u16::MAX as u64)? as u16),
        WireType::U32 => Value::U32(uint(field, json, u32::MAX as u64)? as u32),
        WireType::U64 => Value::U64(uint(field, json, u64::MAX)?),
        WireType::I64 => Value::I64(
            json.as_i64()
                .ok_or_else(|| invalid(field, "expected a signed integer"))?,
        ),
        WireType::Bool => Value::Bool(
            json.as_bool()
                .ok_or_else(|| invalid(field, "expected a boolean"))?,
        ),
        WireType::FixedBytes(n) => {
            let items = json
                .as_array()
                .ok_or_else(|| invalid(field, "expected an array of bytes"))?;
            if items.len() != *n {
                return Err(CodecError::LengthMismatch {
                    field: field.to_string(),
                    expected: *n,
                    actual: items.len(),
                });
            }
            let bytes = items
                .iter()
                .map(|b| uint(field, b, u8::MAX as u64).map(|b| b as u8))
                .collect::<Result<Vec<u8>, _>>()?;
            Value::Bytes(bytes)
        }
        WireType::PublicKey => {
            let s = json
                .as_str()
                .ok_or_else(|| invalid(field, "expected a base58 string"))?;
            Value::PublicKey(Pubkey::from_str(s).map_err(|e| invalid(field, e.to_string()))?)
        }
        WireType::Option(inner) => match json {
            Json::Null => Value::Option(None),
            other => Value::Option(Some(Box::new(from_json(field, inner, other)?))),
        },
        WireType::Enum(variants) => {
            let idx = match json {
                Json::String(name) => variants
                    .iter()
                    .position(|v| *v == name.as_str())
                    .ok_or_else(|| invalid(field, format!("unknown variant `{}`", name)))?,
                other => uint(field, other, u8::MAX as u64)? as usize,
            };
            if idx >= variants.len() {
                return Err(CodecError::InvalidEnumVariant {
                    variant: idx as u8,
                    count: variants.len(),
                });
            }
            Value::Enum(idx as u8)
        }
        WireType::Struct(fields) => {
            let obj = json
                .as_object()
                .ok_or_else(|| invalid(field, "expected an object"))?;
            let mut values = Vec::with_capacity(fields.len());
            for f in fields.iter() {
                let path = format!("{}.{}", field, f.name);
                match obj.get(f.name) {
                    Some(v) => values.push(from_json(&path, &f.ty, v)?),
                    None if f.ty.is_option() => values.push(Value::Option(None)),
                    None => return Err(invalid(&path, "missing field")),
                }
            }
            Value::Struct(values)
        }
        WireType::Vec(inner) => {
            let items = json
                .as_array()
                .ok_or_else(|| invalid(field, "expected an array"))?;
            Value::Vec(
                items
                    .iter()
                    .map(|item| from_json(field, inner, item))
                    .collect::<Result<_, _>>()?,
            )
        }
    })
}

/// Render a `Value` of type `ty` as JSON. Values that do not match `ty`
/// render as `null`.
pub fn to_json(ty: &WireType, value: &Value) -> Json {
    match (ty, value) {
        (_, Value::U8(v)) => json!(v),
        (_, Value::U16(v)) => json!(v),
        (_, Value::U32(v)) => json!(v),
        (_, Value::U64(v)) => json!(v),
        (_, Value::I64(v)) => json!(v),
        (_, Value::Bool(v)) => json!(v),
        (_, Value::Bytes(b)) => json!(b),
        (_, Value::PublicKey(key)) => json!(key.to_string()),
        (WireType::Option(_), Value::Option(None)) => Json::Null,
        (WireType::Option(inner), Value::Option(Some(v))) => to_json(inner, v),
        (WireType::Enum(variants), Value::Enum(idx)) => variants
            .get(*idx as usize)
            .map(|name| json!(name))
            .unwrap_or(Json::Null),
        (WireType::Struct(fields), Value::Struct(values)) => {
            let mut obj = Map::new();
            for (f, v) in fields.iter().zip(values) {
                obj.insert(f.name.to_string(), to_json(&f.ty, v));
            }
            Json::Object(obj)
        }
        (WireType::Vec(inner), Value::Vec(items)) => {
            Json::Array(items.iter().map(|item| to_json(inner, item)).collect())
        }
        _ => Json::Null,
    }
}
