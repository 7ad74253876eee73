//! Shared argument types

use amm_codec::{Field, Value, WireType};

pub const POOL_TYPE: WireType = WireType::Enum(&["Token", "Nft", "Trade"]);

pub const CURVE_TYPE: WireType = WireType::Enum(&["Linear", "Exponential"]);

pub const POOL_CONFIG_FIELDS: &[Field] = &[
    Field::new("pool_type", POOL_TYPE),
    Field::new("curve_type", CURVE_TYPE),
    Field::new("starting_price", WireType::U64),
    Field::new("delta", WireType::U64),
    Field::new("mm_compound_fees", WireType::Bool),
    Field::new("mm_fee_bps", WireType::Option(&WireType::U16)),
];

pub const POOL_CONFIG: WireType = WireType::Struct(POOL_CONFIG_FIELDS);

/// Pool side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PoolType {
    /// Buys NFTs with SOL
    Token = 0,
    /// Sells NFTs for SOL
    Nft = 1,
    /// Both, earning a market-making fee
    Trade = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CurveType {
    Linear = 0,
    Exponential = 1,
}

impl From<PoolType> for Value {
    fn from(v: PoolType) -> Self {
        Value::Enum(v as u8)
    }
}

impl From<CurveType> for Value {
    fn from(v: CurveType) -> Self {
        Value::Enum(v as u8)
    }
}

/// Pricing configuration of a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub pool_type: PoolType,
    pub curve_type: CurveType,
    pub starting_price: u64,
    /// Linear: lamports per step. Exponential: basis points per step.
    pub delta: u64,
    pub mm_compound_fees: bool,
    pub mm_fee_bps: Option<u16>,
}

impl PoolConfig {
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Struct(fields) = value else {
            return None;
        };
        let [pool_type, curve_type, starting_price, delta, mm_compound_fees, mm_fee_bps] =
            fields.as_slice()
        else {
            return None;
        };
        let pool_type = match pool_type {
            Value::Enum(0) => PoolType::Token,
            Value::Enum(1) => PoolType::Nft,
            Value::Enum(2) => PoolType::Trade,
            _ => return None,
        };
        let curve_type = match curve_type {
            Value::Enum(0) => CurveType::Linear,
            Value::Enum(1) => CurveType::Exponential,
            _ => return None,
        };
        let mm_fee_bps = match mm_fee_bps {
            Value::Option(None) => None,
            Value::Option(Some(inner)) => match inner.as_ref() {
                Value::U16(bps) => Some(*bps),
                _ => return None,
            },
            _ => return None,
        };
        let Value::Bool(mm_compound_fees) = mm_compound_fees else {
            return None;
        };
        Some(Self {
            pool_type,
            curve_type,
            starting_price: starting_price.as_u64()?,
            delta: delta.as_u64()?,
            mm_compound_fees: *mm_compound_fees,
            mm_fee_bps,
        })
    }
}

impl From<PoolConfig> for Value {
    fn from(c: PoolConfig) -> Self {
        Value::Struct(vec![
            c.pool_type.into(),
            c.curve_type.into(),
            Value::U64(c.starting_price),
            Value::U64(c.delta),
            Value::Bool(c.mm_compound_fees),
            c.mm_fee_bps.into(),
        ])
    }
}
