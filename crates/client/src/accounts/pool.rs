//! Pool account decoder

use crate::error::{ClientError, Result};
use crate::types::{PoolConfig, POOL_CONFIG};
use amm_codec::{decode_value, encode_value, InstructionReader, InstructionWriter, Value};
use solana_sdk::pubkey::Pubkey;

/// `sha256("account:Pool")[..8]`
pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    pub taker_sell_count: u32,
    pub taker_buy_count: u32,
    pub accumulated_mm_profit: u64,
}

/// Pool state as stored on chain. Reserved trailing space is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAccount {
    pub version: u8,
    pub bump: u8,
    pub pool_id: [u8; 32],
    pub created_at: i64,
    pub updated_at: i64,
    pub expiry: i64,
    pub owner: Pubkey,
    pub whitelist: Pubkey,
    pub rent_payer: Pubkey,
    /// Default pubkey means SOL
    pub currency: Pubkey,
    pub amount: u64,
    pub price_offset: i32,
    pub nfts_held: u32,
    pub stats: PoolStats,
    pub shared_escrow: Pubkey,
    pub cosigner: Pubkey,
    pub maker_broker: Pubkey,
    pub max_taker_sell_count: u32,
    pub config: PoolConfig,
}

impl PoolAccount {
    pub fn decode(data: &[u8]) -> Result<Self> {
        if !data.starts_with(&POOL_DISCRIMINATOR) {
            return Err(ClientError::InvalidAccount(
                "account is not a pool".to_string(),
            ));
        }
        let mut r = InstructionReader::new(&data[POOL_DISCRIMINATOR.len()..]);

        let version = r.read_u8()?;
        let bump = r.read_u8()?;
        let pool_id = r.read_bytes::<32>()?;
        let created_at = r.read_i64()?;
        let updated_at = r.read_i64()?;
        let expiry = r.read_i64()?;
        let owner = r.read_pubkey()?;
        let whitelist = r.read_pubkey()?;
        let rent_payer = r.read_pubkey()?;
        let currency = r.read_pubkey()?;
        let amount = r.read_u64()?;
        let price_offset = r.read_i32()?;
        let nfts_held = r.read_u32()?;
        let stats = PoolStats {
            taker_sell_count: r.read_u32()?,
            taker_buy_count: r.read_u32()?,
            accumulated_mm_profit: r.read_u64()?,
        };
        let shared_escrow = r.read_pubkey()?;
        let cosigner = r.read_pubkey()?;
        let maker_broker = r.read_pubkey()?;
        let max_taker_sell_count = r.read_u32()?;
        let config = PoolConfig::from_value(&decode_value(&POOL_CONFIG, &mut r)?)
            .ok_or_else(|| ClientError::InvalidAccount("bad pool config".to_string()))?;

        Ok(Self {
            version,
            bump,
            pool_id,
            created_at,
            updated_at,
            expiry,
            owner,
            whitelist,
            rent_payer,
            currency,
            amount,
            price_offset,
            nfts_held,
            stats,
            shared_escrow,
            cosigner,
            maker_broker,
            max_taker_sell_count,
            config,
        })
    }

    /// Serialize in account layout, discriminator included
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut w = InstructionWriter::with_capacity(256);
        w.write_bytes(&POOL_DISCRIMINATOR);
        w.write_u8(self.version);
        w.write_u8(self.bump);
        w.write_bytes(&self.pool_id);
        w.write_i64(self.created_at);
        w.write_i64(self.updated_at);
        w.write_i64(self.expiry);
        w.write_pubkey(&self.owner);
        w.write_pubkey(&self.whitelist);
        w.write_pubkey(&self.rent_payer);
        w.write_pubkey(&self.currency);
        w.write_u64(self.amount);
        w.write_bytes(&self.price_offset.to_le_bytes());
        w.write_u32(self.nfts_held);
        w.write_u32(self.stats.taker_sell_count);
        w.write_u32(self.stats.taker_buy_count);
        w.write_u64(self.stats.accumulated_mm_profit);
        w.write_pubkey(&self.shared_escrow);
        w.write_pubkey(&self.cosigner);
        w.write_pubkey(&self.maker_broker);
        w.write_u32(self.max_taker_sell_count);
        encode_value("config", &POOL_CONFIG, &Value::from(self.config), &mut w)?;
        Ok(w.into_inner())
    }

    pub fn has_shared_escrow(&self) -> bool {
        self.shared_escrow != Pubkey::default()
    }

    pub fn has_cosigner(&self) -> bool {
        self.cosigner != Pubkey::default()
    }
}
