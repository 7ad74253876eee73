//! AMM client integration tests
//!
//! Fixtures shared by the scenario and property tests. Everything runs
//! against in-memory account state; no validator is needed.

use amm_client::accounts::{PoolAccount, PoolStats};
use amm_client::types::{CurveType, PoolConfig, PoolType};
use amm_client::{AccountFetcher, InstructionInput};
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

/// Account source backed by a map
#[derive(Debug, Default, Clone)]
pub struct MemoryFetcher {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn with_account(mut self, address: Pubkey, data: Vec<u8>) -> Self {
        self.accounts.insert(address, data);
        self
    }
}

#[async_trait]
impl AccountFetcher for MemoryFetcher {
    async fn fetch_account_data(&self, address: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.accounts.get(address).cloned())
    }
}

pub fn token_pool_config() -> PoolConfig {
    PoolConfig {
        pool_type: PoolType::Token,
        curve_type: CurveType::Exponential,
        starting_price: 1_500_000_000,
        delta: 250,
        mm_compound_fees: false,
        mm_fee_bps: None,
    }
}

pub fn pool_account(owner: Pubkey, rent_payer: Pubkey) -> PoolAccount {
    PoolAccount {
        version: 1,
        bump: 255,
        pool_id: [7; 32],
        created_at: 1_720_000_000,
        updated_at: 1_720_000_000,
        expiry: 1_730_000_000,
        owner,
        whitelist: Pubkey::new_unique(),
        rent_payer,
        currency: Pubkey::default(),
        amount: 0,
        price_offset: 0,
        nfts_held: 0,
        stats: PoolStats::default(),
        shared_escrow: Pubkey::default(),
        cosigner: Pubkey::default(),
        maker_broker: Pubkey::default(),
        max_taker_sell_count: 0,
        config: token_pool_config(),
    }
}

/// Every account of a `buy_nft` call, all supplied explicitly
pub struct BuyNftAccounts {
    pub named: Vec<(&'static str, Pubkey)>,
    pub taker: Pubkey,
}

impl BuyNftAccounts {
    /// Supplies all 24 slots except `maker_broker`
    pub fn without_maker_broker() -> Self {
        let names = [
            "owner",
            "taker",
            "rent_payer",
            "fee_vault",
            "pool",
            "whitelist",
            "mint_proof",
            "taker_ta",
            "pool_ta",
            "mint",
            "metadata",
            "edition",
            "taker_token_record",
            "pool_token_record",
            "token_metadata_program",
            "sysvar_instructions",
            "nft_receipt",
            "token_program",
            "associated_token_program",
            "system_program",
            "shared_escrow",
            "taker_broker",
            "cosigner",
        ];
        let named: Vec<_> = names.iter().map(|name| (*name, Pubkey::new_unique())).collect();
        let taker = named[1].1;
        Self { named, taker }
    }

    pub fn input(&self) -> InstructionInput {
        self.named.iter().fold(InstructionInput::new(), |input, (name, address)| {
            if *name == "taker" || *name == "cosigner" {
                input.signer(*name, *address)
            } else {
                input.account(*name, *address)
            }
        })
    }
}
