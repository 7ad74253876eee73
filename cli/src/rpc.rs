//! RPC-backed account source for async resolvers

use amm_client::AccountFetcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

pub struct RpcAccountFetcher {
    client: Arc<RpcClient>,
}

impl RpcAccountFetcher {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountFetcher for RpcAccountFetcher {
    async fn fetch_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await
            .context(format!("Failed to fetch account {}", address))?;
        log::debug!(
            "fetched {} at slot {}: {}",
            address,
            response.context.slot,
            if response.value.is_some() { "found" } else { "missing" }
        );
        Ok(response.value.map(|account| account.data))
    }
}
