//! Named resolvers for defaults that need code
//!
//! A resolver receives a snapshot of everything resolved so far and returns a
//! value for its target, or `None` to leave the target unresolved. Sync
//! resolvers run inline; async resolvers may perform I/O and are only usable
//! from `build_instruction_async`.

use crate::accounts::PoolAccount;
use crate::pda::find_fee_vault_pda;
use amm_codec::Value;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::sync::Arc;

pub const RANDOM_POOL_ID: &str = "random_pool_id";
pub const FEE_VAULT_FROM_POOL: &str = "fee_vault_from_pool";
pub const POOL_RENT_PAYER: &str = "pool_rent_payer";

/// Read-only view of a build in progress
#[derive(Debug, Clone)]
pub struct ResolverContext {
    pub program_id: Pubkey,
    pub instruction: &'static str,
    /// Account or argument being resolved
    pub target: &'static str,
    pub accounts: HashMap<&'static str, Pubkey>,
    pub args: HashMap<&'static str, Value>,
}

impl ResolverContext {
    pub fn account(&self, name: &str) -> Option<Pubkey> {
        self.accounts.get(name).copied()
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Like `account`, but failing with a message naming the dependency
    pub fn require_account(&self, name: &str) -> anyhow::Result<Pubkey> {
        self.account(name).ok_or_else(|| {
            anyhow!(
                "`{}` of `{}` depends on account `{}` which is not resolved",
                self.target,
                self.instruction,
                name
            )
        })
    }
}

pub type SyncResolverFn =
    Arc<dyn Fn(&ResolverContext) -> anyhow::Result<Option<Value>> + Send + Sync>;

#[async_trait]
pub trait AsyncResolver: Send + Sync {
    async fn resolve(&self, ctx: &ResolverContext) -> anyhow::Result<Option<Value>>;
}

#[derive(Clone)]
pub enum Resolver {
    Sync(SyncResolverFn),
    Async(Arc<dyn AsyncResolver>),
}

/// Name -> resolver table consulted by the builder
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<&'static str, Resolver>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the sync resolvers every instruction table relies on
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_sync(RANDOM_POOL_ID, random_pool_id);
        registry.register_sync(FEE_VAULT_FROM_POOL, fee_vault_from_pool);
        registry
    }

    pub fn register_sync<F>(&mut self, name: &'static str, f: F) -> &mut Self
    where
        F: Fn(&ResolverContext) -> anyhow::Result<Option<Value>> + Send + Sync + 'static,
    {
        self.resolvers.insert(name, Resolver::Sync(Arc::new(f)));
        self
    }

    pub fn register_async<R>(&mut self, name: &'static str, resolver: R) -> &mut Self
    where
        R: AsyncResolver + 'static,
    {
        self.resolvers.insert(name, Resolver::Async(Arc::new(resolver)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Resolver> {
        self.resolvers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.resolvers.keys().collect();
        names.sort();
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &names)
            .finish()
    }
}

/// Fresh random 32 byte pool id
pub fn random_pool_id(_ctx: &ResolverContext) -> anyhow::Result<Option<Value>> {
    Ok(Some(Value::Bytes(rand::random::<[u8; 32]>().to_vec())))
}

/// Fee vault shard for the pool being traded against
pub fn fee_vault_from_pool(ctx: &ResolverContext) -> anyhow::Result<Option<Value>> {
    let pool = ctx.require_account("pool")?;
    Ok(Some(Value::PublicKey(find_fee_vault_pda(&pool).0)))
}

/// Source of raw account data, typically an RPC client
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    async fn fetch_account_data(&self, address: &Pubkey) -> anyhow::Result<Option<Vec<u8>>>;
}

/// Reads the rent payer recorded on the pool account
pub struct PoolRentPayer<F> {
    fetcher: F,
}

impl<F: AccountFetcher> PoolRentPayer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: AccountFetcher> AsyncResolver for PoolRentPayer<F> {
    async fn resolve(&self, ctx: &ResolverContext) -> anyhow::Result<Option<Value>> {
        let pool = ctx.require_account("pool")?;
        let data = self
            .fetcher
            .fetch_account_data(&pool)
            .await
            .with_context(|| format!("Failed to fetch pool account {}", pool))?
            .ok_or_else(|| anyhow!("pool account {} does not exist", pool))?;
        let account = PoolAccount::decode(&data)?;
        log::debug!("pool {} rent payer is {}", pool, account.rent_payer);
        Ok(Some(Value::PublicKey(account.rent_payer)))
    }
}
