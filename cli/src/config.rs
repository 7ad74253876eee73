//! CLI configuration

use amm_client::ids::AMM_PROGRAM_ID;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub const CONFIG_ENV: &str = "AMM_CLI_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "amm-cli.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// RPC URL for Solana cluster
    pub rpc_url: String,

    /// AMM program deployment to target
    pub program_id: String,

    /// Wallet keypair path, used to sign with `--send`
    pub keypair_path: String,

    /// processed, confirmed or finalized
    pub commitment: String,
}

impl Config {
    /// Path from `AMM_CLI_CONFIG`, falling back to `amm-cli.toml`
    pub fn path() -> String {
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;
        Self::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config TOML")?;
        config.program_id()?;
        config.commitment()?;
        Ok(config)
    }

    pub fn default_mainnet() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            program_id: AMM_PROGRAM_ID.to_string(),
            keypair_path: "~/.config/solana/id.json".to_string(),
            commitment: "confirmed".to_string(),
        }
    }

    pub fn program_id(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.program_id)
            .map_err(|e| anyhow!("Invalid program_id `{}`: {}", self.program_id, e))
    }

    pub fn commitment(&self) -> Result<CommitmentConfig> {
        CommitmentConfig::from_str(&self.commitment)
            .map_err(|_| anyhow!("Invalid commitment `{}`", self.commitment))
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_mainnet();
        let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str).context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
