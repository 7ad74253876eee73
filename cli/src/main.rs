//! AMM instruction CLI
//!
//! Builds, parses and optionally submits instructions of the AMM program.

mod config;
mod io;
mod rpc;
mod tx_builder;

use amm_client::resolver::POOL_RENT_PAYER;
use amm_client::{AmmProgram, AmmProgramError, PoolRentPayer, ResolverRegistry};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use io::{parsed_to_json, BuildInput, InstructionJson};
use rpc::RpcAccountFetcher;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::signature::{Keypair, Signer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List instructions with their accounts and arguments
    List,
    /// Build an instruction from a JSON input file
    Build {
        name: String,
        #[arg(long)]
        input: PathBuf,
        /// Sign with the configured wallet and submit
        #[arg(long)]
        send: bool,
    },
    /// Parse a JSON wire instruction
    Parse {
        #[arg(long)]
        input: PathBuf,
    },
    /// Describe a program error code
    Error { code: u32 },
    /// Write the default config file
    InitConfig {
        #[arg(long)]
        path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => {
            let (_, program) = load_program()?;
            list(&program);
            Ok(())
        }
        Commands::Build { name, input, send } => {
            let (config, program) = load_program()?;
            build(&program, &config, &name, &input, send).await
        }
        Commands::Parse { input } => {
            let (_, program) = load_program()?;
            parse(&program, &input)
        }
        Commands::Error { code } => describe_error(code),
        Commands::InitConfig { path } => Config::write_default(&path.unwrap_or_else(Config::path)),
    }
}

fn load_program() -> Result<(Config, AmmProgram)> {
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({:#}), using default mainnet config", e);
        Config::default_mainnet()
    });
    let program = AmmProgram::new(config.program_id()?);
    log::debug!("Targeting program {} via {}", program.program_id(), config.rpc_url);
    Ok((config, program))
}

fn list(program: &AmmProgram) {
    for definition in program.instructions() {
        let mode = if definition.is_async() { " (async)" } else { "" };
        println!("{}{}", definition.name, mode);
        for (i, slot) in definition.accounts.iter().enumerate() {
            println!(
                "  [{:>2}] {}{} {:?}",
                i,
                slot.name,
                if slot.optional { "?" } else { "" },
                slot.role
            );
        }
        if let Some(remaining) = definition.remaining {
            println!("  [..] {} {:?}", remaining.name, remaining.role);
        }
        for arg in definition.args {
            println!("  arg {}: {}", arg.name, arg.ty);
        }
    }
}

async fn build(
    program: &AmmProgram,
    config: &Config,
    name: &str,
    input: &Path,
    send: bool,
) -> Result<()> {
    let definition = program.definition(name)?;
    let text = std::fs::read_to_string(input)
        .context(format!("Failed to read input from {}", input.display()))?;
    let input: BuildInput = serde_json::from_str(&text).context("Failed to parse build input")?;

    let client = Arc::new(RpcClient::new_with_commitment(
        config.rpc_url.clone(),
        config.commitment()?,
    ));
    let mut registry = ResolverRegistry::with_builtins();
    registry.register_async(
        POOL_RENT_PAYER,
        PoolRentPayer::new(RpcAccountFetcher::new(client.clone())),
    );

    let instruction = program
        .build_async(name, input.into_input(definition)?, &registry)
        .await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&InstructionJson::from(&instruction))?
    );

    if send {
        let payer = load_keypair(&config.keypair_path)?;
        log::info!("Submitting `{}` signed by {}", name, payer.pubkey());
        let signature = tx_builder::send_instruction(&client, instruction, &payer).await?;
        log::info!("Transaction confirmed: {}", signature);
    }
    Ok(())
}

fn parse(program: &AmmProgram, input: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .context(format!("Failed to read instruction from {}", input.display()))?;
    let json: InstructionJson =
        serde_json::from_str(&text).context("Failed to parse instruction JSON")?;
    let instruction = Instruction::try_from(json)?;

    let parsed = program.parse(&instruction)?;
    let definition = program.definition(parsed.name)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&parsed_to_json(definition, &parsed))?
    );
    Ok(())
}

fn describe_error(code: u32) -> Result<()> {
    let error = AmmProgramError::from_code(code)
        .ok_or_else(|| anyhow!("Unknown program error code {}", code))?;
    println!("{} {:?}: {}", error.code(), error, error);
    Ok(())
}

/// Load wallet keypair from file
fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = shellexpand::tilde(path);
    let bytes = std::fs::read(expanded_path.as_ref())
        .context(format!("Failed to read keypair from {}", path))?;

    let keypair = match bytes.first() {
        // JSON format
        Some(b'[') => {
            let json_data: Vec<u8> =
                serde_json::from_slice(&bytes).context("Failed to parse keypair JSON")?;
            Keypair::try_from(&json_data[..]).context("Failed to create keypair from bytes")?
        }
        // Binary format
        Some(_) => Keypair::try_from(&bytes[..]).context("Failed to create keypair from bytes")?,
        None => bail!("Keypair file {} is empty", path),
    };

    Ok(keypair)
}
