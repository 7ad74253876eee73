//! JSON forms of instruction input and output

use amm_client::{InstructionDefinition, InstructionInput, ParsedInstruction};
use amm_codec::json::{from_json, to_json};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as Json};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Build input: any account or argument left out is resolved by the builder
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildInput {
    #[serde(default)]
    pub accounts: BTreeMap<String, String>,
    /// Account names whose keys are held by the caller
    #[serde(default)]
    pub signers: Vec<String>,
    #[serde(default)]
    pub args: Map<String, Json>,
    #[serde(default)]
    pub remaining_accounts: Vec<String>,
}

fn parse_pubkey(what: &str, s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).map_err(|e| anyhow!("Invalid address for `{}`: {}", what, e))
}

impl BuildInput {
    pub fn into_input(self, definition: &InstructionDefinition) -> Result<InstructionInput> {
        let mut input = InstructionInput::new();
        for (name, address) in &self.accounts {
            let address = parse_pubkey(name, address)?;
            input = if self.signers.contains(name) {
                input.signer(name.as_str(), address)
            } else {
                input.account(name.as_str(), address)
            };
        }
        for (name, json) in &self.args {
            let field = definition
                .arg(name)
                .ok_or_else(|| anyhow!("`{}` has no argument `{}`", definition.name, name))?;
            input = input.arg(name.as_str(), from_json(name, &field.ty, json)?);
        }
        let remaining = self
            .remaining_accounts
            .iter()
            .map(|s| parse_pubkey("remaining_accounts", s))
            .collect::<Result<Vec<_>>>()?;
        Ok(input.remaining_accounts(remaining))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetaJson {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Wire instruction with base58 payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionJson {
    pub program_id: String,
    pub accounts: Vec<AccountMetaJson>,
    pub data: String,
}

impl From<&Instruction> for InstructionJson {
    fn from(ix: &Instruction) -> Self {
        Self {
            program_id: ix.program_id.to_string(),
            accounts: ix
                .accounts
                .iter()
                .map(|meta| AccountMetaJson {
                    pubkey: meta.pubkey.to_string(),
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: bs58::encode(&ix.data).into_string(),
        }
    }
}

impl TryFrom<InstructionJson> for Instruction {
    type Error = anyhow::Error;

    fn try_from(ix: InstructionJson) -> Result<Self> {
        let accounts = ix
            .accounts
            .iter()
            .map(|meta| {
                Ok(AccountMeta {
                    pubkey: parse_pubkey("accounts", &meta.pubkey)?,
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Instruction {
            program_id: parse_pubkey("program_id", &ix.program_id)?,
            accounts,
            data: bs58::decode(&ix.data)
                .into_vec()
                .context("Instruction data is not valid base58")?,
        })
    }
}

pub fn parsed_to_json(definition: &InstructionDefinition, parsed: &ParsedInstruction) -> Json {
    let accounts: Map<String, Json> = definition
        .accounts
        .iter()
        .map(|slot| {
            let value = parsed
                .account(slot.name)
                .map_or(Json::Null, |key| Json::String(key.to_string()));
            (slot.name.to_string(), value)
        })
        .collect();
    let args: Map<String, Json> = definition
        .args
        .iter()
        .filter_map(|field| {
            let value = parsed.data.get(field.name)?;
            Some((field.name.to_string(), to_json(&field.ty, value)))
        })
        .collect();
    let remaining: Vec<String> = parsed
        .remaining_accounts
        .iter()
        .map(|meta| meta.pubkey.to_string())
        .collect();

    json!({
        "name": parsed.name,
        "program_id": parsed.program_id.to_string(),
        "accounts": accounts,
        "args": args,
        "remaining_accounts": remaining,
    })
}
