//! Instruction parser
//!
//! Inverse of the builder: reads account metas positionally against the
//! definition's slots and decodes the payload. An optional slot holding the
//! program's own address is read back as absent.

use crate::data::{decode_instruction_data, InstructionData};
use crate::definition::InstructionDefinition;
use crate::error::{ClientError, Result};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub program_id: Pubkey,
    pub name: &'static str,
    /// Present accounts by slot name; omitted optional slots are not listed
    pub accounts: BTreeMap<&'static str, Pubkey>,
    /// Metas past the last declared slot, in order
    pub remaining_accounts: Vec<AccountMeta>,
    pub data: InstructionData,
}

impl ParsedInstruction {
    pub fn account(&self, name: &str) -> Option<Pubkey> {
        self.accounts.get(name).copied()
    }
}

pub fn parse_instruction(
    definition: &InstructionDefinition,
    instruction: &Instruction,
) -> Result<ParsedInstruction> {
    let metas = &instruction.accounts;
    if metas.len() < definition.min_accounts() {
        return Err(ClientError::NotEnoughAccounts {
            instruction: definition.name,
            expected: definition.min_accounts(),
            actual: metas.len(),
        });
    }

    let mut accounts = BTreeMap::new();
    for (slot, meta) in definition.accounts.iter().zip(metas) {
        if slot.optional && meta.pubkey == instruction.program_id {
            continue;
        }
        accounts.insert(slot.name, meta.pubkey);
    }
    let remaining_accounts = metas[definition.accounts.len()..].to_vec();

    let data = decode_instruction_data(definition, &instruction.data)?;
    log::trace!(
        "parsed `{}`: {} accounts, {} remaining",
        definition.name,
        accounts.len(),
        remaining_accounts.len()
    );

    Ok(ParsedInstruction {
        program_id: instruction.program_id,
        name: definition.name,
        accounts,
        remaining_accounts,
        data,
    })
}
