//! Program facade: the instruction table bound to a deployment address

use crate::builder::{build_instruction, build_instruction_async, InstructionInput};
use crate::definition::InstructionDefinition;
use crate::error::{ClientError, Result};
use crate::ids::AMM_PROGRAM_ID;
use crate::instructions;
use crate::parser::{parse_instruction, ParsedInstruction};
use crate::resolver::ResolverRegistry;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmProgram {
    program_id: Pubkey,
}

impl Default for AmmProgram {
    fn default() -> Self {
        Self::new(AMM_PROGRAM_ID)
    }
}

impl AmmProgram {
    /// Target a non-canonical deployment, e.g. a localnet or devnet build
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn instructions(&self) -> &'static [&'static InstructionDefinition] {
        instructions::ALL
    }

    pub fn definition(&self, name: &str) -> Result<&'static InstructionDefinition> {
        instructions::find(name).ok_or_else(|| ClientError::UnknownInstruction(name.to_string()))
    }

    /// Definition whose discriminator prefixes `data`
    pub fn identify(&self, data: &[u8]) -> Option<&'static InstructionDefinition> {
        instructions::find_by_discriminator(data)
    }

    pub fn build(
        &self,
        name: &str,
        input: InstructionInput,
        registry: &ResolverRegistry,
    ) -> Result<Instruction> {
        build_instruction(self.program_id, self.definition(name)?, input, registry)
    }

    pub async fn build_async(
        &self,
        name: &str,
        input: InstructionInput,
        registry: &ResolverRegistry,
    ) -> Result<Instruction> {
        build_instruction_async(self.program_id, self.definition(name)?, input, registry).await
    }

    pub fn parse(&self, instruction: &Instruction) -> Result<ParsedInstruction> {
        if instruction.program_id != self.program_id {
            return Err(ClientError::ProgramMismatch {
                expected: self.program_id,
                actual: instruction.program_id,
            });
        }
        let definition = self.identify(&instruction.data).ok_or_else(|| {
            let prefix = &instruction.data[..instruction.data.len().min(8)];
            ClientError::MalformedInstruction(format!("unknown discriminator {:?}", prefix))
        })?;
        parse_instruction(definition, instruction)
    }
}
