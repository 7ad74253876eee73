//! Instruction payload encoding
//!
//! Wire layout: `[discriminator][arg_1]..[arg_k]`, arguments in declared order
//! with no padding. Decoding checks the discriminator before reading any
//! argument and rejects trailing bytes.

use crate::definition::InstructionDefinition;
use crate::error::{ClientError, Result};
use amm_codec::{decode_value, encode_value, InstructionReader, InstructionWriter, Value};

/// Fully resolved arguments of one instruction, in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionData {
    pub name: &'static str,
    pub values: Vec<(&'static str, Value)>,
}

impl InstructionData {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn encode_instruction_data(
    definition: &InstructionDefinition,
    data: &InstructionData,
) -> Result<Vec<u8>> {
    let mut w = InstructionWriter::with_capacity(definition.discriminator.len() + 64);
    w.write_bytes(definition.discriminator);

    let mut values = data.values.iter();
    for field in definition.args {
        match values.next() {
            Some((name, value)) if *name == field.name => {
                encode_value(field.name, &field.ty, value, &mut w)?
            }
            Some((name, _)) => {
                return Err(ClientError::UnknownArgument {
                    instruction: definition.name,
                    arg: name.to_string(),
                })
            }
            None => return Err(ClientError::MissingRequiredField(field.name.to_string())),
        }
    }
    if let Some((name, _)) = values.next() {
        return Err(ClientError::UnknownArgument {
            instruction: definition.name,
            arg: name.to_string(),
        });
    }
    Ok(w.into_inner())
}

pub fn decode_instruction_data(
    definition: &InstructionDefinition,
    bytes: &[u8],
) -> Result<InstructionData> {
    if !definition.matches_discriminator(bytes) {
        let found = &bytes[..bytes.len().min(definition.discriminator.len())];
        return Err(ClientError::MalformedInstruction(format!(
            "discriminator {:?} does not match `{}` ({:?})",
            found, definition.name, definition.discriminator
        )));
    }

    let mut r = InstructionReader::new(&bytes[definition.discriminator.len()..]);
    let mut values = Vec::with_capacity(definition.args.len());
    for field in definition.args {
        values.push((field.name, decode_value(&field.ty, &mut r)?));
    }
    r.finish()?;

    Ok(InstructionData {
        name: definition.name,
        values,
    })
}
