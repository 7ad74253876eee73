use super::SYSTEM_PROGRAM;
use crate::definition::{AccountRole, AccountSlot, ArgField, InstructionDefinition, Step};
use amm_codec::WireType;

pub static DEPOSIT_SOL: InstructionDefinition = InstructionDefinition {
    name: "deposit_sol",
    discriminator: &[108, 81, 78, 117, 125, 155, 56, 200],
    accounts: &[
        AccountSlot::new("owner", AccountRole::WritableSigner),
        AccountSlot::new("pool", AccountRole::Writable),
        SYSTEM_PROGRAM,
    ],
    args: &[ArgField::new("lamports", WireType::U64)],
    pipeline: &[Step::Account("system_program")],
    remaining: None,
};
