use super::SYSTEM_PROGRAM;
use crate::definition::{AccountRole, AccountSlot, ArgField, InstructionDefinition, Step};
use amm_codec::WireType;

pub static WITHDRAW_SOL: InstructionDefinition = InstructionDefinition {
    name: "withdraw_sol",
    discriminator: &[145, 131, 74, 136, 65, 137, 42, 38],
    accounts: &[
        AccountSlot::new("owner", AccountRole::WritableSigner),
        AccountSlot::new("pool", AccountRole::Writable),
        SYSTEM_PROGRAM,
    ],
    args: &[ArgField::new("lamports", WireType::U64)],
    pipeline: &[Step::Account("system_program")],
    remaining: None,
};
