use super::SYSTEM_PROGRAM;
use crate::definition::{
    AccountRole, AccountSlot, ArgDefault, ArgField, Const, InstructionDefinition, Step,
};
use crate::types::POOL_CONFIG;
use amm_codec::WireType;

pub static EDIT_POOL: InstructionDefinition = InstructionDefinition {
    name: "edit_pool",
    discriminator: &[50, 174, 34, 36, 3, 166, 29, 204],
    accounts: &[
        AccountSlot::new("owner", AccountRole::ReadonlySigner),
        AccountSlot::new("pool", AccountRole::Writable),
        SYSTEM_PROGRAM,
    ],
    args: &[
        ArgField::optional("new_config", &POOL_CONFIG),
        ArgField::optional("cosigner", &WireType::PublicKey),
        ArgField::optional("max_taker_sell_count", &WireType::U32),
        ArgField::optional("expire_in_sec", &WireType::U64),
        ArgField::new("reset_price_offset", WireType::Bool)
            .default_to(ArgDefault::Const(Const::Bool(false))),
    ],
    pipeline: &[
        Step::Arg("new_config"),
        Step::Arg("cosigner"),
        Step::Arg("max_taker_sell_count"),
        Step::Arg("expire_in_sec"),
        Step::Arg("reset_price_offset"),
        Step::Account("system_program"),
    ],
    remaining: None,
};
