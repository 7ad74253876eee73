use super::{POOL, SYSTEM_PROGRAM};
use crate::definition::{
    AccountDefault, AccountRole, AccountSlot, ArgDefault, ArgField, InstructionDefinition,
    ResolverRef, Step,
};
use crate::resolver::RANDOM_POOL_ID;
use crate::types::POOL_CONFIG;
use amm_codec::WireType;

/// Opens a pool for `owner`. The pool address is derived from the owner and
/// a 32 byte id, which is random unless supplied.
pub static CREATE_POOL: InstructionDefinition = InstructionDefinition {
    name: "create_pool",
    discriminator: &[233, 146, 209, 142, 207, 104, 64, 188],
    accounts: &[
        AccountSlot::new("rent_payer", AccountRole::WritableSigner)
            .default_to(AccountDefault::Account("owner")),
        AccountSlot::new("owner", AccountRole::ReadonlySigner),
        POOL,
        AccountSlot::new("whitelist", AccountRole::Readonly),
        AccountSlot::new("shared_escrow", AccountRole::Readonly).optional(),
        SYSTEM_PROGRAM,
    ],
    args: &[
        ArgField::new("pool_id", WireType::FixedBytes(32))
            .default_to(ArgDefault::Resolver(ResolverRef::sync(RANDOM_POOL_ID))),
        ArgField::new("config", POOL_CONFIG),
        ArgField::optional("currency", &WireType::PublicKey),
        ArgField::optional("cosigner", &WireType::PublicKey),
        ArgField::optional("maker_broker", &WireType::PublicKey),
        ArgField::optional("max_taker_sell_count", &WireType::U32),
        ArgField::optional("expire_in_sec", &WireType::U64),
    ],
    pipeline: &[
        Step::Arg("pool_id"),
        Step::Arg("currency"),
        Step::Arg("cosigner"),
        Step::Arg("maker_broker"),
        Step::Arg("max_taker_sell_count"),
        Step::Arg("expire_in_sec"),
        Step::Account("rent_payer"),
        Step::Account("pool"),
        Step::Account("system_program"),
    ],
    remaining: None,
};
