use super::SYSTEM_PROGRAM;
use crate::definition::{
    AccountDefault, AccountRole, AccountSlot, InstructionDefinition, ResolverRef, Step,
};
use crate::resolver::POOL_RENT_PAYER;

/// Closes an empty pool and refunds rent to whoever paid it, read from the
/// pool account itself.
pub static CLOSE_POOL: InstructionDefinition = InstructionDefinition {
    name: "close_pool",
    discriminator: &[140, 189, 209, 23, 239, 62, 239, 11],
    accounts: &[
        AccountSlot::new("rent_payer", AccountRole::Writable).default_to(AccountDefault::Resolver(
            ResolverRef::asynchronous(POOL_RENT_PAYER),
        )),
        AccountSlot::new("owner", AccountRole::ReadonlySigner),
        AccountSlot::new("pool", AccountRole::Writable),
        SYSTEM_PROGRAM,
    ],
    args: &[],
    pipeline: &[Step::Account("rent_payer"), Step::Account("system_program")],
    remaining: None,
};
