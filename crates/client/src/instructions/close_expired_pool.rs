use super::SYSTEM_PROGRAM;
use crate::definition::{
    AccountDefault, AccountRole, AccountSlot, InstructionDefinition, ResolverRef, Step,
};
use crate::resolver::POOL_RENT_PAYER;

/// Permissionless close of a pool past its expiry; the owner only receives
/// funds and does not sign.
pub static CLOSE_EXPIRED_POOL: InstructionDefinition = InstructionDefinition {
    name: "close_expired_pool",
    discriminator: &[108, 212, 233, 53, 132, 83, 63, 219],
    accounts: &[
        AccountSlot::new("rent_payer", AccountRole::Writable).default_to(AccountDefault::Resolver(
            ResolverRef::asynchronous(POOL_RENT_PAYER),
        )),
        AccountSlot::new("owner", AccountRole::Writable),
        AccountSlot::new("pool", AccountRole::Writable),
        SYSTEM_PROGRAM,
    ],
    args: &[],
    pipeline: &[Step::Account("rent_payer"), Step::Account("system_program")],
    remaining: None,
};
