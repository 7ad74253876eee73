//! Instruction table of the AMM program
//!
//! One static definition per instruction. Slots shared by several
//! instructions (program accounts, token accounts, metadata PDAs) are defined
//! here once.

mod buy_nft;
mod close_expired_pool;
mod close_pool;
mod create_pool;
mod deposit_nft;
mod deposit_sol;
mod edit_pool;
mod sell_nft_token_pool;
mod sell_nft_trade_pool;
mod withdraw_nft;
mod withdraw_sol;

pub use buy_nft::BUY_NFT;
pub use close_expired_pool::CLOSE_EXPIRED_POOL;
pub use close_pool::CLOSE_POOL;
pub use create_pool::CREATE_POOL;
pub use deposit_nft::DEPOSIT_NFT;
pub use deposit_sol::DEPOSIT_SOL;
pub use edit_pool::EDIT_POOL;
pub use sell_nft_token_pool::SELL_NFT_TOKEN_POOL;
pub use sell_nft_trade_pool::SELL_NFT_TRADE_POOL;
pub use withdraw_nft::WITHDRAW_NFT;
pub use withdraw_sol::WITHDRAW_SOL;

use crate::definition::{
    AccountDefault, AccountRole, AccountSlot, InstructionDefinition, Pda, PdaProgram,
    RemainingAccounts, ResolverRef, Seed,
};
use crate::ids::{
    ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use crate::pda::{EDITION_SEED, METADATA_SEED, NFT_RECEIPT_SEED, POOL_SEED};
use crate::resolver::FEE_VAULT_FROM_POOL;
use solana_sdk::pubkey::Pubkey;

/// Every instruction of the program
pub static ALL: &[&InstructionDefinition] = &[
    &CREATE_POOL,
    &EDIT_POOL,
    &CLOSE_POOL,
    &CLOSE_EXPIRED_POOL,
    &DEPOSIT_SOL,
    &WITHDRAW_SOL,
    &DEPOSIT_NFT,
    &WITHDRAW_NFT,
    &BUY_NFT,
    &SELL_NFT_TOKEN_POOL,
    &SELL_NFT_TRADE_POOL,
];

pub fn find(name: &str) -> Option<&'static InstructionDefinition> {
    ALL.iter().copied().find(|def| def.name == name)
}

pub fn find_by_discriminator(data: &[u8]) -> Option<&'static InstructionDefinition> {
    ALL.iter().copied().find(|def| def.matches_discriminator(data))
}

const POOL_SEEDS: &[Seed] = &[
    Seed::Literal(POOL_SEED),
    Seed::Account("owner"),
    Seed::Arg("pool_id"),
];

const NFT_RECEIPT_SEEDS: &[Seed] = &[
    Seed::Literal(NFT_RECEIPT_SEED),
    Seed::Account("mint"),
    Seed::Account("pool"),
];

const METADATA_SEEDS: &[Seed] = &[
    Seed::Literal(METADATA_SEED),
    Seed::Address(TOKEN_METADATA_PROGRAM_ID),
    Seed::Account("mint"),
];

const EDITION_SEEDS: &[Seed] = &[
    Seed::Literal(METADATA_SEED),
    Seed::Address(TOKEN_METADATA_PROGRAM_ID),
    Seed::Account("mint"),
    Seed::Literal(EDITION_SEED),
];

const OWNER_TA_SEEDS: &[Seed] = &[
    Seed::Account("owner"),
    Seed::Account("token_program"),
    Seed::Account("mint"),
];

const TAKER_TA_SEEDS: &[Seed] = &[
    Seed::Account("taker"),
    Seed::Account("token_program"),
    Seed::Account("mint"),
];

const POOL_TA_SEEDS: &[Seed] = &[
    Seed::Account("pool"),
    Seed::Account("token_program"),
    Seed::Account("mint"),
];

const fn program_account(name: &'static str, id: Pubkey) -> AccountSlot {
    AccountSlot::new(name, AccountRole::Readonly).default_to(AccountDefault::Static(id))
}

const SYSTEM_PROGRAM: AccountSlot = program_account("system_program", SYSTEM_PROGRAM_ID);
const TOKEN_PROGRAM: AccountSlot = program_account("token_program", TOKEN_PROGRAM_ID);
const ASSOCIATED_TOKEN_PROGRAM: AccountSlot =
    program_account("associated_token_program", ASSOCIATED_TOKEN_PROGRAM_ID);

/// Only needed for programmable NFTs; callers supply these when they apply
const TOKEN_METADATA_PROGRAM: AccountSlot =
    AccountSlot::new("token_metadata_program", AccountRole::Readonly).optional();
const SYSVAR_INSTRUCTIONS: AccountSlot =
    AccountSlot::new("sysvar_instructions", AccountRole::Readonly).optional();

const fn pda(
    name: &'static str,
    role: AccountRole,
    program: PdaProgram,
    seeds: &'static [Seed],
) -> AccountSlot {
    AccountSlot::new(name, role).default_to(AccountDefault::Pda(Pda { program, seeds }))
}

const fn ata(name: &'static str, seeds: &'static [Seed]) -> AccountSlot {
    pda(
        name,
        AccountRole::Writable,
        PdaProgram::Address(ASSOCIATED_TOKEN_PROGRAM_ID),
        seeds,
    )
}

const POOL: AccountSlot = pda("pool", AccountRole::Writable, PdaProgram::This, POOL_SEEDS);
const NFT_RECEIPT: AccountSlot = pda(
    "nft_receipt",
    AccountRole::Writable,
    PdaProgram::This,
    NFT_RECEIPT_SEEDS,
);
const METADATA: AccountSlot = pda(
    "metadata",
    AccountRole::Writable,
    PdaProgram::Address(TOKEN_METADATA_PROGRAM_ID),
    METADATA_SEEDS,
);
const EDITION: AccountSlot = pda(
    "edition",
    AccountRole::Readonly,
    PdaProgram::Address(TOKEN_METADATA_PROGRAM_ID),
    EDITION_SEEDS,
);
const OWNER_TA: AccountSlot = ata("owner_ta", OWNER_TA_SEEDS);
const TAKER_TA: AccountSlot = ata("taker_ta", TAKER_TA_SEEDS);
const POOL_TA: AccountSlot = ata("pool_ta", POOL_TA_SEEDS);

const FEE_VAULT: AccountSlot = AccountSlot::new("fee_vault", AccountRole::Writable)
    .default_to(AccountDefault::Resolver(ResolverRef::sync(FEE_VAULT_FROM_POOL)));

const MINT: AccountSlot = AccountSlot::new("mint", AccountRole::Readonly);
const MINT_PROOF: AccountSlot = AccountSlot::new("mint_proof", AccountRole::Readonly).optional();

/// Royalty creators of the traded NFT
const CREATORS: Option<RemainingAccounts> = Some(RemainingAccounts {
    name: "creators",
    role: AccountRole::Writable,
});
