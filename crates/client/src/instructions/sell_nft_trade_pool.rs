use super::{
    ASSOCIATED_TOKEN_PROGRAM, CREATORS, EDITION, FEE_VAULT, METADATA, MINT, MINT_PROOF,
    NFT_RECEIPT, POOL_TA, SYSTEM_PROGRAM, SYSVAR_INSTRUCTIONS, TAKER_TA, TOKEN_METADATA_PROGRAM,
    TOKEN_PROGRAM,
};
use crate::definition::{AccountRole, AccountSlot, ArgField, InstructionDefinition, Step};
use amm_codec::WireType;

/// Sells an NFT into a trade pool, which keeps it and records a receipt.
pub static SELL_NFT_TRADE_POOL: InstructionDefinition = InstructionDefinition {
    name: "sell_nft_trade_pool",
    discriminator: &[131, 82, 125, 77, 13, 157, 36, 90],
    accounts: &[
        AccountSlot::new("owner", AccountRole::Readonly),
        AccountSlot::new("taker", AccountRole::WritableSigner),
        FEE_VAULT,
        AccountSlot::new("pool", AccountRole::Writable),
        AccountSlot::new("whitelist", AccountRole::Readonly),
        MINT_PROOF,
        TAKER_TA,
        POOL_TA,
        MINT,
        METADATA,
        EDITION,
        NFT_RECEIPT,
        AccountSlot::new("taker_token_record", AccountRole::Writable).optional(),
        AccountSlot::new("pool_token_record", AccountRole::Writable).optional(),
        TOKEN_METADATA_PROGRAM,
        SYSVAR_INSTRUCTIONS,
        TOKEN_PROGRAM,
        ASSOCIATED_TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
        AccountSlot::new("shared_escrow", AccountRole::Writable).optional(),
        AccountSlot::new("taker_broker", AccountRole::Writable).optional(),
        AccountSlot::new("maker_broker", AccountRole::Writable).optional(),
        AccountSlot::new("cosigner", AccountRole::ReadonlySigner).optional(),
    ],
    args: &[
        ArgField::new("min_price", WireType::U64),
        ArgField::optional("optional_royalty_pct", &WireType::U16),
    ],
    pipeline: &[
        Step::Arg("optional_royalty_pct"),
        Step::Account("fee_vault"),
        Step::Account("token_program"),
        Step::Account("associated_token_program"),
        Step::Account("system_program"),
        Step::Account("taker_ta"),
        Step::Account("pool_ta"),
        Step::Account("metadata"),
        Step::Account("edition"),
        Step::Account("nft_receipt"),
    ],
    remaining: CREATORS,
};
