use super::{
    ASSOCIATED_TOKEN_PROGRAM, CREATORS, EDITION, FEE_VAULT, METADATA, MINT, MINT_PROOF,
    NFT_RECEIPT, POOL_TA, SYSTEM_PROGRAM, SYSVAR_INSTRUCTIONS, TAKER_TA, TOKEN_METADATA_PROGRAM,
    TOKEN_PROGRAM,
};
use crate::definition::{
    AccountDefault, AccountRole, AccountSlot, ArgField, InstructionDefinition, Step,
};
use amm_codec::WireType;

/// Buys an NFT out of a pool for at most `max_amount` lamports. Royalty
/// creators follow the fixed slots as remaining accounts.
pub static BUY_NFT: InstructionDefinition = InstructionDefinition {
    name: "buy_nft",
    discriminator: &[96, 0, 28, 190, 49, 107, 83, 222],
    accounts: &[
        AccountSlot::new("owner", AccountRole::Writable),
        AccountSlot::new("taker", AccountRole::WritableSigner),
        AccountSlot::new("rent_payer", AccountRole::Writable)
            .default_to(AccountDefault::Account("taker")),
        FEE_VAULT,
        AccountSlot::new("pool", AccountRole::Writable),
        AccountSlot::new("whitelist", AccountRole::Readonly).optional(),
        MINT_PROOF,
        TAKER_TA,
        POOL_TA,
        MINT,
        METADATA,
        EDITION,
        AccountSlot::new("taker_token_record", AccountRole::Writable).optional(),
        AccountSlot::new("pool_token_record", AccountRole::Writable).optional(),
        TOKEN_METADATA_PROGRAM,
        SYSVAR_INSTRUCTIONS,
        NFT_RECEIPT,
        TOKEN_PROGRAM,
        ASSOCIATED_TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
        AccountSlot::new("shared_escrow", AccountRole::Writable).optional(),
        AccountSlot::new("taker_broker", AccountRole::Writable).optional(),
        AccountSlot::new("cosigner", AccountRole::ReadonlySigner).optional(),
        AccountSlot::new("maker_broker", AccountRole::Writable).optional(),
    ],
    args: &[
        ArgField::new("max_amount", WireType::U64),
        ArgField::optional("optional_royalty_pct", &WireType::U16),
    ],
    pipeline: &[
        Step::Arg("optional_royalty_pct"),
        Step::Account("rent_payer"),
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
