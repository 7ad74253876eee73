use super::{
    ASSOCIATED_TOKEN_PROGRAM, EDITION, METADATA, MINT, MINT_PROOF, NFT_RECEIPT, OWNER_TA, POOL_TA,
    SYSTEM_PROGRAM, SYSVAR_INSTRUCTIONS, TOKEN_METADATA_PROGRAM, TOKEN_PROGRAM,
};
use crate::definition::{AccountRole, AccountSlot, InstructionDefinition, Step};

/// Moves an NFT from the owner into an NFT or trade pool. The whitelist is
/// checked against the mint proof when one is given.
pub static DEPOSIT_NFT: InstructionDefinition = InstructionDefinition {
    name: "deposit_nft",
    discriminator: &[93, 226, 132, 166, 141, 9, 48, 101],
    accounts: &[
        AccountSlot::new("owner", AccountRole::WritableSigner),
        AccountSlot::new("pool", AccountRole::Writable),
        AccountSlot::new("whitelist", AccountRole::Readonly),
        MINT_PROOF,
        MINT,
        OWNER_TA,
        POOL_TA,
        NFT_RECEIPT,
        METADATA,
        EDITION,
        AccountSlot::new("owner_token_record", AccountRole::Writable).optional(),
        AccountSlot::new("pool_token_record", AccountRole::Writable).optional(),
        TOKEN_METADATA_PROGRAM,
        SYSVAR_INSTRUCTIONS,
        TOKEN_PROGRAM,
        ASSOCIATED_TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
    ],
    args: &[],
    pipeline: &[
        Step::Account("token_program"),
        Step::Account("associated_token_program"),
        Step::Account("system_program"),
        Step::Account("owner_ta"),
        Step::Account("pool_ta"),
        Step::Account("nft_receipt"),
        Step::Account("metadata"),
        Step::Account("edition"),
    ],
    remaining: None,
};
