use super::{
    ASSOCIATED_TOKEN_PROGRAM, CREATORS, EDITION, FEE_VAULT, METADATA, MINT, MINT_PROOF, OWNER_TA,
    SYSTEM_PROGRAM, SYSVAR_INSTRUCTIONS, TAKER_TA, TOKEN_METADATA_PROGRAM, TOKEN_PROGRAM,
};
use crate::definition::{AccountRole, AccountSlot, ArgField, InstructionDefinition, Step};
use amm_codec::WireType;

/// Sells an NFT into a token pool. The NFT goes straight to the pool owner's
/// token account, so no receipt is created.
pub static SELL_NFT_TOKEN_POOL: InstructionDefinition = InstructionDefinition {
    name: "sell_nft_token_pool",
    discriminator: &[57, 44, 192, 48, 83, 8, 107, 48],
    accounts: &[
        AccountSlot::new("owner", AccountRole::Writable),
        AccountSlot::new("taker", AccountRole::WritableSigner),
        FEE_VAULT,
        AccountSlot::new("pool", AccountRole::Writable),
        AccountSlot::new("whitelist", AccountRole::Readonly),
        MINT_PROOF,
        TAKER_TA,
        OWNER_TA,
        MINT,
        METADATA,
        EDITION,
        AccountSlot::new("taker_token_record", AccountRole::Writable).optional(),
        AccountSlot::new("owner_token_record", AccountRole::Writable).optional(),
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
        Step::Account("owner_ta"),
        Step::Account("metadata"),
        Step::Account("edition"),
    ],
    remaining: CREATORS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::InstructionInput;
    use crate::ids::TOKEN_PROGRAM_ID;
    use crate::instructions::tests::build;
    use crate::pda::find_associated_token_account;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_nft_lands_in_owner_account() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let input = InstructionInput::new()
            .account("owner", owner)
            .signer("taker", Pubkey::new_unique())
            .account("pool", Pubkey::new_unique())
            .account("whitelist", Pubkey::new_unique())
            .account("mint", mint)
            .arg("min_price", 1u64)
            .arg("optional_royalty_pct", Some(100u16));
        let ix = build(&SELL_NFT_TOKEN_POOL, input);

        assert_eq!(ix.accounts.len(), 22);
        assert_eq!(
            ix.accounts[7].pubkey,
            find_associated_token_account(&owner, &TOKEN_PROGRAM_ID, &mint).0
        );
        assert_eq!(&ix.data[16..], &[1, 100, 0]);
    }
}
