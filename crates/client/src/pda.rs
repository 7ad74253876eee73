//! Program-derived address helpers

use crate::ids::{
    ASSOCIATED_TOKEN_PROGRAM_ID, FEE_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID, WHITELIST_PROGRAM_ID,
};
use solana_sdk::pubkey::Pubkey;

pub const POOL_SEED: &[u8] = b"pool";
pub const NFT_RECEIPT_SEED: &[u8] = b"nft_receipt";
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";
pub const MINT_PROOF_SEED: &[u8] = b"mint_proof";
pub const METADATA_SEED: &[u8] = b"metadata";
pub const EDITION_SEED: &[u8] = b"edition";
pub const TOKEN_RECORD_SEED: &[u8] = b"token_record";

/// Pool owned by `owner`, identified by a caller-chosen 32 byte id
pub fn find_pool_pda(program_id: &Pubkey, owner: &Pubkey, pool_id: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, owner.as_ref(), pool_id], program_id)
}

/// Receipt recording that `mint` is held by `pool`
pub fn find_nft_receipt_pda(program_id: &Pubkey, mint: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_RECEIPT_SEED, mint.as_ref(), pool.as_ref()], program_id)
}

/// Fee vault shard for an address: the shard is its last byte
pub fn find_fee_vault_pda(address: &Pubkey) -> (Pubkey, u8) {
    let shard = address.to_bytes()[31];
    Pubkey::find_program_address(&[FEE_VAULT_SEED, &[shard]], &FEE_PROGRAM_ID)
}

pub fn find_mint_proof_pda(mint: &Pubkey, whitelist: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MINT_PROOF_SEED, mint.as_ref(), whitelist.as_ref()],
        &WHITELIST_PROGRAM_ID,
    )
}

pub fn find_associated_token_account(
    owner: &Pubkey,
    token_program: &Pubkey,
    mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}

pub fn find_metadata_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn find_master_edition_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn find_token_record_pda(mint: &Pubkey, token_account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            TOKEN_RECORD_SEED,
            token_account.as_ref(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}
