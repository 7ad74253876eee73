//! Transaction assembly and submission

use anyhow::{Context, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

/// Sign `instructions` with `payer` as fee payer and sole signer. Fails if
/// any instruction needs a signature from another key.
pub fn build_transaction(
    instructions: &[Instruction],
    payer: &Keypair,
    recent_blockhash: Hash,
) -> Result<Transaction> {
    let mut transaction = Transaction::new_with_payer(instructions, Some(&payer.pubkey()));
    transaction
        .try_sign(&[payer], recent_blockhash)
        .with_context(|| {
            format!(
                "Failed to sign transaction with {}; it needs {} signatures",
                payer.pubkey(),
                transaction.message.header.num_required_signatures
            )
        })?;
    Ok(transaction)
}

pub async fn send_instruction(
    client: &RpcClient,
    instruction: Instruction,
    payer: &Keypair,
) -> Result<Signature> {
    let recent_blockhash = client
        .get_latest_blockhash()
        .await
        .context("Failed to fetch recent blockhash")?;

    let transaction = build_transaction(&[instruction], payer, recent_blockhash)?;

    let signature = client
        .send_and_confirm_transaction(&transaction)
        .await
        .context("Failed to send transaction")?;
    Ok(signature)
}
