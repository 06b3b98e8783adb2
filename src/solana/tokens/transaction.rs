use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction as SolanaTransaction,
};

/// Execute one atomic transaction paid by `payer` and co-signed by `signers`.
pub async fn send_transaction(
    client: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> Result<Signature> {
    // Get recent blockhash
    let recent_blockhash = client
        .get_latest_blockhash()
        .await
        .map_err(|e| anyhow!("Failed to get recent blockhash: {}", e))?;

    let mut all_signers: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
    all_signers.push(payer);
    all_signers.extend_from_slice(signers);

    let transaction = SolanaTransaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        all_signers.as_slice(),
        recent_blockhash,
    );

    let signature = client
        .send_and_confirm_transaction(&transaction)
        .await
        .map_err(|e| anyhow!("Failed to send transaction: {}", e))?;

    Ok(signature)
}
