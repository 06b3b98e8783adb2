use anyhow::{anyhow, Result};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

/// Restore a Keypair from the JSON byte array written by `solana-keygen` (64 bytes).
pub fn keypair_from_json(keypair_json: &str) -> Result<Keypair> {
    let keypair_bytes: Vec<u8> = serde_json::from_str(keypair_json.trim())
        .map_err(|_| anyhow!("Keypair must be a JSON array of 64 bytes"))?;

    if keypair_bytes.len() != 64 {
        return Err(anyhow!("Invalid keypair length: {}", keypair_bytes.len()));
    }

    let keypair = Keypair::try_from(keypair_bytes.as_slice())
        .map_err(|_| anyhow!("Keypair bytes do not form a valid ed25519 keypair"))?;

    Ok(keypair)
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address.trim()).map_err(|e| anyhow!("Invalid Solana address: {}", e))
}
