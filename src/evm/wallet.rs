use alloy::signers::local::PrivateKeySigner;
use anyhow::{anyhow, Result};

use crate::entity::Credentials;

/// Build the invocation's signer. The key itself never appears in the error.
pub fn signer_from_private_key(credentials: &Credentials) -> Result<PrivateKeySigner> {
    let key = credentials.expose();
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse::<PrivateKeySigner>()
        .map_err(|_| anyhow!("Failed to create signer from private key"))
}
