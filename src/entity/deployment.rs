use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one successful token deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentResult {
    pub asset_address: String,
    pub transaction_id: String,
    pub network_display_name: String,
    pub signer_address: String,
    pub explorer_url: String,
}

/// Signing material for a single invocation: an EVM private key or a Solana keypair JSON.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct Credentials(String);

impl Credentials {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}
