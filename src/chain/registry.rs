use std::collections::HashMap;
use std::env;

use crate::entity::{BackendFamily, LaunchpadError, NetworkDescriptor};

/// Lookup table of the networks one backend family can deploy to.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    family: BackendFamily,
    networks: Vec<NetworkDescriptor>,
}

impl NetworkRegistry {
    pub fn new(family: BackendFamily, networks: Vec<NetworkDescriptor>) -> Self {
        Self { family, networks }
    }

    /// Case-insensitive lookup. A miss is a configuration error, never a default.
    pub fn lookup(&self, name: &str) -> Result<&NetworkDescriptor, LaunchpadError> {
        let name = name.trim();
        self.networks
            .iter()
            .find(|n| n.key.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                LaunchpadError::Configuration(format!(
                    "Unknown {} network: {}. Supported networks: {}",
                    self.family,
                    name,
                    self.list_available().join(", ")
                ))
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    pub fn descriptors(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    /// Network keys in declaration order.
    pub fn list_available(&self) -> Vec<String> {
        self.networks.iter().map(|n| n.key.clone()).collect()
    }
}

/// RPC endpoint precedence: configured override, then the environment variable, then the default.
pub fn resolve_rpc_endpoint(
    key: &str,
    env_var: &str,
    default: &str,
    overrides: &HashMap<String, String>,
) -> String {
    overrides
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, url)| url.clone())
        .or_else(|| env::var(env_var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| default.to_string())
}
