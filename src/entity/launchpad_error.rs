use crate::entity::BackendFamily;

/// Malformed or out-of-range input. Never reaches a chain backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Token name cannot be empty")]
    EmptyName,

    #[error("Token name must be 100 characters or less (got {0})")]
    NameTooLong(usize),

    #[error("Token name contains invalid characters (allowed: letters, digits, spaces, '-' and '_')")]
    InvalidNameCharacters,

    #[error("Token symbol cannot be empty")]
    EmptySymbol,

    #[error("Token symbol must be 20 characters or less (got {0})")]
    SymbolTooLong(usize),

    #[error("Token symbol must be uppercase alphanumeric characters only")]
    InvalidSymbolCharacters,

    #[error("{family} token decimals must be between 0 and {max} (got {value})")]
    DecimalsOutOfRange {
        family: BackendFamily,
        value: i64,
        max: u8,
    },

    #[error("Invalid supply format: '{0}'")]
    InvalidSupplyFormat(String),

    #[error("Supply must be greater than 0")]
    SupplyNotPositive,

    #[error("Supply exceeds maximum limit of 1 trillion")]
    SupplyExceedsLimit,

    #[error("Supply is smaller than one base unit at {0} decimals")]
    SupplyBelowPrecision(u8),

    #[error("Supply of {base_units} base units does not fit a {family} token")]
    SupplyExceedsCapacity {
        family: BackendFamily,
        base_units: String,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidAmount { field: &'static str, reason: String },

    #[error("Invalid private key length")]
    InvalidPrivateKeyLength,

    #[error("Private key must be a valid hex string")]
    InvalidPrivateKeyHex,

    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    #[error("Invalid {family} address: {address}")]
    InvalidAddress {
        family: BackendFamily,
        address: String,
    },

    #[error("Invalid fee collector address")]
    InvalidFeeCollector,

    #[error("Unsupported blockchain '{0}' (expected 'evm' or 'solana')")]
    UnsupportedBlockchain(String),

    #[error("Unsupported DEX '{0}' (expected 'raydium', 'meteora' or 'jupiter')")]
    UnsupportedDex(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Error taxonomy of every launchpad operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LaunchpadError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Static lookup miss: unknown network, no router, missing artifact.
    #[error("{0}")]
    Configuration(String),

    /// Funds shortfall found before anything was submitted.
    #[error("{0}")]
    Balance(String),

    /// The chain rejected or failed to confirm an operation. Message is passed through verbatim.
    #[error("{0}")]
    Submission(String),
}

impl LaunchpadError {
    pub fn submission(err: impl std::fmt::Display) -> Self {
        LaunchpadError::Submission(err.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LaunchpadError::Validation(_) => "validation",
            LaunchpadError::Configuration(_) => "configuration",
            LaunchpadError::Balance(_) => "balance",
            LaunchpadError::Submission(_) => "submission",
        }
    }

    /// True when no transaction could have been submitted before the failure.
    pub fn is_pre_submission(&self) -> bool {
        !matches!(self, LaunchpadError::Submission(_))
    }
}
