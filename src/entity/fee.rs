use crate::entity::BackendFamily;

/// Share of every token transfer routed to the fee collector.
pub const FEE_PERCENTAGE: u16 = 1;

/// Upper bound of any basis-point quantity.
pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Service fee embedded in every token. Built once at start-up and only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeConfig {
    pub evm_fee_collector: String,
    pub solana_fee_collector: String,
    pub fee_percentage: u16,
}

impl FeeConfig {
    pub fn new(evm_fee_collector: String, solana_fee_collector: String) -> Self {
        Self {
            evm_fee_collector,
            solana_fee_collector,
            fee_percentage: FEE_PERCENTAGE,
        }
    }

    pub fn collector_for(&self, family: BackendFamily) -> &str {
        match family {
            BackendFamily::Evm => &self.evm_fee_collector,
            BackendFamily::Solana => &self.solana_fee_collector,
        }
    }

    pub fn fee_basis_points(&self) -> u16 {
        self.fee_percentage.saturating_mul(100).min(MAX_BASIS_POINTS)
    }
}
