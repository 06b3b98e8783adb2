// Token-2022 transfer fees are capped per transfer; the launchpad fee is uncapped.
pub const UNCAPPED_MAXIMUM_FEE: u64 = u64::MAX;
