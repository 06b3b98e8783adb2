use alloy::primitives::U256;

/// Render base units as a human amount, dropping trailing fraction zeros.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let d = decimals as usize;
    if d == 0 {
        return digits;
    }

    let padded = if digits.len() <= d {
        format!("{}{}", "0".repeat(d - digits.len() + 1), digits)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - d);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Slippage-adjusted minimum: `amount * (10000 - bps) / 10000`.
pub fn apply_slippage(amount: U256, slippage_bps: u16) -> U256 {
    let bps = slippage_bps.min(10_000) as u64;
    amount * U256::from(10_000 - bps) / U256::from(10_000u64)
}
