//! Input checks applied before any field may influence an on-chain operation.
//!
//! Every validator is pure. Failures are reported as [`ValidationError`].
use alloy::primitives::{Address, U256};
use lazy_static::lazy_static;
use regex::Regex;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use std::str::FromStr;

use crate::entity::{BackendFamily, SolanaDex, TokenSpec, ValidationError};

const MAX_NAME_LEN: usize = 100;
const MAX_SYMBOL_LEN: usize = 20;
const MAX_SUPPLY_WHOLE: u64 = 1_000_000_000_000;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9 _\-]+$").unwrap();
    static ref SYMBOL_RE: Regex = Regex::new(r"^[A-Z0-9]+$").unwrap();
    static ref DECIMAL_RE: Regex = Regex::new(r"^([0-9]+)(?:\.([0-9]+))?$").unwrap();
    static ref EVM_ADDRESS_RE: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    static ref HEX_KEY_RE: Regex = Regex::new(r"^[0-9a-fA-F]{64}$").unwrap();
}

pub fn parse_blockchain(value: &str) -> Result<BackendFamily, ValidationError> {
    match value.trim().to_lowercase().as_str() {
        "evm" => Ok(BackendFamily::Evm),
        "solana" => Ok(BackendFamily::Solana),
        _ => Err(ValidationError::UnsupportedBlockchain(value.to_string())),
    }
}

pub fn parse_solana_dex(value: &str) -> Result<SolanaDex, ValidationError> {
    match value.trim().to_lowercase().as_str() {
        "raydium" => Ok(SolanaDex::Raydium),
        "meteora" => Ok(SolanaDex::Meteora),
        "jupiter" => Ok(SolanaDex::Jupiter),
        _ => Err(ValidationError::UnsupportedDex(value.to_string())),
    }
}

pub fn validate_token_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidNameCharacters);
    }
    Ok(())
}

/// Symbols are never re-cased: "mtk" is rejected, not turned into "MTK".
pub fn validate_token_symbol(symbol: &str) -> Result<(), ValidationError> {
    if symbol.trim().is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    let len = symbol.chars().count();
    if len > MAX_SYMBOL_LEN {
        return Err(ValidationError::SymbolTooLong(len));
    }
    if !SYMBOL_RE.is_match(symbol) {
        return Err(ValidationError::InvalidSymbolCharacters);
    }
    Ok(())
}

pub fn validate_decimals(value: i64, family: BackendFamily) -> Result<u8, ValidationError> {
    let max = family.max_decimals();
    if value < 0 || value > max as i64 {
        return Err(ValidationError::DecimalsOutOfRange { family, value, max });
    }
    Ok(value as u8)
}

/// A decimal string split into its integer digits and (possibly empty) fraction digits.
struct DecimalParts {
    whole: String,
    fraction: String,
}

impl DecimalParts {
    fn parse(input: &str) -> Option<Self> {
        let clean: String = input
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();
        let caps = DECIMAL_RE.captures(&clean)?;

        let whole = caps.get(1)?.as_str().trim_start_matches('0').to_string();
        let fraction = caps
            .get(2)
            .map(|m| m.as_str().trim_end_matches('0').to_string())
            .unwrap_or_default();

        Some(Self { whole, fraction })
    }

    fn is_zero(&self) -> bool {
        self.whole.is_empty() && self.fraction.is_empty()
    }

    /// Compare the exact value against an integer bound.
    fn exceeds(&self, bound: u64) -> bool {
        let bound = bound.to_string();
        if self.whole.len() != bound.len() {
            return self.whole.len() > bound.len();
        }
        match self.whole.as_str().cmp(bound.as_str()) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => !self.fraction.is_empty(),
            std::cmp::Ordering::Less => false,
        }
    }

    /// `whole * 10^decimals + truncate(fraction * 10^decimals)`, all in integers.
    fn to_base_units(&self, decimals: u8) -> Option<U256> {
        let mut digits = self.whole.clone();
        let d = decimals as usize;
        if self.fraction.len() >= d {
            digits.push_str(&self.fraction[..d]);
        } else {
            digits.push_str(&self.fraction);
            digits.extend(std::iter::repeat('0').take(d - self.fraction.len()));
        }

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Some(U256::ZERO);
        }
        U256::from_str_radix(digits, 10).ok()
    }
}

/// Parse a human supply ("1,000,000", "1000.5") into base units.
pub fn parse_supply(supply: &str, decimals: u8) -> Result<U256, ValidationError> {
    let parts = DecimalParts::parse(supply)
        .ok_or_else(|| ValidationError::InvalidSupplyFormat(supply.to_string()))?;

    if parts.is_zero() {
        return Err(ValidationError::SupplyNotPositive);
    }
    if parts.exceeds(MAX_SUPPLY_WHOLE) {
        return Err(ValidationError::SupplyExceedsLimit);
    }

    let base_units = parts
        .to_base_units(decimals)
        .ok_or(ValidationError::SupplyExceedsLimit)?;
    if base_units.is_zero() {
        return Err(ValidationError::SupplyBelowPrecision(decimals));
    }
    Ok(base_units)
}

/// Parse a pool funding amount into base units of `decimals`.
pub fn parse_amount(field: &'static str, amount: &str, decimals: u8) -> Result<U256, ValidationError> {
    let parts = DecimalParts::parse(amount).ok_or_else(|| ValidationError::InvalidAmount {
        field,
        reason: format!("'{}' is not a number", amount),
    })?;

    let base_units = parts
        .to_base_units(decimals)
        .ok_or_else(|| ValidationError::InvalidAmount {
            field,
            reason: "amount is too large".to_string(),
        })?;

    if base_units.is_zero() {
        return Err(ValidationError::InvalidAmount {
            field,
            reason: "amount must be greater than 0".to_string(),
        });
    }
    Ok(base_units)
}

/// Solana mints hold their supply in a u64.
pub fn validate_supply_capacity(
    total_supply: U256,
    family: BackendFamily,
) -> Result<(), ValidationError> {
    if family == BackendFamily::Solana && total_supply > U256::from(u64::MAX) {
        return Err(ValidationError::SupplyExceedsCapacity {
            family,
            base_units: total_supply.to_string(),
        });
    }
    Ok(())
}

/// Validate and assemble a [`TokenSpec`] for `family`.
pub fn build_token_spec(
    name: &str,
    symbol: &str,
    decimals: i64,
    supply: &str,
    family: BackendFamily,
) -> Result<TokenSpec, ValidationError> {
    validate_token_name(name)?;
    validate_token_symbol(symbol)?;
    let decimals = validate_decimals(decimals, family)?;
    let total_supply = parse_supply(supply, decimals)?;
    validate_supply_capacity(total_supply, family)?;

    Ok(TokenSpec {
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals,
        total_supply,
    })
}

/// Re-check a spec that claims to be validated already.
pub fn recheck_token_spec(spec: &TokenSpec, family: BackendFamily) -> Result<(), ValidationError> {
    validate_token_name(&spec.name)?;
    validate_token_symbol(&spec.symbol)?;
    validate_decimals(spec.decimals as i64, family)?;

    if spec.total_supply.is_zero() {
        return Err(ValidationError::SupplyNotPositive);
    }
    let ceiling = U256::from(MAX_SUPPLY_WHOLE) * U256::from(10u64).pow(U256::from(spec.decimals));
    if spec.total_supply > ceiling {
        return Err(ValidationError::SupplyExceedsLimit);
    }
    validate_supply_capacity(spec.total_supply, family)
}

/// `0x` + 40 hex digits; mixed-case input must carry a valid EIP-55 checksum.
pub fn validate_evm_address(address: &str) -> bool {
    if !EVM_ADDRESS_RE.is_match(address) {
        return false;
    }
    let body = &address[2..];
    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(address, None).is_ok();
    }
    true
}

pub fn validate_solana_address(address: &str) -> bool {
    Pubkey::from_str(address).is_ok()
}

pub fn validate_address(address: &str, family: BackendFamily) -> Result<(), ValidationError> {
    let valid = match family {
        BackendFamily::Evm => validate_evm_address(address),
        BackendFamily::Solana => validate_solana_address(address),
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidAddress {
            family,
            address: address.to_string(),
        })
    }
}

/// 64 hex characters with an optional `0x` prefix. Structure only.
pub fn validate_evm_private_key(private_key: &str) -> Result<(), ValidationError> {
    let key = private_key.trim();
    let clean = key.strip_prefix("0x").unwrap_or(key);

    if clean.len() != 64 {
        return Err(ValidationError::InvalidPrivateKeyLength);
    }
    if !HEX_KEY_RE.is_match(clean) {
        return Err(ValidationError::InvalidPrivateKeyHex);
    }
    Ok(())
}

/// JSON array of the 64 keypair bytes, as written by `solana-keygen`.
pub fn validate_solana_keypair(keypair: &str) -> Result<(), ValidationError> {
    crate::solana::wallet::keypair_from_json(keypair)
        .map(|_: Keypair| ())
        .map_err(|e| ValidationError::InvalidKeypair(e.to_string()))
}

pub fn validate_credentials(credentials: &str, family: BackendFamily) -> Result<(), ValidationError> {
    match family {
        BackendFamily::Evm => validate_evm_private_key(credentials),
        BackendFamily::Solana => validate_solana_keypair(credentials),
    }
}

pub fn validate_fee_collector(address: &str, family: BackendFamily) -> Result<(), ValidationError> {
    validate_address(address, family).map_err(|_| ValidationError::InvalidFeeCollector)
}
