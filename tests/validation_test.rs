//! Input validation: token fields, supply scaling, addresses and credentials.

mod common;

use alloy::primitives::U256;
use token_launchpad::validation::*;
use token_launchpad::{BackendFamily, SolanaDex, ValidationError};

#[test]
fn test_supply_is_scaled_to_base_units() {
    assert_eq!(
        parse_supply("1,000,000", 6).unwrap(),
        U256::from(1_000_000_000_000u64)
    );
    assert_eq!(parse_supply("1000.5", 2).unwrap(), U256::from(100_050u64));
    assert_eq!(parse_supply(" 42 ", 0).unwrap(), U256::from(42u64));
    assert_eq!(
        parse_supply("1000000", 18).unwrap(),
        U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64))
    );
}

#[test]
fn test_supply_fraction_beyond_decimals_is_truncated() {
    assert_eq!(parse_supply("1000.559", 2).unwrap(), U256::from(100_055u64));
}

#[test]
fn test_supply_rejects_bad_input() {
    assert_eq!(parse_supply("0", 18), Err(ValidationError::SupplyNotPositive));
    assert_eq!(parse_supply("0.000", 18), Err(ValidationError::SupplyNotPositive));
    assert_eq!(
        parse_supply("abc", 18),
        Err(ValidationError::InvalidSupplyFormat("abc".to_string()))
    );
    assert!(matches!(
        parse_supply("-5", 18),
        Err(ValidationError::InvalidSupplyFormat(_))
    ));
    assert_eq!(
        parse_supply("0.001", 2),
        Err(ValidationError::SupplyBelowPrecision(2))
    );
}

#[test]
fn test_supply_limit_is_one_trillion_whole_tokens() {
    assert!(parse_supply("1000000000000", 18).is_ok());
    assert_eq!(
        parse_supply("1000000000000.5", 18),
        Err(ValidationError::SupplyExceedsLimit)
    );
    assert_eq!(
        parse_supply("1,000,000,000,001", 0),
        Err(ValidationError::SupplyExceedsLimit)
    );
}

#[test]
fn test_solana_supply_must_fit_u64() {
    // 1 trillion at 9 decimals is 10^21 base units
    let result = build_token_spec("Big", "BIG", 9, "1000000000000", BackendFamily::Solana);
    assert!(matches!(
        result,
        Err(ValidationError::SupplyExceedsCapacity {
            family: BackendFamily::Solana,
            ..
        })
    ));

    // the same supply is fine on EVM
    assert!(build_token_spec("Big", "BIG", 9, "1000000000000", BackendFamily::Evm).is_ok());
}

#[test]
fn test_symbol_is_never_recased() {
    assert!(validate_token_symbol("MTK").is_ok());
    assert!(validate_token_symbol("MTK2").is_ok());
    assert_eq!(
        validate_token_symbol("mtk"),
        Err(ValidationError::InvalidSymbolCharacters)
    );
    assert_eq!(validate_token_symbol(""), Err(ValidationError::EmptySymbol));
    assert_eq!(
        validate_token_symbol(&"A".repeat(21)),
        Err(ValidationError::SymbolTooLong(21))
    );
}

#[test]
fn test_token_name_rules() {
    assert!(validate_token_name("My Awesome Token").is_ok());
    assert!(validate_token_name("super_coin-2").is_ok());
    assert_eq!(validate_token_name("   "), Err(ValidationError::EmptyName));
    assert_eq!(
        validate_token_name("Bad$Name"),
        Err(ValidationError::InvalidNameCharacters)
    );
    assert_eq!(
        validate_token_name(&"a".repeat(101)),
        Err(ValidationError::NameTooLong(101))
    );
}

#[test]
fn test_decimals_range_per_family() {
    assert_eq!(validate_decimals(18, BackendFamily::Evm), Ok(18));
    assert!(validate_decimals(19, BackendFamily::Evm).is_err());
    assert_eq!(validate_decimals(9, BackendFamily::Solana), Ok(9));
    assert!(validate_decimals(10, BackendFamily::Solana).is_err());
    assert!(validate_decimals(-1, BackendFamily::Evm).is_err());
    assert_eq!(validate_decimals(0, BackendFamily::Solana), Ok(0));
}

#[test]
fn test_evm_address_checksum() {
    let valid = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
    ];
    for address in valid {
        assert!(validate_evm_address(address), "{} should be valid", address);
    }

    let invalid = [
        "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA",
        "0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    ];
    for address in invalid {
        assert!(!validate_evm_address(address), "{} should be invalid", address);
    }
}

#[test]
fn test_solana_address() {
    assert!(validate_solana_address(
        "CrjcCXMHg1MkrzdTBkSQjmGfiKjK7EGXHpcofgMBrB6W"
    ));
    assert!(!validate_solana_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    assert!(!validate_solana_address("not-an-address"));
}

#[test]
fn test_evm_private_key_structure() {
    let key = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    assert!(validate_evm_private_key(key).is_ok());
    assert!(validate_evm_private_key(&format!("0x{}", key)).is_ok());
    assert_eq!(
        validate_evm_private_key(&key[1..]),
        Err(ValidationError::InvalidPrivateKeyLength)
    );
    assert_eq!(
        validate_evm_private_key(&"z".repeat(64)),
        Err(ValidationError::InvalidPrivateKeyHex)
    );
}

#[test]
fn test_solana_keypair_structure() {
    assert!(validate_solana_keypair(&common::keypair_json()).is_ok());
    assert!(matches!(
        validate_solana_keypair("[1,2,3]"),
        Err(ValidationError::InvalidKeypair(_))
    ));
    assert!(matches!(
        validate_solana_keypair("my secret phrase"),
        Err(ValidationError::InvalidKeypair(_))
    ));
}

#[test]
fn test_keypair_errors_do_not_echo_input() {
    let secret = "[9,9,9,9,9]";
    let err = validate_solana_keypair(secret).unwrap_err();
    assert!(!err.to_string().contains("9,9,9"));
}

#[test]
fn test_blockchain_and_dex_parsing() {
    assert_eq!(parse_blockchain(" EVM "), Ok(BackendFamily::Evm));
    assert_eq!(parse_blockchain("solana"), Ok(BackendFamily::Solana));
    assert!(parse_blockchain("bitcoin").is_err());

    assert_eq!(parse_solana_dex("Raydium"), Ok(SolanaDex::Raydium));
    assert_eq!(parse_solana_dex("meteora"), Ok(SolanaDex::Meteora));
    assert_eq!(parse_solana_dex("JUPITER"), Ok(SolanaDex::Jupiter));
    assert!(parse_solana_dex("orca").is_err());
}

#[test]
fn test_non_ascii_digits_are_not_numbers() {
    assert_eq!(
        parse_supply("1.\u{0661}\u{0661}", 1),
        Err(ValidationError::InvalidSupplyFormat("1.\u{0661}\u{0661}".to_string()))
    );
    assert_eq!(
        parse_supply("\u{0661}\u{0660}\u{0660}", 18),
        Err(ValidationError::InvalidSupplyFormat("\u{0661}\u{0660}\u{0660}".to_string()))
    );
    assert!(matches!(
        parse_supply("\u{FF11}\u{FF10}", 0),
        Err(ValidationError::InvalidSupplyFormat(_))
    ));
    assert!(matches!(
        parse_amount("tokenForPool", "5.\u{0661}", 18),
        Err(ValidationError::InvalidAmount { field: "tokenForPool", .. })
    ));
    assert!(matches!(
        parse_amount("baseForPool", "\u{0967}", 18),
        Err(ValidationError::InvalidAmount { field: "baseForPool", .. })
    ));
}

#[test]
fn test_pool_amounts() {
    assert_eq!(
        parse_amount("baseForPool", "0.5", 18).unwrap(),
        U256::from(500_000_000_000_000_000u64)
    );
    assert!(matches!(
        parse_amount("baseForPool", "0", 18),
        Err(ValidationError::InvalidAmount { field: "baseForPool", .. })
    ));
    assert!(matches!(
        parse_amount("tokenForPool", "lots", 18),
        Err(ValidationError::InvalidAmount { field: "tokenForPool", .. })
    ));
}

#[test]
fn test_fee_collector_defaults_are_valid() {
    use token_launchpad::config::{DEFAULT_EVM_FEE_COLLECTOR, DEFAULT_SOLANA_FEE_COLLECTOR};
    assert!(validate_fee_collector(DEFAULT_EVM_FEE_COLLECTOR, BackendFamily::Evm).is_ok());
    assert!(validate_fee_collector(DEFAULT_SOLANA_FEE_COLLECTOR, BackendFamily::Solana).is_ok());
    assert_eq!(
        validate_fee_collector("0x123", BackendFamily::Evm),
        Err(ValidationError::InvalidFeeCollector)
    );
}
