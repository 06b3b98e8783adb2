//! Token artifact parsing, constructor encoding and unit formatting.

use alloy::primitives::{address, Bytes, U256};

use token_launchpad::evm::contracts::{deployment_code, parse_bytecode_artifact};
use token_launchpad::utils::{apply_slippage, format_units};
use token_launchpad::TokenSpec;

#[test]
fn test_artifact_formats() {
    let expected = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);

    assert_eq!(parse_bytecode_artifact("0x60806040\n").unwrap(), expected);
    assert_eq!(parse_bytecode_artifact("60806040").unwrap(), expected);
    assert_eq!(
        parse_bytecode_artifact(r#"{"abi": [], "bytecode": "0x60806040"}"#).unwrap(),
        expected
    );
    assert_eq!(
        parse_bytecode_artifact(r#"{"bytecode": {"object": "0x60806040"}}"#).unwrap(),
        expected
    );
}

#[test]
fn test_bad_artifacts() {
    assert!(parse_bytecode_artifact("0x").is_err());
    assert!(parse_bytecode_artifact("not hex").is_err());
    assert!(parse_bytecode_artifact(r#"{"abi": []}"#).is_err());
    assert!(parse_bytecode_artifact(r#"{"bytecode": {"linkReferences": {}}}"#).is_err());
}

#[test]
fn test_constructor_arguments_follow_creation_code() {
    let bytecode = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);
    let spec = TokenSpec {
        name: "My Token".to_string(),
        symbol: "MTK".to_string(),
        decimals: 18,
        total_supply: U256::from(1_000u64),
    };
    let collector = address!("d2C91503a0365F525699aFD55BaF10D7960Ac5b4");

    let code = deployment_code(&bytecode, &spec, collector);
    assert!(code.starts_with(&bytecode));

    let args = &code[bytecode.len()..];
    // 5 head words plus two (length, data) tails for the strings
    assert_eq!(args.len(), 9 * 32);
    assert_eq!(&args[3 * 32..4 * 32], U256::from(1_000u64).to_be_bytes::<32>().as_slice());
    assert_eq!(&args[4 * 32 + 12..5 * 32], collector.as_slice());
}

#[test]
fn test_format_units() {
    assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
    assert_eq!(format_units(U256::from(1u64), 9), "0.000000001");
    assert_eq!(format_units(U256::from(42u64), 0), "42");
    assert_eq!(format_units(U256::ZERO, 18), "0");
}

#[test]
fn test_apply_slippage() {
    assert_eq!(apply_slippage(U256::from(10_000u64), 100), U256::from(9_900u64));
    assert_eq!(apply_slippage(U256::from(10_000u64), 0), U256::from(10_000u64));
    assert_eq!(apply_slippage(U256::from(10_000u64), 20_000), U256::ZERO);
}
