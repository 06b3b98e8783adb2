//! Token-2022 mint carrying the launchpad transfer fee.
use anyhow::{anyhow, Result};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use solana_system_interface::instruction as system_instruction;
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account,
};
use spl_token_2022::extension::transfer_fee::instruction::initialize_transfer_fee_config;
use spl_token_2022::extension::transfer_fee::TransferFeeConfig;
use spl_token_2022::extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions};
use spl_token_2022::instruction::{initialize_mint, mint_to};
use spl_token_2022::state::{Account, Mint};
use spl_token_2022::ID as TOKEN_2022_PROGRAM_ID;

use crate::solana::tokens::constants::UNCAPPED_MAXIMUM_FEE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeMintParams {
    pub payer: Pubkey,
    pub mint: Pubkey,
    pub fee_collector: Pubkey,
    pub decimals: u8,
    pub supply: u64,
    pub fee_basis_points: u16,
    pub rent_lamports: u64,
}

/// Decoded view of a mint account, legacy or Token-2022.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintState {
    pub decimals: u8,
    pub supply: u64,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
    pub transfer_fee_basis_points: Option<u16>,
    pub fee_withdraw_authority: Option<Pubkey>,
}

/// Size of a mint account with the transfer fee extension.
pub fn fee_mint_account_len() -> Result<usize> {
    ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::TransferFeeConfig])
        .map_err(|e| anyhow!("Failed to size mint account: {}", e))
}

/// The signer's Token-2022 associated account for `mint`.
pub fn associated_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &TOKEN_2022_PROGRAM_ID)
}

/// Create the mint, attach the fee, initialise it and mint the whole supply to the payer.
/// The fee config must be initialised before the mint itself.
pub fn fee_mint_instructions(params: &FeeMintParams, account_len: usize) -> Result<Vec<Instruction>> {
    let token_account = associated_token_account(&params.payer, &params.mint);

    let create_mint = system_instruction::create_account(
        &params.payer,
        &params.mint,
        params.rent_lamports,
        account_len as u64,
        &TOKEN_2022_PROGRAM_ID,
    );

    let init_fee = initialize_transfer_fee_config(
        &TOKEN_2022_PROGRAM_ID,
        &params.mint,
        Some(&params.fee_collector),
        Some(&params.fee_collector),
        params.fee_basis_points,
        UNCAPPED_MAXIMUM_FEE,
    )
    .map_err(|e| anyhow!("Failed to build transfer fee instruction: {}", e))?;

    let init_mint = initialize_mint(
        &TOKEN_2022_PROGRAM_ID,
        &params.mint,
        &params.payer,
        Some(&params.payer),
        params.decimals,
    )
    .map_err(|e| anyhow!("Failed to build mint instruction: {}", e))?;

    let create_account = create_associated_token_account(
        &params.payer,
        &params.payer,
        &params.mint,
        &TOKEN_2022_PROGRAM_ID,
    );

    let mint_supply = mint_to(
        &TOKEN_2022_PROGRAM_ID,
        &params.mint,
        &token_account,
        &params.payer,
        &[],
        params.supply,
    )
    .map_err(|e| anyhow!("Failed to build mint_to instruction: {}", e))?;

    Ok(vec![
        create_mint,
        init_fee,
        init_mint,
        create_account,
        mint_supply,
    ])
}

pub fn unpack_mint(data: &[u8]) -> Result<MintState> {
    let state = StateWithExtensions::<Mint>::unpack(data)
        .map_err(|e| anyhow!("Account is not a token mint: {}", e))?;

    let fee = state.get_extension::<TransferFeeConfig>().ok();

    Ok(MintState {
        decimals: state.base.decimals,
        supply: state.base.supply,
        mint_authority: state.base.mint_authority.into(),
        freeze_authority: state.base.freeze_authority.into(),
        transfer_fee_basis_points: fee
            .map(|config| u16::from(config.newer_transfer_fee.transfer_fee_basis_points)),
        fee_withdraw_authority: fee
            .and_then(|config| Option::<Pubkey>::from(config.withdraw_withheld_authority)),
    })
}

/// Raw amount held by a token account.
pub fn unpack_token_amount(data: &[u8]) -> Result<u64> {
    let state = StateWithExtensions::<Account>::unpack(data)
        .map_err(|e| anyhow!("Account is not a token account: {}", e))?;
    Ok(state.base.amount)
}
