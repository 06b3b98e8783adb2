pub mod constants;
pub mod mint;
pub mod transaction;

pub use mint::{
    associated_token_account, fee_mint_account_len, fee_mint_instructions, FeeMintParams,
    MintState,
};
pub use transaction::send_transaction;
