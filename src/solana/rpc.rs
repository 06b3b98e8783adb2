use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};
use std::sync::Arc;

use crate::entity::NetworkDescriptor;
use crate::solana::client::create_solana_client;
use crate::solana::tokens::mint::{unpack_mint, unpack_token_amount, MintState};
use crate::solana::tokens::send_transaction;

/// Everything the Solana backend and pool orchestrator need from a cluster.
#[async_trait]
pub trait SolanaRpc: Send + Sync {
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64>;

    /// None when the token account does not exist.
    async fn token_account_balance(&self, account: &Pubkey) -> Result<Option<u64>>;

    async fn minimum_balance_for_rent_exemption(&self, len: usize) -> Result<u64>;

    async fn get_mint(&self, mint: &Pubkey) -> Result<Option<MintState>>;

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
        signers: &[&Keypair],
    ) -> Result<Signature>;
}

#[async_trait]
pub trait SolanaConnector: Send + Sync {
    async fn connect(&self, network: &NetworkDescriptor) -> Result<Arc<dyn SolanaRpc>>;
}

pub struct RpcClientConnector;

#[async_trait]
impl SolanaConnector for RpcClientConnector {
    async fn connect(&self, network: &NetworkDescriptor) -> Result<Arc<dyn SolanaRpc>> {
        Ok(Arc::new(ClusterRpc {
            client: create_solana_client(&network.rpc_endpoint),
        }))
    }
}

pub struct ClusterRpc {
    client: Arc<RpcClient>,
}

impl ClusterRpc {
    /// Data of an account owned by either token program, None if it does not exist.
    async fn token_program_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await
            .map_err(|e| anyhow!("Failed to get account {}: {}", address, e))?;

        match response.value {
            Some(account) if account.owner == spl_token::ID || account.owner == spl_token_2022::ID => {
                Ok(Some(account.data))
            }
            Some(account) => Err(anyhow!(
                "Account {} is owned by {}, not a token program",
                address,
                account.owner
            )),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SolanaRpc for ClusterRpc {
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64> {
        self.client
            .get_balance(owner)
            .await
            .map_err(|e| anyhow!("Failed to get balance: {}", e))
    }

    async fn token_account_balance(&self, account: &Pubkey) -> Result<Option<u64>> {
        match self.token_program_account(account).await? {
            Some(data) => Ok(Some(unpack_token_amount(&data)?)),
            None => Ok(None),
        }
    }

    async fn minimum_balance_for_rent_exemption(&self, len: usize) -> Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(len)
            .await
            .map_err(|e| anyhow!("Failed to get rent exemption: {}", e))
    }

    async fn get_mint(&self, mint: &Pubkey) -> Result<Option<MintState>> {
        match self.token_program_account(mint).await? {
            Some(data) => Ok(Some(unpack_mint(&data)?)),
            None => Ok(None),
        }
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
        signers: &[&Keypair],
    ) -> Result<Signature> {
        send_transaction(&self.client, payer, signers, instructions).await
    }
}
