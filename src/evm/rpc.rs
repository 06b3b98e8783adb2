use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::{Credentials, NetworkDescriptor};
use crate::evm::contracts::{IUniswapV2Factory, IUniswapV2Router02, LaunchpadToken};
use crate::evm::wallet::signer_from_private_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub fee_collector: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLiquidityEth {
    pub token: Address,
    pub amount_token_desired: U256,
    pub amount_token_min: U256,
    pub amount_eth_min: U256,
    pub to: Address,
    pub deadline: U256,
    pub value: U256,
}

/// Everything the EVM backend and pool orchestrator need from a node.
#[async_trait]
pub trait EvmRpc: Send + Sync {
    /// None for read-only connections.
    fn signer_address(&self) -> Option<Address>;

    async fn deploy_contract(&self, code: Bytes) -> Result<(Address, TxHash)>;

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata>;

    async fn native_balance(&self, owner: Address) -> Result<U256>;

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256>;

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;

    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash>;

    async fn router_factory(&self, router: Address) -> Result<Address>;

    async fn router_weth(&self, router: Address) -> Result<Address>;

    async fn get_pair(&self, factory: Address, token_a: Address, token_b: Address) -> Result<Address>;

    async fn add_liquidity_eth(&self, router: Address, params: AddLiquidityEth) -> Result<TxHash>;

    async fn token_owner(&self, token: Address) -> Result<Address>;

    async fn is_excluded_from_fee(&self, token: Address, account: Address) -> Result<bool>;

    async fn set_fee_exclusion(&self, token: Address, account: Address, excluded: bool) -> Result<TxHash>;
}

/// Opens an [`EvmRpc`] for one network, signing with the given credentials if any.
#[async_trait]
pub trait EvmConnector: Send + Sync {
    async fn connect(
        &self,
        network: &NetworkDescriptor,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn EvmRpc>>;
}

pub struct AlloyConnector;

#[async_trait]
impl EvmConnector for AlloyConnector {
    async fn connect(
        &self,
        network: &NetworkDescriptor,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn EvmRpc>> {
        let rpc = match credentials {
            Some(credentials) => {
                let signer = signer_from_private_key(credentials)?;
                let address = signer.address();
                let provider = ProviderBuilder::new()
                    .wallet(signer)
                    .connect(&network.rpc_endpoint)
                    .await?
                    .erased();
                AlloyEvmRpc::new(provider, Some(address))
            }
            None => {
                let provider = ProviderBuilder::new()
                    .connect(&network.rpc_endpoint)
                    .await?
                    .erased();
                AlloyEvmRpc::new(provider, None)
            }
        };

        Ok(Arc::new(rpc))
    }
}

pub struct AlloyEvmRpc {
    provider: DynProvider,
    signer: Option<Address>,
}

impl AlloyEvmRpc {
    pub fn new(provider: DynProvider, signer: Option<Address>) -> Self {
        Self { provider, signer }
    }

    fn token(&self, address: Address) -> LaunchpadToken::LaunchpadTokenInstance<DynProvider> {
        LaunchpadToken::new(address, self.provider.clone())
    }
}

fn confirmed(receipt: TransactionReceipt) -> Result<TransactionReceipt> {
    if receipt.status() {
        Ok(receipt)
    } else {
        Err(anyhow!(
            "Transaction {} reverted",
            receipt.transaction_hash
        ))
    }
}

#[async_trait]
impl EvmRpc for AlloyEvmRpc {
    fn signer_address(&self) -> Option<Address> {
        self.signer
    }

    async fn deploy_contract(&self, code: Bytes) -> Result<(Address, TxHash)> {
        let tx = TransactionRequest::default().with_deploy_code(code);
        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        let receipt = confirmed(receipt)?;

        let address = receipt
            .contract_address
            .ok_or_else(|| anyhow!("Deployment receipt has no contract address"))?;
        Ok((address, receipt.transaction_hash))
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata> {
        let contract = self.token(token);
        Ok(TokenMetadata {
            name: contract.name().call().await?,
            symbol: contract.symbol().call().await?,
            decimals: contract.decimals().call().await?,
            total_supply: contract.totalSupply().call().await?,
            fee_collector: contract.feeCollector().call().await?,
        })
    }

    async fn native_balance(&self, owner: Address) -> Result<U256> {
        Ok(self.provider.get_balance(owner).await?)
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256> {
        Ok(self.token(token).balanceOf(owner).call().await?)
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        Ok(self.token(token).allowance(owner, spender).call().await?)
    }

    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let receipt = self
            .token(token)
            .approve(spender, amount)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(confirmed(receipt)?.transaction_hash)
    }

    async fn router_factory(&self, router: Address) -> Result<Address> {
        let router = IUniswapV2Router02::new(router, self.provider.clone());
        Ok(router.factory().call().await?)
    }

    async fn router_weth(&self, router: Address) -> Result<Address> {
        let router = IUniswapV2Router02::new(router, self.provider.clone());
        Ok(router.WETH().call().await?)
    }

    async fn get_pair(&self, factory: Address, token_a: Address, token_b: Address) -> Result<Address> {
        let factory = IUniswapV2Factory::new(factory, self.provider.clone());
        Ok(factory.getPair(token_a, token_b).call().await?)
    }

    async fn add_liquidity_eth(&self, router: Address, params: AddLiquidityEth) -> Result<TxHash> {
        let router = IUniswapV2Router02::new(router, self.provider.clone());
        let receipt = router
            .addLiquidityETH(
                params.token,
                params.amount_token_desired,
                params.amount_token_min,
                params.amount_eth_min,
                params.to,
                params.deadline,
            )
            .value(params.value)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(confirmed(receipt)?.transaction_hash)
    }

    async fn token_owner(&self, token: Address) -> Result<Address> {
        Ok(self.token(token).owner().call().await?)
    }

    async fn is_excluded_from_fee(&self, token: Address, account: Address) -> Result<bool> {
        Ok(self.token(token).isExcludedFromFee(account).call().await?)
    }

    async fn set_fee_exclusion(&self, token: Address, account: Address, excluded: bool) -> Result<TxHash> {
        let receipt = self
            .token(token)
            .setFeeExclusion(account, excluded)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(confirmed(receipt)?.transaction_hash)
    }
}
