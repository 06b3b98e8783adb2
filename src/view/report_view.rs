use crate::entity::{BackendFamily, LaunchpadError, ManualPoolSetup, PoolOutcome, PoolResult};
use crate::interactor::LaunchOutcome;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub trait ReportView: Send + Sync {
    /// Full wizard report: deployment, then pool, then next steps.
    fn launch_report(&self, outcome: &LaunchOutcome) -> String;

    /// Short report of the direct deploy tools.
    fn deployment_summary(&self, outcome: &LaunchOutcome) -> String;

    fn deployment_failed(&self, error: &LaunchpadError) -> String;

    fn error(&self, error: &LaunchpadError) -> String;
}

pub struct MarkdownReportView;

impl MarkdownReportView {
    pub fn new() -> Self {
        Self
    }

    fn deployment_section(outcome: &LaunchOutcome) -> String {
        let deployment = &outcome.deployment;
        let (address_label, tx_label, signer_label, explorer_label) = match outcome.family {
            BackendFamily::Evm => (
                "Contract Address",
                "Transaction Hash",
                "Deployer",
                "View on Block Explorer",
            ),
            BackendFamily::Solana => (
                "Mint Address",
                "Transaction Signature",
                "Authority",
                "View on Solana Explorer",
            ),
        };

        format!(
            "🎉 **TOKEN DEPLOYED SUCCESSFULLY!** 🎉\n\n\
             Your token **{} ({})** is now live on **{}**!\n\n\
             📋 **DEPLOYMENT DETAILS:**\n\
             {}\n\
             📍 **{}:**\n   `{}`\n\n\
             📝 **{}:**\n   `{}`\n\n\
             🌐 **Network:** {}\n\n\
             👤 **{}:** `{}`\n\n\
             🔗 **{}:**\n   {}\n\n\
             {}\n\n\
             ⚠️ **LAUNCHPAD SERVICE FEE:**\n\
             {}% of all token transfers will go to:\n\
             `{}`\n\n\
             This is the service fee for using OpenCoins Launchpad.",
            outcome.spec.name,
            outcome.spec.symbol,
            deployment.network_display_name,
            RULE,
            address_label,
            deployment.asset_address,
            tx_label,
            deployment.transaction_id,
            deployment.network_display_name,
            signer_label,
            deployment.signer_address,
            explorer_label,
            deployment.explorer_url,
            RULE,
            outcome.fee.fee_percentage,
            outcome.fee.collector_for(outcome.family)
        )
    }

    fn pool_created_section(pool: &PoolResult, symbol: &str) -> String {
        let approval = pool
            .approval_transaction
            .as_ref()
            .map(|tx| format!("\n✍️ **Approval:** `{}`\n", tx))
            .unwrap_or_default();
        let pair = pool
            .pool_address
            .as_deref()
            .map(|address| format!("`{}`", address))
            .unwrap_or_else(|| "unknown (check the transaction on the explorer)".to_string());
        format!(
            "💧 **LIQUIDITY POOL CREATED!**\n\n\
             📍 **Pair Address:**\n   {}\n\n\
             📝 **Transaction:**\n   `{}`\n\
             {}\n\
             💰 **Pool Composition:**\n\
             \x20  - {} {}\n\
             \x20  - {} {}\n\n\
             🔗 **View Pool:**\n   {}\n\n\
             🛡️ {}\n\n\
             ✅ Your token is now tradeable on DEXes!",
            pair,
            pool.transaction_id,
            approval,
            pool.token_amount,
            symbol,
            pool.base_amount,
            pool.base_symbol,
            pool.explorer_url,
            pool.fee_exemption.note()
        )
    }

    fn manual_setup_section(setup: &ManualPoolSetup, symbol: &str) -> String {
        let dex = setup.dex.display_name();
        format!(
            "💧 **{} POOL - MANUAL SETUP REQUIRED**\n\n\
             ✅ Your wallet holds enough tokens and {} for this pool.\n\n\
             Please create your pool manually using the {} UI:\n\n\
             🔗 **{} Pool Creation:**\n   {}\n\n\
             📝 **Your Pool Details:**\n\
             \x20  - Token: `{}`\n\
             \x20  - Token Amount: {} {}\n\
             \x20  - {} Amount: {} {}\n\n\
             💡 {}",
            dex.to_uppercase(),
            setup.base_symbol,
            dex,
            dex,
            setup.setup_url,
            setup.mint_address,
            setup.token_amount,
            symbol,
            setup.base_symbol,
            setup.base_amount,
            setup.base_symbol,
            setup.guidance
        )
    }

    fn pool_failed_section(error: &LaunchpadError) -> String {
        format!(
            "⚠️ **POOL CREATION FAILED**\n\n\
             Error: {}\n\n\
             Your token was deployed successfully, but the pool creation failed.\n\
             You can create the pool manually later using a DEX interface.",
            error
        )
    }

    fn next_steps(outcome: &LaunchOutcome) -> String {
        let pool_ready = matches!(outcome.pool, Some(Ok(PoolOutcome::Created(_))));
        let manual_pool = matches!(outcome.pool, Some(Ok(PoolOutcome::ManualSetupRequired(_))));
        let (verify, wallets) = match outcome.family {
            BackendFamily::Evm => ("Verify contract on block explorer", "Add token to MetaMask/wallets"),
            BackendFamily::Solana => ("Verify on Solana Explorer", "Add token to Phantom/Solflare"),
        };
        let liquidity = if pool_ready {
            "Pool created - Token is tradeable!"
        } else if manual_pool {
            "Create the pool in the DEX interface"
        } else {
            "Set up liquidity (if creating DEX token)"
        };

        format!(
            "💡 **NEXT STEPS:**\n\
             1. ✅ {}\n\
             2. ✅ {}\n\
             3. ✅ {}\n\
             4. ✅ Announce to your community!\n\n\
             🎊 **Congratulations on your token launch!**",
            verify, wallets, liquidity
        )
    }
}

impl Default for MarkdownReportView {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportView for MarkdownReportView {
    fn launch_report(&self, outcome: &LaunchOutcome) -> String {
        let mut sections = vec![Self::deployment_section(outcome)];

        match &outcome.pool {
            Some(Ok(PoolOutcome::Created(pool))) => {
                sections.push(Self::pool_created_section(pool, &outcome.spec.symbol))
            }
            Some(Ok(PoolOutcome::ManualSetupRequired(setup))) => {
                sections.push(Self::manual_setup_section(setup, &outcome.spec.symbol))
            }
            Some(Err(error)) => sections.push(Self::pool_failed_section(error)),
            None => {}
        }

        sections.push(Self::next_steps(outcome));
        sections.join(&format!("\n\n{}\n\n", RULE))
    }

    fn deployment_summary(&self, outcome: &LaunchOutcome) -> String {
        let deployment = &outcome.deployment;
        let label = match outcome.family {
            BackendFamily::Evm => "Address",
            BackendFamily::Solana => "Mint",
        };
        format!(
            "✅ {} ({}) deployed!\n\n\
             📍 {}: `{}`\n\
             📝 TX: `{}`\n\
             🌐 Network: {}\n\
             🔗 Explorer: {}\n\n\
             ⚠️ Fee: {}% → {}",
            outcome.spec.name,
            outcome.spec.symbol,
            label,
            deployment.asset_address,
            deployment.transaction_id,
            deployment.network_display_name,
            deployment.explorer_url,
            outcome.fee.fee_percentage,
            outcome.fee.collector_for(outcome.family)
        )
    }

    fn deployment_failed(&self, error: &LaunchpadError) -> String {
        let hint = if error.is_pre_submission() {
            "Nothing was submitted to the network."
        } else {
            "The network rejected or did not confirm the transaction."
        };
        format!(
            "❌ **DEPLOYMENT FAILED**\n\n\
             Error: {}\n\n\
             {}\n\n\
             💡 **Common issues:**\n\
             - Insufficient gas/SOL in wallet\n\
             - Invalid private key/keypair format\n\
             - Network connection issues\n\
             - Incorrect network selection\n\n\
             Please check and try again.",
            error, hint
        )
    }

    fn error(&self, error: &LaunchpadError) -> String {
        format!("❌ Error: {}", error)
    }
}
