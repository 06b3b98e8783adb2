use crate::entity::{BackendFamily, DeploymentRequest, NetworkDescriptor, WizardStep};

/// What a prompt needs to know beyond the step itself.
pub struct PromptContext<'a> {
    pub request: &'a DeploymentRequest,
    pub family: Option<BackendFamily>,
    pub position: (usize, usize),
    /// Networks of the chosen family, for the network question.
    pub networks: Vec<NetworkDescriptor>,
    /// The chosen network once it resolves.
    pub network: Option<NetworkDescriptor>,
    pub note: Option<String>,
}

impl PromptContext<'_> {
    fn native_symbol(&self) -> String {
        match (&self.network, self.family) {
            (Some(network), _) => network.native_symbol.clone(),
            (None, Some(BackendFamily::Solana)) => "SOL".to_string(),
            _ => "ETH".to_string(),
        }
    }
}

pub trait WizardView: Send + Sync {
    fn prompt(&self, step: WizardStep, context: &PromptContext<'_>) -> String;
}

pub struct MarkdownWizardView;

impl MarkdownWizardView {
    pub fn new() -> Self {
        Self
    }

    fn header(context: &PromptContext<'_>, title: &str) -> String {
        let (index, total) = context.position;
        format!("**Step {}/{}: {}**", index, total, title)
    }

    fn blockchain(context: &PromptContext<'_>) -> String {
        let note = context
            .note
            .as_ref()
            .map(|n| format!("⚠️ {}\n\n", n))
            .unwrap_or_default();
        format!(
            "🚀 **Welcome to OpenCoins Launchpad!**\n\n\
             {}Let's deploy your token step by step.\n\n\
             {}\n\n\
             Which blockchain do you want to use?\n\
             - Type **\"evm\"** for Ethereum, BSC, Polygon, Arbitrum, etc.\n\
             - Type **\"solana\"** for Solana\n\n\
             💡 Tip: EVM chains are more common, Solana has lower fees.",
            note,
            Self::header(context, "Choose Blockchain")
        )
    }

    fn network(context: &PromptContext<'_>) -> String {
        let family = context.family.unwrap_or(BackendFamily::Evm);
        let networks = context
            .networks
            .iter()
            .map(|n| {
                let hint = if n.is_testnet { ", testnet" } else { "" };
                format!("  - {} ({}{})", n.key, n.display_name, hint)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let tip = match family {
            BackendFamily::Evm => "**sepolia**",
            BackendFamily::Solana => "**devnet**",
        };
        format!(
            "✅ Great! You chose **{}**\n\n\
             {}\n\n\
             Available networks:\n{}\n\n\
             💡 Tip: Use {} for testing first!\n\n\
             Which network?",
            family.as_str().to_uppercase(),
            Self::header(context, "Choose Network"),
            networks,
            tip
        )
    }

    fn decimals(context: &PromptContext<'_>) -> String {
        let family = context.family.unwrap_or(BackendFamily::Evm);
        let default = family.default_decimals();
        format!(
            "✅ Symbol: **{}**\n\n\
             {}\n\n\
             How many decimal places for your token?\n\n\
             - Most {} tokens use **{}** decimals (maximum {})\n\
             - Decimals work like cents for dollars (1.00 = 1 dollar + 2 decimals)\n\n\
             💡 Recommended: **{}**\n\n\
             Enter decimals (or {} for the default):",
            context.request.symbol().unwrap_or_default(),
            Self::header(context, "Decimals"),
            family,
            default,
            family.max_decimals(),
            default,
            default
        )
    }

    fn credentials(context: &PromptContext<'_>) -> String {
        let supply = context.request.supply().unwrap_or_default();
        match context.family.unwrap_or(BackendFamily::Evm) {
            BackendFamily::Evm => {
                let gas = match &context.network {
                    Some(n) if n.is_testnet => format!("test {}", n.native_symbol),
                    Some(n) => n.native_symbol.clone(),
                    None => "native currency".to_string(),
                };
                format!(
                    "✅ Supply: **{}** tokens\n\n\
                     {}\n\n\
                     I need your **private key** to deploy the contract.\n\n\
                     ⚠️ **SECURITY WARNING:**\n\
                     - Your key is used ONLY for this deployment\n\
                     - It's NOT stored anywhere\n\
                     - Make sure your wallet has {} for gas fees\n\n\
                     Format: `0x...` (64 hex characters)\n\n\
                     Paste your private key:",
                    supply,
                    Self::header(context, "Deployment Credentials"),
                    gas
                )
            }
            BackendFamily::Solana => format!(
                "✅ Supply: **{}** tokens\n\n\
                 {}\n\n\
                 I need your **Solana keypair** in JSON format.\n\n\
                 Find it at: `~/.config/solana/id.json`\n\n\
                 ⚠️ **SECURITY WARNING:**\n\
                 - Your keypair is used ONLY for this deployment\n\
                 - It's NOT stored anywhere\n\
                 - Your wallet needs SOL for rent + deployment\n\n\
                 Format: `[1,2,3,...]` (JSON array of 64 bytes)\n\n\
                 Paste your keypair:",
                supply,
                Self::header(context, "Deployment Credentials")
            ),
        }
    }

    fn create_pool(context: &PromptContext<'_>) -> String {
        let (dex, funds) = match context.family.unwrap_or(BackendFamily::Evm) {
            BackendFamily::Evm => (
                "DEX: Uniswap V2 and compatible forks".to_string(),
                context.native_symbol(),
            ),
            BackendFamily::Solana => (
                "DEX: Raydium, Meteora, or Jupiter (manual setup via UI)".to_string(),
                "SOL".to_string(),
            ),
        };
        format!(
            "✅ Credentials received\n\n\
             {}\n\n\
             Would you like to create a liquidity pool for your token?\n\n\
             💡 **Why create a pool?**\n\
             - Allows users to trade your token on DEXes\n\
             - Provides initial liquidity for price discovery\n\n\
             {}\n\n\
             ⚠️ **Requirements:**\n\
             - Additional funds for liquidity ({})\n\
             - You'll need some of your tokens\n\n\
             Do you want to create a liquidity pool?\n\
             Type **\"yes\"** or **\"no\"**",
            Self::header(context, "Liquidity Pool Creation (Optional)"),
            dex,
            funds
        )
    }

    fn dex_choice(context: &PromptContext<'_>) -> String {
        format!(
            "✅ Great! Let's set up your liquidity pool.\n\n\
             {}\n\n\
             Which DEX would you like to use for your liquidity pool?\n\n\
             🔹 **Raydium** - Most popular, highest liquidity\n\
             \x20  - Website: https://raydium.io/\n\n\
             🔹 **Meteora** - Dynamic liquidity pools\n\
             \x20  - Website: https://meteora.ag/\n\n\
             🔹 **Jupiter** - Aggregator with pool creation\n\
             \x20  - Website: https://jup.ag/\n\n\
             💡 Tip: Raydium is recommended for most users\n\n\
             Which DEX? Type **\"raydium\"**, **\"meteora\"**, or **\"jupiter\"**",
            Self::header(context, "Choose DEX (Solana)")
        )
    }

    fn pool_token_amount(context: &PromptContext<'_>) -> String {
        format!(
            "✅ Great! Let's set up your liquidity pool.\n\n\
             {}\n\n\
             How many tokens do you want to add to the liquidity pool?\n\n\
             Example: If you created 1,000,000 tokens, you might add 500,000 (50%) to the pool\n\n\
             💡 Tip: Common ranges are 30-70% of total supply\n\n\
             ⚠️ These tokens will be locked in the pool for liquidity\n\n\
             Token amount for pool?",
            Self::header(context, "Token Amount for Pool")
        )
    }

    fn pool_base_amount(context: &PromptContext<'_>) -> String {
        let currency = context.native_symbol();
        format!(
            "✅ Pool tokens: **{}**\n\n\
             {}\n\n\
             How much {} do you want to pair with your tokens?\n\n\
             Example: \"0.5\" for 0.5 {}\n\n\
             💡 This determines the initial price of your token:\n\
             - More {} = Higher initial price\n\
             - Less {} = Lower initial price\n\n\
             ⚠️ Make sure you have enough {} in your wallet!\n\n\
             {} amount for pool?",
            context.request.token_for_pool().unwrap_or_default(),
            Self::header(context, &format!("{} Amount for Pool", currency)),
            currency,
            currency,
            currency,
            currency,
            currency,
            currency
        )
    }
}

impl Default for MarkdownWizardView {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardView for MarkdownWizardView {
    fn prompt(&self, step: WizardStep, context: &PromptContext<'_>) -> String {
        let request = context.request;
        match step {
            WizardStep::Blockchain => Self::blockchain(context),
            WizardStep::Network => Self::network(context),
            WizardStep::Name => format!(
                "✅ Network: **{}**\n\n\
                 {}\n\n\
                 What's your token's full name?\n\
                 Examples: \"My Awesome Token\", \"SuperCoin\", \"Community Token\"\n\n\
                 - Up to 100 characters: letters, numbers, spaces, '-' and '_'\n\n\
                 This will appear in wallets and explorers.",
                context
                    .network
                    .as_ref()
                    .map(|n| n.display_name.as_str())
                    .unwrap_or_else(|| request.network().unwrap_or_default()),
                Self::header(context, "Token Name")
            ),
            WizardStep::Symbol => format!(
                "✅ Token Name: **{}**\n\n\
                 {}\n\n\
                 What's your token symbol (ticker)?\n\
                 Examples: \"MAT\", \"SUPER\", \"COM\"\n\n\
                 - Usually 3-5 characters, at most 20\n\
                 - UPPERCASE letters and numbers only\n\
                 - This is like \"BTC\" for Bitcoin\n\n\
                 Your symbol?",
                request.name().unwrap_or_default(),
                Self::header(context, "Token Symbol")
            ),
            WizardStep::Decimals => Self::decimals(context),
            WizardStep::Supply => format!(
                "✅ Decimals: **{}**\n\n\
                 {}\n\n\
                 How many tokens do you want to create?\n\
                 Examples: \"1000000\" (1 million), \"1000000000\" (1 billion)\n\n\
                 ⚠️ This CANNOT be changed after deployment!\n\n\
                 💡 Tip: Consider your tokenomics carefully\n\n\
                 Total supply?",
                request.decimals.unwrap_or_default(),
                Self::header(context, "Total Supply")
            ),
            WizardStep::Credentials => Self::credentials(context),
            WizardStep::CreatePool => Self::create_pool(context),
            WizardStep::DexChoice => Self::dex_choice(context),
            WizardStep::PoolTokenAmount => Self::pool_token_amount(context),
            WizardStep::PoolBaseAmount => Self::pool_base_amount(context),
        }
    }
}
