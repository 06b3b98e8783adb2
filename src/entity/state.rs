use crate::entity::{BackendFamily, DeploymentRequest};
use crate::validation::parse_blockchain;

/// Questions of the launch wizard, in the order they are asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Blockchain,
    Network,
    Name,
    Symbol,
    Decimals,
    Supply,
    Credentials,
    CreatePool,
    DexChoice,
    PoolTokenAmount,
    PoolBaseAmount,
}

/// Where an invocation stands once the request has been scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardState {
    Awaiting(WizardStep),
    Deploying,
}

pub struct StepRule {
    pub step: WizardStep,
    pub is_applicable: fn(&DeploymentRequest) -> bool,
    pub is_answered: fn(&DeploymentRequest) -> bool,
}

fn always(_: &DeploymentRequest) -> bool {
    true
}

fn pool_requested(request: &DeploymentRequest) -> bool {
    request.wants_pool()
}

fn solana_pool_requested(request: &DeploymentRequest) -> bool {
    family_of(request) == Some(BackendFamily::Solana) && request.wants_pool()
}

/// Fixed precedence of the wizard. The DEX row only exists on the Solana pool branch.
pub const STEP_TABLE: [StepRule; 11] = [
    StepRule {
        step: WizardStep::Blockchain,
        is_applicable: always,
        is_answered: |r| family_of(r).is_some(),
    },
    StepRule {
        step: WizardStep::Network,
        is_applicable: always,
        is_answered: |r| r.network().is_some(),
    },
    StepRule {
        step: WizardStep::Name,
        is_applicable: always,
        is_answered: |r| r.name().is_some(),
    },
    StepRule {
        step: WizardStep::Symbol,
        is_applicable: always,
        is_answered: |r| r.symbol().is_some(),
    },
    StepRule {
        step: WizardStep::Decimals,
        is_applicable: always,
        is_answered: |r| r.decimals.is_some(),
    },
    StepRule {
        step: WizardStep::Supply,
        is_applicable: always,
        is_answered: |r| r.supply().is_some(),
    },
    StepRule {
        step: WizardStep::Credentials,
        is_applicable: always,
        is_answered: |r| r.credentials().is_some(),
    },
    StepRule {
        step: WizardStep::CreatePool,
        is_applicable: always,
        is_answered: |r| r.create_pool().is_some(),
    },
    StepRule {
        step: WizardStep::DexChoice,
        is_applicable: solana_pool_requested,
        is_answered: |r| r.solana_dex().is_some(),
    },
    StepRule {
        step: WizardStep::PoolTokenAmount,
        is_applicable: pool_requested,
        is_answered: |r| r.token_for_pool().is_some(),
    },
    StepRule {
        step: WizardStep::PoolBaseAmount,
        is_applicable: pool_requested,
        is_answered: |r| r.base_for_pool().is_some(),
    },
];

pub fn family_of(request: &DeploymentRequest) -> Option<BackendFamily> {
    request
        .blockchain()
        .and_then(|value| parse_blockchain(value).ok())
}

/// First applicable question that has no answer yet.
pub fn next_step(request: &DeploymentRequest) -> Option<WizardStep> {
    STEP_TABLE
        .iter()
        .find(|rule| (rule.is_applicable)(request) && !(rule.is_answered)(request))
        .map(|rule| rule.step)
}

pub fn next_state(request: &DeploymentRequest) -> WizardState {
    match next_step(request) {
        Some(step) => WizardState::Awaiting(step),
        None => WizardState::Deploying,
    }
}

/// 1-based position of `step` and the number of questions on the current branch.
///
/// Until the pool question is answered the pool branch is counted, so the total
/// only shrinks once the user declines.
pub fn step_position(request: &DeploymentRequest, step: WizardStep) -> (usize, usize) {
    let pool_open = request.create_pool().is_none() || request.wants_pool();
    let solana = family_of(request) == Some(BackendFamily::Solana);

    let counted: Vec<WizardStep> = STEP_TABLE
        .iter()
        .map(|rule| rule.step)
        .filter(|s| match s {
            WizardStep::DexChoice => pool_open && solana,
            WizardStep::PoolTokenAmount | WizardStep::PoolBaseAmount => pool_open,
            _ => true,
        })
        .collect();

    let index = counted
        .iter()
        .position(|s| *s == step)
        .map(|i| i + 1)
        .unwrap_or(counted.len());

    (index, counted.len())
}
