use soroban_sdk::{contracttype, Address, Env};

use crate::error::LendingError;
use crate::storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

/// Floor for both risk ratios, in percent.
pub const MIN_RISK_RATIO: u32 = 110;
/// Ceiling for the interest and fee rates, in percent.
pub const MAX_RATE: u32 = 100;

/// Platform-wide risk parameters and running totals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    pub initialized: bool,
    pub minimum_collateral_ratio: u32,
    pub liquidation_threshold: u32,
    pub platform_fee_rate: u32,
    pub base_interest_rate: u32,
    pub total_collateral_locked: u128,
    pub total_loans_issued: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initialized: false,
            minimum_collateral_ratio: 150,
            liquidation_threshold: 120,
            platform_fee_rate: 1,
            base_interest_rate: 5,
            total_collateral_locked: 0,
            total_loans_issued: 0,
        }
    }
}

impl Params {
    /// Loan ids are handed out sequentially, so anything outside
    /// `1..=total_loans_issued` cannot name a loan.
    pub fn check_loan_id(&self, loan_id: u64) -> Result<(), LendingError> {
        if loan_id == 0 || loan_id > self.total_loans_issued {
            return Err(LendingError::InvalidLoanId);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    pub initialized: bool,
    pub total_collateral_locked: u128,
    pub total_loans_issued: u64,
    pub minimum_collateral_ratio: u32,
    pub liquidation_threshold: u32,
    pub platform_fee_rate: u32,
    pub base_interest_rate: u32,
}

impl From<Params> for PlatformStats {
    fn from(params: Params) -> Self {
        Self {
            initialized: params.initialized,
            total_collateral_locked: params.total_collateral_locked,
            total_loans_issued: params.total_loans_issued,
            minimum_collateral_ratio: params.minimum_collateral_ratio,
            liquidation_threshold: params.liquidation_threshold,
            platform_fee_rate: params.platform_fee_rate,
            base_interest_rate: params.base_interest_rate,
        }
    }
}

pub fn has_administrator(e: &Env) -> bool {
    let key = DataKey::Admin;
    e.storage().instance().has(&key)
}

pub fn read_administrator(e: &Env) -> Option<Address> {
    let key = DataKey::Admin;
    e.storage().instance().get(&key)
}

pub fn write_administrator(e: &Env, id: &Address) {
    let key = DataKey::Admin;
    e.storage().instance().set(&key, id);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Fails unless `caller` is the recorded owner and has signed the call.
pub fn require_owner(e: &Env, caller: &Address) -> Result<Address, LendingError> {
    let admin = read_administrator(e).ok_or(LendingError::NotInitialized)?;
    if admin != *caller {
        return Err(LendingError::NotOwner);
    }
    caller.require_auth();
    Ok(admin)
}

pub fn read_params(e: &Env) -> Option<Params> {
    let key = DataKey::Params;
    e.storage().instance().get(&key)
}

pub fn write_params(e: &Env, params: &Params) {
    let key = DataKey::Params;
    e.storage().instance().set(&key, params);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn require_initialized(e: &Env) -> Result<Params, LendingError> {
    read_params(e)
        .filter(|params| params.initialized)
        .ok_or(LendingError::NotInitialized)
}

pub fn validate_risk_ratio(value: u32) -> bool {
    value >= MIN_RISK_RATIO
}
