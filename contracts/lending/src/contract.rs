//! Collateralized lending ledger: BTC-backed loans with simple per-block
//! interest and an on-demand liquidation check.

use crate::actions::{deposit, governance, liquidation, loan};
use crate::admin::{read_params, PlatformStats};
use crate::error::LendingError;
use crate::loan_info::{read_loan, Loan};
use crate::portfolio::{read_portfolio, Portfolio};
use crate::price::{read_price, supported_assets};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

#[contract]
pub struct LendingContract;

#[contractimpl]
impl LendingContract {
    pub fn initialize(e: Env, owner: Address) -> Result<(), LendingError> {
        governance::initialize(&e, owner)
    }

    pub fn set_owner(e: Env, caller: Address, new_owner: Address) -> Result<(), LendingError> {
        governance::set_owner(&e, caller, new_owner)
    }

    pub fn deposit_collateral(e: Env, caller: Address, amount: u128) -> Result<(), LendingError> {
        deposit::deposit_collateral(&e, caller, amount)
    }

    pub fn request_loan(
        e: Env,
        caller: Address,
        collateral: u128,
        loan_amount: u128,
    ) -> Result<u64, LendingError> {
        loan::request_loan(&e, caller, collateral, loan_amount)
    }

    pub fn repay_loan(
        e: Env,
        caller: Address,
        loan_id: u64,
        amount: u128,
    ) -> Result<(), LendingError> {
        loan::repay_loan(&e, caller, loan_id, amount)
    }

    /// Open to any caller so that external keepers can trigger liquidation.
    pub fn check_and_liquidate(
        e: Env,
        caller: Address,
        loan_id: u64,
    ) -> Result<bool, LendingError> {
        liquidation::check_and_liquidate(&e, caller, loan_id)
    }

    pub fn update_collateral_ratio(
        e: Env,
        caller: Address,
        new_ratio: u32,
    ) -> Result<(), LendingError> {
        governance::update_collateral_ratio(&e, caller, new_ratio)
    }

    pub fn update_liquidation_threshold(
        e: Env,
        caller: Address,
        new_threshold: u32,
    ) -> Result<(), LendingError> {
        governance::update_liquidation_threshold(&e, caller, new_threshold)
    }

    pub fn update_base_interest_rate(
        e: Env,
        caller: Address,
        new_rate: u32,
    ) -> Result<(), LendingError> {
        governance::update_base_interest_rate(&e, caller, new_rate)
    }

    pub fn update_platform_fee_rate(
        e: Env,
        caller: Address,
        new_rate: u32,
    ) -> Result<(), LendingError> {
        governance::update_platform_fee_rate(&e, caller, new_rate)
    }

    pub fn update_price_feed(
        e: Env,
        caller: Address,
        asset: Symbol,
        price: u128,
    ) -> Result<(), LendingError> {
        governance::update_price_feed(&e, caller, asset, price)
    }

    pub fn get_loan_details(e: Env, loan_id: u64) -> Option<Loan> {
        read_loan(&e, loan_id)
    }

    pub fn get_user_loans(e: Env, user: Address) -> Option<Portfolio> {
        read_portfolio(&e, &user)
    }

    pub fn get_platform_stats(e: Env) -> PlatformStats {
        read_params(&e).unwrap_or_default().into()
    }

    pub fn get_valid_assets(e: Env) -> Vec<Symbol> {
        supported_assets(&e)
    }

    pub fn get_price(e: Env, asset: Symbol) -> Option<u128> {
        read_price(&e, &asset)
    }

    pub fn get_amount_owed(e: Env, loan_id: u64) -> Result<u128, LendingError> {
        loan::amount_owed(&e, loan_id)
    }

    pub fn get_loan_health(e: Env, loan_id: u64) -> Result<u128, LendingError> {
        liquidation::loan_health(&e, loan_id)
    }
}
