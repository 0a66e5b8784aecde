//! On-demand liquidation check.
//!
//! Nothing here runs on a schedule: a position that drifts below the
//! threshold stays open until some caller, typically an external keeper,
//! asks for it to be checked.

use crate::admin::{read_params, require_initialized};
use crate::error::LendingError;
use crate::event::emit_loan_liquidated;
use crate::loan_info::{read_loan, write_loan, Loan};
use crate::portfolio::{read_portfolio, write_portfolio};
use crate::price::read_collateral_price;
use crate::risk::collateral_ratio;
use log::{debug, warn};
use soroban_sdk::{Address, Env};

/// Current collateral ratio of `loan` at the stored collateral price.
fn current_ratio(env: &Env, loan: &Loan) -> Result<u128, LendingError> {
    let price = read_collateral_price(env)?;
    collateral_ratio(loan.collateral_amount, loan.loan_amount, price)
}

/// Liquidates `loan_id` if its ratio is at or below the liquidation
/// threshold. Returns whether the loan was liquidated.
pub fn check_and_liquidate(
    env: &Env,
    keeper: Address,
    loan_id: u64,
) -> Result<bool, LendingError> {
    keeper.require_auth();

    let params = require_initialized(env)?;
    params.check_loan_id(loan_id)?;

    let mut loan = read_loan(env, loan_id).ok_or(LendingError::LoanNotFound)?;
    if !loan.is_active() {
        return Err(LendingError::LoanNotActive);
    }

    let ratio = current_ratio(env, &loan)?;
    if ratio > params.liquidation_threshold as u128 {
        debug!(
            "loan {} healthy: ratio {} above threshold {}",
            loan_id, ratio, params.liquidation_threshold
        );
        return Ok(false);
    }

    // Only the liquidated id leaves the index; the borrower's other active
    // loans stay tracked.
    let borrower = loan.borrower.clone();
    let portfolio =
        read_portfolio(env, &borrower).map(|portfolio| portfolio.without_loan(loan_id));

    loan.mark_liquidated();
    write_loan(env, loan_id, &loan);
    if let Some(portfolio) = portfolio {
        write_portfolio(env, &borrower, &portfolio);
    }

    soroban_sdk::log!(env, "loan liquidated", loan_id, ratio);
    warn!(
        "loan {} liquidated: ratio {} at or below threshold {}",
        loan_id, ratio, params.liquidation_threshold
    );
    emit_loan_liquidated(env, loan_id, &borrower, &keeper, ratio);
    Ok(true)
}

pub fn loan_health(env: &Env, loan_id: u64) -> Result<u128, LendingError> {
    read_params(env).unwrap_or_default().check_loan_id(loan_id)?;
    let loan = read_loan(env, loan_id).ok_or(LendingError::LoanNotFound)?;
    if !loan.is_active() {
        return Err(LendingError::LoanNotActive);
    }
    current_ratio(env, &loan)
}
