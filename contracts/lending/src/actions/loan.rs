//! Loan origination and repayment.

use crate::admin::{read_params, require_initialized, write_params};
use crate::error::LendingError;
use crate::event::{emit_loan_originated, emit_loan_repaid};
use crate::loan_info::{read_loan, write_loan, Loan, LoanStatus};
use crate::portfolio::{read_portfolio, write_portfolio, Portfolio};
use crate::price::read_collateral_price;
use crate::risk::collateral_ratio;
use log::{debug, info};
use soroban_sdk::{Address, Env};

pub fn request_loan(
    env: &Env,
    borrower: Address,
    collateral: u128,
    loan_amount: u128,
) -> Result<u64, LendingError> {
    borrower.require_auth();

    let mut params = require_initialized(env)?;
    if collateral == 0 || loan_amount == 0 {
        return Err(LendingError::InvalidAmount);
    }

    let price = read_collateral_price(env)?;
    let ratio = collateral_ratio(collateral, loan_amount, price)?;
    if ratio < params.minimum_collateral_ratio as u128 {
        debug!(
            "loan request rejected: ratio {} below minimum {}",
            ratio, params.minimum_collateral_ratio
        );
        return Err(LendingError::InsufficientCollateral);
    }

    let loan_id = params
        .total_loans_issued
        .checked_add(1)
        .ok_or(LendingError::MathOverflow)?;
    let portfolio = read_portfolio(env, &borrower)
        .unwrap_or_else(|| Portfolio::new(env))
        .with_loan(loan_id)?;

    let height = env.ledger().sequence();
    let loan = Loan {
        borrower: borrower.clone(),
        collateral_amount: collateral,
        loan_amount,
        interest_rate: params.base_interest_rate,
        start_height: height,
        last_interest_calc: height,
        status: LoanStatus::Active,
    };

    write_loan(env, loan_id, &loan);
    write_portfolio(env, &borrower, &portfolio);
    params.total_loans_issued = loan_id;
    write_params(env, &params);

    soroban_sdk::log!(env, "loan originated", loan_id, ratio);
    info!("loan {} originated at height {} with ratio {}", loan_id, height, ratio);
    emit_loan_originated(env, loan_id, &loan);
    Ok(loan_id)
}

pub fn repay_loan(
    env: &Env,
    caller: Address,
    loan_id: u64,
    amount: u128,
) -> Result<(), LendingError> {
    caller.require_auth();

    let mut params = read_params(env).unwrap_or_default();
    params.check_loan_id(loan_id)?;

    let mut loan = read_loan(env, loan_id).ok_or(LendingError::LoanNotFound)?;
    if !loan.is_active() {
        return Err(LendingError::LoanNotActive);
    }
    if loan.borrower != caller {
        return Err(LendingError::NotBorrower);
    }

    let height = env.ledger().sequence();
    let owed = loan.amount_owed(height)?;
    if amount < owed {
        debug!("repayment of {} for loan {} short of {}", amount, loan_id, owed);
        return Err(LendingError::InsufficientRepayment);
    }

    // Deposits are not tied to loans, so the platform total may hold less
    // than this loan's collateral; it bottoms out at zero.
    let total_collateral_locked = params
        .total_collateral_locked
        .saturating_sub(loan.collateral_amount);
    let portfolio = read_portfolio(env, &caller).map(|portfolio| portfolio.without_loan(loan_id));

    loan.mark_repaid(height);
    write_loan(env, loan_id, &loan);
    if let Some(portfolio) = portfolio {
        write_portfolio(env, &caller, &portfolio);
    }
    params.total_collateral_locked = total_collateral_locked;
    write_params(env, &params);

    soroban_sdk::log!(env, "loan repaid", loan_id, amount);
    info!("loan {} repaid with {} (owed {})", loan_id, amount, owed);
    emit_loan_repaid(env, loan_id, &caller, amount);
    Ok(())
}

/// Full repayment amount for an active loan at the current height.
pub fn amount_owed(env: &Env, loan_id: u64) -> Result<u128, LendingError> {
    read_params(env).unwrap_or_default().check_loan_id(loan_id)?;
    let loan = read_loan(env, loan_id).ok_or(LendingError::LoanNotFound)?;
    if !loan.is_active() {
        return Err(LendingError::LoanNotActive);
    }
    loan.amount_owed(env.ledger().sequence())
}
