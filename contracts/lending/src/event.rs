use crate::loan_info::Loan;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Emits an event when the platform is initialized.
pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("init"),), owner.clone());
}

/// Emits an event when collateral is added to the platform total.
pub fn emit_collateral_deposited(env: &Env, depositor: &Address, amount: u128, total: u128) {
    env.events().publish(
        (symbol_short!("deposit"), depositor.clone()),
        (amount, total),
    );
}

/// Emits an event when a new loan is originated.
pub fn emit_loan_originated(env: &Env, loan_id: u64, loan: &Loan) {
    env.events().publish(
        (symbol_short!("loan_new"), loan.borrower.clone()),
        (
            loan_id,
            loan.collateral_amount,
            loan.loan_amount,
            loan.interest_rate,
            loan.start_height,
        ),
    );
}

/// Emits an event when a loan is repaid in full.
pub fn emit_loan_repaid(env: &Env, loan_id: u64, borrower: &Address, amount: u128) {
    env.events().publish(
        (symbol_short!("repaid"), borrower.clone()),
        (loan_id, amount),
    );
}

/// Emits an event when a loan is force-closed by the liquidation check.
pub fn emit_loan_liquidated(
    env: &Env,
    loan_id: u64,
    borrower: &Address,
    keeper: &Address,
    ratio: u128,
) {
    env.events().publish(
        (symbol_short!("liquidate"), borrower.clone()),
        (loan_id, keeper.clone(), ratio),
    );
}

pub fn emit_price_updated(env: &Env, asset: &Symbol, price: u128) {
    env.events()
        .publish((symbol_short!("price"), asset.clone()), price);
}

/// Emits an event when a governance setter changes a risk parameter.
pub fn emit_param_updated(env: &Env, name: Symbol, old_value: u32, new_value: u32) {
    env.events()
        .publish((symbol_short!("params"), name), (old_value, new_value));
}
