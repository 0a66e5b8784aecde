use soroban_sdk::{contracttype, Address, Env};

use crate::error::LendingError;
use crate::risk::accrued_interest;
use crate::storage_types::{DataKey, LOAN_BUMP_AMOUNT, LOAN_LIFETIME_THRESHOLD};

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    Active = 0,
    Repaid = 1,
    Liquidated = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub borrower: Address,
    pub collateral_amount: u128,
    pub loan_amount: u128,
    pub interest_rate: u32,
    pub start_height: u32,
    pub last_interest_calc: u32,
    pub status: LoanStatus,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// Principal plus simple interest accrued since the last settlement.
    pub fn amount_owed(&self, current_height: u32) -> Result<u128, LendingError> {
        let elapsed = current_height.saturating_sub(self.last_interest_calc);
        let interest = accrued_interest(self.loan_amount, self.interest_rate, elapsed)?;
        self.loan_amount
            .checked_add(interest)
            .ok_or(LendingError::MathOverflow)
    }

    /// Closes the loan and freezes accrual at `current_height`.
    pub fn mark_repaid(&mut self, current_height: u32) {
        debug_assert!(self.is_active());
        self.status = LoanStatus::Repaid;
        self.last_interest_calc = self.last_interest_calc.max(current_height);
    }

    pub fn mark_liquidated(&mut self) {
        debug_assert!(self.is_active());
        self.status = LoanStatus::Liquidated;
    }
}

pub fn write_loan(env: &Env, loan_id: u64, loan: &Loan) {
    let key = DataKey::Loan(loan_id);
    env.storage().persistent().set(&key, loan);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}

pub fn read_loan(env: &Env, loan_id: u64) -> Option<Loan> {
    let key = DataKey::Loan(loan_id);
    let loan = env.storage().persistent().get::<DataKey, Loan>(&key);
    if loan.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    }
    loan
}
