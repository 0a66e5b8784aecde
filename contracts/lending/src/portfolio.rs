//! Per-borrower index of active loan ids. The loan records are authoritative;
//! this index only mirrors which of them are still active.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::LendingError;
use crate::storage_types::{DataKey, LOAN_BUMP_AMOUNT, LOAN_LIFETIME_THRESHOLD};

pub const MAX_ACTIVE_LOANS: u32 = 10;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Portfolio {
    pub active_loans: Vec<u64>,
}

impl Portfolio {
    pub fn new(env: &Env) -> Self {
        Self {
            active_loans: Vec::new(env),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_loans.is_empty()
    }

    /// Appends `loan_id`, refusing to grow past [`MAX_ACTIVE_LOANS`].
    pub fn with_loan(mut self, loan_id: u64) -> Result<Self, LendingError> {
        if self.active_loans.len() >= MAX_ACTIVE_LOANS {
            return Err(LendingError::PortfolioFull);
        }
        self.active_loans.push_back(loan_id);
        Ok(self)
    }

    pub fn without_loan(mut self, loan_id: u64) -> Self {
        if let Some(pos) = self.active_loans.iter().position(|id| id == loan_id) {
            self.active_loans.remove(pos as u32);
        }
        self
    }
}

pub fn read_portfolio(env: &Env, owner: &Address) -> Option<Portfolio> {
    let key = DataKey::UserLoans(owner.clone());
    let portfolio = env.storage().persistent().get::<DataKey, Portfolio>(&key);
    if portfolio.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    }
    portfolio
}

/// Persists `portfolio`, dropping the record entirely once it holds no ids.
pub fn write_portfolio(env: &Env, owner: &Address, portfolio: &Portfolio) {
    let key = DataKey::UserLoans(owner.clone());
    if portfolio.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, portfolio);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}
