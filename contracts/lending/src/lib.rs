#![no_std]

mod actions;
mod admin;
mod contract;
mod error;
mod event;
mod loan_info;
mod portfolio;
mod price;
mod risk;
mod storage_types;

pub use crate::admin::{Params, PlatformStats};
pub use crate::contract::{LendingContract, LendingContractClient};
pub use crate::error::{ErrorKind, LendingError};
pub use crate::loan_info::{Loan, LoanStatus};
pub use crate::portfolio::Portfolio;
pub use crate::risk::{accrued_interest, collateral_ratio, BLOCKS_PER_DAY};
