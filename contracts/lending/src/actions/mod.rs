pub mod deposit;
pub mod governance;
pub mod liquidation;
pub mod loan;
