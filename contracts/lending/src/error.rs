use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingError {
    // authorization
    NotOwner = 100,
    NotBorrower = 101,

    // state
    NotInitialized = 200,
    AlreadyInitialized = 201,
    LoanNotActive = 202,
    PriceUnavailable = 203,

    // validation
    InvalidAmount = 300,
    InsufficientCollateral = 301,
    InsufficientRepayment = 302,
    InvalidRatio = 303,
    InvalidThreshold = 304,
    InvalidRate = 305,
    InvalidPrice = 306,
    UnsupportedAsset = 307,
    InvalidLoanId = 308,
    MathOverflow = 309,

    // lookup
    LoanNotFound = 400,

    // capacity
    PortfolioFull = 500,
}

/// Coarse classification of [`LendingError`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Validation,
    NotFound,
    Capacity,
}

impl LendingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LendingError::NotOwner | LendingError::NotBorrower => ErrorKind::Authorization,
            LendingError::NotInitialized
            | LendingError::AlreadyInitialized
            | LendingError::LoanNotActive
            | LendingError::PriceUnavailable => ErrorKind::State,
            LendingError::InvalidAmount
            | LendingError::InsufficientCollateral
            | LendingError::InsufficientRepayment
            | LendingError::InvalidRatio
            | LendingError::InvalidThreshold
            | LendingError::InvalidRate
            | LendingError::InvalidPrice
            | LendingError::UnsupportedAsset
            | LendingError::InvalidLoanId
            | LendingError::MathOverflow => ErrorKind::Validation,
            LendingError::LoanNotFound => ErrorKind::NotFound,
            LendingError::PortfolioFull => ErrorKind::Capacity,
        }
    }
}
