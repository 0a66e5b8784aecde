//! Collateral-ratio and interest arithmetic.
//!
//! Every division truncates toward zero. Ratios therefore round down, so a
//! borderline position is always judged less healthy than it really is.

use crate::error::LendingError;

/// Expected ledger closes per day; interest rates are quoted per day.
pub const BLOCKS_PER_DAY: u128 = 144;

pub(crate) const PERCENT: u128 = 100;

/// Collateral value over loan principal, as a whole percentage.
///
/// `loan` must be non-zero; callers validate it before asking for a ratio.
pub fn collateral_ratio(collateral: u128, loan: u128, price: u128) -> Result<u128, LendingError> {
    assert!(loan > 0, "loan amount must be non-zero");

    collateral
        .checked_mul(price)
        .and_then(|value| value.checked_mul(PERCENT))
        .map(|scaled| scaled / loan)
        .ok_or(LendingError::MathOverflow)
}

/// Simple interest owed on `principal` after `elapsed_blocks`.
///
/// The per-block amount is truncated first and then multiplied, which keeps
/// the result identical for every implementation given the same inputs.
pub fn accrued_interest(
    principal: u128,
    rate: u32,
    elapsed_blocks: u32,
) -> Result<u128, LendingError> {
    let per_block = principal
        .checked_mul(rate as u128)
        .ok_or(LendingError::MathOverflow)?
        / (PERCENT * BLOCKS_PER_DAY);

    per_block
        .checked_mul(elapsed_blocks as u128)
        .ok_or(LendingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_truncates_downward() {
        // 100 * 50_000 * 100 / 3_000_000 = 166.66..
        assert_eq!(collateral_ratio(100, 3_000_000, 50_000), Ok(166));
        assert_eq!(collateral_ratio(3, 2, 1), Ok(150));
        assert_eq!(collateral_ratio(2, 3, 1), Ok(66));
    }

    #[test]
    fn ratio_reports_overflow() {
        assert_eq!(
            collateral_ratio(u128::MAX, 1, 2),
            Err(LendingError::MathOverflow)
        );
    }

    #[test]
    #[should_panic(expected = "loan amount must be non-zero")]
    fn ratio_rejects_zero_loan() {
        let _ = collateral_ratio(100, 0, 50_000);
    }

    #[test]
    fn interest_truncates_per_block_amount() {
        // 1000 * 5 / 14_400 truncates to zero before scaling by elapsed blocks
        assert_eq!(
            accrued_interest(1000, 5, 144),
            Ok((1000 * 5 / (100 * 144)) * 144)
        );
        assert_eq!(accrued_interest(1000, 5, 144), Ok(0));

        // 15_000_000 / 14_400 = 1041
        assert_eq!(accrued_interest(3_000_000, 5, 10), Ok(10_410));
        assert_eq!(accrued_interest(3_000_000, 5, 0), Ok(0));
    }

    #[test]
    fn interest_is_simple_not_compound() {
        let one_day = accrued_interest(1_440_000, 10, 144).unwrap();
        let two_days = accrued_interest(1_440_000, 10, 288).unwrap();
        assert_eq!(one_day, 144_000);
        assert_eq!(two_days, 2 * one_day);
    }

    #[test]
    fn interest_reports_overflow() {
        assert_eq!(
            accrued_interest(u128::MAX, 2, 1),
            Err(LendingError::MathOverflow)
        );
    }
}
