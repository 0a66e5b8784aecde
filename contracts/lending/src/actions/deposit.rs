use crate::admin::{require_initialized, write_params};
use crate::error::LendingError;
use crate::event::emit_collateral_deposited;
use log::debug;
use soroban_sdk::{Address, Env};

pub fn deposit_collateral(
    env: &Env,
    depositor: Address,
    amount: u128,
) -> Result<(), LendingError> {
    depositor.require_auth();

    let mut params = require_initialized(env)?;
    if amount == 0 {
        return Err(LendingError::InvalidAmount);
    }

    params.total_collateral_locked = params
        .total_collateral_locked
        .checked_add(amount)
        .ok_or(LendingError::MathOverflow)?;
    write_params(env, &params);

    let total = params.total_collateral_locked;
    soroban_sdk::log!(env, "collateral deposited", amount, total);
    debug!("deposit of {} raises locked collateral to {}", amount, total);
    emit_collateral_deposited(env, &depositor, amount, total);
    Ok(())
}
