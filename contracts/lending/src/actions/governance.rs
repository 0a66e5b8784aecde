//! Owner-gated setters for risk parameters and the price feed.

use crate::admin::{
    has_administrator, read_params, require_initialized, require_owner, validate_risk_ratio,
    write_administrator, write_params, Params, MAX_RATE,
};
use crate::error::LendingError;
use crate::event::{emit_initialized, emit_param_updated, emit_price_updated};
use crate::price::{validate_price, write_price};
use log::info;
use soroban_sdk::{symbol_short, Address, Env, Symbol};
use soroban_token_sdk::TokenUtils;

pub fn initialize(env: &Env, owner: Address) -> Result<(), LendingError> {
    let initialized = read_params(env).is_some_and(|params| params.initialized);
    if initialized || has_administrator(env) {
        return Err(LendingError::AlreadyInitialized);
    }
    owner.require_auth();

    write_administrator(env, &owner);
    write_params(
        env,
        &Params {
            initialized: true,
            ..Params::default()
        },
    );

    info!("lending platform initialized");
    emit_initialized(env, &owner);
    Ok(())
}

pub fn set_owner(env: &Env, caller: Address, new_owner: Address) -> Result<(), LendingError> {
    let admin = require_owner(env, &caller)?;

    write_administrator(env, &new_owner);
    TokenUtils::new(env).events().set_admin(admin, new_owner);
    Ok(())
}

pub fn update_collateral_ratio(
    env: &Env,
    caller: Address,
    new_ratio: u32,
) -> Result<(), LendingError> {
    require_owner(env, &caller)?;
    if !validate_risk_ratio(new_ratio) {
        return Err(LendingError::InvalidRatio);
    }

    update_param(env, symbol_short!("min_ratio"), new_ratio, |params| {
        &mut params.minimum_collateral_ratio
    })
}

pub fn update_liquidation_threshold(
    env: &Env,
    caller: Address,
    new_threshold: u32,
) -> Result<(), LendingError> {
    require_owner(env, &caller)?;
    if !validate_risk_ratio(new_threshold) {
        return Err(LendingError::InvalidThreshold);
    }

    update_param(env, symbol_short!("liq_thres"), new_threshold, |params| {
        &mut params.liquidation_threshold
    })
}

/// Applies to loans originated after the change; open loans keep the rate
/// they were issued with.
pub fn update_base_interest_rate(
    env: &Env,
    caller: Address,
    new_rate: u32,
) -> Result<(), LendingError> {
    require_owner(env, &caller)?;
    if new_rate == 0 || new_rate > MAX_RATE {
        return Err(LendingError::InvalidRate);
    }

    update_param(env, symbol_short!("base_rate"), new_rate, |params| {
        &mut params.base_interest_rate
    })
}

pub fn update_platform_fee_rate(
    env: &Env,
    caller: Address,
    new_rate: u32,
) -> Result<(), LendingError> {
    require_owner(env, &caller)?;
    if new_rate > MAX_RATE {
        return Err(LendingError::InvalidRate);
    }

    update_param(env, symbol_short!("fee_rate"), new_rate, |params| {
        &mut params.platform_fee_rate
    })
}

pub fn update_price_feed(
    env: &Env,
    caller: Address,
    asset: Symbol,
    price: u128,
) -> Result<(), LendingError> {
    require_owner(env, &caller)?;
    validate_price(env, &asset, price)?;

    write_price(env, &asset, price);
    emit_price_updated(env, &asset, price);
    Ok(())
}

fn update_param<F>(env: &Env, name: Symbol, new_value: u32, field: F) -> Result<(), LendingError>
where
    F: FnOnce(&mut Params) -> &mut u32,
{
    let mut params = require_initialized(env)?;
    let slot = field(&mut params);
    let old_value = *slot;
    *slot = new_value;
    write_params(env, &params);

    info!("risk parameter updated: {} -> {}", old_value, new_value);
    emit_param_updated(env, name, old_value, new_value);
    Ok(())
}
