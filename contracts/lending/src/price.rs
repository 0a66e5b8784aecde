//! Latest validated price per supported asset. No history is kept.

use soroban_sdk::{symbol_short, vec, Env, Symbol, Vec};

use crate::error::LendingError;
use crate::storage_types::{DataKey, PRICE_BUMP_AMOUNT, PRICE_LIFETIME_THRESHOLD};

/// Sanity ceiling for a single price update.
pub const MAX_PRICE: u128 = 1_000_000_000_000;

pub fn supported_assets(e: &Env) -> Vec<Symbol> {
    vec![
        e,
        symbol_short!("BTC"),
        symbol_short!("STX"),
        symbol_short!("USDA"),
    ]
}

/// Loans are collateralized in BTC.
pub fn collateral_asset() -> Symbol {
    symbol_short!("BTC")
}

pub fn is_supported_asset(e: &Env, asset: &Symbol) -> bool {
    supported_assets(e).iter().any(|supported| supported == *asset)
}

pub fn validate_price(e: &Env, asset: &Symbol, price: u128) -> Result<(), LendingError> {
    if !is_supported_asset(e, asset) {
        return Err(LendingError::UnsupportedAsset);
    }
    if price == 0 || price > MAX_PRICE {
        return Err(LendingError::InvalidPrice);
    }
    Ok(())
}

pub fn read_price(e: &Env, asset: &Symbol) -> Option<u128> {
    let key = DataKey::Price(asset.clone());
    let price = e.storage().persistent().get::<DataKey, u128>(&key);
    if price.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PRICE_LIFETIME_THRESHOLD, PRICE_BUMP_AMOUNT);
    }
    price
}

pub fn write_price(e: &Env, asset: &Symbol, price: u128) {
    let key = DataKey::Price(asset.clone());
    e.storage().persistent().set(&key, &price);
    e.storage()
        .persistent()
        .extend_ttl(&key, PRICE_LIFETIME_THRESHOLD, PRICE_BUMP_AMOUNT);
}

pub fn read_collateral_price(e: &Env) -> Result<u128, LendingError> {
    read_price(e, &collateral_asset()).ok_or(LendingError::PriceUnavailable)
}
