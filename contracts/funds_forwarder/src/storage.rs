//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type              | Description                            |
//! |----------|-------------------|----------------------------------------|
//! | `Config` | `ForwarderConfig` | Id pair and factory, written once      |
//!
//! The presence of `Config` is the initialization flag: it is written once
//! and never removed.
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.

use soroban_sdk::{contracttype, Env};

use crate::types::ForwarderConfig;
use crate::Error;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable id pair and factory reference.
    Config,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Record the instance configuration. Fails if one is already recorded.
pub fn initialize(env: &Env, config: &ForwarderConfig) -> Result<(), Error> {
    if is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
    Ok(())
}

pub fn load_config(env: &Env) -> Result<ForwarderConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}
