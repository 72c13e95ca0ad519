//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type            | Description                          |
//! |------------------|-----------------|--------------------------------------|
//! | `Config`         | `FactoryConfig` | Bridge, implementation, hatch pair   |
//! | `ForwarderCount` | `u32`           | Instances deployed so far; salt seed |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.

use soroban_sdk::{contracttype, Env};

use crate::types::FactoryConfig;
use crate::Error;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    ForwarderCount,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn save_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<FactoryConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn forwarder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ForwarderCount)
        .unwrap_or(0)
}

/// Reserve the next deployment index.
pub fn next_forwarder_index(env: &Env) -> u32 {
    let index = forwarder_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ForwarderCount, &(index + 1));
    index
}
