//! # Funds Forwarder Factory
//!
//! Clones forwarder instances and owns the configuration they read: the
//! bridge and the escape hatch pair. The owner and the escape hatch settings
//! are taken from the bridge at construction, so the factory answers to the
//! same authorities as the bridge it feeds.
//!
//! ## Construction checks
//!
//! | Check                                            | Error                     |
//! |--------------------------------------------------|---------------------------|
//! | bridge answers `owner`                           | `ERROR_NOT_A_CONTRACT`    |
//! | escape hatch caller is the bridge's              | `ERROR_HATCH_CALLER`      |
//! | escape hatch destination is the bridge's         | `ERROR_HATCH_DESTINATION` |
//! | child implementation is a non-zero wasm hash     | `ERROR_NOT_A_CONTRACT`    |
//!
//! ## Cloning
//!
//! `new_funds_forwarder` deploys the child implementation wasm with the
//! factory as deployer and a salt derived from a running counter, and passes
//! `(factory, giver_id, receiver_id)` to the instance constructor. Deployment
//! and initialization are one host operation.
//!
//! ## Operators
//!
//! The bridge owner and the escape hatch caller may change the bridge, the
//! child implementation and the escape hatch caller, and sweep assets sent
//! to the factory by mistake. Anyone else is turned away with
//! `err_escapableInvalidCaller` before any signature is checked.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, BytesN, Env,
};

pub mod events;
mod interfaces;
mod storage;
mod types;

#[cfg(test)]
mod test_construction;
#[cfg(test)]
mod test_operator;

pub use types::FactoryConfig;

use interfaces::BridgeClient;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidCaller = 1,
    NotAContract = 2,
    HatchCaller = 3,
    HatchDestination = 4,
    ZeroBridge = 5,
    BridgeCall = 6,
    TokenTransfer = 7,
    NotInitialized = 8,
}

impl Error {
    /// The reason string a rejected call carries.
    pub const fn reason(&self) -> &'static str {
        match self {
            Error::InvalidCaller => "err_escapableInvalidCaller",
            Error::NotAContract => "ERROR_NOT_A_CONTRACT",
            Error::HatchCaller => "ERROR_HATCH_CALLER",
            Error::HatchDestination => "ERROR_HATCH_DESTINATION",
            Error::ZeroBridge => "ERROR_ZERO_BRIDGE",
            Error::BridgeCall => "ERROR_BRIDGE_CALL",
            Error::TokenTransfer => "ERROR_TOKEN_TRANSFER",
            Error::NotInitialized => "INIT_NOT_INITIALIZED",
        }
    }
}

#[contract]
pub struct FundsForwarderFactory;

const ZERO_HASH: [u8; 32] = [0; 32];

fn require_code_hash(env: &Env, hash: &BytesN<32>) -> Result<(), Error> {
    if *hash == BytesN::from_array(env, &ZERO_HASH) {
        return Err(Error::NotAContract);
    }
    Ok(())
}

fn construct(
    env: &Env,
    bridge: Address,
    escape_hatch_caller: Address,
    escape_hatch_destination: Address,
    child_implementation: BytesN<32>,
) -> Result<(), Error> {
    let bridge_client = BridgeClient::new(env, &bridge);
    let owner = match bridge_client.try_owner() {
        Ok(Ok(owner)) => owner,
        _ => return Err(Error::NotAContract),
    };
    if !matches!(
        bridge_client.try_escape_hatch_caller(),
        Ok(Ok(c)) if c == escape_hatch_caller
    ) {
        return Err(Error::HatchCaller);
    }
    if !matches!(
        bridge_client.try_escape_hatch_destination(),
        Ok(Ok(d)) if d == escape_hatch_destination
    ) {
        return Err(Error::HatchDestination);
    }
    require_code_hash(env, &child_implementation)?;

    storage::save_config(
        env,
        &FactoryConfig {
            owner,
            bridge: Some(bridge),
            child_implementation,
            escape_hatch_caller,
            escape_hatch_destination,
        },
    );
    Ok(())
}

/// Shared gate of every operator entry point. The caller is matched against
/// the operators first, then made to sign.
fn require_operator(env: &Env, caller: &Address) -> Result<FactoryConfig, Error> {
    let config = storage::load_config(env)?;
    if !config.is_operator(caller) {
        return Err(Error::InvalidCaller);
    }
    caller.require_auth();
    Ok(config)
}

/// Deployment salt of the `index`-th instance.
fn salt(env: &Env, index: u32) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &bytes)
}

fn token_balance(env: &Env, token: &Address, holder: &Address) -> Result<i128, Error> {
    match token::Client::new(env, token).try_balance(holder) {
        Ok(Ok(balance)) if balance >= 0 => Ok(balance),
        _ => Err(Error::TokenTransfer),
    }
}

#[contractimpl]
impl FundsForwarderFactory {
    pub fn __constructor(
        env: Env,
        bridge: Address,
        escape_hatch_caller: Address,
        escape_hatch_destination: Address,
        child_implementation: BytesN<32>,
    ) {
        if let Err(err) = construct(
            &env,
            bridge,
            escape_hatch_caller,
            escape_hatch_destination,
            child_implementation,
        ) {
            panic_with_error!(&env, err);
        }
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.owner)
    }

    pub fn bridge(env: Env) -> Result<Option<Address>, Error> {
        Ok(storage::load_config(&env)?.bridge)
    }

    pub fn child_implementation(env: Env) -> Result<BytesN<32>, Error> {
        Ok(storage::load_config(&env)?.child_implementation)
    }

    pub fn escape_hatch_caller(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.escape_hatch_caller)
    }

    pub fn escape_hatch_destination(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.escape_hatch_destination)
    }

    pub fn forwarder_count(env: Env) -> u32 {
        storage::forwarder_count(&env)
    }

    /// Deploy a forwarder for `(giver_id, receiver_id)`. Open to anyone.
    pub fn new_funds_forwarder(
        env: Env,
        giver_id: u64,
        receiver_id: u64,
    ) -> Result<Address, Error> {
        let config = storage::load_config(&env)?;
        let bridge = config.bridge.ok_or(Error::ZeroBridge)?;
        if !matches!(BridgeClient::new(&env, &bridge).try_owner(), Ok(Ok(_))) {
            return Err(Error::BridgeCall);
        }

        let index = storage::next_forwarder_index(&env);
        let instance = env
            .deployer()
            .with_current_contract(salt(&env, index))
            .deploy_v2(
                config.child_implementation,
                (env.current_contract_address(), giver_id, receiver_id),
            );
        events::new_fund_forwarder(&env, &instance);
        Ok(instance)
    }

    /// `None` clears the bridge, which halts cloning and forwarding.
    pub fn change_bridge(
        env: Env,
        caller: Address,
        new_bridge: Option<Address>,
    ) -> Result<(), Error> {
        let mut config = require_operator(&env, &caller)?;
        config.bridge = new_bridge.clone();
        storage::save_config(&env, &config);
        events::bridge_changed(&env, &new_bridge);
        Ok(())
    }

    /// Only forwarders deployed afterwards run the new implementation.
    pub fn change_child_implementation(
        env: Env,
        caller: Address,
        new_child_implementation: BytesN<32>,
    ) -> Result<(), Error> {
        let mut config = require_operator(&env, &caller)?;
        require_code_hash(&env, &new_child_implementation)?;
        config.child_implementation = new_child_implementation.clone();
        storage::save_config(&env, &config);
        events::child_implementation_changed(&env, &new_child_implementation);
        Ok(())
    }

    pub fn change_hatch_escape_caller(
        env: Env,
        caller: Address,
        new_escape_hatch_caller: Address,
    ) -> Result<(), Error> {
        let mut config = require_operator(&env, &caller)?;
        config.escape_hatch_caller = new_escape_hatch_caller.clone();
        storage::save_config(&env, &config);
        events::escape_hatch_caller_changed(&env, &new_escape_hatch_caller);
        Ok(())
    }

    /// Sweep the factory's whole balance of `token` to the escape hatch
    /// destination.
    pub fn escape_hatch(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        let config = require_operator(&env, &caller)?;
        let this = env.current_contract_address();
        let balance = token_balance(&env, &token, &this)?;
        if balance > 0 {
            let client = token::Client::new(&env, &token);
            if !matches!(
                client.try_transfer(&this, &config.escape_hatch_destination, &balance),
                Ok(Ok(()))
            ) {
                return Err(Error::TokenTransfer);
            }
            if token_balance(&env, &token, &this)? != 0 {
                return Err(Error::TokenTransfer);
            }
        }
        events::escape_hatch_called(&env, &token, balance);
        Ok(balance)
    }
}
