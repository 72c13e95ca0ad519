//! # Funds Forwarder
//!
//! Per-campaign forwarder contract. An instance custodies donated tokens
//! (native currency included, through its Stellar asset contract) and pushes
//! them, tagged with an immutable `(giver_id, receiver_id)` pair, to the
//! donation bridge its factory points at.
//!
//! | Phase      | Entry point(s)                                       |
//! |------------|------------------------------------------------------|
//! | Deployment | `__constructor` (run by the factory's `deploy_v2`)   |
//! | Forwarding | `forward`, `forward_multiple`, `forward_moloch`      |
//! | Recovery   | `escape_hatch`                                       |
//! | Queries    | `has_initialized`, `giver_id`, `receiver_id`, `funds_forwarder_factory` |
//!
//! ## Architecture
//!
//! Every instance runs the same uploaded wasm (the factory's
//! `child_implementation` hash) with its own instance storage. The bridge
//! and the escape hatch pair are never cached: each call asks the factory,
//! so an operator change reaches every existing instance at once.
//!
//! Forwarding is safe to call by anyone, any number of times: the balance is
//! read at call time, so a second call finds nothing left to move. A failing
//! bridge fails the call, and the host rolls the transfer back with it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, Vec};

mod asset;
mod events;
mod interfaces;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_moloch;

pub use events::{EscapeHatchCalled, Forwarded, ESCAPE_HATCH_CALLED, FORWARDED};
pub use types::ForwarderConfig;

use interfaces::{BridgeClient, FactoryClient, MolochClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    RecoverDisallowed = 3,
    ZeroBridge = 4,
    BridgeCall = 5,
    TokenTransfer = 6,
    DaoCall = 7,
}

impl Error {
    /// The reason string a rejected call carries.
    pub const fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "INIT_ALREADY_INITIALIZED",
            Error::NotInitialized => "INIT_NOT_INITIALIZED",
            Error::RecoverDisallowed => "RECOVER_DISALLOWED",
            Error::ZeroBridge => "ERROR_ZERO_BRIDGE",
            Error::BridgeCall => "ERROR_BRIDGE_CALL",
            Error::TokenTransfer => "ERROR_TOKEN_TRANSFER",
            Error::DaoCall => "ERROR_DAO_CALL",
        }
    }

    /// Configuration errors clear once an operator fixes the factory.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Error::ZeroBridge | Error::BridgeCall)
    }
}

#[contract]
pub struct FundsForwarder;

/// The factory's current bridge.
fn resolve_bridge(env: &Env, config: &ForwarderConfig) -> Result<Address, Error> {
    match FactoryClient::new(env, &config.factory).try_bridge() {
        Ok(Ok(Some(bridge))) => Ok(bridge),
        Ok(Ok(None)) => Err(Error::ZeroBridge),
        _ => Err(Error::BridgeCall),
    }
}

fn forward_token(
    env: &Env,
    config: &ForwarderConfig,
    bridge: &Address,
    token: &Address,
) -> Result<i128, Error> {
    let this = env.current_contract_address();
    let balance = asset::balance_of(env, token, &this)?;

    if balance > 0 {
        asset::transfer(env, token, bridge, balance)?;
        let donated = BridgeClient::new(env, bridge).try_donate(
            &config.giver_id,
            &config.receiver_id,
            token,
            &balance,
        );
        if !matches!(donated, Ok(Ok(()))) {
            return Err(Error::BridgeCall);
        }
    }

    events::forwarded(env, token, balance);
    Ok(balance)
}

#[contractimpl]
impl FundsForwarder {
    /// Runs once, inside the deployment that creates the instance.
    pub fn __constructor(env: Env, factory: Address, giver_id: u64, receiver_id: u64) {
        let config = ForwarderConfig {
            giver_id,
            receiver_id,
            factory,
        };
        if let Err(err) = storage::initialize(&env, &config) {
            panic_with_error!(&env, err);
        }
    }

    /// Re-initialization attempt. The constructor already initialized the
    /// instance, so this fails with `INIT_ALREADY_INITIALIZED` and nothing
    /// changes.
    pub fn initialize(env: Env, giver_id: u64, receiver_id: u64) -> Result<(), Error> {
        let factory = storage::load_config(&env)?.factory;
        storage::initialize(
            &env,
            &ForwarderConfig {
                giver_id,
                receiver_id,
                factory,
            },
        )
    }

    pub fn has_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn giver_id(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.giver_id)
    }

    pub fn receiver_id(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.receiver_id)
    }

    pub fn funds_forwarder_factory(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.factory)
    }

    /// Push the whole balance of `token` to the bridge and register it as a
    /// donation. A zero balance moves nothing and still succeeds.
    pub fn forward(env: Env, token: Address) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        let bridge = resolve_bridge(&env, &config)?;
        forward_token(&env, &config, &bridge, &token)
    }

    /// All-or-nothing: the first failing token fails the call, which undoes
    /// every token already forwarded.
    pub fn forward_multiple(env: Env, tokens: Vec<Address>) -> Result<Vec<i128>, Error> {
        let config = storage::load_config(&env)?;
        let bridge = resolve_bridge(&env, &config)?;
        let mut amounts = Vec::new(&env);
        for token in tokens.iter() {
            amounts.push_back(forward_token(&env, &config, &bridge, &token)?);
        }
        Ok(amounts)
    }

    /// Ragequit every share held in `dao`, then forward its payout token.
    pub fn forward_moloch(env: Env, dao: Address) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        let bridge = resolve_bridge(&env, &config)?;
        let this = env.current_contract_address();

        let dao_client = MolochClient::new(&env, &dao);
        let shares = match dao_client.try_shares_of(&this) {
            Ok(Ok(shares)) => shares,
            _ => return Err(Error::DaoCall),
        };
        if shares > 0 && !matches!(dao_client.try_ragequit(&this, &shares), Ok(Ok(()))) {
            return Err(Error::DaoCall);
        }
        let payout = match dao_client.try_approved_token() {
            Ok(Ok(token)) => token,
            _ => return Err(Error::DaoCall),
        };
        forward_token(&env, &config, &bridge, &payout)
    }

    /// Sweep the whole balance of `token` to the factory's escape hatch
    /// destination. No donation is recorded.
    ///
    /// `caller` is compared with the factory's escape hatch caller before
    /// its signature is checked, so any other caller is turned away with
    /// `RECOVER_DISALLOWED`.
    pub fn escape_hatch(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        let factory = FactoryClient::new(&env, &config.factory);
        if caller != factory.escape_hatch_caller() {
            return Err(Error::RecoverDisallowed);
        }
        caller.require_auth();

        let destination = factory.escape_hatch_destination();
        let this = env.current_contract_address();
        let balance = asset::balance_of(&env, &token, &this)?;
        if balance > 0 {
            asset::transfer(&env, &token, &destination, balance)?;
        }
        events::escape_hatch_called(&env, &token, balance);
        Ok(balance)
    }
}
