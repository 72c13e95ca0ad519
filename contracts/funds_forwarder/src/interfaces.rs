//! Clients for the contracts a forwarder calls out to.

use soroban_sdk::{contractclient, Address, Env};

/// The part of the factory a forwarder reads its live configuration from.
#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    /// `None` while the operator has cleared the bridge.
    fn bridge(env: Env) -> Option<Address>;
    fn escape_hatch_caller(env: Env) -> Address;
    fn escape_hatch_destination(env: Env) -> Address;
}

#[contractclient(name = "BridgeClient")]
pub trait BridgeInterface {
    /// Register a donation whose funds the bridge already holds.
    fn donate(env: Env, giver_id: u64, receiver_id: u64, token: Address, amount: i128);
}

/// Guild bank a forwarder may hold shares in.
#[contractclient(name = "MolochClient")]
pub trait MolochInterface {
    fn approved_token(env: Env) -> Address;
    fn shares_of(env: Env, member: Address) -> u64;
    fn ragequit(env: Env, member: Address, shares_to_burn: u64);
}
