//! Deployment fixture for tests and the local runner.
//!
//! [`Deployment`] wires a [`LocalBridge`], the native asset contract and a
//! factory the way production would. Forwarder instances are registered
//! straight from this crate with the factory as their parent, which is what
//! the factory's clone step produces; the clone step itself runs against
//! the built wasm in the factory's own tests.

#![allow(dead_code)]

use forwarder_factory::{FundsForwarderFactory, FundsForwarderFactoryClient};
use forwarder_mocks::{
    Donation, LocalBridge, LocalBridgeClient, TestToken, TestTokenClient, TokenBehavior,
};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::token::{self, StellarAssetClient};
use soroban_sdk::{Address, BytesN, Env, Symbol, TryFromVal, Val, Vec};

use crate::FundsForwarder;

/// Child implementation hash the fixture factory is configured with.
pub const FORWARDER_WASM_HASH: [u8; 32] = [0x42; 32];

/// A bridge and a factory deployed against it, with fresh operator accounts.
pub struct Deployment {
    pub env: Env,
    pub bridge_owner: Address,
    pub escape_hatch_caller: Address,
    pub escape_hatch_destination: Address,
    /// Stellar asset contract standing in for native currency.
    pub native: Address,
    pub bridge: Address,
    pub factory: Address,
}

impl Deployment {
    pub fn new(env: &Env) -> Self {
        let bridge_owner = Address::generate(env);
        let escape_hatch_caller = Address::generate(env);
        let escape_hatch_destination = Address::generate(env);
        let native = env
            .register_stellar_asset_contract_v2(bridge_owner.clone())
            .address();

        let bridge = env.register(
            LocalBridge,
            (
                bridge_owner.clone(),
                escape_hatch_caller.clone(),
                escape_hatch_destination.clone(),
            ),
        );
        LocalBridgeClient::new(env, &bridge).whitelist_token(&native);

        let factory = env.register(
            FundsForwarderFactory,
            (
                bridge.clone(),
                escape_hatch_caller.clone(),
                escape_hatch_destination.clone(),
                BytesN::from_array(env, &FORWARDER_WASM_HASH),
            ),
        );

        Deployment {
            env: env.clone(),
            bridge_owner,
            escape_hatch_caller,
            escape_hatch_destination,
            native,
            bridge,
            factory,
        }
    }

    pub fn factory_client(&self) -> FundsForwarderFactoryClient<'static> {
        FundsForwarderFactoryClient::new(&self.env, &self.factory)
    }

    /// A forwarder instance parented by the fixture factory.
    pub fn new_forwarder(&self, giver_id: u64, receiver_id: u64) -> Address {
        self.env
            .register(FundsForwarder, (self.factory.clone(), giver_id, receiver_id))
    }

    /// A second bridge with the same operators, native already whitelisted.
    pub fn new_bridge(&self) -> Address {
        let bridge = self.env.register(
            LocalBridge,
            (
                self.bridge_owner.clone(),
                self.escape_hatch_caller.clone(),
                self.escape_hatch_destination.clone(),
            ),
        );
        LocalBridgeClient::new(&self.env, &bridge).whitelist_token(&self.native);
        bridge
    }

    /// Deploy a token of the given behavior, already whitelisted on the bridge.
    pub fn new_token(&self, behavior: TokenBehavior) -> Address {
        let token = self.env.register(TestToken, (behavior,));
        LocalBridgeClient::new(&self.env, &self.bridge).whitelist_token(&token);
        token
    }

    /// A fresh Stellar asset contract, whitelisted on the bridge.
    pub fn new_asset(&self) -> Address {
        let asset = self
            .env
            .register_stellar_asset_contract_v2(self.bridge_owner.clone())
            .address();
        LocalBridgeClient::new(&self.env, &self.bridge).whitelist_token(&asset);
        asset
    }

    /// Mint on a Stellar asset contract. Needs the admin's auth mocked.
    pub fn mint_asset(&self, asset: &Address, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, asset).mint(to, &amount);
    }

    pub fn mint_native(&self, to: &Address, amount: i128) {
        self.mint_asset(&self.native, to, amount);
    }

    pub fn mint_token(&self, token: &Address, to: &Address, amount: i128) {
        TestTokenClient::new(&self.env, token).mint(to, &amount);
    }

    pub fn balance(&self, token: &Address, holder: &Address) -> i128 {
        token::Client::new(&self.env, token).balance(holder)
    }

    pub fn native_balance(&self, holder: &Address) -> i128 {
        self.balance(&self.native, holder)
    }

    pub fn donations(&self) -> Vec<Donation> {
        LocalBridgeClient::new(&self.env, &self.bridge).donations()
    }
}

/// Payloads of the events `contract` published under topic `name`, as far
/// as the host's event log reaches back.
pub fn events_named(env: &Env, contract: &Address, name: &str) -> Vec<Val> {
    let topic = Symbol::new(env, name);
    let mut found = Vec::new(env);
    for (source, topics, data) in env.events().all().iter() {
        if &source != contract {
            continue;
        }
        let first = topics
            .get(0)
            .and_then(|raw| Symbol::try_from_val(env, &raw).ok());
        if first == Some(topic.clone()) {
            found.push_back(data);
        }
    }
    found
}
