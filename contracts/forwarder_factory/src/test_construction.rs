use forwarder_mocks::{LocalBridge, TestToken, TokenBehavior};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN};

use crate::testutils::{Setup, CHILD_HASH};
use crate::{Error, FundsForwarderFactory};

#[test]
fn test_factory_copies_owner_and_hatch_from_bridge() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    let client = s.factory_client(&factory);

    assert_eq!(client.owner(), s.bridge_owner);
    assert_eq!(client.bridge(), Some(s.bridge.clone()));
    assert_eq!(client.escape_hatch_caller(), s.escape_hatch_caller);
    assert_eq!(client.escape_hatch_destination(), s.escape_hatch_destination);
    assert_eq!(
        client.child_implementation(),
        BytesN::from_array(&s.env, &CHILD_HASH)
    );
    assert_eq!(client.forwarder_count(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_factory_rejects_bridge_without_code() {
    let s = Setup::new();
    let nothing_deployed = Address::generate(&s.env);
    s.env.register(
        FundsForwarderFactory,
        (
            nothing_deployed,
            s.escape_hatch_caller.clone(),
            s.escape_hatch_destination.clone(),
            BytesN::from_array(&s.env, &CHILD_HASH),
        ),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_factory_rejects_contract_that_is_not_a_bridge() {
    let s = Setup::new();
    let token = s.env.register(TestToken, (TokenBehavior::Standard,));
    s.env.register(
        FundsForwarderFactory,
        (
            token,
            s.escape_hatch_caller.clone(),
            s.escape_hatch_destination.clone(),
            BytesN::from_array(&s.env, &CHILD_HASH),
        ),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_factory_rejects_foreign_escape_hatch_caller() {
    let s = Setup::new();
    s.env.register(
        FundsForwarderFactory,
        (
            s.bridge.clone(),
            Address::generate(&s.env),
            s.escape_hatch_destination.clone(),
            BytesN::from_array(&s.env, &CHILD_HASH),
        ),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_factory_rejects_foreign_escape_hatch_destination() {
    let s = Setup::new();
    s.env.register(
        FundsForwarderFactory,
        (
            s.bridge.clone(),
            s.escape_hatch_caller.clone(),
            Address::generate(&s.env),
            BytesN::from_array(&s.env, &CHILD_HASH),
        ),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_factory_rejects_zero_child_implementation() {
    let s = Setup::new();
    s.deploy_factory_with(&BytesN::from_array(&s.env, &[0; 32]));
}

#[test]
fn test_factory_follows_the_bridge_it_is_given() {
    let s = Setup::new();
    let other_owner = Address::generate(&s.env);
    let other_bridge = s.env.register(
        LocalBridge,
        (
            other_owner.clone(),
            s.escape_hatch_caller.clone(),
            s.escape_hatch_destination.clone(),
        ),
    );
    let factory = s.env.register(
        FundsForwarderFactory,
        (
            other_bridge.clone(),
            s.escape_hatch_caller.clone(),
            s.escape_hatch_destination.clone(),
            BytesN::from_array(&s.env, &CHILD_HASH),
        ),
    );

    let client = s.factory_client(&factory);
    assert_eq!(client.owner(), other_owner);
    assert_eq!(client.bridge(), Some(other_bridge));
}

#[test]
fn test_new_funds_forwarder_requires_bridge() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    let client = s.factory_client(&factory);

    client.change_bridge(&s.bridge_owner, &None);
    assert_eq!(
        client.try_new_funds_forwarder(&1, &2),
        Err(Ok(Error::ZeroBridge))
    );

    client.change_bridge(&s.bridge_owner, &Some(Address::generate(&s.env)));
    assert_eq!(
        client.try_new_funds_forwarder(&1, &2),
        Err(Ok(Error::BridgeCall))
    );
    assert_eq!(client.forwarder_count(), 0);
}

#[test]
fn test_error_reasons() {
    assert_eq!(Error::InvalidCaller.reason(), "err_escapableInvalidCaller");
    assert_eq!(Error::NotAContract.reason(), "ERROR_NOT_A_CONTRACT");
    assert_eq!(Error::HatchCaller.reason(), "ERROR_HATCH_CALLER");
    assert_eq!(Error::HatchDestination.reason(), "ERROR_HATCH_DESTINATION");
    assert_eq!(Error::ZeroBridge.reason(), "ERROR_ZERO_BRIDGE");
    assert_eq!(Error::BridgeCall.reason(), "ERROR_BRIDGE_CALL");
}
