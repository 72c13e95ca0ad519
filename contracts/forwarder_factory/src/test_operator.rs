use forwarder_mocks::LocalBridge;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, TryIntoVal};

use crate::events::{
    BridgeChanged, ChildImplementationChanged, EscapeHatchCallerChanged, BRIDGE_CHANGED,
    CHILD_IMPLEMENTATION_CHANGED, ESCAPE_HATCH_CALLER_CHANGED,
};
use crate::testutils::{events_named, Setup, CHILD_HASH};
use crate::Error;

#[test]
fn test_change_bridge_operator_gate() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    let client = s.factory_client(&factory);
    let stranger = Address::generate(&s.env);
    let new_bridge = s.env.register(
        LocalBridge,
        (
            s.bridge_owner.clone(),
            s.escape_hatch_caller.clone(),
            s.escape_hatch_destination.clone(),
        ),
    );

    assert_eq!(
        client.try_change_bridge(&stranger, &Some(new_bridge.clone())),
        Err(Ok(Error::InvalidCaller))
    );
    assert_eq!(client.bridge(), Some(s.bridge.clone()));

    client.change_bridge(&s.escape_hatch_caller, &Some(new_bridge.clone()));
    let changed: BridgeChanged = events_named(&s.env, &factory, BRIDGE_CHANGED)
        .last()
        .unwrap()
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(
        changed,
        BridgeChanged {
            new_bridge: Some(new_bridge.clone())
        }
    );
    assert_eq!(client.bridge(), Some(new_bridge));

    client.change_bridge(&s.bridge_owner, &None);
    let changed: BridgeChanged = events_named(&s.env, &factory, BRIDGE_CHANGED)
        .last()
        .unwrap()
        .try_into_val(&s.env)
        .unwrap();
    assert_eq!(changed, BridgeChanged { new_bridge: None });
    assert_eq!(client.bridge(), None);
}

#[test]
fn test_operator_gate_without_mocked_auth() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    s.mint_native(&factory, 10);
    let client = s.factory_client(&factory);
    let stranger = Address::generate(&s.env);
    let hash = BytesN::from_array(&s.env, &[7; 32]);

    // Auth enforcement on, no signatures.
    s.env.set_auths(&[]);

    // Strangers get the escapable reason whether or not they sign.
    assert_eq!(
        client.try_change_bridge(&stranger, &None),
        Err(Ok(Error::InvalidCaller))
    );
    assert_eq!(
        client.try_change_child_implementation(&stranger, &hash),
        Err(Ok(Error::InvalidCaller))
    );
    assert_eq!(
        client.try_change_hatch_escape_caller(&stranger, &stranger),
        Err(Ok(Error::InvalidCaller))
    );
    assert_eq!(
        client.try_escape_hatch(&stranger, &s.native),
        Err(Ok(Error::InvalidCaller))
    );

    // Naming an operator without its signature fails in the host.
    assert!(matches!(
        client.try_change_bridge(&s.bridge_owner, &None),
        Err(Err(_))
    ));
    assert!(matches!(
        client.try_escape_hatch(&s.escape_hatch_caller, &s.native),
        Err(Err(_))
    ));

    assert_eq!(client.bridge(), Some(s.bridge.clone()));
    assert_eq!(client.escape_hatch_caller(), s.escape_hatch_caller);
    assert_eq!(s.balance(&s.native, &factory), 10);
}

#[test]
fn test_change_child_implementation() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    let client = s.factory_client(&factory);
    let stranger = Address::generate(&s.env);
    let replacement = BytesN::from_array(&s.env, &[7; 32]);

    assert_eq!(
        client.try_change_child_implementation(&stranger, &replacement),
        Err(Ok(Error::InvalidCaller))
    );
    let zero = BytesN::from_array(&s.env, &[0; 32]);
    assert_eq!(
        client.try_change_child_implementation(&s.bridge_owner, &zero),
        Err(Ok(Error::NotAContract))
    );
    assert_eq!(
        client.child_implementation(),
        BytesN::from_array(&s.env, &CHILD_HASH)
    );

    client.change_child_implementation(&s.bridge_owner, &replacement);
    let changed: ChildImplementationChanged =
        events_named(&s.env, &factory, CHILD_IMPLEMENTATION_CHANGED)
            .last()
            .unwrap()
            .try_into_val(&s.env)
            .unwrap();
    assert_eq!(
        changed,
        ChildImplementationChanged {
            new_child_implementation: replacement.clone()
        }
    );
    assert_eq!(client.child_implementation(), replacement);
}

#[test]
fn test_change_hatch_escape_caller_moves_the_operator_seat() {
    let s = Setup::new();
    let factory = s.deploy_factory();
    let client = s.factory_client(&factory);
    let stranger = Address::generate(&s.env);
    let successor = Address::generate(&s.env);

    assert_eq!(
        client.try_change_hatch_escape_caller(&stranger, &stranger),
        Err(Ok(Error::InvalidCaller))
    );
    assert_eq!(client.escape_hatch_caller(), s.escape_hatch_caller);

    client.change_hatch_escape_caller(&s.escape_hatch_caller, &successor);
    let changed: EscapeHatchCallerChanged =
        events_named(&s.env, &factory, ESCAPE_HATCH_CALLER_CHANGED)
            .last()
            .unwrap()
            .try_into_val(&s.env)
            .unwrap();
    assert_eq!(
        changed,
        EscapeHatchCallerChanged {
            new_escape_hatch_caller: successor.clone()
        }
    );
    assert_eq!(client.escape_hatch_caller(), successor);

    // The previous caller is no longer an operator; the owner still is.
    assert_eq!(
        client.try_change_bridge(&s.escape_hatch_caller, &None),
        Err(Ok(Error::InvalidCaller))
    );
    client.change_bridge(&successor, &None);
    client.change_bridge(&s.bridge_owner, &Some(s.bridge.clone()));
    assert_eq!(client.bridge(), Some(s.bridge.clone()));
}
