use forwarder_mocks::{
    LocalBridgeClient, MolochDao, MolochDaoClient, Ragequit, TokenBehavior, RAGEQUIT,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, TryIntoVal};

use crate::invariants::{assert_donated_total, assert_donations_tagged};
use crate::testutils::{events_named, Deployment};
use crate::{Error, FundsForwarderClient};

struct Guild {
    env: Env,
    d: Deployment,
    instance: Address,
    weth: Address,
    dao: Address,
}

/// 500 shares outstanding, 10 of them held by the forwarder, 5000 WETH in
/// the guild bank.
fn setup() -> Guild {
    let env = Env::default();
    env.mock_all_auths();
    let d = Deployment::new(&env);
    let instance = d.new_forwarder(43271, 5683);
    let weth = d.new_token(TokenBehavior::Standard);
    let dao = env.register(MolochDao, (weth.clone(),));

    let dao_client = MolochDaoClient::new(&env, &dao);
    dao_client.add_member(&Address::generate(&env), &490);
    dao_client.add_member(&instance, &10);
    d.mint_token(&weth, &dao, 5_000);

    Guild {
        env,
        d,
        instance,
        weth,
        dao,
    }
}

#[test]
fn test_forward_moloch_ragequits_and_forwards_payout() {
    let g = setup();

    let forwarded = FundsForwarderClient::new(&g.env, &g.instance).forward_moloch(&g.dao);

    let ragequit: Ragequit = events_named(&g.env, &g.dao, RAGEQUIT)
        .last()
        .unwrap()
        .try_into_val(&g.env)
        .unwrap();
    assert_eq!(
        ragequit,
        Ragequit {
            member: g.instance.clone(),
            shares: 10,
            payout: 100,
        }
    );
    assert_eq!(forwarded, 100);
    assert_eq!(g.d.balance(&g.weth, &g.dao), 4_900);
    assert_eq!(g.d.balance(&g.weth, &g.instance), 0);
    assert_eq!(g.d.balance(&g.weth, &g.d.bridge), 100);
    assert_eq!(MolochDaoClient::new(&g.env, &g.dao).shares_of(&g.instance), 0);

    let donations = g.d.donations();
    assert_eq!(donations.len(), 1);
    assert_donations_tagged(&donations, 43271, 5683);
    assert_donated_total(&donations, &g.weth, 100);
}

#[test]
fn test_forward_moloch_without_shares_forwards_held_balance() {
    let g = setup();
    let forwarder = FundsForwarderClient::new(&g.env, &g.instance);
    forwarder.forward_moloch(&g.dao);

    // Shares are gone; only what the instance already holds moves.
    g.d.mint_token(&g.weth, &g.instance, 7);
    assert_eq!(forwarder.forward_moloch(&g.dao), 7);
    assert_eq!(forwarder.forward_moloch(&g.dao), 0);
    assert_eq!(g.d.balance(&g.weth, &g.dao), 4_900);
}

#[test]
fn test_forward_moloch_failure_keeps_shares() {
    let g = setup();
    LocalBridgeClient::new(&g.env, &g.d.bridge).pause();

    let result = FundsForwarderClient::new(&g.env, &g.instance).try_forward_moloch(&g.dao);

    assert_eq!(result, Err(Ok(Error::BridgeCall)));
    assert_eq!(MolochDaoClient::new(&g.env, &g.dao).shares_of(&g.instance), 10);
    assert_eq!(g.d.balance(&g.weth, &g.dao), 5_000);
}

#[test]
fn test_forward_moloch_requires_bridge() {
    let g = setup();
    g.d.factory_client().change_bridge(&g.d.bridge_owner, &None);

    assert_eq!(
        FundsForwarderClient::new(&g.env, &g.instance).try_forward_moloch(&g.dao),
        Err(Ok(Error::ZeroBridge))
    );
    assert_eq!(MolochDaoClient::new(&g.env, &g.dao).shares_of(&g.instance), 10);
}

#[test]
fn test_forward_moloch_rejects_non_dao() {
    let g = setup();
    assert_eq!(
        FundsForwarderClient::new(&g.env, &g.instance).try_forward_moloch(&g.weth),
        Err(Ok(Error::DaoCall))
    );
}
