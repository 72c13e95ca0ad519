#![allow(dead_code)]

use forwarder_mocks::Donation;
use soroban_sdk::{Address, Env, Vec};

use crate::FundsForwarderClient;

/// Forwarding conserves value: what left the instance is exactly what the
/// bridge gained, and the instance is left empty.
pub fn assert_forward_conserves(
    instance_before: i128,
    instance_after: i128,
    bridge_before: i128,
    bridge_after: i128,
    forwarded: i128,
) {
    assert_eq!(
        instance_after, 0,
        "forward left {} behind on the instance",
        instance_after
    );
    assert_eq!(
        forwarded, instance_before,
        "forward reported {} but the instance held {}",
        forwarded, instance_before
    );
    assert_eq!(
        bridge_after,
        bridge_before + forwarded,
        "bridge balance moved from {} to {} for a forward of {}",
        bridge_before,
        bridge_after,
        forwarded
    );
}

/// Every donation recorded by the bridge carries the instance's id pair.
pub fn assert_donations_tagged(donations: &Vec<Donation>, giver_id: u64, receiver_id: u64) {
    for donation in donations.iter() {
        assert_eq!(
            (donation.giver_id, donation.receiver_id),
            (giver_id, receiver_id),
            "donation {:?} carries the wrong id pair",
            donation
        );
    }
}

/// The bridge's records for `token` sum to `expected`.
pub fn assert_donated_total(donations: &Vec<Donation>, token: &Address, expected: i128) {
    let total: i128 = donations
        .iter()
        .filter(|donation| &donation.token == token)
        .map(|donation| donation.amount)
        .sum();
    assert_eq!(
        total, expected,
        "bridge recorded {} of {:?} but {} was expected",
        total, token, expected
    );
}

/// No recorded donation is empty.
pub fn assert_no_empty_donations(donations: &Vec<Donation>) {
    assert!(
        donations.iter().all(|donation| donation.amount > 0),
        "bridge recorded an empty donation: {:?}",
        donations
    );
}

/// An instance keeps its configuration for life.
pub fn assert_instance_config(
    env: &Env,
    instance: &Address,
    giver_id: u64,
    receiver_id: u64,
    factory: &Address,
) {
    let client = FundsForwarderClient::new(env, instance);
    assert!(client.has_initialized());
    assert_eq!(client.giver_id(), giver_id);
    assert_eq!(client.receiver_id(), receiver_id);
    assert_eq!(&client.funds_forwarder_factory(), factory);
}
