//! Replays a donation campaign against a fresh in-process ledger.
//!
//! Every round a donor sends native currency and tokens to the campaign's
//! forwarder. Native donations are forwarded as they arrive; token
//! donations pile up and leave in one `forward_multiple` batch at the end.

use soroban_sdk::testutils::{Address as _, Events as _, Ledger as _};
use soroban_sdk::{token, vec, Address, Env};
use tracing::{debug, info};

use forwarder_mocks::{Donation, TokenBehavior};
use funds_forwarder::testutils::Deployment;
use funds_forwarder::FundsForwarderClient;

use crate::config::Config;
use crate::errors::{ForwarderCall, Result};
use crate::events::RawEvent;

/// Seconds the ledger clock advances between rounds.
const ROUND_SECS: u64 = 60;

pub struct Report {
    pub env: Env,
    pub forwarder: Address,
    pub bridge: Address,
    pub native: Address,
    pub token: Address,
    pub events: Vec<RawEvent>,
    pub donations: Vec<Donation>,
}

impl Report {
    /// Sum of the bridge's records for `token`.
    pub fn donated(&self, token: &Address) -> i128 {
        self.donations
            .iter()
            .filter(|donation| &donation.token == token)
            .map(|donation| donation.amount)
            .sum()
    }
}

/// Copy the events of the last top-level call, stamped with the ledger time.
fn capture(env: &Env, events: &mut Vec<RawEvent>) {
    let timestamp = env.ledger().timestamp();
    for (contract, topics, data) in env.events().all().iter() {
        events.push(RawEvent {
            contract,
            topics,
            data,
            timestamp,
        });
    }
}

pub fn run(config: &Config) -> Result<Report> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(config.ledger_timestamp);

    let deployment = Deployment::new(&env);
    let forwarder = deployment.new_forwarder(config.giver_id, config.receiver_id);
    let token = deployment.new_token(TokenBehavior::Standard);
    info!(
        ?forwarder,
        bridge = ?deployment.bridge,
        factory = ?deployment.factory,
        "campaign deployed"
    );

    let donor = Address::generate(&env);
    let total = config.total_per_asset()?;
    deployment.mint_native(&donor, total);
    deployment.mint_token(&token, &donor, total);

    let client = FundsForwarderClient::new(&env, &forwarder);
    let native_client = token::Client::new(&env, &deployment.native);
    let token_client = token::Client::new(&env, &token);
    let mut events = Vec::new();

    for round in 0..config.donation_count {
        env.ledger()
            .set_timestamp(config.ledger_timestamp + u64::from(round) * ROUND_SECS);

        native_client.transfer(&donor, &forwarder, &config.donation_amount);
        let forwarded = client.try_forward(&deployment.native).into_sim("forward")?;
        capture(&env, &mut events);
        info!(round, forwarded, "native donation forwarded");

        token_client.transfer(&donor, &forwarder, &config.donation_amount);
        debug!(round, amount = config.donation_amount, "token donation received");
    }

    let amounts = client
        .try_forward_multiple(&vec![&env, deployment.native.clone(), token.clone()])
        .into_sim("forward_multiple")?;
    capture(&env, &mut events);
    info!(?amounts, "batch forwarded");

    let donations = deployment.donations().iter().collect();
    Ok(Report {
        forwarder,
        bridge: deployment.bridge.clone(),
        native: deployment.native.clone(),
        token,
        events,
        donations,
        env,
    })
}
