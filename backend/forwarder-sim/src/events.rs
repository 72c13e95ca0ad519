//! Event feed records decoded from the ledger's event log.
//!
//! Covers the forwarder and factory events plus the reference bridge and DAO
//! events the runner deploys alongside them. Addresses are printed as the
//! hex of their XDR encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, BytesN, Env, Symbol, TryFromVal, Val, Vec};

use forwarder_factory::events::{
    BridgeChanged, ChildImplementationChanged, EscapeHatchCallerChanged, NewFundForwarder,
    BRIDGE_CHANGED, CHILD_IMPLEMENTATION_CHANGED, ESCAPE_HATCH_CALLER_CHANGED,
    NEW_FUND_FORWARDER,
};
use forwarder_mocks::{Donation, Ragequit, DONATE, RAGEQUIT};
use funds_forwarder::{EscapeHatchCalled, Forwarded, ESCAPE_HATCH_CALLED, FORWARDED};

use crate::errors::{Result, SimError};

/// One contract event as captured from the ledger, stamped with the ledger
/// time of the call that emitted it.
#[derive(Clone, Debug)]
pub struct RawEvent {
    pub contract: Address,
    pub topics: Vec<Val>,
    pub data: Val,
    pub timestamp: u64,
}

/// All recognised event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The factory cloned a forwarder (`new_fwd` topic).
    NewFundForwarder,
    /// A forwarder pushed its balance to the bridge (`forwarded` topic).
    Forwarded,
    /// Assets were recovered through an escape hatch (`escaped` topic).
    EscapeHatchCalled,
    /// The factory's bridge was replaced or cleared (`bridge` topic).
    BridgeChanged,
    /// The factory's child implementation was replaced (`child_impl` topic).
    ChildImplementationChanged,
    /// The factory's escape hatch caller was replaced (`hatch_clr` topic).
    EscapeHatchCallerChanged,
    /// The bridge recorded a donation (`donate` topic).
    Donate,
    /// A DAO member burned shares for a payout (`ragequit` topic).
    Ragequit,
    /// An event we don't recognise.
    Unknown,
}

const KNOWN: [(&str, EventKind); 8] = [
    (NEW_FUND_FORWARDER, EventKind::NewFundForwarder),
    (FORWARDED, EventKind::Forwarded),
    (ESCAPE_HATCH_CALLED, EventKind::EscapeHatchCalled),
    (BRIDGE_CHANGED, EventKind::BridgeChanged),
    (CHILD_IMPLEMENTATION_CHANGED, EventKind::ChildImplementationChanged),
    (ESCAPE_HATCH_CALLER_CHANGED, EventKind::EscapeHatchCallerChanged),
    (DONATE, EventKind::Donate),
    (RAGEQUIT, EventKind::Ragequit),
];

impl EventKind {
    pub fn from_topic(topic: &str) -> Self {
        KNOWN
            .iter()
            .find(|(name, _)| *name == topic)
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    /// Kind of an event whose first topic is `symbol`.
    pub fn from_symbol(env: &Env, symbol: &Symbol) -> Self {
        KNOWN
            .iter()
            .find(|(name, _)| Symbol::new(env, name) == *symbol)
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewFundForwarder => "new_fund_forwarder",
            Self::Forwarded => "forwarded",
            Self::EscapeHatchCalled => "escape_hatch_called",
            Self::BridgeChanged => "bridge_changed",
            Self::ChildImplementationChanged => "child_implementation_changed",
            Self::EscapeHatchCallerChanged => "escape_hatch_caller_changed",
            Self::Donate => "donate",
            Self::Ragequit => "ragequit",
            Self::Unknown => "unknown",
        }
    }
}

/// One line of the printed feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub event_type: EventKind,
    pub contract: String,
    /// What the event is about (new instance, new bridge, DAO member...).
    pub subject: Option<String>,
    pub token: Option<String>,
    /// Decimal string; amounts can exceed what JSON numbers hold exactly.
    pub amount: Option<String>,
    pub giver_id: Option<u64>,
    pub receiver_id: Option<u64>,
    pub timestamp: DateTime<Utc>,
}

/// Hex of the address's XDR encoding.
pub fn address_hex(env: &Env, address: &Address) -> String {
    let xdr = address.clone().to_xdr(env);
    let mut bytes = vec![0u8; xdr.len() as usize];
    xdr.copy_into_slice(&mut bytes);
    hex::encode(bytes)
}

fn hash_hex(hash: &BytesN<32>) -> String {
    hex::encode(hash.to_array())
}

fn payload<T: TryFromVal<Env, Val>>(env: &Env, raw: &RawEvent, kind: EventKind) -> Result<T> {
    T::try_from_val(env, &raw.data)
        .map_err(|err| SimError::EventDecode(format!("{}: {err:?}", kind.as_str())))
}

/// Decode one ledger event into a feed record.
pub fn decode(env: &Env, raw: &RawEvent) -> Result<FeedEvent> {
    let kind = raw
        .topics
        .get(0)
        .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
        .map_or(EventKind::Unknown, |symbol| {
            EventKind::from_symbol(env, &symbol)
        });

    let secs = i64::try_from(raw.timestamp).map_err(|_| {
        SimError::EventDecode(format!("timestamp {} out of range", raw.timestamp))
    })?;
    let timestamp = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| SimError::EventDecode(format!("timestamp {secs} out of range")))?;
    let mut feed = FeedEvent {
        event_type: kind,
        contract: address_hex(env, &raw.contract),
        subject: None,
        token: None,
        amount: None,
        giver_id: None,
        receiver_id: None,
        timestamp,
    };

    match kind {
        EventKind::NewFundForwarder => {
            let data: NewFundForwarder = payload(env, raw, kind)?;
            feed.subject = Some(address_hex(env, &data.funds_forwarder));
        }
        EventKind::Forwarded => {
            let data: Forwarded = payload(env, raw, kind)?;
            feed.token = Some(address_hex(env, &data.token));
            feed.amount = Some(data.balance.to_string());
        }
        EventKind::EscapeHatchCalled => {
            let data: EscapeHatchCalled = payload(env, raw, kind)?;
            feed.token = Some(address_hex(env, &data.token));
            feed.amount = Some(data.amount.to_string());
        }
        EventKind::BridgeChanged => {
            let data: BridgeChanged = payload(env, raw, kind)?;
            feed.subject = data.new_bridge.map(|bridge| address_hex(env, &bridge));
        }
        EventKind::ChildImplementationChanged => {
            let data: ChildImplementationChanged = payload(env, raw, kind)?;
            feed.subject = Some(hash_hex(&data.new_child_implementation));
        }
        EventKind::EscapeHatchCallerChanged => {
            let data: EscapeHatchCallerChanged = payload(env, raw, kind)?;
            feed.subject = Some(address_hex(env, &data.new_escape_hatch_caller));
        }
        EventKind::Donate => {
            let data: Donation = payload(env, raw, kind)?;
            feed.token = Some(address_hex(env, &data.token));
            feed.amount = Some(data.amount.to_string());
            feed.giver_id = Some(data.giver_id);
            feed.receiver_id = Some(data.receiver_id);
        }
        EventKind::Ragequit => {
            let data: Ragequit = payload(env, raw, kind)?;
            feed.subject = Some(address_hex(env, &data.member));
            feed.amount = Some(data.payout.to_string());
        }
        EventKind::Unknown => {}
    }
    Ok(feed)
}
