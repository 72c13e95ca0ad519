//! # Types
//!
//! ### Forwarder lifecycle
//!
//! ```text
//! (deploy_v2 + __constructor) ──► Live
//! ```
//!
//! An instance is deployed and initialized in one host operation, so no
//! uninitialized instance is ever observable. `Live` is terminal.

use soroban_sdk::{contracttype, Address};

/// Immutable per-instance configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForwarderConfig {
    pub giver_id: u64,
    pub receiver_id: u64,
    /// The factory that deployed this instance. Bridge and escape hatch
    /// settings are read from it on every call.
    pub factory: Address,
}
