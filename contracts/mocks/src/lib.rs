//! # Forwarder mocks
//!
//! Contracts the funds forwarder and its factory are exercised against.
//!
//! | Contract        | Stands in for                                            |
//! |-----------------|----------------------------------------------------------|
//! | [`LocalBridge`] | the donation bridge: whitelist, accounting, `donate`     |
//! | [`TestToken`]   | tokens that bend the token interface ([`TokenBehavior`]) |
//! | [`MolochDao`]   | a share-based guild bank with pro-rata ragequit          |
//!
//! Admin entry points (`whitelist_token`, `pause`, `mint`, `add_member`...)
//! skip authorization so fixtures can be built with auth enforcement on.

#![no_std]

mod bridge;
mod dao;
mod token;

pub use bridge::{BridgeError, Donation, LocalBridge, LocalBridgeClient, DONATE};
pub use dao::{DaoError, MolochDao, MolochDaoClient, Ragequit, RAGEQUIT};
pub use token::{TestToken, TestTokenClient, TokenBehavior, TokenError, NEGATIVE_BALANCE};
