//! Application-wide error types.

use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{call} rejected: {reason}")]
    Contract { call: &'static str, reason: &'static str },

    #[error("{call} failed in the host: {detail}")]
    Host { call: &'static str, detail: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event decode error: {0}")]
    EventDecode(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Flattens the nested result of a `try_` forwarder call.
pub trait ForwarderCall<T> {
    fn into_sim(self, call: &'static str) -> Result<T>;
}

impl<T, C, I> ForwarderCall<T>
    for std::result::Result<std::result::Result<T, C>, std::result::Result<funds_forwarder::Error, I>>
where
    C: Debug,
    I: Debug,
{
    fn into_sim(self, call: &'static str) -> Result<T> {
        match self {
            Ok(Ok(value)) => Ok(value),
            Err(Ok(err)) => Err(SimError::Contract {
                call,
                reason: err.reason(),
            }),
            Ok(Err(err)) => Err(SimError::Host {
                call,
                detail: format!("{err:?}"),
            }),
            Err(Err(err)) => Err(SimError::Host {
                call,
                detail: format!("{err:?}"),
            }),
        }
    }
}
