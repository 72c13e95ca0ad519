//! Runner configuration loaded from environment variables.

use crate::errors::{Result, SimError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Giver id the forwarder is created for
    pub giver_id: u64,
    /// Receiver id the forwarder is created for
    pub receiver_id: u64,
    /// Size of every simulated donation, in base units
    pub donation_amount: i128,
    /// Number of donation rounds per asset
    pub donation_count: u32,
    /// Ledger clock at the first round (unix seconds)
    pub ledger_timestamp: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Config {
            giver_id: parse(&lookup, "GIVER_ID", "43271")?,
            receiver_id: parse(&lookup, "RECEIVER_ID", "5683")?,
            donation_amount: parse(&lookup, "DONATION_AMOUNT", "100000000000000000")?,
            donation_count: parse(&lookup, "DONATION_COUNT", "3")?,
            ledger_timestamp: match lookup("LEDGER_TIMESTAMP") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| SimError::Config("Invalid LEDGER_TIMESTAMP".to_string()))?,
                None => u64::try_from(chrono::Utc::now().timestamp())
                    .map_err(|_| SimError::Config("System clock before epoch".to_string()))?,
            },
        };

        if config.donation_amount <= 0 {
            return Err(SimError::Config(
                "DONATION_AMOUNT must be positive".to_string(),
            ));
        }
        if config.donation_count == 0 {
            return Err(SimError::Config(
                "DONATION_COUNT must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Amount a donor needs per asset to fund every round.
    pub fn total_per_asset(&self) -> Result<i128> {
        self.donation_amount
            .checked_mul(i128::from(self.donation_count))
            .ok_or_else(|| {
                SimError::Config("DONATION_AMOUNT * DONATION_COUNT overflows".to_string())
            })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T> {
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .map_err(|_| SimError::Config(format!("Invalid {key}")))
}
