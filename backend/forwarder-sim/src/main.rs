//! Funds forwarder local runner: entry point.
//!
//! Boots an in-process ledger, deploys a bridge, a factory and one campaign
//! forwarder, replays the configured donations through it and prints the
//! resulting event feed to stdout as JSON lines. Logs go to stderr.

mod config;
mod errors;
mod events;
mod scenario;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Load optional .env file (ignored if missing) before RUST_LOG is read.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;
    info!(
        giver_id = config.giver_id,
        receiver_id = config.receiver_id,
        rounds = config.donation_count,
        "replaying campaign"
    );

    let report = scenario::run(&config)?;

    print_feed(&report)?;

    info!(
        forwarder = %events::address_hex(&report.env, &report.forwarder),
        bridge = %events::address_hex(&report.env, &report.bridge),
        donations = report.donations.len(),
        native = %report.donated(&report.native),
        token = %report.donated(&report.token),
        "campaign replayed"
    );
    Ok(())
}

/// Write one JSON line per ledger event to stdout.
fn print_feed(report: &scenario::Report) -> errors::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in &report.events {
        let feed = events::decode(&report.env, event)?;
        serde_json::to_writer(&mut out, &feed)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
