//! Scripted pursuit demo.
//!
//! Drives a [`PursuitSession`] through a crime, a chase, a getaway on foot, a
//! bribe and finally an arrest, printing every event the bus publishes.
//!
//! ```bash
//! RUST_LOG=pursuit_core=debug cargo run -p pursuit-client
//! ```
mod script;

use anyhow::Result;
use pursuit_runtime::{PursuitEvent, PursuitSession, RuntimeConfig, Topic};
use tokio::sync::broadcast::{self, error::RecvError};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env()?;
    if let Some(path) = &config.config_path {
        tracing::info!("Pursuit config: {}", path.display());
    }

    let mut session = PursuitSession::from_config(config)?
        .with_wallet(script::STARTING_CASH);
    let printers: Vec<_> = session
        .bus()
        .subscribe_multiple(&[Topic::Pursuit, Topic::Tactic, Topic::Milestone])
        .into_iter()
        .map(|(topic, rx)| tokio::spawn(print_events(topic, rx)))
        .collect();

    script::run(&mut session);
    let summary = session.snapshot();
    let cash = script::cash(&session);
    drop(session);

    for printer in printers {
        printer.await?;
    }
    println!(
        "final: {} | in pursuit: {} | cash: {cash}",
        summary.alert_level, summary.in_pursuit
    );

    Ok(())
}

async fn print_events(topic: Topic, mut rx: broadcast::Receiver<PursuitEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => println!("[{topic:?}] {event:?}"),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(?topic, skipped, "event printer fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
