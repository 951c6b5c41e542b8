use dotenvy::{dotenv, from_filename};
use hash_ring::HashRing;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::RingProbeConfig, errors::AppError, report::ProbeReport};

pub mod config;
pub mod errors;
pub mod report;


fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = RingProbeConfig::from_env()?;

    let ring = HashRing::with_shared_hasher(cfg.replicas, cfg.hash.strategy())?;
    ring.add_node(&cfg.nodes);

    info!(
        nodes = cfg.nodes.len(),
        replicas = cfg.replicas,
        hash = %cfg.hash,
        points = ring.len(),
        "Ring built"
    );

    let report = ProbeReport::collect(&ring, &cfg.keys)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
