use std::env;

use hash_ring::HashKind;

use crate::errors::AppError;

pub const DEFAULT_REPLICAS: usize = 160;

#[derive(Clone, Debug)]
pub struct RingProbeConfig {
    pub nodes: Vec<String>,
    pub replicas: usize,
    pub hash: HashKind,
    pub keys: Vec<String>,
}

impl RingProbeConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nodes_var =
            lookup("RING_NODES").ok_or_else(|| AppError::Config("RING_NODES not set".into()))?;

        let nodes = split_list(&nodes_var);
        if nodes.is_empty() {
            return Err(AppError::Config("RING_NODES is empty".into()));
        }

        let replicas = match lookup("RING_REPLICAS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("RING_REPLICAS must be a positive integer: {e}"))
            })?,
            None => DEFAULT_REPLICAS,
        };

        let hash = match lookup("RING_HASH") {
            Some(raw) => raw.parse::<HashKind>()?,
            None => HashKind::default(),
        };

        let keys = lookup("RING_KEYS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            nodes,
            replicas,
            hash,
            keys,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
