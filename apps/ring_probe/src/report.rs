use std::collections::BTreeMap;

use hash_ring::{HashRing, RingError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct KeyRoute {
    pub key: String,
    pub node: String,
}

/// Snapshot of a ring printed by the probe.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub replicas: usize,
    pub points: usize,
    pub nodes: Vec<String>,
    pub routes: Vec<KeyRoute>,
    pub statistics: BTreeMap<String, f64>,
}

impl ProbeReport {
    pub fn collect(ring: &HashRing, keys: &[String]) -> Result<Self, RingError> {
        let routes = keys
            .iter()
            .map(|key| {
                ring.get_node(key).map(|node| KeyRoute {
                    key: key.clone(),
                    node,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            replicas: ring.replicas(),
            points: ring.len(),
            nodes: ring.nodes(),
            routes,
            statistics: ring.statistics().into_iter().collect(),
        })
    }
}
