use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    core::{
        domain::{
            models::{RingError, RingResult, VirtualNode},
            services::HashStrategy,
        },
        services::statistics::arc_shares,
    },
    infrastructure::adapters::hashers::Fnv1aHasher,
};

/// Ring points guarded as one unit: `sorted` is always rebuilt from `points`.
#[derive(Debug, Default)]
pub(crate) struct RingState {
    pub(crate) points: HashMap<u32, Arc<str>>,
    pub(crate) sorted: Vec<u32>,
}

impl RingState {
    fn rebuild_sorted(&mut self) {
        self.sorted.clear();
        self.sorted.extend(self.points.keys().copied());
        self.sorted.sort_unstable();
    }

    /// First point clockwise from `key_hash`, wrapping to the smallest point.
    fn owner_of(&self, key_hash: u32) -> Option<&Arc<str>> {
        let idx = self.sorted.partition_point(|&point| point < key_hash);
        let point = self.sorted.get(idx).or_else(|| self.sorted.first())?;
        self.points.get(point)
    }
}

pub struct HashRing {
    state: RwLock<RingState>,
    hasher: Arc<dyn HashStrategy>,
    replicas: usize,
}

impl HashRing {
    /// Empty ring hashing with 32-bit FNV-1a.
    pub fn new(replicas: usize) -> RingResult<Self> {
        Self::with_shared_hasher(replicas, Arc::new(Fnv1aHasher))
    }

    pub fn new_shared(replicas: usize) -> RingResult<Arc<Self>> {
        Self::new(replicas).map(Arc::new)
    }

    pub fn with_hasher<H>(replicas: usize, hasher: H) -> RingResult<Self>
    where
        H: HashStrategy + 'static,
    {
        Self::with_shared_hasher(replicas, Arc::new(hasher))
    }

    pub fn with_shared_hasher(replicas: usize, hasher: Arc<dyn HashStrategy>) -> RingResult<Self> {
        if replicas == 0 {
            return Err(RingError::InvalidReplicaCount(replicas));
        }

        Ok(Self {
            state: RwLock::new(RingState::default()),
            hasher,
            replicas,
        })
    }

    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Hashes every virtual node of `node_ids` in input order, replicas ascending.
    fn stage<I, S>(&self, node_ids: I) -> Vec<(u32, Arc<str>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staged = Vec::new();
        for node_id in node_ids {
            let node: Arc<str> = Arc::from(node_id.as_ref());
            for replica in 0..self.replicas {
                let vnode = VirtualNode::new(&node, replica).to_string();
                staged.push((self.hasher.hash(&vnode), node.clone()));
            }
        }
        staged
    }

    /// Places `replicas` points per node. On a hash collision the entry staged
    /// last wins, so a later node in `node_ids` overrides an earlier one.
    pub fn add_node<I, S>(&self, node_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let staged = self.stage(node_ids);
        let staged_len = staged.len();

        let mut state = self.state.write();
        for (hash, node) in staged {
            state.points.insert(hash, node);
        }
        state.rebuild_sorted();

        debug!(
            staged = staged_len,
            points = state.points.len(),
            "Nodes added to ring"
        );
    }

    /// Drops the points of `node_ids`. A point that another node claimed
    /// through a collision is left in place.
    pub fn remove_node<I, S>(&self, node_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let staged = self.stage(node_ids);

        let mut state = self.state.write();
        let mut removed = 0usize;
        for (hash, node) in &staged {
            if state.points.get(hash).is_some_and(|owner| owner == node) {
                state.points.remove(hash);
                removed += 1;
            }
        }
        state.rebuild_sorted();

        debug!(
            staged = staged.len(),
            removed,
            points = state.points.len(),
            "Nodes removed from ring"
        );
    }

    /// Number of ring points, not of distinct nodes.
    pub fn len(&self) -> usize {
        self.state.read().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().points.is_empty()
    }

    pub fn node_exists(&self, node_id: &str) -> bool {
        self.state
            .read()
            .points
            .values()
            .any(|owner| owner.as_ref() == node_id)
    }

    /// Distinct nodes owning at least one point, sorted.
    pub fn nodes(&self) -> Vec<String> {
        let state = self.state.read();
        let owners: BTreeSet<&str> = state.points.values().map(|owner| owner.as_ref()).collect();
        owners.into_iter().map(str::to_string).collect()
    }

    pub fn get_node(&self, key: &str) -> RingResult<String> {
        if key.is_empty() {
            return Err(RingError::InvalidKey);
        }

        let key_hash = self.hasher.hash(key);

        let state = self.state.read();
        let node = state.owner_of(key_hash).ok_or(RingError::EmptyRing)?;
        trace!(key, key_hash, node = %node, "Key routed");

        Ok(node.to_string())
    }

    /// Share of the 32-bit hash space owned by each node, summing to ~1.0.
    pub fn statistics(&self) -> HashMap<String, f64> {
        let state = self.state.read();
        arc_shares(&state)
    }
}
