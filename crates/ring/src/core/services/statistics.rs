use std::collections::HashMap;

use crate::core::services::ring::RingState;

const HASH_SPACE: u64 = u32::MAX as u64;

/// Each point owns the arc from its predecessor up to itself; the smallest
/// point owns the wraparound arc from the largest one.
pub(crate) fn arc_shares(state: &RingState) -> HashMap<String, f64> {
    let sorted = &state.sorted;
    let Some(&last) = sorted.last() else {
        return HashMap::new();
    };

    let mut arcs: HashMap<&str, u64> = HashMap::new();
    let mut prev: Option<u32> = None;

    for &point in sorted {
        let arc = match prev {
            Some(p) => u64::from(point - p),
            None => u64::from(point) + HASH_SPACE - u64::from(last),
        };
        prev = Some(point);

        if let Some(owner) = state.points.get(&point) {
            *arcs.entry(owner.as_ref()).or_default() += arc;
        }
    }

    arcs.into_iter()
        .map(|(node, arc)| (node.to_string(), arc as f64 / HASH_SPACE as f64))
        .collect()
}
