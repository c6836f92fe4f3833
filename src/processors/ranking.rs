//! Rankings over reconstructed timelines: slowest requests and most frequent
//! snapshot fingerprints.

use crate::models::RequestTimeline;
use crate::parsers::LongRequestLog;
use crate::processors::fingerprint::Fingerprint;
use crate::utils::constants::TOP_SNAPSHOT_GROUPS;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Requests sorted by final duration, longest first, at most `limit` of them.
/// Requests with equal durations keep the order they first appeared in.
pub fn top_requests(log: &LongRequestLog, limit: usize) -> Vec<&RequestTimeline> {
    let mut requests: Vec<&RequestTimeline> = log.requests().iter().collect();
    requests.sort_by(|a, b| {
        b.duration()
            .partial_cmp(&a.duration())
            .unwrap_or(Ordering::Equal)
    });
    requests.truncate(limit);
    requests
}

/// All snapshots sharing one fingerprint id.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotGroup {
    pub fingerprint: Fingerprint, // fingerprint of the first snapshot seen
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    pub groups: Vec<SnapshotGroup>,
    pub top_count: usize,
    pub total_count: usize,
}

/// Group every snapshot by fingerprint id, in the order groups are first met
/// (requests in first-seen order, snapshots in file order).
pub fn group_snapshots(log: &LongRequestLog, precision: usize) -> Vec<SnapshotGroup> {
    let mut groups: Vec<SnapshotGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for snapshot in log.requests().iter().flat_map(|r| r.snapshots.iter()) {
        let fingerprint = snapshot.fingerprint(precision);
        match positions.get(&fingerprint.id) {
            Some(&position) => groups[position].count += 1,
            None => {
                positions.insert(fingerprint.id.clone(), groups.len());
                groups.push(SnapshotGroup {
                    fingerprint,
                    count: 1,
                });
            }
        }
    }

    groups
}

/// The ten most frequent fingerprints. The cutoff is fixed and does not
/// follow the request limit.
pub fn top_snapshots(log: &LongRequestLog, precision: usize) -> SnapshotSummary {
    let mut groups = group_snapshots(log, precision);
    let total_count = groups.iter().map(|g| g.count).sum();

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(TOP_SNAPSHOT_GROUPS);
    let top_count = groups.iter().map(|g| g.count).sum();

    SnapshotSummary {
        groups,
        top_count,
        total_count,
    }
}
