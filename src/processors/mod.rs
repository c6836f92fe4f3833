pub mod fingerprint;
pub mod ranking;

pub use fingerprint::{fingerprint, Fingerprint};
pub use ranking::{group_snapshots, top_requests, top_snapshots, SnapshotGroup, SnapshotSummary};
