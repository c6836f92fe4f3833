mod report;

pub use report::{write_report, write_requests_report, write_snapshots_report};
