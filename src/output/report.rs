use crate::config::{AnalyzerOptions, Subject};
use crate::parsers::LongRequestLog;
use crate::processors::{top_requests, top_snapshots};
use crate::utils::{format_date, format_seconds};
use std::io::{self, Write};

/// Slowest requests, each followed by every snapshot and its fingerprint.
pub fn write_requests_report<W: Write>(
    out: &mut W,
    log: &LongRequestLog,
    limit: usize,
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "=== Top {limit} long running requests ===")?;
    for request in top_requests(log, limit) {
        writeln!(
            out,
            "{} {} {}",
            format_date(&request.started_at),
            format_seconds(request.duration()),
            request.request
        )?;
        for snapshot in &request.snapshots {
            let fingerprint = snapshot.fingerprint(precision);
            writeln!(out, "  {} {}", format_seconds(snapshot.elapsed), fingerprint.id)?;
            writeln!(out, "{}", fingerprint.text)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Most frequent fingerprints across all requests. The header echoes `limit`
/// but the number of groups is always capped at `TOP_SNAPSHOT_GROUPS`.
pub fn write_snapshots_report<W: Write>(
    out: &mut W,
    log: &LongRequestLog,
    limit: usize,
    precision: usize,
) -> io::Result<()> {
    let summary = top_snapshots(log, precision);

    writeln!(out, "=== Top {limit} snapshots ===")?;
    writeln!(out, "{} out of {}", summary.top_count, summary.total_count)?;
    for group in &summary.groups {
        writeln!(out, "{} - found {} times", group.fingerprint.id, group.count)?;
        writeln!(out, "{}", group.fingerprint.text)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    log: &LongRequestLog,
    subject: Subject,
    options: &AnalyzerOptions,
) -> io::Result<()> {
    match subject {
        Subject::Requests => write_requests_report(out, log, options.limit, options.precision),
        Subject::Snapshots => {
            write_snapshots_report(out, log, options.limit, options.precision)
        }
    }
}
