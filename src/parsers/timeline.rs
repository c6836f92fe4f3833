//! Reconstruction of per-request timelines from progress headers.

use crate::error::ParseError;
use crate::models::{ParseWindow, RequestKey, RequestTimeline, Snapshot};
use crate::parsers::header::{classify, ProgressHeader};
use crate::utils::{decode_line, epoch_to_local, read_raw_line};
use std::collections::HashMap;
use std::io::{self, BufRead};

/// Counters collected while parsing, logged once the input is consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub headers: usize,
    pub filtered: usize,
    pub malformed: usize,
}

/// All request timelines found in one log.
///
/// Timelines are kept in the order their first header appeared; `index` maps a
/// request key to its position.
#[derive(Debug, Clone)]
pub struct LongRequestLog {
    window: ParseWindow,
    requests: Vec<RequestTimeline>,
    index: HashMap<RequestKey, usize>,
    active: Option<usize>,
    stats: ParseStats,
}

impl Default for LongRequestLog {
    fn default() -> Self {
        Self::new(ParseWindow::default())
    }
}

impl LongRequestLog {
    pub fn new(window: ParseWindow) -> Self {
        Self {
            window,
            requests: Vec::new(),
            index: HashMap::new(),
            active: None,
            stats: ParseStats::default(),
        }
    }

    /// Read and process every line of `reader`.
    pub fn parse_reader<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> io::Result<()> {
        let mut buf = Vec::new();
        while read_raw_line(reader, &mut buf)? {
            let line = decode_line(&buf);
            self.process_line(&line);
        }
        Ok(())
    }

    pub fn parse_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref());
        }
    }

    /// Feed one raw line (terminator included) to the state machine.
    pub fn process_line(&mut self, line: &str) {
        self.stats.lines += 1;

        let header = match classify(line) {
            Ok(Some(header)) => header,
            Ok(None) => {
                self.attach(line);
                return;
            }
            Err(_) => {
                self.stats.malformed += 1;
                self.attach(line);
                return;
            }
        };

        match self.resolve(&header) {
            Ok(Some(position)) => {
                self.stats.headers += 1;
                self.requests[position]
                    .snapshots
                    .push(Snapshot::new(header.elapsed));
                self.active = Some(position);
            }
            Ok(None) => {
                self.stats.headers += 1;
                self.stats.filtered += 1;
                self.active = None;
            }
            Err(_) => {
                self.stats.malformed += 1;
                self.attach(line);
            }
        }
    }

    /// Find or create the timeline for `header`. `Ok(None)` means the request
    /// started outside the window; nothing is recorded for it, so later
    /// headers with the same key are checked against the window again.
    fn resolve(&mut self, header: &ProgressHeader<'_>) -> Result<Option<usize>, ParseError> {
        let key = RequestKey::new(header.started, header.thread);
        if let Some(&position) = self.index.get(&key) {
            return Ok(Some(position));
        }

        let started = header
            .started
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                field: "started",
                value: header.started.to_string(),
            })?;
        let started_at = epoch_to_local(started)?;
        if !self.window.contains(&started_at) {
            return Ok(None);
        }

        let position = self.requests.len();
        self.requests
            .push(RequestTimeline::new(key.clone(), started_at, header.request));
        self.index.insert(key, position);
        Ok(Some(position))
    }

    fn attach(&mut self, line: &str) {
        let Some(position) = self.active else {
            return;
        };
        if let Some(snapshot) = self.requests[position].last_snapshot_mut() {
            snapshot.attach(line);
        }
    }

    pub fn requests(&self) -> &[RequestTimeline] {
        &self.requests
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn snapshot_count(&self) -> usize {
        self.requests.iter().map(|r| r.snapshots.len()).sum()
    }
}

/// Parse a whole log with the given window.
pub fn parse_log<R: BufRead + ?Sized>(reader: &mut R, window: ParseWindow) -> io::Result<LongRequestLog> {
    let mut log = LongRequestLog::new(window);
    log.parse_reader(reader)?;
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_date;

    fn header(thread: &str, started: &str, elapsed: &str, request: &str) -> String {
        format!(
            "2015-03-02 14:05:09,123 - Thread {thread}: Started on {started}; Running for {elapsed} secs; request: {request}\n"
        )
    }

    #[test]
    fn test_interleaved_requests() {
        let input = [
            header("3", "1425301500.10", "12.0", "GET /a"),
            "stack of thread 3\n".to_string(),
            header("-1", "1425301505.20", "7.5", "GET /b"),
            "stack of thread -1\n".to_string(),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 2);
        let first = &log.requests()[0];
        assert_eq!(first.key, RequestKey::new("1425301500.10", "3"));
        assert_eq!(first.snapshots.len(), 1);
        assert_eq!(first.snapshots[0].lines, vec!["stack of thread 3\n"]);
        assert_eq!(first.request, "GET /a");

        let second = &log.requests()[1];
        assert_eq!(second.key, RequestKey::new("1425301505.20", "-1"));
        assert_eq!(second.snapshots.len(), 1);
        assert_eq!(second.snapshots[0].lines, vec!["stack of thread -1\n"]);
        assert_eq!(second.duration(), 7.5);
    }

    #[test]
    fn test_same_identity_appends_snapshots() {
        let input = [
            header("3", "1425301500.10", "5.0", "GET /a"),
            "first\n".to_string(),
            header("3", "1425301500.10", "10.0", "GET /changed"),
            "second\n".to_string(),
            "third\n".to_string(),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 1);
        let request = &log.requests()[0];
        assert_eq!(request.request, "GET /a");
        assert_eq!(request.snapshots.len(), 2);
        assert_eq!(request.snapshots[0].lines, vec!["first\n"]);
        assert_eq!(request.snapshots[1].lines, vec!["second\n", "third\n"]);
        assert_eq!(request.duration(), 10.0);
    }

    #[test]
    fn test_same_start_different_thread_is_another_request() {
        let input = [
            header("1", "1425301500.10", "5.0", "GET /a"),
            header("2", "1425301500.10", "5.0", "GET /a"),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);
        assert_eq!(log.requests().len(), 2);
    }

    #[test]
    fn test_raw_start_text_is_the_identity() {
        // numerically equal but textually different start values
        let input = [
            header("1", "1425301500.10", "5.0", "GET /a"),
            header("1", "1425301500.1", "6.0", "GET /a"),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);
        assert_eq!(log.requests().len(), 2);
    }

    #[test]
    fn test_leading_lines_are_discarded() {
        let input = [
            "starting up\n".to_string(),
            "\n".to_string(),
            header("1", "1425301500.10", "5.0", "GET /a"),
            "stack\n".to_string(),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 1);
        assert_eq!(log.requests()[0].snapshots[0].lines, vec!["stack\n"]);
        assert_eq!(log.stats().lines, 4);
        assert_eq!(log.stats().headers, 1);
    }

    #[test]
    fn test_only_unmatched_lines() {
        let mut log = LongRequestLog::default();
        log.parse_lines(["a\n", "b\n"]);
        assert!(log.requests().is_empty());
        assert_eq!(log.snapshot_count(), 0);
    }

    #[test]
    fn test_window_filters_requests_and_their_lines() {
        let inside = 1425301500.0;
        let outside = inside - 7200.0;
        let start = epoch_to_local(inside - 60.0).unwrap();
        let end = epoch_to_local(inside + 60.0).unwrap();
        let window = ParseWindow::new(start, end).unwrap();

        let input = [
            header("1", &format!("{outside:.2}"), "5.0", "GET /old"),
            "old stack\n".to_string(),
            header("2", &format!("{inside:.2}"), "3.0", "GET /new"),
            "new stack\n".to_string(),
            header("1", &format!("{outside:.2}"), "10.0", "GET /old"),
            "old stack again\n".to_string(),
        ];
        let mut log = LongRequestLog::new(window);
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 1);
        let kept = &log.requests()[0];
        assert_eq!(kept.request, "GET /new");
        assert_eq!(kept.snapshots.len(), 1);
        assert_eq!(kept.snapshots[0].lines, vec!["new stack\n"]);
        assert_eq!(log.stats().filtered, 2);
        assert_eq!(log.snapshot_count(), 1);
    }

    #[test]
    fn test_window_excludes_end() {
        let started = 1425301500.0;
        let end = epoch_to_local(started).unwrap();
        let window = ParseWindow::new(parse_date("2000-01-01 00:00:00").unwrap(), end).unwrap();

        let mut log = LongRequestLog::new(window);
        log.parse_lines([header("1", &format!("{started:.1}"), "5.0", "GET /a")]);
        assert!(log.requests().is_empty());
    }

    #[test]
    fn test_out_of_range_start_is_treated_as_text() {
        let huge = "9".repeat(400);
        let input = [
            header("1", "1425301500.10", "5.0", "GET /a"),
            header("2", &format!("{huge}.0"), "5.0", "GET /b"),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 1);
        assert_eq!(log.stats().malformed, 1);
        let attached = &log.requests()[0].snapshots[0].lines;
        assert_eq!(attached.len(), 1);
        assert!(attached[0].contains("Thread 2"));
    }

    #[test]
    fn test_infinite_elapsed_is_treated_as_text() {
        let huge = format!("{}.0", "9".repeat(400));
        let input = [
            header("1", "1425301500.10", "5.0", "GET /a"),
            "frame\n".to_string(),
            header("2", "1425301501.10", &huge, "GET /b"),
            "after\n".to_string(),
        ];
        let mut log = LongRequestLog::default();
        log.parse_lines(&input);

        assert_eq!(log.requests().len(), 1);
        assert_eq!(log.snapshot_count(), 1);
        assert_eq!(log.stats().malformed, 1);
        assert_eq!(log.stats().headers, 1);
        let attached = &log.requests()[0].snapshots[0].lines;
        assert_eq!(attached.len(), 3);
        assert!(attached[1].contains("Thread 2"));
        assert_eq!(attached[2], "after\n");
    }

    #[test]
    fn test_parse_reader() {
        let text = format!(
            "{}stack line\n{}",
            header("1", "1425301500.10", "5.0", "GET /a"),
            header("1", "1425301500.10", "8.0", "GET /a")
        );
        let mut reader = io::Cursor::new(text.into_bytes());
        let log = parse_log(&mut reader, ParseWindow::default()).unwrap();

        assert_eq!(log.requests().len(), 1);
        assert_eq!(log.snapshot_count(), 2);
        assert_eq!(log.requests()[0].snapshots[0].lines, vec!["stack line\n"]);
        assert!(log.requests()[0].snapshots[1].lines.is_empty());
    }
}
