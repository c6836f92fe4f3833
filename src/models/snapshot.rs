use crate::processors::fingerprint::{fingerprint, Fingerprint};

/// One progress observation of a request plus the log text that followed it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub elapsed: f64, // 요청 시작 후 경과 시간 (초)
    pub lines: Vec<String>,
}

impl Snapshot {
    pub fn new(elapsed: f64) -> Self {
        Self {
            elapsed,
            lines: Vec::new(),
        }
    }

    pub fn attach(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn fingerprint(&self, precision: usize) -> Fingerprint {
        fingerprint(&self.lines, precision)
    }
}
