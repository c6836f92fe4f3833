//! Stable short identifiers for the tail of a snapshot's log text.

use crate::utils::constants::FINGERPRINT_ID_LEN;
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub id: String,
    pub text: String,
}

/// Fingerprint the last `precision` lines.
///
/// The lines are concatenated as is (they carry their own terminators), only
/// trailing whitespace of the whole concatenation is stripped, and the id is
/// the first eight hex digits of the SHA-1 of that text.
pub fn fingerprint<S: AsRef<str>>(lines: &[S], precision: usize) -> Fingerprint {
    let tail = &lines[lines.len().saturating_sub(precision)..];
    let mut text = String::new();
    for line in tail {
        text.push_str(line.as_ref());
    }
    text.truncate(text.trim_end().len());

    let id = fingerprint_id(&text);
    Fingerprint { id, text }
}

pub fn fingerprint_id(text: &str) -> String {
    let digest = Sha1::digest(text.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(FINGERPRINT_ID_LEN);
    hex
}
