// Progress header classification

use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref HEADER_RE: Regex = Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} - Thread (?P<thread>-?\d+): Started on (?P<started>\d+\.\d+); Running for (?P<elapsed>\d+\.\d+) secs; request: (?P<request>.*)"
    )
    .unwrap();
}

// Every header carries this literal; checked before running the regex
const HEADER_QUICK_CHECK: &str = " - Thread ";

/// Fields of a line that matched the progress header grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressHeader<'a> {
    pub thread: &'a str,
    pub started: &'a str, // raw `Started on` text, used as part of the request key
    pub elapsed: f64,
    pub request: &'a str,
}

/// Classify a single line. `Ok(None)` means the line is ordinary log text.
pub fn classify(line: &str) -> Result<Option<ProgressHeader<'_>>, ParseError> {
    if !line.contains(HEADER_QUICK_CHECK) {
        return Ok(None);
    }

    let Some(caps) = HEADER_RE.captures(line) else {
        return Ok(None);
    };

    let elapsed_text = caps.name("elapsed").map_or("", |m| m.as_str());
    let elapsed = elapsed_text
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "elapsed",
            value: elapsed_text.to_string(),
        })?;
    if !elapsed.is_finite() {
        return Err(ParseError::InvalidNumber {
            field: "elapsed",
            value: elapsed_text.to_string(),
        });
    }

    Ok(Some(ProgressHeader {
        thread: caps.name("thread").map_or("", |m| m.as_str()),
        started: caps.name("started").map_or("", |m| m.as_str()),
        elapsed,
        request: caps.name("request").map_or("", |m| m.as_str()),
    }))
}
