//! Assignment scripts
//!
//! A script holds one assignment per line:
//!
//! ```text
//! # begin end value
//! 1 5 A
//! 2 3 B
//! ```
//!
//! Keys are `i64`, values a single character. Blank lines and lines starting
//! with `#` are skipped. Refused assignments are counted, not fatal.

use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace};

use crate::store::IntervalStore;

/// Errors that can occur while reading a script
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The script could not be read
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not `<begin> <end> <value>`
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Inclusive start of the range
    pub begin: i64,
    /// Exclusive end of the range
    pub end: i64,
    /// Value painted over the range
    pub value: char,
}

impl Assignment {
    /// Parse `<begin> <end> <value>`
    pub fn parse(text: &str, line: usize) -> Result<Self, ReplayError> {
        let parse_error = |message: String| ReplayError::Parse { line, message };

        let mut fields = text.split_whitespace();
        let begin = fields
            .next()
            .ok_or_else(|| parse_error("missing begin key".to_string()))?;
        let end = fields
            .next()
            .ok_or_else(|| parse_error("missing end key".to_string()))?;
        let value = fields
            .next()
            .ok_or_else(|| parse_error("missing value".to_string()))?;
        if fields.next().is_some() {
            return Err(parse_error("trailing fields".to_string()));
        }

        let begin = begin
            .parse()
            .map_err(|_| parse_error(format!("invalid begin key '{}'", begin)))?;
        let end = end
            .parse()
            .map_err(|_| parse_error(format!("invalid end key '{}'", end)))?;

        let mut chars = value.chars();
        let value = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(parse_error(format!("value '{}' is not a single character", value))),
        };

        Ok(Self { begin, end, value })
    }
}

/// Counts from applying a script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Non-empty assignments that succeeded
    pub applied: usize,
    /// Assignments the store refused
    pub rejected: usize,
    /// Empty ranges (no-ops)
    pub empty: usize,
}

/// Apply every assignment in `reader` to `store`
///
/// Stops at the first unreadable or malformed line; assignments before it
/// stay applied.
pub fn apply_script<R: BufRead>(
    store: &mut IntervalStore<i64, char>,
    reader: R,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let assignment = Assignment::parse(text, idx + 1)?;
        if assignment.begin >= assignment.end {
            summary.empty += 1;
            continue;
        }

        match store.assign(assignment.begin, assignment.end, assignment.value) {
            Ok(()) => {
                trace!(line = idx + 1, "applied");
                summary.applied += 1;
            }
            Err(err) => {
                debug!(line = idx + 1, %err, "assignment rejected");
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}
