//! Loading labeled reviews from tab-separated text files
//!
//! Each input line is `<review text>\t<label>` with label 0 or 1. Strict
//! loading fails on the first malformed line; lenient loading skips and
//! counts malformed lines instead.

use super::types::Review;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading review data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected <text>\\t<label>")]
    MissingTab { line: usize },

    #[error("line {line}: label {value:?} is not 0 or 1")]
    InvalidLabel { line: usize, value: String },

    #[error("input contains no usable records")]
    Empty,
}

/// Result of a load: surviving records plus the count of skipped lines
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub reviews: Vec<Review>,
    pub skipped: usize,
}

/// Parse one input line into a review
///
/// `line_no` is 1-based and only used for error reporting. Fields beyond
/// the second tab are ignored.
pub fn parse_line(line: &str, line_no: usize) -> Result<Review, DataError> {
    let mut fields = line.splitn(3, '\t');
    let text = fields.next().unwrap_or_default();
    let label = fields
        .next()
        .ok_or(DataError::MissingTab { line: line_no })?
        .trim();

    let label = match label.parse::<i64>() {
        Ok(0) => 0,
        Ok(1) => 1,
        _ => {
            return Err(DataError::InvalidLabel {
                line: line_no,
                value: label.to_string(),
            })
        }
    };

    Ok(Review {
        text: text.to_string(),
        label,
    })
}

/// Load reviews from a tab-separated file
///
/// In lenient mode malformed lines are skipped and counted; a summary
/// warning is emitted at the end. In strict mode the first malformed line
/// aborts the load. An input with zero surviving records is an error
/// either way.
pub fn load_reviews<P: AsRef<Path>>(path: P, lenient: bool) -> Result<LoadSummary, DataError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut reviews = Vec::new();
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        match parse_line(&line, idx + 1) {
            Ok(review) => reviews.push(review),
            Err(err) if lenient => {
                warn!("skipping malformed line: {err}");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if skipped > 0 {
        warn!("skipped {skipped} malformed lines");
    }
    if reviews.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(LoadSummary { reviews, skipped })
}
