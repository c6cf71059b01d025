#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Spreadsheet ingestion for the sewer-map system.
//!
//! Source sheets are authored by hand and are not normalized: column names
//! vary in case and punctuation (`s.no` vs `S.no` vs `s_no`), dates appear
//! as numeric day serials or as `DD/MM/YYYY` / `DD-MM-YYYY` strings, and
//! decimal values sometimes use a comma separator. This crate resolves all
//! of that ambiguity at the boundary: downstream code only ever sees
//! [`ManholeRecord`](sewer_map_manhole_models::ManholeRecord) and friends.
//!
//! Per-row failures degrade and log; one bad row never aborts a batch.

pub mod dates;
pub mod delimited;
pub mod fetch;
pub mod fields;
pub mod records;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading spreadsheet data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// HTTP request failed after all retries.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-retryable error status.
    #[error("HTTP status {status} fetching {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// Delimited-text parsing failed at the batch level.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single spreadsheet cell, preserving the source's loose typing.
///
/// Dates in particular arrive either as numeric day serials or as delimited
/// strings; [`dates::normalize`] handles both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell (including spreadsheet date serials).
    Number(f64),
    /// A non-empty text cell.
    Text(String),
    /// An empty or whitespace-only cell.
    Empty,
}

impl CellValue {
    /// Classifies raw cell text the way a spreadsheet parser would.
    ///
    /// Numeric-looking text becomes [`Self::Number`]; a decimal comma is
    /// accepted because several source sheets use it.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(number) = trimmed.parse::<f64>() {
            return Self::Number(number);
        }
        if trimmed.contains(',')
            && let Ok(number) = trimmed.replace(',', ".").parse::<f64>()
        {
            return Self::Number(number);
        }
        Self::Text(trimmed.to_string())
    }

    /// The cell as a number, if it holds one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// The cell as non-empty text. Numbers are not stringified.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) | Self::Empty => None,
        }
    }

    /// Whether the cell is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
