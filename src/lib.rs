//! Compute per-author, per-research-area publication scores from a DBLP corpus.
//!
//! `pubrank` streams a DBLP-style bibliographic corpus record by record,
//! decides which records count toward institutional rankings, and aggregates
//! per-author credit. It focuses on the filtering engine: a table of
//! venue-specific inclusion rules applied during a single linear pass,
//! combined with incremental aggregation that tolerates malformed records.
//!
//! # Key Features
//!
//! - **Streaming classification**: one bounded-memory pass over the corpus,
//!   malformed records counted and skipped without aborting the run.
//! - **Venue rule table**: a closed configuration mapping DBLP venue
//!   spellings to research areas, plus per-venue exception rules
//!   (short-paper cutoffs, non-research-track exclusions, journal-issue
//!   allow-lists, URL disambiguation).
//! - **Dual credit semantics**: raw counts (1.0 per accepted paper) and
//!   adjusted counts (1/number-of-co-authors) over a shared key space.
//! - **Deterministic output**: score rows and the paper log are emitted in a
//!   fully specified order, so two runs over the same corpus snapshot are
//!   byte-identical.
//!
//! # Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use pubrank::{corpus, RecordHandler};
//!
//! let faculty = HashMap::from([
//!     ("Alice".to_string(), "Example University".to_string()),
//! ]);
//!
//! let xml = r#"<dblp><inproceedings>
//! <author>Alice</author>
//! <title>A Result on Widgets.</title>
//! <booktitle>POPL</booktitle>
//! <pages>10-20</pages>
//! <year>2015</year>
//! </inproceedings></dblp>"#;
//!
//! let mut handler = RecordHandler::new(&faculty);
//! corpus::read_records(xml.as_bytes(), |record| handler.handle(record)).unwrap();
//!
//! let (board, tally) = handler.finish();
//! assert_eq!(tally.accepted, 1);
//! assert_eq!(board.paper_log()[0].area, "plan");
//! ```

use serde::Serialize;
use thiserror::Error;

pub mod corpus;
pub mod faculty;
pub mod filter;
pub mod handler;
pub mod output;
pub mod pages;
pub mod rules;
pub mod scores;
pub mod venues;

// Reexports
pub use corpus::RawRecord;
pub use filter::CountingFilter;
pub use handler::{RecordHandler, Tally};
pub use scores::{Accumulator, ScoreBoard, ScoreKey};
pub use venues::VenueTable;

/// A specialized Result type for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;

/// Represents fatal errors that terminate a ranking run.
///
/// Per-record faults are *not* represented here; they are counted by the
/// [`RecordHandler`] and the pass continues. Anything surfacing as a
/// `RankingError` indicates the stream contract itself was violated.
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt corpus stream: {0}")]
    CorruptStream(String),
}

/// One fully extracted corpus record, as seen by the inclusion predicate.
///
/// Ephemeral: exists only for the duration of one classification and
/// aggregation step. `year == -1` means the year field was absent;
/// `start_page`/`page_count` are `-1` when the pages field was absent and
/// `0` when it was present but unparsable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub venue: String,
    pub year: i32,
    pub volume: String,
    pub number: String,
    pub url: String,
    pub title: String,
    pub authors: Vec<String>,
    pub start_page: i64,
    pub page_count: i64,
}

/// One accepted paper in an author's log.
///
/// Serialized into the paper-log JSON output; the optional fields are only
/// emitted when they were known for the paper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaperEntry {
    pub name: String,
    pub year: i32,
    pub title: String,
    pub conf: String,
    pub area: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "startPage", skip_serializing_if = "Option::is_none")]
    pub start_page: Option<i64>,
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
}
