//! The streaming record handler: one record in, aggregation state updated.

use std::collections::HashMap;

use log::{debug, info};
use thiserror::Error;

use crate::corpus::RawRecord;
use crate::filter::CountingFilter;
use crate::pages;
use crate::scores::{Accumulator, ScoreBoard, ScoreKey};
use crate::venues::VenueTable;
use crate::{PaperEntry, Record};

/// Missing-year sentinel; always outside the configured inclusion range.
const NO_YEAR: i32 = -1;

/// Progress is logged every this many records.
const PROGRESS_INTERVAL: u64 = 10_000;

/// A fault confined to a single record.
///
/// Counted and skipped; never terminates the pass.
#[derive(Error, Debug)]
enum RecordFault {
    #[error("record has no usable title")]
    MissingTitle,
    #[error("unparsable year {0:?}")]
    InvalidYear(String),
}

/// Final success/failure tally for one pass, the operator-facing signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Records delivered by the corpus stream.
    pub processed: u64,
    /// Records that passed the inclusion predicate.
    pub accepted: u64,
    /// Malformed records skipped without aborting the pass.
    pub failed: u64,
}

/// Consumes corpus records one at a time and owns the aggregation state.
///
/// Each run constructs a fresh handler; [`finish`](Self::finish) returns
/// the fully built [`ScoreBoard`] and the tally. The handler never aborts
/// the pass for a single malformed record: faults are counted and the
/// stream continues.
#[derive(Debug)]
pub struct RecordHandler<'a> {
    venues: VenueTable,
    filter: CountingFilter,
    faculty: &'a HashMap<String, String>,
    board: ScoreBoard,
    tally: Tally,
}

impl<'a> RecordHandler<'a> {
    /// Creates a handler gated on the given author → institution mapping.
    ///
    /// Only authors present in the mapping ("authors of interest") receive
    /// credit; papers with no author of interest are skipped entirely.
    #[must_use]
    pub fn new(faculty: &'a HashMap<String, String>) -> Self {
        Self {
            venues: VenueTable::new(),
            filter: CountingFilter::new(),
            faculty,
            board: ScoreBoard::new(),
            tally: Tally::default(),
        }
    }

    /// Processes one corpus record.
    pub fn handle(&mut self, record: RawRecord) {
        self.tally.processed += 1;
        if self.tally.processed % PROGRESS_INTERVAL == 0 {
            info!("{} records processed", self.tally.processed);
        }
        match self.process(record) {
            Ok(true) => self.tally.accepted += 1,
            Ok(false) => {}
            Err(fault) => {
                self.tally.failed += 1;
                debug!("skipping malformed record: {fault}");
            }
        }
    }

    /// Returns the completed aggregation state and the final tally.
    pub fn finish(self) -> (ScoreBoard, Tally) {
        (self.board, self.tally)
    }

    /// Current tally; useful for progress reporting mid-pass.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn process(&mut self, raw: RawRecord) -> Result<bool, RecordFault> {
        if raw.authors.is_empty() {
            return Ok(false);
        }
        let authors_on_paper = raw.authors.len();
        if !raw
            .authors
            .iter()
            .any(|name| self.faculty.contains_key(name.trim()))
        {
            return Ok(false);
        }

        // Conference field takes priority over the journal field.
        let venue = match raw.booktitle.or(raw.journal) {
            Some(venue) => venue,
            None => return Ok(false),
        };
        let area = match self.venues.area(&venue) {
            Some(area) => area,
            None => return Ok(false),
        };

        let title = raw.title.ok_or(RecordFault::MissingTitle)?;
        let year = match raw.year {
            Some(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| RecordFault::InvalidYear(text))?,
            None => NO_YEAR,
        };
        let (start_page, page_count) = match raw.pages.as_deref() {
            Some(pages) => pages::parse_page_range(pages),
            None => pages::PAGES_UNKNOWN,
        };

        let record = Record {
            venue,
            year,
            volume: raw.volume.unwrap_or_default(),
            number: raw.number.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            title,
            authors: raw.authors,
            start_page,
            page_count,
        };

        if !self.filter.counts(&record) {
            return Ok(false);
        }

        let subarea = self.venues.subarea(&record.venue);
        // Co-author count is fixed per paper and counts all listed authors,
        // not just authors of interest.
        let fraction = 1.0 / authors_on_paper as f64;
        for author in &record.authors {
            let name = author.trim();
            let institution = match self.faculty.get(name) {
                Some(institution) => institution,
                None => continue,
            };
            let entry = PaperEntry {
                name: name.to_string(),
                year: record.year,
                title: record.title.clone(),
                conf: record.venue.clone(),
                area: area.to_string(),
                institution: institution.clone(),
                volume: non_empty(&record.volume),
                number: non_empty(&record.number),
                start_page: (record.start_page != -1).then_some(record.start_page),
                page_count: (record.page_count != -1).then_some(record.page_count),
            };
            self.board.append_log(name, entry);

            let key = ScoreKey {
                author: name.to_string(),
                area: area.to_string(),
                subarea: subarea.to_string(),
                year: record.year,
            };
            self.board.increment(&key, 1.0, Accumulator::Raw);
            self.board.increment(&key, fraction, Accumulator::Adjusted);
        }
        Ok(true)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
