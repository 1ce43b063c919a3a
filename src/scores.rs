//! Aggregation state: raw and adjusted score accumulators plus per-author
//! paper logs.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use crate::PaperEntry;

/// Key into the score accumulators.
///
/// The derived ordering (author, then area, then subarea, then year) is the
/// emission order of the score table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreKey {
    pub author: String,
    pub area: String,
    pub subarea: String,
    pub year: i32,
}

/// Selects one of the two credit accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulator {
    /// 1.0 per accepted paper per author of interest.
    Raw,
    /// 1/number-of-listed-co-authors per accepted paper.
    Adjusted,
}

/// Sparse accumulators over [`ScoreKey`] plus per-author paper logs.
///
/// Keys are never deleted during a run, only created or incremented, and
/// the two accumulators stay key-set-consistent: touching a key in either
/// materializes it in both. All state is built by the streaming pass and
/// read-only by the time output begins.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    raw: BTreeMap<ScoreKey, f64>,
    adjusted: BTreeMap<ScoreKey, f64>,
    logs: HashMap<String, Vec<PaperEntry>>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the chosen accumulator at `key`.
    pub fn increment(&mut self, key: &ScoreKey, amount: f64, accumulator: Accumulator) {
        let (target, other) = match accumulator {
            Accumulator::Raw => (&mut self.raw, &mut self.adjusted),
            Accumulator::Adjusted => (&mut self.adjusted, &mut self.raw),
        };
        *target.entry(key.clone()).or_insert(0.0) += amount;
        other.entry(key.clone()).or_insert(0.0);
    }

    /// Returns the accumulated amount at `key`, or 0.0 for absent keys.
    pub fn get(&self, key: &ScoreKey, accumulator: Accumulator) -> f64 {
        let map = match accumulator {
            Accumulator::Raw => &self.raw,
            Accumulator::Adjusted => &self.adjusted,
        };
        map.get(key).copied().unwrap_or(0.0)
    }

    /// Appends an accepted paper to `author`'s log.
    ///
    /// Logs grow monotonically in insertion order during the pass; ordering
    /// for output happens at drain time in [`paper_log`](Self::paper_log).
    pub fn append_log(&mut self, author: &str, entry: PaperEntry) {
        self.logs.entry(author.to_string()).or_default().push(entry);
    }

    /// Score rows in deterministic key order: (author, area, subarea, year)
    /// ascending, raw and adjusted side by side.
    pub fn score_rows(&self) -> impl Iterator<Item = (&ScoreKey, f64, f64)> {
        self.raw
            .iter()
            .map(|(key, &raw)| (key, raw, self.get(key, Accumulator::Adjusted)))
    }

    /// The paper logs of all authors, flattened into one globally sorted
    /// sequence ordered by (name, year, venue, title) ascending.
    pub fn paper_log(&self) -> Vec<&PaperEntry> {
        self.logs
            .values()
            .flatten()
            .sorted_by(|a, b| {
                (&a.name, a.year, &a.conf, &a.title).cmp(&(&b.name, b.year, &b.conf, &b.title))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(author: &str, area: &str, subarea: &str, year: i32) -> ScoreKey {
        ScoreKey {
            author: author.to_string(),
            area: area.to_string(),
            subarea: subarea.to_string(),
            year,
        }
    }

    fn entry(name: &str, year: i32, conf: &str, title: &str) -> PaperEntry {
        PaperEntry {
            name: name.to_string(),
            year,
            title: title.to_string(),
            conf: conf.to_string(),
            area: "plan".to_string(),
            institution: "Example University".to_string(),
            volume: None,
            number: None,
            start_page: None,
            page_count: None,
        }
    }

    #[test]
    fn test_absent_key_reads_zero() {
        let board = ScoreBoard::new();
        assert_eq!(board.get(&key("Alice", "plan", "", 2015), Accumulator::Raw), 0.0);
    }

    #[test]
    fn test_increment_accumulates() {
        let mut board = ScoreBoard::new();
        let k = key("Alice", "plan", "", 2015);
        board.increment(&k, 1.0, Accumulator::Raw);
        board.increment(&k, 1.0, Accumulator::Raw);
        board.increment(&k, 0.5, Accumulator::Adjusted);
        assert_eq!(board.get(&k, Accumulator::Raw), 2.0);
        assert_eq!(board.get(&k, Accumulator::Adjusted), 0.5);
    }

    #[test]
    fn test_accumulators_stay_key_set_consistent() {
        let mut board = ScoreBoard::new();
        let k = key("Alice", "plan", "", 2015);
        board.increment(&k, 1.0, Accumulator::Raw);
        // The adjusted accumulator materializes the key at zero.
        let rows: Vec<_> = board.score_rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, 1.0);
        assert_eq!(rows[0].2, 0.0);
    }

    #[test]
    fn test_score_rows_sorted_by_key() {
        let mut board = ScoreBoard::new();
        board.increment(&key("Bob", "plan", "", 2014), 1.0, Accumulator::Raw);
        board.increment(&key("Alice", "vision", "cvpr", 2015), 1.0, Accumulator::Raw);
        board.increment(&key("Alice", "plan", "", 2016), 1.0, Accumulator::Raw);
        board.increment(&key("Alice", "plan", "", 2015), 1.0, Accumulator::Raw);

        let order: Vec<_> = board
            .score_rows()
            .map(|(k, _, _)| (k.author.as_str(), k.area.as_str(), k.year))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Alice", "plan", 2015),
                ("Alice", "plan", 2016),
                ("Alice", "vision", 2015),
                ("Bob", "plan", 2014),
            ]
        );
    }

    #[test]
    fn test_paper_log_flattened_and_sorted() {
        let mut board = ScoreBoard::new();
        board.append_log("Bob", entry("Bob", 2014, "POPL", "Zeta"));
        board.append_log("Alice", entry("Alice", 2015, "PLDI", "Beta"));
        board.append_log("Alice", entry("Alice", 2014, "POPL", "Gamma"));
        board.append_log("Alice", entry("Alice", 2014, "POPL", "Alpha"));

        let titles: Vec<_> = board.paper_log().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Gamma", "Beta", "Zeta"]);
    }

    #[test]
    fn test_paper_log_orders_by_venue_within_year() {
        let mut board = ScoreBoard::new();
        board.append_log("Alice", entry("Alice", 2015, "PLDI", "Alpha"));
        board.append_log("Alice", entry("Alice", 2015, "POPL", "Alpha"));
        let confs: Vec<_> = board.paper_log().iter().map(|e| e.conf.as_str()).collect();
        assert_eq!(confs, vec!["PLDI", "POPL"]);
    }
}
