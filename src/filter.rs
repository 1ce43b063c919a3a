//! The inclusion predicate: decides whether a record counts.

use crate::rules::{self, IssueRegistry, VenueException};
use crate::Record;

/// Consider publications in this range only (inclusive).
const START_YEAR: i32 = 1970;
const END_YEAR: i32 = 2269;

/// Papers must be at least this many pages long to count.
const PAGE_COUNT_THRESHOLD: i64 = 6;

/// Decides whether a classified record is included in the rankings.
///
/// Composition order matters: the year range is checked first, then the
/// record's venue-specific exception branch (a record belongs to at most
/// one), then the general minimum-page-count rule, which applies to every
/// venue. A `page_count` of `-1` ("no pages found at all") always bypasses
/// the minimum-length rule: only a *known* short count triggers rejection.
#[derive(Debug, Clone)]
pub struct CountingFilter {
    start_year: i32,
    end_year: i32,
    page_count_threshold: i64,
}

impl CountingFilter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_year: START_YEAR,
            end_year: END_YEAR,
            page_count_threshold: PAGE_COUNT_THRESHOLD,
        }
    }

    /// Returns true iff this record will be included in the rankings.
    pub fn counts(&self, record: &Record) -> bool {
        if record.year < self.start_year || record.year > self.end_year {
            return false;
        }

        if let Some(rule) = rules::exception_for(&record.venue) {
            match rule {
                VenueException::AllowListedIssue(registry) => {
                    // Fail closed: no registered issue for this year means
                    // the candidate is not a conference issue.
                    match registry.issue(record.year) {
                        Some(issue) if issue_matches(record, issue) => {}
                        _ => return false,
                    }
                }
                VenueException::ShortPaperCutoff(cutoffs) => {
                    if let Some(page) = cutoffs.cutoff(record.year) {
                        if record.start_page >= page {
                            return false;
                        }
                    }
                }
                VenueException::ExcludedRanges { cutoffs, ranges } => {
                    if let Some(page) = cutoffs.cutoff(record.year) {
                        if record.start_page >= page {
                            return false;
                        }
                    }
                    if let Some(ranges) = ranges.ranges(record.year) {
                        for &(first, last) in ranges {
                            if record.start_page >= first
                                && record.start_page + record.page_count - 1 <= last
                            {
                                return false;
                            }
                        }
                    }
                }
                VenueException::DualRegistry(a, b) => {
                    if !registered_issue_matches(record, a)
                        && !registered_issue_matches(record, b)
                    {
                        return false;
                    }
                }
                VenueException::MinPageCount(threshold) => {
                    if record.page_count < *threshold {
                        return false;
                    }
                }
                VenueException::UrlDisambiguation(marker) => {
                    if record.url.contains(*marker) {
                        return false;
                    }
                }
            }
        }

        if record.page_count != -1
            && record.page_count < self.page_count_threshold
            && !rules::waives_min_page_count(&record.venue, record.year, &record.volume)
        {
            return false;
        }

        true
    }
}

impl Default for CountingFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn issue_matches(record: &Record, (volume, number): (u32, u32)) -> bool {
    record.volume == volume.to_string() && record.number == number.to_string()
}

fn registered_issue_matches(record: &Record, registry: &IssueRegistry) -> bool {
    registry
        .issue(record.year)
        .is_some_and(|issue| issue_matches(record, issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(venue: &str, year: i32, start_page: i64, page_count: i64) -> Record {
        Record {
            venue: venue.to_string(),
            year,
            start_page,
            page_count,
            ..Default::default()
        }
    }

    fn issue_record(venue: &str, year: i32, volume: &str, number: &str) -> Record {
        Record {
            venue: venue.to_string(),
            year,
            volume: volume.to_string(),
            number: number.to_string(),
            start_page: -1,
            page_count: -1,
            ..Default::default()
        }
    }

    #[test]
    fn test_ordinary_conference_paper_counts() {
        let filter = CountingFilter::new();
        assert!(filter.counts(&record("POPL", 2015, 10, 11)));
    }

    #[rstest]
    #[case(1969)]
    #[case(2270)]
    #[case(-1)] // missing year sentinel
    fn test_year_out_of_range_rejected(#[case] year: i32) {
        let filter = CountingFilter::new();
        assert!(!filter.counts(&record("POPL", year, 10, 11)));
    }

    #[rstest]
    #[case(1970)]
    #[case(2269)]
    fn test_year_bounds_are_inclusive(#[case] year: i32) {
        let filter = CountingFilter::new();
        assert!(filter.counts(&record("POPL", year, 10, 11)));
    }

    #[rstest]
    #[case(5, false)] // genuinely short paper
    #[case(1, false)]
    #[case(6, true)] // exactly at threshold
    #[case(-1, true)] // no page data is not short-paper evidence
    #[case(0, false)] // unparsable pages string
    fn test_general_min_page_count_rule(#[case] page_count: i64, #[case] counts: bool) {
        let filter = CountingFilter::new();
        assert_eq!(filter.counts(&record("POPL", 2015, 10, page_count)), counts);
    }

    #[rstest]
    #[case("SC", 2004, "", true)]
    #[case("SIGSOFT FSE", 2012, "", true)]
    #[case("SIGSOFT FSE", 2013, "", false)]
    fn test_erroneous_metadata_allow_list(
        #[case] venue: &str,
        #[case] year: i32,
        #[case] volume: &str,
        #[case] counts: bool,
    ) {
        let filter = CountingFilter::new();
        let mut rec = record(venue, year, 100, 2);
        rec.volume = volume.to_string();
        assert_eq!(filter.counts(&rec), counts);
    }

    #[test]
    fn test_tog_low_page_count_waived_by_volume_range() {
        let filter = CountingFilter::new();
        // Volume 34 is within the known-defective 26..=36 range, and
        // (34, 4) is the registered SIGGRAPH issue for 2015.
        let mut rec = issue_record("ACM Trans. Graph.", 2015, "34", "4");
        rec.start_page = 100;
        rec.page_count = 2;
        assert!(filter.counts(&rec));
    }

    #[rstest]
    #[case(2015, "31", "12", true)] // the registered ISMB issue
    #[case(2015, "31", "1", false)] // same journal, ordinary issue
    #[case(2015, "30", "12", false)]
    #[case(2017, "35", "12", false)] // year not registered: fail closed
    fn test_ismb_issue_allow_list(
        #[case] year: i32,
        #[case] volume: &str,
        #[case] number: &str,
        #[case] counts: bool,
    ) {
        let filter = CountingFilter::new();
        let rec = issue_record("Bioinformatics", year, volume, number);
        assert_eq!(filter.counts(&rec), counts);
    }

    #[rstest]
    #[case(2013, 850, true)]
    #[case(2013, 851, false)] // at the short-paper cutoff
    #[case(2013, 900, false)]
    #[case(2008, 900, true)] // no cutoff registered for 2008
    fn test_icse_short_paper_cutoff(#[case] year: i32, #[case] start: i64, #[case] counts: bool) {
        let filter = CountingFilter::new();
        assert_eq!(filter.counts(&record("ICSE", year, start, 12)), counts);
    }

    #[test]
    fn test_icse_variant_spellings_share_the_cutoff() {
        let filter = CountingFilter::new();
        assert!(!filter.counts(&record("ICSE (1)", 2013, 851, 12)));
        assert!(!filter.counts(&record("ICSE (2)", 2013, 851, 12)));
    }

    #[rstest]
    // Start page at or past the 2016 non-research cutoff (2069).
    #[case(2016, 2070, 11, false)]
    #[case(2016, 2069, 11, false)]
    #[case(2016, 100, 11, true)]
    // Entirely inside an excluded 2016 range (1753, 1764).
    #[case(2016, 1753, 12, false)]
    // Overlapping but not contained: counts.
    #[case(2016, 1753, 13, true)]
    // 2014 has no start-page cutoff, only excluded ranges.
    #[case(2014, 147, 42, false)]
    #[case(2014, 600, 11, true)]
    fn test_sigmod_non_research_filtering(
        #[case] year: i32,
        #[case] start: i64,
        #[case] count: i64,
        #[case] counts: bool,
    ) {
        let filter = CountingFilter::new();
        assert_eq!(
            filter.counts(&record("SIGMOD Conference", year, start, count)),
            counts
        );
    }

    #[rstest]
    #[case("34", "4", true)] // SIGGRAPH 2015
    #[case("34", "6", true)] // SIGGRAPH Asia 2015
    #[case("34", "1", false)] // matches neither registry
    #[case("33", "4", false)] // wrong volume for the year
    fn test_tog_dual_registry(#[case] volume: &str, #[case] number: &str, #[case] counts: bool) {
        let filter = CountingFilter::new();
        let rec = issue_record("ACM Trans. Graph.", 2015, volume, number);
        assert_eq!(filter.counts(&rec), counts);
    }

    #[rstest]
    #[case(2014, "20", "12", true)] // IEEE Visualization
    #[case(2014, "20", "4", true)] // IEEE VR
    #[case(2014, "20", "1", false)]
    #[case(2005, "11", "5", false)] // year in neither registry
    fn test_tvcg_dual_registry(
        #[case] year: i32,
        #[case] volume: &str,
        #[case] number: &str,
        #[case] counts: bool,
    ) {
        let filter = CountingFilter::new();
        let rec = issue_record("IEEE Trans. Vis. Comput. Graph.", year, volume, number);
        assert_eq!(filter.counts(&rec), counts);
    }

    #[rstest]
    #[case(10, true)]
    #[case(12, true)]
    #[case(9, false)] // short paper, demo, etc.
    #[case(-1, false)] // ASE requires a known long-paper page count
    fn test_ase_long_paper_threshold(#[case] page_count: i64, #[case] counts: bool) {
        let filter = CountingFilter::new();
        assert_eq!(filter.counts(&record("ASE", 2015, 100, page_count)), counts);
    }

    #[test]
    fn test_ics_url_disambiguation() {
        let filter = CountingFilter::new();
        let mut rec = record("ICS", 2012, 1, 10);
        rec.url = "db/conf/innovations/innovations2012.html".to_string();
        assert!(!filter.counts(&rec));

        rec.url = "db/conf/ics/ics2012.html".to_string();
        assert!(filter.counts(&rec));
    }
}
