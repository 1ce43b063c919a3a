//! Per-venue exception rules and their hand-maintained registries.
//!
//! A handful of venues need more than the general year/page-count rule:
//! journals carrying conference proceedings in specific issues, proceedings
//! that intermingle short or non-research papers, and one venue-name clash
//! resolved by URL. Each shape is one variant of the closed
//! [`VenueException`] enum, dispatched by a single name lookup in
//! [`exception_for`].
//!
//! The registries are closed-ended tables bounded to specific years. A
//! special-cased venue in a year missing from its registry fails closed
//! (the record is rejected), never open.

/// Year-keyed `(volume, number)` registry for journal issues that carry a
/// conference's accepted papers.
#[derive(Debug)]
pub struct IssueRegistry(&'static [(i32, (u32, u32))]);

impl IssueRegistry {
    /// Returns the registered issue for `year`, if any. Exact year match
    /// only; there is no interpolation for missing years.
    pub fn issue(&self, year: i32) -> Option<(u32, u32)> {
        self.0.iter().find(|(y, _)| *y == year).map(|(_, vn)| *vn)
    }
}

/// Year-keyed start-page cutoffs.
#[derive(Debug)]
pub struct PageCutoffs(&'static [(i32, i64)]);

impl PageCutoffs {
    pub fn cutoff(&self, year: i32) -> Option<i64> {
        self.0.iter().find(|(y, _)| *y == year).map(|(_, p)| *p)
    }
}

/// Year-keyed excluded `(first, last)` page ranges, both bounds inclusive.
#[derive(Debug)]
pub struct ExcludedPageRanges(&'static [(i32, &'static [(i64, i64)])]);

impl ExcludedPageRanges {
    pub fn ranges(&self, year: i32) -> Option<&'static [(i64, i64)]> {
        self.0.iter().find(|(y, _)| *y == year).map(|(_, r)| *r)
    }
}

/// ISMB proceedings are published as special issues of Bioinformatics.
static ISMB_BIOINFORMATICS: IssueRegistry = IssueRegistry(&[
    (2016, (32, 12)),
    (2015, (31, 12)),
    (2014, (30, 12)),
    (2013, (29, 13)),
    (2012, (28, 12)),
    (2011, (27, 13)),
    (2010, (26, 12)),
    (2009, (25, 12)),
    (2008, (24, 13)),
    (2007, (23, 13)),
]);

/// TOG issues holding SIGGRAPH proceedings. Assuming all will be in the
/// same issues through 2021.
static TOG_SIGGRAPH: IssueRegistry = IssueRegistry(&[
    (2021, (40, 4)),
    (2020, (39, 4)),
    (2019, (38, 4)),
    (2018, (37, 4)),
    (2017, (36, 4)),
    (2016, (35, 4)),
    (2015, (34, 4)),
    (2014, (33, 4)),
    (2013, (32, 4)),
    (2012, (31, 4)),
    (2011, (30, 4)),
    (2010, (29, 4)),
    (2009, (28, 3)),
    (2008, (27, 3)),
    (2007, (26, 3)),
    (2006, (25, 3)),
    (2005, (24, 3)),
    (2004, (23, 3)),
    (2003, (22, 3)),
    (2002, (21, 3)),
]);

/// TOG issues holding SIGGRAPH Asia proceedings.
static TOG_SIGGRAPH_ASIA: IssueRegistry = IssueRegistry(&[
    (2021, (40, 6)),
    (2020, (39, 6)),
    (2019, (38, 6)),
    (2018, (37, 6)),
    (2017, (36, 6)),
    (2016, (35, 6)),
    (2015, (34, 6)),
    (2014, (33, 6)),
    (2013, (32, 6)),
    (2012, (31, 6)),
    (2011, (30, 6)),
    (2010, (29, 6)),
    (2009, (28, 5)),
    (2008, (27, 5)),
]);

/// TVCG issues holding IEEE Visualization proceedings.
static TVCG_VIS: IssueRegistry = IssueRegistry(&[
    (2017, (23, 1)),
    (2016, (22, 1)),
    (2014, (20, 12)),
    (2013, (19, 12)),
    (2012, (18, 12)),
    (2011, (17, 12)),
    (2010, (16, 6)),
    (2009, (15, 6)),
    (2008, (14, 6)),
    (2007, (13, 6)),
    (2006, (12, 5)),
]);

/// TVCG issues holding IEEE VR proceedings.
static TVCG_VR: IssueRegistry = IssueRegistry(&[
    (2016, (22, 4)),
    (2015, (21, 4)),
    (2014, (20, 4)),
    (2013, (19, 4)),
    (2012, (18, 4)),
]);

/// Short papers start at this page number for these ICSE proceedings and
/// are omitted, as the acceptance criteria differ.
static ICSE_SHORT_PAPER_START: PageCutoffs = PageCutoffs(&[
    (2013, 851),
    (2012, 957),
    (2011, 620),
    (2010, 544),
    (2009, 550),
    (2007, 510),
    (2006, 411),
    (2005, 478),
    (2003, 477),
    (2002, 534),
    (2001, 502),
    (2000, 518),
    (1999, 582),
    (1998, 419),
    (1997, 535),
]);

/// Non-research papers start at this page number for these SIGMOD
/// proceedings.
static SIGMOD_NON_RESEARCH_START: PageCutoffs = PageCutoffs(&[
    (2017, 1587),
    (2016, 2069),
    (2013, 917),
    (2012, 577),
    (2011, 1045),
    (2010, 963),
    (2009, 841),
    (2008, 1043),
    (2007, 873),
    (2006, 695),
    (2005, 778),
    (2004, 839),
    (2003, 635),
    (2002, 500),
    (2001, 521),
    (2000, 499),
    (1999, 503),
    (1998, 496),
    (1997, 498),
    (1996, 541),
    (1995, 423),
    (1994, 466),
    (1993, 388),
]);

/// SIGMOD recently has begun intermingling research and non-research track
/// papers in their proceedings, requiring individual page-range filtering.
static SIGMOD_NON_RESEARCH_RANGES: ExcludedPageRanges = ExcludedPageRanges(&[
    (
        2017,
        &[
            (1, 3),
            (51, 63),
            (125, 138),
            (331, 343),
            (1041, 1052),
            (511, 526),
            (1587, 1782),
        ],
    ),
    (
        2016,
        &[
            (1753, 1764),
            (1295, 1306),
            (795, 806),
            (227, 238),
            (999, 1010),
            (1923, 1934),
            (1307, 1318),
            (1951, 1960),
            (759, 771),
            (253, 265),
            (1405, 1416),
            (215, 226),
            (1105, 1117),
            (35, 46),
            (63, 75),
            (807, 819),
            (1099, 1104),
            (1087, 1098),
            (847, 859),
            (239, 251),
            (1393, 1404),
            (2069, 2243),
        ],
    ),
    (
        2015,
        &[
            (227, 276),
            (607, 658),
            (1343, 1394),
            (1657, 1706),
            (1917, 1940),
            (859, 918),
            (1063, 1122),
            (1403, 1462),
        ],
    ),
    (2014, &[(147, 188), (337, 384), (529, 573), (1223, 1258)]),
]);

/// ASE long papers appear to be at least this many pages; shorter entries
/// may be demos or tool papers.
const ASE_LONG_PAPER_THRESHOLD: i64 = 10;

/// Exception rule attached to a special-cased venue.
///
/// A record for such a venue belongs to exactly one variant; venues without
/// an entry fall through to the general rule only.
#[derive(Debug)]
pub enum VenueException {
    /// Accept only the single registered (volume, number) issue for the
    /// record's year; no registered issue means reject.
    AllowListedIssue(&'static IssueRegistry),
    /// Reject records whose start page is at or past the year's cutoff.
    ShortPaperCutoff(&'static PageCutoffs),
    /// Reject at or past the year's cutoff, or inside any of the year's
    /// excluded page ranges.
    ExcludedRanges {
        cutoffs: &'static PageCutoffs,
        ranges: &'static ExcludedPageRanges,
    },
    /// Accept only when (volume, number) matches the year's registered
    /// issue in either registry.
    DualRegistry(&'static IssueRegistry, &'static IssueRegistry),
    /// Reject papers with a page count below the threshold.
    MinPageCount(i64),
    /// Reject when the record's URL carries the marker of the same-named
    /// other conference.
    UrlDisambiguation(&'static str),
}

/// Looks up the exception rule for a venue, if it has one.
pub fn exception_for(venue: &str) -> Option<&'static VenueException> {
    static BIOINFORMATICS: VenueException =
        VenueException::AllowListedIssue(&ISMB_BIOINFORMATICS);
    static ICSE: VenueException = VenueException::ShortPaperCutoff(&ICSE_SHORT_PAPER_START);
    static SIGMOD: VenueException = VenueException::ExcludedRanges {
        cutoffs: &SIGMOD_NON_RESEARCH_START,
        ranges: &SIGMOD_NON_RESEARCH_RANGES,
    };
    static TOG: VenueException =
        VenueException::DualRegistry(&TOG_SIGGRAPH, &TOG_SIGGRAPH_ASIA);
    static TVCG: VenueException = VenueException::DualRegistry(&TVCG_VIS, &TVCG_VR);
    static ASE: VenueException = VenueException::MinPageCount(ASE_LONG_PAPER_THRESHOLD);
    // Innovations in (Theoretical) Computer Science shares the "ICS" key
    // with the International Conference on Supercomputing.
    static ICS: VenueException = VenueException::UrlDisambiguation("innovations");

    match venue {
        "Bioinformatics" => Some(&BIOINFORMATICS),
        "ICSE" | "ICSE (1)" | "ICSE (2)" => Some(&ICSE),
        "SIGMOD Conference" => Some(&SIGMOD),
        "ACM Trans. Graph." => Some(&TOG),
        "IEEE Trans. Vis. Comput. Graph." => Some(&TVCG),
        "ASE" => Some(&ASE),
        "ICS" => Some(&ICS),
        _ => None,
    }
}

/// Known-erroneous-metadata allow-list for the general minimum-page rule.
///
/// DBLP has real papers with incorrect page counts, usually a truncated
/// single page. These venue/year combinations are accepted despite a low
/// count because the short count reflects a metadata defect, not a short
/// paper.
pub fn waives_min_page_count(venue: &str, year: i32, volume: &str) -> bool {
    venue == "SC"
        || (venue == "SIGSOFT FSE" && year == 2012)
        || (venue == "ACM Trans. Graph."
            && volume
                .parse::<u32>()
                .is_ok_and(|v| (26..=36).contains(&v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_issue_registry_exact_year_match() {
        assert_eq!(ISMB_BIOINFORMATICS.issue(2015), Some((31, 12)));
        assert_eq!(ISMB_BIOINFORMATICS.issue(2007), Some((23, 13)));
        // Unregistered years have no issue; callers fail closed.
        assert_eq!(ISMB_BIOINFORMATICS.issue(2017), None);
        assert_eq!(ISMB_BIOINFORMATICS.issue(2006), None);
    }

    #[test]
    fn test_tog_registries() {
        assert_eq!(TOG_SIGGRAPH.issue(2015), Some((34, 4)));
        assert_eq!(TOG_SIGGRAPH_ASIA.issue(2015), Some((34, 6)));
        assert_eq!(TOG_SIGGRAPH.issue(2002), Some((21, 3)));
        assert_eq!(TOG_SIGGRAPH_ASIA.issue(2007), None);
    }

    #[test]
    fn test_page_cutoffs() {
        assert_eq!(ICSE_SHORT_PAPER_START.cutoff(2013), Some(851));
        assert_eq!(ICSE_SHORT_PAPER_START.cutoff(2008), None);
        assert_eq!(SIGMOD_NON_RESEARCH_START.cutoff(2016), Some(2069));
        assert_eq!(SIGMOD_NON_RESEARCH_START.cutoff(2018), None);
    }

    #[test]
    fn test_excluded_ranges() {
        let ranges = SIGMOD_NON_RESEARCH_RANGES.ranges(2014).unwrap();
        assert_eq!(ranges.len(), 4);
        assert!(ranges.contains(&(147, 188)));
        assert_eq!(SIGMOD_NON_RESEARCH_RANGES.ranges(2013), None);
    }

    #[rstest]
    #[case("Bioinformatics")]
    #[case("ICSE")]
    #[case("ICSE (1)")]
    #[case("ICSE (2)")]
    #[case("SIGMOD Conference")]
    #[case("ACM Trans. Graph.")]
    #[case("IEEE Trans. Vis. Comput. Graph.")]
    #[case("ASE")]
    #[case("ICS")]
    fn test_special_cased_venues_have_rules(#[case] venue: &str) {
        assert!(exception_for(venue).is_some());
    }

    #[test]
    fn test_ordinary_venues_have_no_rule() {
        assert!(exception_for("POPL").is_none());
        assert!(exception_for("SIGMOD").is_none());
        assert!(exception_for("Bioinformatics ").is_none());
    }

    #[rstest]
    #[case("SC", 1999, "", true)]
    #[case("SC", 2016, "55", true)]
    #[case("SIGSOFT FSE", 2012, "", true)]
    #[case("SIGSOFT FSE", 2013, "", false)]
    #[case("ACM Trans. Graph.", 2010, "26", true)]
    #[case("ACM Trans. Graph.", 2010, "36", true)]
    #[case("ACM Trans. Graph.", 2010, "25", false)]
    #[case("ACM Trans. Graph.", 2010, "37", false)]
    #[case("ACM Trans. Graph.", 2010, "", false)]
    #[case("ACM Trans. Graph.", 2010, "vol. 30", false)]
    #[case("POPL", 2015, "", false)]
    fn test_min_page_count_waivers(
        #[case] venue: &str,
        #[case] year: i32,
        #[case] volume: &str,
        #[case] waived: bool,
    ) {
        assert_eq!(waives_min_page_count(venue, year, volume), waived);
    }
}
