//! Page-range parsing for the free-form DBLP `pages` field.

use once_cell::sync::Lazy;
use regex::Regex;

/// Match ordinary page ranges (as in 10-17).
static PAGES_PLAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)").unwrap());

/// Match colon-qualified ranges in the form volume:page (as in 12:140-12:150).
static PAGES_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+:([1-9][0-9]*)-[0-9]+:([1-9][0-9]*)").unwrap());

/// Sentinel pair for records with no pages field at all.
///
/// Distinct from a present-but-unparsable pages string, which yields
/// `(0, 0)`: a `-1` page count bypasses the minimum-length rule entirely,
/// since the absence of page data is not short-paper evidence.
pub const PAGES_UNKNOWN: (i64, i64) = (-1, -1);

/// Parses a page string into `(start_page, page_count)`.
///
/// Recognizes plain `"N-M"` ranges and compound `"vol:N-vol:M"` ranges (the
/// volume parts are ignored). `page_count` is `end - start + 1`. Strings
/// matching neither pattern yield `(0, 0)`, a deliberate permissive
/// fallback rather than an error, so an odd pages field cannot abort the
/// record.
///
/// # Examples
///
/// ```
/// use pubrank::pages::parse_page_range;
///
/// assert_eq!(parse_page_range("10-17"), (10, 8));
/// assert_eq!(parse_page_range("12:140-12:150"), (140, 11));
/// assert_eq!(parse_page_range("viii"), (0, 0));
/// ```
pub fn parse_page_range(pages: &str) -> (i64, i64) {
    parse_with(&PAGES_PLAIN, pages)
        .or_else(|| parse_with(&PAGES_COLON, pages))
        .unwrap_or((0, 0))
}

fn parse_with(re: &Regex, pages: &str) -> Option<(i64, i64)> {
    let caps = re.captures(pages)?;
    let start: i64 = caps[1].parse().ok()?;
    let end: i64 = caps[2].parse().ok()?;
    // The field is free-form; a range wide enough to overflow the count is
    // metadata garbage and takes the unparsable fallback.
    let count = end.checked_sub(start)?.checked_add(1)?;
    Some((start, count))
}
