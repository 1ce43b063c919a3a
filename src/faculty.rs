//! Loader for the author → institution mapping.
//!
//! The mapping is a closed set: an author appearing here is an "author of
//! interest" and the only kind of author that receives credit. Lookups
//! downstream are exact-string keyed, so both cells are trimmed on load.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::Result;

/// Reads a two-column `name,institution` CSV into a map.
///
/// Rows with fewer than two cells are skipped.
pub fn load_faculty<R: Read>(input: R) -> Result<HashMap<String, String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut map = HashMap::new();
    for row in reader.records() {
        let row = row?;
        if let (Some(name), Some(institution)) = (row.get(0), row.get(1)) {
            map.insert(name.trim().to_string(), institution.trim().to_string());
        }
    }
    Ok(map)
}

/// Reads the mapping from a CSV file on disk.
pub fn load_faculty_csv<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    load_faculty(File::open(path)?)
}
