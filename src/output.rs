//! Output writers for the drained aggregation state.
//!
//! Both writers consume the [`ScoreBoard`] through its deterministic
//! drain order, so two runs over the same corpus snapshot produce
//! byte-identical files.

use std::collections::HashMap;
use std::io::Write;

use crate::scores::ScoreBoard;
use crate::Result;

/// Writes the score table as CSV.
///
/// One row per (author, area, subarea, year) key, in ascending key order:
/// `name,dept,area,subarea,count,adjustedcount,year`.
pub fn write_score_table<W: Write>(
    writer: W,
    board: &ScoreBoard,
    faculty: &HashMap<String, String>,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["name", "dept", "area", "subarea", "count", "adjustedcount", "year"])?;

    for (key, raw, adjusted) in board.score_rows() {
        let dept = faculty.get(&key.author).map(String::as_str).unwrap_or("");
        let (raw, adjusted, year) = (raw.to_string(), adjusted.to_string(), key.year.to_string());
        csv_writer.write_record([
            key.author.as_str(),
            dept,
            key.area.as_str(),
            key.subarea.as_str(),
            raw.as_str(),
            adjusted.as_str(),
            year.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the flattened, globally sorted paper log as pretty JSON.
pub fn write_paper_log<W: Write>(writer: W, board: &ScoreBoard) -> Result<()> {
    serde_json::to_writer_pretty(writer, &board.paper_log())?;
    Ok(())
}
