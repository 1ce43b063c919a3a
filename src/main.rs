//! Run-once entry point: stream the corpus, write both outputs.

use std::fs::File;
use std::io::BufWriter;
use std::process;

use log::info;

use pubrank::{corpus, faculty, output, RecordHandler};

const CORPUS_FILE: &str = "dblp.xml.gz";
const FACULTY_FILE: &str = "faculty-affiliations.csv";
const SCORE_TABLE_FILE: &str = "generated-author-info.csv";
const PAPER_LOG_FILE: &str = "articles.json";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> pubrank::Result<()> {
    let faculty = faculty::load_faculty_csv(FACULTY_FILE)?;
    info!("{} authors of interest", faculty.len());

    let mut handler = RecordHandler::new(&faculty);
    corpus::read_gz_corpus(CORPUS_FILE, |record| handler.handle(record))?;
    let (board, tally) = handler.finish();
    info!(
        "{} records processed, {} accepted, {} failed",
        tally.processed, tally.accepted, tally.failed
    );

    output::write_score_table(BufWriter::new(File::create(SCORE_TABLE_FILE)?), &board, &faculty)?;
    output::write_paper_log(BufWriter::new(File::create(PAPER_LOG_FILE)?), &board)?;
    Ok(())
}
