//! Streaming reader for the DBLP XML corpus.
//!
//! A thin wrapper around quick-xml: every record element under `<dblp>`
//! becomes one [`RawRecord`] handed to the caller's sink, so the corpus is
//! processed record-at-a-time with bounded memory. Nested markup inside
//! fields (`<i>`, `<sub>`, ...) is flattened to its text content, and a
//! single scalar `<author>` ends up as a one-element list, so downstream
//! code always sees an ordered author sequence.
//!
//! Reader-level errors are fatal: they mean the stream contract was
//! violated, not that one record was bad.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use quick_xml::events::Event;
use quick_xml::name::QName;
use quick_xml::reader::Reader;

use crate::{RankingError, Result};

/// One loosely-typed corpus record, fields as they appear in the stream.
///
/// Everything is optional except the author list, which is empty when the
/// record carries no authors. Interpretation (sentinels, page parsing,
/// venue resolution) happens in the record handler, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub authors: Vec<String>,
    pub booktitle: Option<String>,
    pub journal: Option<String>,
    pub title: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub url: Option<String>,
    pub year: Option<String>,
    pub pages: Option<String>,
}

/// DBLP record element names.
fn is_record_tag(name: &[u8]) -> bool {
    matches!(
        name,
        b"article"
            | b"inproceedings"
            | b"proceedings"
            | b"book"
            | b"incollection"
            | b"phdthesis"
            | b"mastersthesis"
            | b"www"
    )
}

/// Streams records from DBLP XML, invoking `sink` once per record.
///
/// Returns the number of records delivered. Fails only on reader-level
/// errors (malformed XML framing, truncated input); see the module docs.
pub fn read_records<B: BufRead, F: FnMut(RawRecord)>(input: B, mut sink: F) -> Result<u64> {
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    let mut delivered = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if is_record_tag(e.name().as_ref()) => {
                let closing_tag = e.name().as_ref().to_vec();
                let record = read_record(&mut reader, &mut buf, &closing_tag)?;
                delivered += 1;
                sink(record);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RankingError::from(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(delivered)
}

/// Streams records from a gzip'd corpus file (the shipped `dblp.xml.gz`).
pub fn read_gz_corpus<P: AsRef<Path>, F: FnMut(RawRecord)>(path: P, sink: F) -> Result<u64> {
    let file = File::open(path)?;
    read_records(BufReader::new(GzDecoder::new(file)), sink)
}

/// Reads the fields of a single record element.
fn read_record<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    closing_tag: &[u8],
) -> Result<RawRecord> {
    let mut record = RawRecord::default();

    loop {
        match reader.read_event_into(buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"author" => {
                    let author = extract_text(reader, buf, b"author")?;
                    if !author.is_empty() {
                        record.authors.push(author);
                    }
                }
                b"booktitle" => {
                    record.booktitle = Some(extract_text(reader, buf, b"booktitle")?);
                }
                b"journal" => {
                    record.journal = Some(extract_text(reader, buf, b"journal")?);
                }
                b"title" => {
                    record.title = Some(extract_text(reader, buf, b"title")?);
                }
                b"volume" => {
                    record.volume = Some(extract_text(reader, buf, b"volume")?);
                }
                b"number" => {
                    record.number = Some(extract_text(reader, buf, b"number")?);
                }
                b"url" => {
                    record.url = Some(extract_text(reader, buf, b"url")?);
                }
                b"year" => {
                    record.year = Some(extract_text(reader, buf, b"year")?);
                }
                b"pages" => {
                    record.pages = Some(extract_text(reader, buf, b"pages")?);
                }
                _ => (),
            },
            Ok(Event::End(ref e)) if e.name() == QName(closing_tag) => break,
            Ok(Event::Eof) => {
                return Err(RankingError::CorruptStream(format!(
                    "unexpected EOF inside <{}> record",
                    String::from_utf8_lossy(closing_tag)
                )));
            }
            Err(e) => return Err(RankingError::from(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(record)
}

/// Extracts text content from XML events until the closing tag is found.
///
/// Text inside nested elements is accumulated, so a title like
/// `<title>On <i>n</i>-grams</title>` comes back as `On n-grams`.
fn extract_text<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    closing_tag: &[u8],
) -> Result<String> {
    let mut text = String::new();

    loop {
        match reader.read_event_into(buf) {
            Ok(Event::Text(e)) => {
                let unescaped = e.unescape().map_err(|e| {
                    RankingError::CorruptStream(format!("invalid XML text content: {e}"))
                })?;
                text.push_str(&unescaped);
            }
            Ok(Event::End(e)) if e.name() == QName(closing_tag) => break,
            Ok(Event::Eof) => {
                return Err(RankingError::CorruptStream(format!(
                    "unexpected EOF while looking for closing tag '{}'",
                    String::from_utf8_lossy(closing_tag)
                )));
            }
            Err(e) => return Err(RankingError::from(e)),
            _ => continue,
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}
