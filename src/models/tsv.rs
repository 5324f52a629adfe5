// Parsing the TSV corpus format: one header line, then one entity per
// line. Field 0 is the display name, field 1 the integer score, field
// 2 the description; field 5, when present, is a ;-separated synonym
// list. Trailing fields are kept verbatim on the record.
use std::fmt;
use std::io::BufRead;
use std::path::Path;

use chumsky::prelude::*;

use crate::models::record::EntityRecord;

#[derive(Debug)]
pub enum TsvError {
    /// Underlying I/O failure.
    Io(std::io::Error),
    /// A line the field grammar could not make sense of.
    Unparseable { line: usize },
    /// A data line with fewer than the three mandatory fields.
    MissingFields { line: usize, got: usize },
    /// Field 1 of a data line does not parse as an integer score.
    BadScore { line: usize, value: String },
}

impl fmt::Display for TsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsvError::Io(e) => write!(f, "i/o error: {e}"),
            TsvError::Unparseable { line } => write!(f, "line {line}: unparseable"),
            TsvError::MissingFields { line, got } => {
                write!(f, "line {line}: expected at least 3 fields, got {got}")
            }
            TsvError::BadScore { line, value } => {
                write!(f, "line {line}: score {value:?} is not an integer")
            }
        }
    }
}

impl std::error::Error for TsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TsvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TsvError {
    fn from(e: std::io::Error) -> Self {
        TsvError::Io(e)
    }
}

fn fields_parser<'src>() -> impl Parser<'src, &'src str, Vec<String>> {
    let field = none_of('\t').repeated().collect::<String>();

    field
        .separated_by(just('\t'))
        .collect::<Vec<String>>()
}

fn synonyms_parser<'src>() -> impl Parser<'src, &'src str, Vec<String>> {
    let synonym = none_of(';').repeated().collect::<String>();

    synonym
        .separated_by(just(';'))
        .collect::<Vec<String>>()
}

// `lineno` is the 1-based line number in the file, header included.
fn parse_record(line: &str, lineno: usize) -> Result<EntityRecord, TsvError> {
    let fields: Vec<String> = fields_parser()
        .parse(line)
        .into_output()
        .ok_or(TsvError::Unparseable { line: lineno })?;

    if fields.len() < 3 {
        return Err(TsvError::MissingFields {
            line: lineno,
            got: fields.len(),
        });
    }

    let score: u64 = fields[1].parse().map_err(|_| TsvError::BadScore {
        line: lineno,
        value: fields[1].clone(),
    })?;

    let mut record = EntityRecord::new(fields[0].as_str(), score)
        .with_description(fields[2].as_str());

    if let Some(synonyms) = fields.get(5) {
        for synonym in synonyms_parser()
            .parse(synonyms.as_str())
            .into_output()
            .ok_or(TsvError::Unparseable { line: lineno })?
        {
            record = record.with_synonym(synonym);
        }
    }

    for extra in &fields[3..] {
        record = record.with_extra(extra.as_str());
    }

    Ok(record)
}

/// Reads entity records from TSV input. The first line is a header and
/// is skipped; each following line becomes one record, in order. The
/// position of a line (1-based, after the header) is the EntId the
/// index will assign to it.
///
/// ```
/// use prefikso::models::tsv::read_records;
///
/// let tsv = "name\tscore\tinfo\nfrei\t3\tcity a\nbrei\t2\tcity b\n";
/// let records = read_records(tsv.as_bytes()).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].name(), "frei");
/// assert_eq!(records[1].score(), 2);
/// ```
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<EntityRecord>, TsvError> {
    let mut lines = reader.lines();

    // Header line. An empty input has no records.
    if lines.next().transpose()?.is_none() {
        return Ok(vec![]);
    }

    let mut records = vec![];
    for (i, line) in lines.enumerate() {
        records.push(parse_record(&line?, i + 2)?);
    }
    Ok(records)
}

/// Reads entity records from a TSV file. See [`read_records`].
pub fn records_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<EntityRecord>, TsvError> {
    let file = std::fs::File::open(path)?;
    read_records(std::io::BufReader::new(file))
}
