// File: crates/colorline-core/src/data.rs
// Summary: CSV loader producing painting records in file order.

use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::Record;

/// Default location of the painting data.
pub const DEFAULT_DATA_PATH: &str = "./data.csv";
/// Header of the unnamed index column written by dataframe exports.
pub const INDEX_COLUMN: &str = "";
pub const NUM_COLORS_COLUMN: &str = "num_colors";

/// Open `path` and parse every row into a [`Record`].
///
/// Blocks until the whole file is read. Open and CSV structure failures are
/// returned as-is; there is no partial result.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
    let records = read_records(io::BufReader::new(file))?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV text with a header row from any reader.
///
/// Missing columns, short rows and unparseable cells all read as 0. Blank
/// lines are skipped rather than read as an all-zero record. Header names
/// match exactly, without trimming.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let i_index = headers.iter().position(|h| h == INDEX_COLUMN);
    let i_colors = headers.iter().position(|h| h == NUM_COLORS_COLUMN);
    debug!("Headers: {:?} (index column {:?}, num_colors column {:?})", headers, i_index, i_colors);

    if i_index.is_none() {
        warn!("no unnamed index column; painting numbers default to 0");
    }
    if i_colors.is_none() {
        warn!("no '{}' column; color counts default to 0", NUM_COLORS_COLUMN);
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(parse_int).unwrap_or(0);
        out.push(Record::new(field(i_index), field(i_colors)));
    }
    Ok(out)
}

/// Integer-prefix parse: skips leading whitespace, accepts an optional sign and
/// reads decimal digits up to the first non-digit. No digits yields 0.
/// Values beyond `i64` saturate.
pub fn parse_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}
