//! Strategy loading (record source)

use crate::frontier::Strategy;
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load strategies from a delimited file
///
/// Each row holds `label,benefit,cost`; further columns are ignored, so a
/// frontier table written by [`save_frontier`](super::save_frontier) can be
/// read back. Set `has_header` when the first row is a header to skip.
///
/// # Example
///
/// ```no_run
/// use frontera::io::load_strategies;
///
/// let strategies = load_strategies("strategies.csv", true)?;
/// println!("Loaded {} strategies", strategies.len());
/// # Ok::<(), frontera::Error>(())
/// ```
pub fn load_strategies(path: impl AsRef<Path>, has_header: bool) -> Result<Vec<Strategy>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {e}", path.display()),
        ))
    })?;
    let strategies = read_strategies(file, has_header)?;
    tracing::info!(
        path = %path.display(),
        count = strategies.len(),
        "loaded strategies"
    );
    Ok(strategies)
}

/// Read strategies from any reader
///
/// Fails fast on the first row with a missing field or a benefit/cost that
/// is not a finite number. Labels are kept exactly as written; surrounding
/// whitespace is ignored only on the numeric columns.
pub fn read_strategies<R: Read>(reader: R, has_header: bool) -> Result<Vec<Strategy>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut strategies = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| match e.position() {
            Some(pos) => Error::MalformedRow {
                line: pos.line(),
                message: e.to_string(),
            },
            None => Error::Csv(e.to_string()),
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        strategies.push(parse_record(&record, line)?);
    }

    Ok(strategies)
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Strategy> {
    let field = |index: usize, name: &str| {
        record.get(index).ok_or_else(|| Error::MalformedRow {
            line,
            message: format!("missing {name} column (expected label,benefit,cost)"),
        })
    };

    let label = field(0, "label")?;
    let benefit = parse_measure(field(1, "benefit")?, "benefit", line)?;
    let cost = parse_measure(field(2, "cost")?, "cost", line)?;

    Ok(Strategy::new(label, benefit, cost))
}

fn parse_measure(raw: &str, name: &str, line: u64) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::MalformedRow {
            line,
            message: format!("{name} '{raw}' is not a finite number"),
        }),
    }
}
