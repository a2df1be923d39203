//! curve.rs — 1-D potential energy curve (PEC) data.
//!
//! A ModeMap post-process file carries 3 header lines followed by
//! comma-separated rows of `Q, <dU raw>, dU [meV], ...`; the curve is
//! (field 0, field 2 / atoms) per row.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::MapError;

const HEADER_LINES: usize = 3;

/// One potential energy curve, aligned by row order of its source file.
#[derive(Clone, Debug, Default)]
pub struct CurveSeries {
    pub coords: Vec<f64>,
    pub energies: Vec<f64>,
}

impl CurveSeries {
    /// Number of sampled mode coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Read one PEC file, normalizing energies per atom.
pub fn load_curve(path: &Path, atoms: u32) -> Result<CurveSeries, MapError> {
    assert!(atoms >= 1);

    let file = File::open(path).map_err(|source| MapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut series = CurveSeries::default();
    for record in reader.records().skip(HEADER_LINES) {
        let record = record.map_err(|e| csv_error(path, &e))?;
        let line = record_line(&record);
        if record.len() < 3 {
            return Err(MapError::parse(
                path,
                line,
                format!("expected at least 3 fields, found {}", record.len()),
            ));
        }
        series.coords.push(parse_field(path, &record, 0)?);
        series
            .energies
            .push(parse_field(path, &record, 2)? / f64::from(atoms));
    }
    debug!(path = %path.display(), rows = series.len(), "loaded PEC series");
    Ok(series)
}

/// Read several PEC files; output order matches `paths`.
pub fn load_curves(paths: &[PathBuf], atoms: u32) -> Result<Vec<CurveSeries>, MapError> {
    paths.iter().map(|p| load_curve(p, atoms)).collect()
}

pub(crate) fn parse_field(path: &Path, record: &StringRecord, idx: usize) -> Result<f64, MapError> {
    let raw = &record[idx];
    raw.parse::<f64>().map_err(|_| {
        MapError::parse(
            path,
            record_line(record),
            format!("field {idx} is not a number: `{raw}`"),
        )
    })
}

#[inline]
pub(crate) fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

pub(crate) fn csv_error(path: &Path, err: &csv::Error) -> MapError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    MapError::parse(path, line, err.to_string())
}
