//! surface.rs — 2-D potential energy surface (PES) data.
//!
//! The 2-D post-process file starts with a free-form preamble. The section
//! of interest begins at the line holding exactly `dU(Q_1,Q_2) [meV]`: one
//! line is skipped, the next carries the Q1 grid, and every following row is
//! `q2, dU(q1_0,q2), dU(q1_1,q2), ...`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::curve::{csv_error, parse_field, record_line};
use crate::error::MapError;

/// Section delimiter in the post-process file. Not data.
pub const SURFACE_MARKER: &str = "dU(Q_1,Q_2) [meV]";

/// Energy samples on the (Q1, Q2) grid.
///
/// `values[row][col]` pairs `q2[row]` with `q1[col]`; every row has exactly
/// `q1.len()` entries.
#[derive(Clone, Debug)]
pub struct SurfaceGrid {
    pub q1: Vec<f64>,
    pub q2: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// Grid dimensions as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.q2.len(), self.q1.len())
    }

    /// Smallest and largest energy on the grid.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in &self.values {
            for &v in row {
                if v < lo {
                    lo = v;
                }
                if v > hi {
                    hi = v;
                }
            }
        }
        (lo, hi)
    }

    /// Every `(row, col)` cell holding the global minimum.
    ///
    /// Exact equality on the stored values; ties are all reported.
    pub fn minima(&self) -> Vec<(usize, usize)> {
        let (lo, _) = self.value_range();
        let mut cells = Vec::new();
        for (r, row) in self.values.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == lo {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Minimum cells as physical `(q1, q2)` coordinates.
    pub fn minima_coords(&self) -> Vec<(f64, f64)> {
        self.minima()
            .into_iter()
            .map(|(r, c)| (self.q1[c], self.q2[r]))
            .collect()
    }
}

/// Read one PES file, normalizing energies per atom.
pub fn load_surface(path: &Path, atoms: u32) -> Result<SurfaceGrid, MapError> {
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

    let mut records = reader.records();

    // Preamble: everything up to the marker line is ignored.
    let mut marker_seen = false;
    let mut last_line = 0;
    for record in records.by_ref() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        last_line = record_line(&record);
        if record.len() == 1 && &record[0] == SURFACE_MARKER {
            marker_seen = true;
            break;
        }
    }
    if !marker_seen {
        return Err(MapError::parse(
            path,
            last_line,
            format!("marker line `{SURFACE_MARKER}` not found"),
        ));
    }

    // One separator line between the marker and the Q1 header row.
    let _ = records
        .next()
        .transpose()
        .map_err(|e| csv_error(path, &e))?;

    let header = records
        .next()
        .transpose()
        .map_err(|e| csv_error(path, &e))?
        .ok_or_else(|| MapError::parse(path, last_line, "missing Q1 header row after marker"))?;
    let mut q1 = Vec::with_capacity(header.len().saturating_sub(1));
    for idx in 1..header.len() {
        q1.push(parse_field(path, &header, idx)?);
    }
    if q1.is_empty() {
        return Err(MapError::parse(
            path,
            record_line(&header),
            "Q1 header row has no coordinates",
        ));
    }

    let mut q2 = Vec::new();
    let mut values = Vec::new();
    for record in records {
        let record = record.map_err(|e| csv_error(path, &e))?;
        let line = record_line(&record);
        if record.len() != q1.len() + 1 {
            return Err(MapError::parse(
                path,
                line,
                format!(
                    "expected {} values per row, found {}",
                    q1.len(),
                    record.len().saturating_sub(1)
                ),
            ));
        }
        q2.push(parse_field(path, &record, 0)?);
        let mut row = Vec::with_capacity(q1.len());
        for idx in 1..record.len() {
            row.push(parse_field(path, &record, idx)? / f64::from(atoms));
        }
        values.push(row);
    }
    if values.is_empty() {
        return Err(MapError::parse(
            path,
            record_line(&header),
            "no data rows after Q1 header",
        ));
    }

    debug!(
        path = %path.display(),
        rows = q2.len(),
        cols = q1.len(),
        "loaded PES grid"
    );
    Ok(SurfaceGrid { q1, q2, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn unique_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "modeplot_surface_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    // The marker field holds a comma, so the post-process writer quotes it.
    const BODY: &str = "\
preamble,junk,1
more preamble
\"dU(Q_1,Q_2) [meV]\"
skipped
,0,1,2
0,5,3,9
1,2,8,1
";

    #[test]
    fn parses_header_rows_and_matrix() {
        let path = unique_path("grid.csv");
        fs::write(&path, BODY).unwrap();

        let grid = load_surface(&path, 1).unwrap();
        assert_eq!(grid.q1, vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.q2, vec![0.0, 1.0]);
        assert_eq!(grid.values, vec![vec![5.0, 3.0, 9.0], vec![2.0, 8.0, 1.0]]);
        assert_eq!(grid.minima(), vec![(1, 2)]);
        assert_eq!(grid.minima_coords(), vec![(2.0, 1.0)]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn reports_all_tied_minima() {
        let grid = SurfaceGrid {
            q1: vec![0.0, 1.0],
            q2: vec![0.0, 1.0],
            values: vec![vec![-1.0, 3.0], vec![4.0, -1.0]],
        };
        assert_eq!(grid.minima(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn missing_marker_is_a_parse_error() {
        let path = unique_path("nomarker.csv");
        fs::write(&path, "a,b\nc,d\n").unwrap();

        let err = load_surface(&path, 1).unwrap_err();
        assert!(matches!(err, MapError::Parse { .. }), "{err}");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let path = unique_path("ragged.csv");
        let body = BODY.replace("1,2,8,1", "1,2,8");
        fs::write(&path, body).unwrap();

        let err = load_surface(&path, 1).unwrap_err();
        assert!(matches!(err, MapError::Parse { line: 7, .. }), "{err}");

        let _ = fs::remove_file(&path);
    }
}
