//! CSV ingestion for named samples.
//!
//! Reads delimited numeric tables into [`Sample`]s, one per file, with the
//! file's basename as the sample name. Column handling mirrors common
//! geolocation exports: explicit column names win, otherwise `lat`/`lon`
//! (case-insensitive) are preferred, otherwise the first two numeric
//! columns are used, and a lone numeric column drops the sample into 1-D
//! mode. Rows with a missing or non-numeric cell in a selected column are
//! dropped. Oversized files are subsampled reproducibly to a row cap.

use crate::error::{Result, SwdError};
use crate::sample::{NamedSample, Sample};
use std::path::{Path, PathBuf};

/// Which columns of a CSV file feed the sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColumnSelect {
    /// Prefer `lat`/`lon`, fall back to the first (up to two) numeric columns.
    #[default]
    Auto,
    /// Use exactly these header names, in order.
    Named(Vec<String>),
}

/// Loader configuration.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Column selection policy.
    pub columns: ColumnSelect,
    /// Row cap per file; 0 disables subsampling.
    pub cap: usize,
    /// Seed for the reproducible subsample.
    pub seed: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: ColumnSelect::Auto,
            cap: 200,
            seed: 42,
        }
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// A column is numeric when it has at least one value and every present
/// value parses as a float.
fn is_numeric_column(rows: &[Vec<&str>], index: usize) -> bool {
    let mut seen = false;
    for row in rows {
        match row.get(index) {
            None => continue,
            Some(cell) if cell.is_empty() => continue,
            Some(cell) => {
                if cell.parse::<f64>().is_err() {
                    return false;
                }
                seen = true;
            }
        }
    }
    seen
}

fn resolve_columns(
    header: &[&str],
    rows: &[Vec<&str>],
    select: &ColumnSelect,
    file: &str,
) -> Result<Vec<usize>> {
    match select {
        ColumnSelect::Named(names) => names
            .iter()
            .map(|name| {
                header
                    .iter()
                    .position(|h| h == name)
                    .ok_or_else(|| SwdError::MissingColumn {
                        column: name.clone(),
                        file: file.to_string(),
                    })
            })
            .collect(),
        ColumnSelect::Auto => {
            let lat = header.iter().position(|h| h.eq_ignore_ascii_case("lat"));
            let lon = header.iter().position(|h| h.eq_ignore_ascii_case("lon"));
            if let (Some(lat), Some(lon)) = (lat, lon) {
                return Ok(vec![lat, lon]);
            }
            let numeric: Vec<usize> = (0..header.len())
                .filter(|&i| is_numeric_column(rows, i))
                .collect();
            if numeric.is_empty() {
                return Err(SwdError::NoNumericColumns(file.to_string()));
            }
            Ok(numeric.into_iter().take(2).collect())
        }
    }
}

/// Load one CSV file as a named sample.
///
/// The first line is the header. A file whose selected columns yield no
/// complete numeric row is reported as an empty sample.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<NamedSample> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let contents = std::fs::read_to_string(path)?;
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());
    let header = match lines.next() {
        Some(line) => split_fields(line),
        None => return Err(SwdError::EmptySample(name)),
    };
    let rows: Vec<Vec<&str>> = lines.map(split_fields).collect();

    let columns = resolve_columns(&header, &rows, &options.columns, &name)?;

    let mut points = Vec::with_capacity(rows.len());
    'row: for row in &rows {
        let mut point = Vec::with_capacity(columns.len());
        for &col in &columns {
            match row.get(col).and_then(|cell| cell.parse::<f64>().ok()) {
                Some(value) => point.push(value),
                None => continue 'row,
            }
        }
        points.push(point);
    }
    if points.is_empty() {
        return Err(SwdError::EmptySample(name));
    }

    let sample = Sample::multi(points)?.subsample(options.cap, options.seed, &name);
    Ok(NamedSample::new(name, sample))
}

/// All `*.csv` paths directly under `dir`, sorted by file name.
pub fn find_csv_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every `*.csv` under `dir` as named samples, sorted by file name.
pub fn load_csv_dir(dir: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<NamedSample>> {
    find_csv_files(dir)?
        .iter()
        .map(|path| load_csv(path, options))
        .collect()
}
