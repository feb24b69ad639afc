//! CSV boundary helpers for the `msm_bt` binary and library callers.
//!
//! Reading takes the first column of every record as a return. Writing emits
//! a header and one data row `m0,s0,p1..pk,nll,k,volmean,volsd`, where
//! `volsd` is the Monte-Carlo standard error of the volatility forecast.
use crate::msm::{
    core::forecasts::MSMForecastResult,
    errors::{MSMError, MSMResult},
    models::MSMFitResult,
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use ndarray::Array1;
use std::path::Path;

/// Read the first column of `path` as a vector of returns.
///
/// Empty lines are skipped; extra columns are ignored.
///
/// # Errors
/// - [`MSMError::Io`] if the file cannot be opened or is not valid CSV.
/// - [`MSMError::MalformedRecord`] for a cell that is not a finite number,
///   carrying the 1-based line number.
pub fn read_returns<P: AsRef<Path>>(path: P, has_headers: bool) -> MSMResult<Array1<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let cell = record.get(0).unwrap_or_default();
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => return Err(MSMError::MalformedRecord { line, value: cell.to_string() }),
        }
    }
    Ok(Array1::from(values))
}

/// Column names for a fit of dimension `k`.
pub fn results_header(k: usize) -> Vec<String> {
    let mut header = vec!["m0".to_string(), "s0".to_string()];
    header.extend((1..=k).map(|i| format!("p{i}")));
    header.extend(["nll", "k", "volmean", "volsd"].map(String::from));
    header
}

/// Write the fitted parameters and forecast summary to `path`.
///
/// # Errors
/// - [`MSMError::Io`] if the file cannot be created or written.
pub fn write_results<P: AsRef<Path>>(
    path: P, fit: &MSMFitResult, forecast: &MSMForecastResult,
) -> MSMResult<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(results_header(fit.k))?;

    let mut row = vec![fit.params.m0.to_string(), fit.params.s0.to_string()];
    row.extend(fit.params.probs.iter().map(f64::to_string));
    row.push(fit.nll.to_string());
    row.push(fit.k.to_string());
    row.push(forecast.mean.to_string());
    row.push(forecast.standard_error.to_string());
    writer.write_record(&row)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file.flush().expect("flush");
        file
    }

    #[test]
    // Purpose
    // -------
    // First-column parsing with and without a header row.
    //
    // Given
    // -----
    // - A headed two-column file and the same values without header.
    //
    // Expect
    // ------
    // - Both read as [0.01, -0.02, 0.005]; the second column is ignored.
    fn read_returns_takes_first_column() {
        let headed = csv_file("ret,volume\n0.01,10\n-0.02,11\n0.005,12\n");
        let bare = csv_file("0.01\n-0.02\n\n0.005\n");

        let a = read_returns(headed.path(), true).expect("headed");
        let b = read_returns(bare.path(), false).expect("bare");
        assert_eq!(a.to_vec(), vec![0.01, -0.02, 0.005]);
        assert_eq!(a, b);
    }

    #[test]
    // Purpose
    // -------
    // Non-numeric cells fail loudly with their line number.
    //
    // Given
    // -----
    // - Third line holds "abc".
    //
    // Expect
    // ------
    // - `MalformedRecord { line: 3, value: "abc" }`.
    fn read_returns_reports_malformed_line() {
        let file = csv_file("0.01\n0.02\nabc\n0.03\n");
        assert_eq!(
            read_returns(file.path(), false),
            Err(MSMError::MalformedRecord { line: 3, value: "abc".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // A missing input file is an I/O error, not a panic.
    //
    // Given
    // -----
    // - A path inside an empty temp directory.
    //
    // Expect
    // ------
    // - `MSMError::Io`.
    fn read_returns_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("dir");
        let res = read_returns(dir.path().join("nope.csv"), false);
        assert!(matches!(res, Err(MSMError::Io { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Header layout scales with k.
    //
    // Given
    // -----
    // - k = 3.
    //
    // Expect
    // ------
    // - m0,s0,p1,p2,p3,nll,k,volmean,volsd.
    fn header_lists_one_probability_per_chain() {
        assert_eq!(
            results_header(3).join(","),
            "m0,s0,p1,p2,p3,nll,k,volmean,volsd"
        );
    }
}
