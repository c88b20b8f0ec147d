//! CSV export of the per-year EPS table
//!
//! Layout: header `Year,Bear EPS,Base EPS,Bull EPS`, then one row per
//! projected year. Values are written unrounded in their shortest
//! round-trippable form, so reading the file back gives the same numbers.

use csv::{Reader, Writer};
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{ProjectionError, Result};
use crate::projection::{EpsRow, EpsTable};

/// Default file name for the download
pub const EXPORT_FILE_NAME: &str = "stock_projection.csv";

/// MIME type of the export
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Column names of the export, in order
pub const EXPORT_HEADER: [&str; 4] = ["Year", "Bear EPS", "Base EPS", "Bull EPS"];

/// Write the table as CSV to any writer
pub fn write_eps_csv<W: Write>(table: &EpsTable, writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    if table.is_empty() {
        csv_writer.write_record(EXPORT_HEADER)?;
    }
    for row in &table.rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize the table into an in-memory CSV buffer
pub fn eps_table_to_csv_string(table: &EpsTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_eps_csv(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the table to a CSV file
pub fn write_eps_csv_file<P: AsRef<Path>>(table: &EpsTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_eps_csv(table, file)?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Parse an exported CSV back into an EPS table
pub fn read_eps_csv<R: Read>(reader: R) -> Result<EpsTable> {
    let mut csv_reader = Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(EXPORT_HEADER.iter().copied()) {
        return Err(ProjectionError::UnexpectedHeader {
            expected: EXPORT_HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut table = EpsTable::default();
    for result in csv_reader.deserialize() {
        let row: EpsRow = result?;
        table.add_row(row);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ProjectionRequest;
    use crate::projection::run_projection;

    #[test]
    fn test_header_and_row_count() {
        let result = run_projection(&ProjectionRequest::default()).unwrap();
        let csv = eps_table_to_csv_string(&result.table).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], EXPORT_HEADER.join(","));
        assert_eq!(lines[0], "Year,Bear EPS,Base EPS,Bull EPS");
        assert_eq!(lines.len(), 1 + 5);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[5].starts_with("5,"));
    }

    #[test]
    fn test_round_trip_is_exact() {
        let mut request = ProjectionRequest::default();
        request.globals.years = 25;
        request.scenarios.bear.growth_rate_pct = -7.3;
        let result = run_projection(&request).unwrap();

        let csv = eps_table_to_csv_string(&result.table).unwrap();
        let parsed = read_eps_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed, result.table);
    }

    #[test]
    fn test_zero_growth_values() {
        let mut table = EpsTable::default();
        table.add_row(EpsRow { year: 1, bear_eps: 10.0, base_eps: 10.0, bull_eps: 10.0 });
        let csv = eps_table_to_csv_string(&table).unwrap();
        let parsed = read_eps_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed.rows[0].base_eps, 10.0);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let csv = eps_table_to_csv_string(&EpsTable::default()).unwrap();
        assert_eq!(csv.trim_end(), "Year,Bear EPS,Base EPS,Bull EPS");
        assert!(read_eps_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_csv_string_matches_writer_output() {
        let result = run_projection(&ProjectionRequest::default()).unwrap();
        let mut bytes = Vec::new();
        write_eps_csv(&result.table, &mut bytes).unwrap();

        let csv = eps_table_to_csv_string(&result.table).unwrap();
        assert_eq!(csv.as_bytes(), bytes.as_slice());
        assert!(!csv.contains('\u{FFFD}'));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err: ProjectionError = String::from_utf8(vec![b'Y', 0xff]).unwrap_err().into();
        assert!(matches!(err, ProjectionError::Utf8(_)));
    }

    #[test]
    fn test_wrong_header_rejected() {
        let csv = "Year,Low,Mid,High\n1,1.0,2.0,3.0\n";
        let err = read_eps_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::UnexpectedHeader { .. }));
    }

    #[test]
    fn test_file_export() {
        let result = run_projection(&ProjectionRequest::default()).unwrap();
        assert_eq!(EXPORT_MIME_TYPE, "text/csv");
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), EXPORT_FILE_NAME));

        write_eps_csv_file(&result.table, &path).unwrap();
        let parsed = read_eps_csv(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parsed, result.table);
    }
}
