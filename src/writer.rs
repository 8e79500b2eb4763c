use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::{error, info};

use crate::error::{EtlError, Result};
use crate::normalize::Table;

/// Files produced by one successful [`persist`].
#[derive(Debug, Clone)]
pub struct Outputs {
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Write `table` to `csv_path` and to the `.xlsx` file next to it.
///
/// The CSV is written first. If the spreadsheet then fails the CSV stays
/// on disk.
pub fn persist(table: &Table, csv_path: &Path) -> Result<Outputs> {
    info!("Saving data to {}", csv_path.display());
    let xlsx_path = csv_path.with_extension("xlsx");

    let result = write_csv(table, csv_path).and_then(|_| write_xlsx(table, &xlsx_path));
    match result {
        Ok(()) => {
            info!("Data saved successfully");
            Ok(Outputs {
                csv: csv_path.to_path_buf(),
                xlsx: xlsx_path,
            })
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}

pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| EtlError::persist(path, e))?;
    wtr.write_record(table.headers)
        .map_err(|e| EtlError::persist(path, e))?;
    for row in &table.rows {
        wtr.write_record(row.cells().map(|c| c.unwrap_or_default()))
            .map_err(|e| EtlError::persist(path, e))?;
    }
    wtr.flush().map_err(|e| EtlError::persist(path, e))?;
    Ok(())
}

pub fn write_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, title) in (0u16..).zip(table.headers) {
        sheet
            .write_string_with_format(0, col, title, &header)
            .map_err(|e| EtlError::persist(path, e))?;
    }
    for (row_idx, row) in (1u32..).zip(&table.rows) {
        for (col, cell) in (0u16..).zip(row.cells()) {
            // absent cells stay blank
            if let Some(value) = cell {
                sheet
                    .write_string(row_idx, col, value)
                    .map_err(|e| EtlError::persist(path, e))?;
            }
        }
    }

    workbook.save(path).map_err(|e| EtlError::persist(path, e))?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Row;
    use calamine::{open_workbook, Reader, Xlsx};

    fn sample() -> Table {
        Table {
            headers: ["Name", "Graduation_Year", "Current_Position", "Employer"],
            rows: vec![
                Row {
                    name: "Tahmid Rahman".into(),
                    fields: [Some("2019".into()), Some("Engineer, Backend".into()), Some("Google".into())],
                },
                Row {
                    name: "Nusrat Jahan".into(),
                    fields: [None, Some("N/A".into()), Some("N/A".into())],
                },
            ],
        }
    }

    fn read_csv(path: &Path) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    fn read_xlsx(path: &Path) -> Vec<Vec<String>> {
        let mut wb: Xlsx<_> = open_workbook(path).unwrap();
        let range = wb.worksheet_range_at(0).unwrap().unwrap();
        range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn both_formats_hold_same_cells() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("alumni_data_20240101.csv");
        let out = persist(&sample(), &csv_path).unwrap();

        assert_eq!(out.xlsx, dir.path().join("alumni_data_20240101.xlsx"));
        assert!(out.csv.exists());
        assert!(out.xlsx.exists());

        let csv_rows = read_csv(&out.csv);
        let xlsx_rows = read_xlsx(&out.xlsx);
        assert_eq!(csv_rows.len(), 3);
        assert_eq!(csv_rows, xlsx_rows);
        assert_eq!(csv_rows[0], vec!["Name", "Graduation_Year", "Current_Position", "Employer"]);
        assert_eq!(csv_rows[2], vec!["Nusrat Jahan", "", "N/A", "N/A"]);
    }

    #[test]
    fn csv_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Engineer, Backend\""));
    }

    #[test]
    fn unwritable_directory_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("faculty_data_20240101.csv");
        match persist(&sample(), &path) {
            Err(EtlError::Persist { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected persist error, got {other:?}"),
        }
    }

    #[test]
    fn csv_kept_when_spreadsheet_fails() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("faculty_data_20240101.csv");
        // a directory where the spreadsheet should go makes the save fail
        std::fs::create_dir(dir.path().join("faculty_data_20240101.xlsx")).unwrap();

        let err = persist(&sample(), &csv_path).unwrap_err();
        assert!(matches!(err, EtlError::Persist { .. }));
        assert!(csv_path.exists());
    }
}
