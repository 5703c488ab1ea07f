use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Why a dataset file could not be turned into a usable [`Table`].
///
/// The session reacts differently to the cases: a missing or unreadable file
/// is fatal, an empty file only retires the dataset for the rest of the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The {} file seems to be missing", path.display())]
    NotFound { path: PathBuf },

    #[error("The {} file has no usable rows", path.display())]
    Empty { path: PathBuf },

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`].
///
/// The first record is the header row; every cell is typed by a parse
/// cascade (`i64`, then `f64`, then text; empty string → null). Records that
/// fail to parse structurally are skipped; a file from which no rows could
/// be recovered yields [`LoadError::Empty`].
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => return Err(classify_open_error(path, err)),
    };

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(|h| h.trim().to_string()).collect(),
        Err(err) => {
            log::warn!("unreadable header row in {}: {err}", path.display());
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(parse_cell).collect()),
            Err(err) => {
                log::warn!("skipping malformed record in {}: {err}", path.display());
            }
        }
    }

    let table = Table::from_rows(headers, rows);
    if table.headers.is_empty() || table.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

fn classify_open_error(path: &Path, err: csv::Error) -> LoadError {
    let not_found = matches!(
        err.kind(),
        csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound
    );
    if not_found {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn parse_cell(raw: &str) -> CellValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_typed_cells() {
        let file = write_csv("AGE,NAME\n42,alpha\n7.5,\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.column("AGE").unwrap(),
            &[CellValue::Integer(42), CellValue::Float(7.5)]
        );
        assert_eq!(
            table.column("NAME").unwrap(),
            &[CellValue::Text("alpha".to_string()), CellValue::Null]
        );
    }

    #[test]
    fn header_names_are_trimmed() {
        let file = write_csv("Pop Apr 1 , Change Pop\n10,2\n");
        let table = load_table(file.path()).unwrap();
        assert!(table.column("Pop Apr 1").is_some());
        assert!(table.column("Change Pop").is_some());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_table(Path::new("definitely-not-here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("definitely-not-here.csv"));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv("AGE,ROOMS\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn zero_byte_file_is_empty() {
        let file = write_csv("");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }
}
