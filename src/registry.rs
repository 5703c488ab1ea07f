use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dataset registry
// ---------------------------------------------------------------------------

/// Presentation metadata for one analyzable column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Exact header name in the CSV file.
    pub column_key: String,
    pub display_title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

/// One file-backed dataset and the columns worth analyzing in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub file_path: String,
    pub label: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// Optional registry override, read from the working directory.
pub const MANIFEST_PATH: &str = "datasets.json";

fn column(key: &str, title: &str, x_axis: &str, y_axis: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        column_key: key.to_string(),
        display_title: title.to_string(),
        x_axis_label: x_axis.to_string(),
        y_axis_label: y_axis.to_string(),
    }
}

/// The built-in registry: housing and population-change datasets.
pub fn builtin_registry() -> Vec<DatasetDescriptor> {
    vec![
        DatasetDescriptor {
            file_path: "Housing.csv".to_string(),
            label: "Housing Data".to_string(),
            columns: vec![
                column("AGE", "Ages of Houses", "Years Old", "Count of Each"),
                column("BEDRMS", "Bedrooms Count", "Nmbr of Bedrooms", "Count of Each"),
                column("ROOMS", "Number of Rooms", "Number of Rooms", "Count of Each"),
                column("UTILITY", "Utility Square Feet", "Utility Sq Ft", "Count of Each"),
            ],
        },
        DatasetDescriptor {
            file_path: "PopChange.csv".to_string(),
            label: "Population Data".to_string(),
            columns: vec![
                column("Pop Apr 1", "Population in April", "apr pop", "Count of Each"),
                column("Pop Jul 1", "Population in July", "jul pop", "Count of Each"),
                column(
                    "Change Pop",
                    "Population changes between April and July",
                    "apr pop",
                    "Count of each delta",
                ),
            ],
        },
    ]
}

/// Load the registry, preferring a `datasets.json` manifest when present.
/// A broken manifest is a warning, not a fatal error.
pub fn load_registry() -> Vec<DatasetDescriptor> {
    match read_manifest(Path::new(MANIFEST_PATH)) {
        Ok(Some(datasets)) => {
            log::info!("using {} datasets from {MANIFEST_PATH}", datasets.len());
            datasets
        }
        Ok(None) => builtin_registry(),
        Err(err) => {
            log::warn!("ignoring {MANIFEST_PATH}: {err:#}");
            builtin_registry()
        }
    }
}

fn read_manifest(path: &Path) -> Result<Option<Vec<DatasetDescriptor>>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path).context("reading manifest")?;
    let datasets: Vec<DatasetDescriptor> =
        serde_json::from_str(&text).context("parsing manifest")?;
    if datasets.is_empty() {
        bail!("manifest lists no datasets");
    }
    Ok(Some(datasets))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn builtin_registry_lists_both_datasets() {
        let datasets = builtin_registry();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, "Housing Data");
        assert_eq!(datasets[1].file_path, "PopChange.csv");

        let housing_keys: Vec<&str> = datasets[0]
            .columns
            .iter()
            .map(|c| c.column_key.as_str())
            .collect();
        assert_eq!(housing_keys, ["AGE", "BEDRMS", "ROOMS", "UTILITY"]);

        let pop_keys: Vec<&str> = datasets[1]
            .columns
            .iter()
            .map(|c| c.column_key.as_str())
            .collect();
        assert_eq!(pop_keys, ["Pop Apr 1", "Pop Jul 1", "Change Pop"]);
    }

    #[test]
    fn absent_manifest_means_builtin() {
        let result = read_manifest(Path::new("no-such-manifest.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn manifest_overrides_registry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{
                "file_path": "Other.csv",
                "label": "Other Data",
                "columns": [{
                    "column_key": "X",
                    "display_title": "X Values",
                    "x_axis_label": "x",
                    "y_axis_label": "count"
                }]
            }]"#,
        )
        .unwrap();
        file.flush().unwrap();

        let datasets = read_manifest(file.path()).unwrap().unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].label, "Other Data");
        assert_eq!(datasets[0].columns[0].column_key, "X");
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ").unwrap();
        file.flush().unwrap();
        assert!(read_manifest(file.path()).is_err());
    }

    #[test]
    fn empty_manifest_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        file.flush().unwrap();
        assert!(read_manifest(file.path()).is_err());
    }
}
