use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell.
///
/// Columns can mix integers, floats and text, so extrema need a total order:
/// nulls sort first, numbers compare numerically across the two numeric
/// variants, text sorts last (lexicographically among itself).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Null, _) => std::cmp::Ordering::Less,
            (_, Null) => std::cmp::Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => std::cmp::Ordering::Greater,
            (_, Text(_)) => std::cmp::Ordering::Less,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Float(a), Float(b)) => a.total_cmp(b),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the cell as an `f64` for statistics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this cell is a missing value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An in-memory columnar table with columns addressed by header name.
#[derive(Debug, Clone)]
pub struct Table {
    /// Header names in file order.
    pub headers: Vec<String>,
    /// Cells per column; every column has `rows` entries.
    columns: BTreeMap<String, Vec<CellValue>>,
    rows: usize,
}

impl Table {
    /// Build the column index from parsed rows. The first occurrence of a
    /// duplicated header wins; short rows are padded with nulls.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns: BTreeMap<String, Vec<CellValue>> = BTreeMap::new();
        for (i, header) in headers.iter().enumerate() {
            let cells: Vec<CellValue> = rows
                .iter()
                .map(|row| row.get(i).cloned().unwrap_or(CellValue::Null))
                .collect();
            columns.entry(header.clone()).or_insert(cells);
        }
        Table {
            headers,
            columns,
            rows: rows.len(),
        }
    }

    /// Cells of the named column, if it exists.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_order_nulls_then_numbers_then_text() {
        let mut cells = vec![
            CellValue::Text("alpha".to_string()),
            CellValue::Float(2.5),
            CellValue::Null,
            CellValue::Integer(3),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellValue::Null,
                CellValue::Float(2.5),
                CellValue::Integer(3),
                CellValue::Text("alpha".to_string()),
            ]
        );
    }

    #[test]
    fn numeric_variants_compare_by_value() {
        assert!(CellValue::Integer(2) < CellValue::Float(2.5));
        assert!(CellValue::Float(10.0) > CellValue::Integer(3));
        assert_eq!(
            CellValue::Integer(4).cmp(&CellValue::Float(4.0)),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn as_f64_only_for_numbers() {
        assert_eq!(CellValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Text("7".to_string()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn table_addresses_columns_by_header() {
        let table = Table::from_rows(
            vec!["AGE".to_string(), "NAME".to_string()],
            vec![
                vec![CellValue::Integer(42), CellValue::Text("a".to_string())],
                vec![CellValue::Integer(7)],
            ],
        );
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(
            table.column("AGE").unwrap(),
            &[CellValue::Integer(42), CellValue::Integer(7)]
        );
        // second row was short: padded with a null
        assert_eq!(table.column("NAME").unwrap()[1], CellValue::Null);
        assert!(table.column("MISSING").is_none());
    }
}
