use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single generated value. Generators only emit text and numbers.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

/// One generated row: column name to value, in the order the generator wrote them.
pub type Record = IndexMap<String, CellValue>;

/// A record whose column set differs from the first record's.
///
/// `row` is 1-based so it reads naturally in messages shown to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "row {row} does not have the same columns as the first row (missing: {missing:?}, unexpected: {unexpected:?})"
)]
pub struct ColumnMismatch {
    pub row: usize,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

/// Returns the column names shared by every record, in the first record's order.
///
/// An empty slice has no columns. Records may list their keys in a different
/// order than the first one; only the set of names has to match.
pub fn uniform_columns(records: &[Record]) -> Result<Vec<String>, ColumnMismatch> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = first.keys().cloned().collect();

    for (index, record) in records.iter().enumerate().skip(1) {
        let missing: Vec<String> = columns
            .iter()
            .filter(|column| !record.contains_key(column.as_str()))
            .cloned()
            .collect();
        let unexpected: Vec<String> = record
            .keys()
            .filter(|key| !first.contains_key(key.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(ColumnMismatch {
                row: index + 1,
                missing,
                unexpected,
            });
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, CellValue)]) -> Record {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn num(n: i64) -> CellValue {
        CellValue::from(n)
    }

    #[test]
    fn keeps_key_order_from_the_wire() {
        let parsed: Record = serde_json::from_str(r#"{"zeta":1,"alpha":"a","mid":2.5}"#).unwrap();
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn displays_numbers_and_text_plainly() {
        let parsed: Record = serde_json::from_str(r#"{"price":25000,"ratio":1.5,"name":"Civic"}"#).unwrap();
        assert_eq!(parsed["price"].to_string(), "25000");
        assert_eq!(parsed["ratio"].to_string(), "1.5");
        assert_eq!(parsed["name"].to_string(), "Civic");
    }

    #[test]
    fn booleans_are_not_cell_values() {
        assert!(serde_json::from_str::<Record>(r#"{"flag":true}"#).is_err());
    }

    #[test]
    fn columns_of_homogeneous_records() {
        let records = vec![
            record(&[("a", num(1)), ("b", num(2))]),
            record(&[("b", num(4)), ("a", num(3))]),
        ];
        assert_eq!(uniform_columns(&records).unwrap(), ["a", "b"]);
    }

    #[test]
    fn no_records_means_no_columns() {
        assert!(uniform_columns(&[]).unwrap().is_empty());
    }

    #[test]
    fn reports_the_row_that_breaks_the_shape() {
        let records = vec![
            record(&[("a", num(1)), ("b", num(2))]),
            record(&[("a", num(3)), ("b", num(4))]),
            record(&[("a", num(5)), ("c", CellValue::from("x"))]),
        ];
        let err = uniform_columns(&records).unwrap_err();
        assert_eq!(
            err,
            ColumnMismatch {
                row: 3,
                missing: vec!["b".to_string()],
                unexpected: vec!["c".to_string()],
            }
        );
    }

    #[test]
    fn a_row_missing_a_column_is_a_mismatch() {
        let records = vec![
            record(&[("a", num(1)), ("b", num(2))]),
            record(&[("a", num(3))]),
        ];
        let err = uniform_columns(&records).unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.missing, ["b"]);
        assert!(err.unexpected.is_empty());
    }
}
