use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the data grid. The date column is stored as a plain calendar
/// date; era text exists only on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub id: u32,
    pub name: String,
    pub generation: String,
    pub date: Option<NaiveDate>,
}

impl GridRow {
    /// Creates a row with no date.
    pub fn new(id: u32, name: impl Into<String>, generation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            generation: generation.into(),
            date: None,
        }
    }
}

/// Rows the grid starts with.
pub fn sample_rows() -> Vec<GridRow> {
    vec![
        GridRow::new(1, "山田太郎", "02"),
        GridRow::new(2, "佐藤花子", "03"),
        GridRow::new(3, "鈴木一郎", "02"),
    ]
}
