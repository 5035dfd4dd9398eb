mod row;

pub use row::{GridRow, sample_rows};
