//! Worksheet materialization errors.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};

/// Result type for worksheet materialization.
pub type Result<T> = std::result::Result<T, XlsxRenderError>;

#[derive(Error, Debug)]
pub enum XlsxRenderError {
    /// Canvas row beyond the worksheet limit (or 0).
    #[error("Row {0} is outside the worksheet range 1..={N_NROWS_EXCEL_MAX}")]
    RowOutOfRange(u32),

    /// Canvas column beyond the worksheet limit (or 0).
    #[error("Column {0} is outside the worksheet range 1..={N_NCOLS_EXCEL_MAX}")]
    ColumnOutOfRange(u32),

    /// The worksheet rejected an operation.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
}
