//! `gridkit_io_xlsx` v1:
//! Materialize a `gridkit_layout` canvas onto a `rust_xlsxwriter` worksheet.
//!
//! - `conf`   : worksheet limits
//! - `error`  : error types
//! - `spec`   : report model
//! - `writer` : canvas-to-worksheet kernel
pub mod conf;
pub mod error;
pub mod spec;
pub mod writer;

pub use conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
pub use error::{Result, XlsxRenderError};
pub use spec::SpecXlsxReport;
pub use writer::{derive_rust_xlsx_format, write_canvas_to_worksheet};
