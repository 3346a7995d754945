//! Presentation of a record set: an escaped HTML results table and an XLSX
//! workbook. Both read the same `&[SearchRecord]` so they can never disagree.

pub mod error;
pub mod table;
pub mod xlsx;

pub use error::ReportError;
pub use table::{render_document, render_error_row, render_results, ResultsTable};
pub use xlsx::{build_workbook, workbook_bytes, write_workbook, EXPORT_FILENAME, SHEET_NAME};
