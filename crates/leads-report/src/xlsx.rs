//! XLSX export of a record set.
//!
//! The sheet layout is fixed: one sheet, ten labelled columns in a fixed
//! order, fixed width hints. Absent values become blank cells; rating and
//! review count are written as numbers.

use std::path::{Path, PathBuf};

use leads_core::SearchRecord;
use rust_xlsxwriter::Workbook;

use crate::error::ReportError;

pub const SHEET_NAME: &str = "Empresas";
pub const EXPORT_FILENAME: &str = "busca_leads.xlsx";

/// One exported column: header label and width hint in characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub width: f64,
}

pub const EXPORT_COLUMNS: [ExportColumn; 10] = [
    ExportColumn { header: "Nome da Empresa", width: 35.0 },
    ExportColumn { header: "Telefone", width: 20.0 },
    ExportColumn { header: "Categorias", width: 40.0 },
    ExportColumn { header: "Endereço", width: 45.0 },
    ExportColumn { header: "Cidade", width: 25.0 },
    ExportColumn { header: "Estado", width: 10.0 },
    ExportColumn { header: "CEP", width: 12.0 },
    ExportColumn { header: "Website", width: 30.0 },
    ExportColumn { header: "Rating", width: 10.0 },
    ExportColumn { header: "Quantidade de Avaliações", width: 25.0 },
];

/// A single exported cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

impl<'a> From<Option<&'a str>> for Cell<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Cell::Blank, Cell::Text)
    }
}

impl From<Option<f64>> for Cell<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Blank, Cell::Number)
    }
}

/// Projects a record onto the exported column order.
#[must_use]
pub fn export_row(record: &SearchRecord) -> [Cell<'_>; 10] {
    [
        record.name.as_deref().into(),
        record.phone.as_deref().into(),
        record.categories_opt().into(),
        record.address.as_deref().into(),
        record.city.as_deref().into(),
        record.state.as_deref().into(),
        record.postal_code.as_deref().into(),
        record.website.as_deref().into(),
        record.rating.into(),
        record.review_count.into(),
    ]
}

/// Builds the single-sheet workbook for `records`.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if the encoder rejects a value (for example
/// a string longer than the 32,767 characters a cell can hold).
pub fn build_workbook(records: &[SearchRecord]) -> Result<Workbook, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, column) in (0u16..).zip(EXPORT_COLUMNS.iter()) {
        worksheet.set_column_width(col, column.width)?;
        worksheet.write_string(0, col, column.header)?;
    }

    for (row, record) in (1u32..).zip(records) {
        for (col, cell) in (0u16..).zip(export_row(record)) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row, col, number)?;
                }
                Cell::Blank => {}
            }
        }
    }

    Ok(workbook)
}

/// Encodes the workbook for `records` into XLSX bytes.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if building or encoding fails.
pub fn workbook_bytes(records: &[SearchRecord]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

/// Writes `bytes` to `dir/filename`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory or file cannot be written.
pub fn write_workbook(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "workbook written");
    Ok(path)
}
