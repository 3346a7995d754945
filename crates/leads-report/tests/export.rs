//! Export-to-disk tests for the XLSX writer.

use std::io::{Cursor, Read};

use leads_core::SearchRecord;
use leads_report::{workbook_bytes, write_workbook, ReportError, EXPORT_FILENAME, SHEET_NAME};

fn sample_records() -> Vec<SearchRecord> {
    vec![
        SearchRecord {
            name: Some("Oficina Dois Irmãos".to_owned()),
            phone: Some("+55 17 3442-1111".to_owned()),
            categories: "Oficina mecânica".to_owned(),
            city: Some("Fernandópolis".to_owned()),
            state: Some("SP".to_owned()),
            rating: Some(4.8),
            review_count: Some(54.0),
            ..SearchRecord::default()
        },
        SearchRecord {
            name: Some("Oficina Dois Irmãos".to_owned()),
            ..SearchRecord::default()
        },
    ]
}

#[test]
fn write_workbook_creates_file_under_fixed_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bytes = workbook_bytes(&sample_records()).expect("encode workbook");

    let path = write_workbook(dir.path(), EXPORT_FILENAME, &bytes).expect("write workbook");

    assert_eq!(path, dir.path().join("busca_leads.xlsx"));
    let on_disk = std::fs::read(&path).expect("read back");
    assert_eq!(on_disk, bytes);
}

#[test]
fn write_workbook_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("exports").join("today");
    let bytes = workbook_bytes(&sample_records()).expect("encode workbook");

    let path = write_workbook(&nested, EXPORT_FILENAME, &bytes).expect("write workbook");

    assert!(path.exists());
}

#[test]
fn write_workbook_reports_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").expect("create blocker file");

    let err = write_workbook(&blocker, EXPORT_FILENAME, b"PK").expect_err("parent is a file");

    assert!(matches!(err, ReportError::Io { .. }), "got: {err:?}");
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("xlsx is a zip archive");
    let mut part = archive.by_name(name).expect("part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("part is utf-8");
    xml
}

#[test]
fn encoded_workbook_has_named_sheet_and_ordered_headers() {
    let bytes = workbook_bytes(&sample_records()).expect("encode workbook");

    let workbook_xml = read_part(&bytes, "xl/workbook.xml");
    assert_eq!(SHEET_NAME, "Empresas");
    assert!(
        workbook_xml.contains(r#"<sheet name="Empresas""#),
        "sheet name missing: {workbook_xml}"
    );

    let headers = [
        "Nome da Empresa",
        "Telefone",
        "Categorias",
        "Endereço",
        "Cidade",
        "Estado",
        "CEP",
        "Website",
        "Rating",
        "Quantidade de Avaliações",
    ];
    // Headers are the first strings written, so they lead the shared string table.
    let shared = read_part(&bytes, "xl/sharedStrings.xml");
    let positions: Vec<usize> = headers
        .iter()
        .map(|header| {
            shared
                .find(&format!("<t>{header}</t>"))
                .unwrap_or_else(|| panic!("header {header:?} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "headers out of order");
    let first_data = shared.find("<t>Oficina Dois Irmãos</t>").expect("data string present");
    assert!(positions[9] < first_data);

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<row r="1""#));
    assert!(sheet.contains(r#"<c r="J1" t="s">"#), "row 1 spans ten columns");
    assert!(!sheet.contains(r#"<c r="K1""#));
}
