use leads_core::messages::{NO_RESULTS_ROW, SERVER_FAILURE_ROW};
use leads_core::record::{or_dash, PLACEHOLDER_DASH};
use leads_core::SearchRecord;
use maud::{html, Markup, Render, DOCTYPE};

/// Number of visible columns; placeholder rows span all of them.
pub const TABLE_COLUMNS: usize = 5;

pub const TABLE_HEADERS: [&str; TABLE_COLUMNS] =
    ["Nome", "Telefone", "Categorias", "Endereço", "Website"];

/// Table body for a record set. Renders one `<tr>` per record, or the single
/// "no results" row when the set is empty.
pub struct ResultsTable<'a> {
    records: &'a [SearchRecord],
}

impl<'a> ResultsTable<'a> {
    #[must_use]
    pub fn new(records: &'a [SearchRecord]) -> Self {
        Self { records }
    }
}

impl Render for ResultsTable<'_> {
    fn render(&self) -> Markup {
        if self.records.is_empty() {
            return notice_row(NO_RESULTS_ROW, None);
        }
        html! {
            @for record in self.records {
                (RecordRow(record))
            }
        }
    }
}

struct RecordRow<'a>(&'a SearchRecord);

impl Render for RecordRow<'_> {
    fn render(&self) -> Markup {
        let record = self.0;
        html! {
            tr {
                td { (or_dash(record.name.as_deref())) }
                td { (or_dash(record.phone.as_deref())) }
                td { (or_dash(record.categories_opt())) }
                td { (or_dash(record.address.as_deref())) }
                td {
                    @if let (Some(href), Some(raw)) = (record.website_href(), record.website.as_deref()) {
                        a href=(href) target="_blank" rel="noopener noreferrer" { (raw) }
                    } @else {
                        (PLACEHOLDER_DASH)
                    }
                }
            }
        }
    }
}

fn notice_row(message: &str, color: Option<&str>) -> Markup {
    let style = match color {
        Some(color) => format!("text-align: center; padding: 2rem; color: {color};"),
        None => "text-align: center; padding: 2rem;".to_owned(),
    };
    html! {
        tr {
            td colspan=(TABLE_COLUMNS) style=(style) { (message) }
        }
    }
}

/// Table body for `records`.
#[must_use]
pub fn render_results(records: &[SearchRecord]) -> Markup {
    ResultsTable::new(records).render()
}

/// Inline row shown in place of results when the webhook call failed.
#[must_use]
pub fn render_error_row() -> Markup {
    notice_row(SERVER_FAILURE_ROW, Some("#ef4444"))
}

/// Standalone HTML page around a rendered table body, for saving to disk.
#[must_use]
pub fn render_document(term: &str, status: &str, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { "Busca de leads: " (term) }
            }
            body {
                p id="search-status" { (status) }
                table {
                    thead {
                        tr {
                            @for header in TABLE_HEADERS {
                                th { (header) }
                            }
                        }
                    }
                    tbody id="results-table-body" { (body) }
                }
            }
        }
    }
}
