//! The display surface the search controller drives.

use std::path::PathBuf;

use leads_report::ReportError;
use maud::{Markup, PreEscaped};

/// Everything the controller needs from a front-end.
///
/// Implementations only display state; they never decide it. The controller
/// owns the record set and calls these in a fixed order per transition.
pub(crate) trait SearchView {
    fn set_status(&mut self, status: &str);

    /// Busy disables the trigger and swaps its label for the busy indicator.
    fn set_busy(&mut self, busy: bool);

    /// Replaces the table body. An empty markup clears it.
    fn set_table(&mut self, body: Markup);

    fn set_results_visible(&mut self, visible: bool);

    fn set_export_enabled(&mut self, enabled: bool);

    /// Blocking notice the user has to acknowledge.
    fn notify(&mut self, message: &str);

    /// Hands a generated file to the user.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be delivered.
    fn deliver_download(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ReportError>;
}

/// Terminal front-end: status and notices go to the console, the table body
/// is kept for `--html`, downloads land in the output directory.
pub(crate) struct TerminalView {
    output_dir: PathBuf,
    status: String,
    table: Markup,
    busy: bool,
    results_visible: bool,
    export_enabled: bool,
    last_download: Option<PathBuf>,
}

impl TerminalView {
    pub(crate) fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            status: String::new(),
            table: PreEscaped(String::new()),
            busy: false,
            results_visible: false,
            export_enabled: false,
            last_download: None,
        }
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn table(&self) -> &Markup {
        &self.table
    }

    pub(crate) fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub(crate) fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    #[cfg(test)]
    pub(crate) fn last_download(&self) -> Option<&PathBuf> {
        self.last_download.as_ref()
    }
}

impl SearchView for TerminalView {
    fn set_status(&mut self, status: &str) {
        if self.status != status {
            println!("{status}");
            status.clone_into(&mut self.status);
        }
    }

    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            eprintln!("⏳ buscando...");
        }
        self.busy = busy;
    }

    fn set_table(&mut self, body: Markup) {
        self.table = body;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    fn notify(&mut self, message: &str) {
        eprintln!("⚠ {message}");
    }

    fn deliver_download(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ReportError> {
        let path = leads_report::write_workbook(&self.output_dir, filename, bytes)?;
        println!("Arquivo salvo em {}", path.display());
        self.last_download = Some(path);
        Ok(())
    }
}
