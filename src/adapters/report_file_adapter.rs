//! Plain text diff report adapter: one `<symbol> <value>` line per entry.

use std::fs;
use std::path::PathBuf;

use crate::domain::error::ReconError;
use crate::domain::ledger::PositionLedger;
use crate::ports::report_port::ReportPort;

pub struct ReportFileAdapter {
    path: PathBuf,
}

impl ReportFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Formats a ledger as report lines in its own iteration order.
    pub fn format(ledger: &PositionLedger) -> String {
        let mut out = String::new();
        for (symbol, value) in ledger.iter() {
            out.push_str(&format!("{symbol} {value}\n"));
        }
        out
    }
}

impl ReportPort for ReportFileAdapter {
    /// Overwrites any existing file at the target path.
    fn write(&self, diff: &PositionLedger) -> Result<(), ReconError> {
        fs::write(&self.path, Self::format(diff))?;
        Ok(())
    }
}
