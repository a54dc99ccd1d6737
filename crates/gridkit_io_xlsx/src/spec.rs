//! Worksheet materialization report.

/// Per-worksheet materialization report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Cells written outside merged regions.
    pub n_cells_written: usize,
    /// Merged ranges emitted.
    pub n_merges_written: usize,
    /// Conditional formats emitted.
    pub n_highlight_rules_written: usize,
    /// Worksheet tables emitted.
    pub n_tables_written: usize,
    /// Column widths set.
    pub n_col_widths_written: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}
