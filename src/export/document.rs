use std::io::Write;

use log::debug;

use crate::export::format_timestamp;
use crate::history::HistoryRecord;

const DEFAULT_LINES_PER_PAGE: usize = 40;

/// One line per record: `date range (2025-08-30 09:15:00): 25 work days`.
pub const DEFAULT_LINE_TEMPLATE: &str = "{kind} ({timestamp}): {summary}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    lines_per_page: usize,
    line_template: String,
}

impl DocumentOptions {
    /// Overrides the page size. A page holds at least one line, smaller
    /// values are clamped.
    #[must_use]
    pub fn with_lines_per_page(mut self, lines_per_page: usize) -> Self {
        self.lines_per_page = lines_per_page.max(1);
        self
    }

    /// Overrides the line template. The template may refer to `{kind}`,
    /// `{timestamp}` and `{summary}`.
    #[must_use]
    pub fn with_line_template(mut self, template: impl Into<String>) -> Self {
        self.line_template = template.into();
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            line_template: DEFAULT_LINE_TEMPLATE.to_string(),
        }
    }
}

/// Writes the records as a paginated text document.
///
/// Every page starts with a `Page N` heading, pages are separated by a
/// form feed.
pub fn write_document<W: Write>(
    records: &[HistoryRecord],
    options: &DocumentOptions,
    mut writer: W,
) -> anyhow::Result<()> {
    debug!(
        "writing {} records as a document with {} lines per page",
        records.len(),
        options.lines_per_page
    );

    for (number, page) in records.chunks(options.lines_per_page).enumerate() {
        if number > 0 {
            writeln!(writer, "\u{c}")?;
        }

        writeln!(writer, "Page {}", number + 1)?;
        writeln!(writer)?;

        for record in page {
            let line = formatx::formatx!(
                options.line_template.clone(),
                kind = record.kind(),
                timestamp = format_timestamp(record.timestamp()),
                summary = record.summary()
            )
            .map_err(|error| anyhow::anyhow!("invalid line template: {}", error))?;

            writeln!(writer, "{}", line)?;
        }
    }

    Ok(())
}
