//! Entry tables inside industry subsections.

use super::ReportEntry;

/// Header row that identifies an entry table. Matched as a literal substring.
pub const TABLE_HEADER: &str = "| 日期 | 冲击类型 | 摘要 | 来源 |";
pub const TABLE_SEPARATOR: &str = "|------|----------|------|------|";

/// A table of entries: header line, separator line and data rows, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTable {
    header: String,
    separator: Option<String>,
    rows: Vec<String>,
}

impl EntryTable {
    /// Fresh table holding a single row.
    pub fn with_entry(entry: &ReportEntry) -> Self {
        Self {
            header: TABLE_HEADER.to_string(),
            separator: Some(TABLE_SEPARATOR.to_string()),
            rows: vec![entry.to_row()],
        }
    }

    pub fn is_header(line: &str) -> bool {
        line.contains(TABLE_HEADER)
    }

    /// Parse a table starting at `lines[0]`, which must be a header line.
    /// Returns the table and the number of lines consumed.
    pub(crate) fn parse(lines: &[&str]) -> Option<(Self, usize)> {
        let header = lines.first()?;
        if !Self::is_header(header) {
            return None;
        }
        let separator = lines.get(1).map(|line| line.to_string());
        let mut consumed = 1 + usize::from(separator.is_some());
        let rows: Vec<String> = lines[consumed..]
            .iter()
            .take_while(|line| line.starts_with('|'))
            .map(|line| line.to_string())
            .collect();
        consumed += rows.len();
        Some((
            Self {
                header: header.to_string(),
                separator,
                rows,
            },
            consumed,
        ))
    }

    /// Insert a row directly below the header/separator pair.
    pub fn insert_first(&mut self, entry: &ReportEntry) {
        self.rows.insert(0, entry.to_row());
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub(crate) fn render_into(&self, out: &mut Vec<String>) {
        out.push(self.header.clone());
        if let Some(sep) = &self.separator {
            out.push(sep.clone());
        }
        out.extend(self.rows.iter().cloned());
    }
}
