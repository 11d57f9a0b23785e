//! In-memory model of the report markdown.
//!
//! The document is parsed once into a tree of sections, mutated structurally
//! and rendered once. Section boundaries follow heading levels uniformly: an
//! industry (`####`) ends at the next heading of level 4 or above, a month
//! (`###`) at level 3 or above, and the latest-updates section (`##`) at the
//! next level 2 or 1 heading. Untouched documents render back byte-for-byte.

use tracing::debug;

use super::table::EntryTable;
use super::ReportEntry;
use crate::error::TrackerError;
use crate::utils::month_key;

pub const LATEST_HEADING: &str = "## 📊 最新动态";

/// Where a new entry ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Row inserted into the industry's existing table
    ExistingTable,
    /// Industry existed without a table; a table was appended
    NewTable,
    /// Month existed, industry subsection created at its end
    NewIndustry,
    /// Month section created at the end of the latest-updates section
    NewMonth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(String),
    Table(EntryTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustrySection {
    name: String,
    blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSection {
    month: String,
    intro: Vec<String>,
    industries: Vec<IndustrySection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestSection {
    intro: Vec<String>,
    months: Vec<MonthSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    head: Vec<String>,
    latest: Option<LatestSection>,
    tail: Vec<String>,
}

/// Heading level and title of an ATX heading line (`## title`).
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|title| (level, title))
}

/// Split `lines` into the lines before the first heading of `level` and the
/// sections opened by each heading of that level. Callers pass slices that
/// contain no heading above `level`.
fn split_at_level<'a>(lines: &[&'a str], level: usize) -> (Vec<String>, Vec<(String, Vec<&'a str>)>) {
    let mut intro = Vec::new();
    let mut sections: Vec<(String, Vec<&'a str>)> = Vec::new();
    for &line in lines {
        match heading(line) {
            Some((lv, title)) if lv == level => sections.push((title.to_string(), Vec::new())),
            _ => match sections.last_mut() {
                Some((_, body)) => body.push(line),
                None => intro.push(line.to_string()),
            },
        }
    }
    (intro, sections)
}

fn ensure_blank(lines: &mut Vec<String>) {
    if lines.last().map(String::as_str) != Some("") {
        lines.push(String::new());
    }
}

impl IndustrySection {
    fn parse(name: String, lines: &[&str]) -> Self {
        let mut blocks = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            if let Some((table, consumed)) = EntryTable::parse(&lines[i..]) {
                blocks.push(Block::Table(table));
                i += consumed;
            } else {
                blocks.push(Block::Text(lines[i].to_string()));
                i += 1;
            }
        }
        Self { name, blocks }
    }

    fn with_entry(entry: &ReportEntry) -> Self {
        Self {
            name: entry.industry.clone(),
            blocks: vec![
                Block::Text(String::new()),
                Block::Table(EntryTable::with_entry(entry)),
                Block::Text(String::new()),
            ],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First entry table of the subsection
    pub fn table(&self) -> Option<&EntryTable> {
        self.blocks.iter().find_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Text(_) => None,
        })
    }

    /// Insert the entry as the first row of the existing table, or append a
    /// new single-row table when the subsection has none.
    pub fn add_entry(&mut self, entry: &ReportEntry) -> Placement {
        let existing = self.blocks.iter_mut().find_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Text(_) => None,
        });
        if let Some(table) = existing {
            table.insert_first(entry);
            return Placement::ExistingTable;
        }

        self.ensure_trailing_blank();
        self.blocks.push(Block::Table(EntryTable::with_entry(entry)));
        self.blocks.push(Block::Text(String::new()));
        Placement::NewTable
    }

    fn ensure_trailing_blank(&mut self) {
        if !matches!(self.blocks.last(), Some(Block::Text(text)) if text.is_empty()) {
            self.blocks.push(Block::Text(String::new()));
        }
    }

    fn render_into(&self, out: &mut Vec<String>) {
        out.push(format!("#### {}", self.name));
        for block in &self.blocks {
            match block {
                Block::Text(text) => out.push(text.clone()),
                Block::Table(table) => table.render_into(out),
            }
        }
    }
}

impl MonthSection {
    fn parse(month: String, lines: &[&str]) -> Self {
        let (intro, sections) = split_at_level(lines, 4);
        let industries = sections
            .into_iter()
            .map(|(name, body)| IndustrySection::parse(name, &body))
            .collect();
        Self {
            month,
            intro,
            industries,
        }
    }

    fn with_entry(month: &str, entry: &ReportEntry) -> Self {
        Self {
            month: month.to_string(),
            intro: vec![String::new()],
            industries: vec![IndustrySection::with_entry(entry)],
        }
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn industries(&self) -> &[IndustrySection] {
        &self.industries
    }

    pub fn industry(&self, name: &str) -> Option<&IndustrySection> {
        self.industries.iter().find(|section| section.name == name)
    }

    fn push_industry(&mut self, industry: IndustrySection) {
        self.ensure_trailing_blank();
        self.industries.push(industry);
    }

    fn ensure_trailing_blank(&mut self) {
        match self.industries.last_mut() {
            Some(last) => last.ensure_trailing_blank(),
            None => ensure_blank(&mut self.intro),
        }
    }

    fn render_into(&self, out: &mut Vec<String>) {
        out.push(format!("### {}", self.month));
        out.extend(self.intro.iter().cloned());
        for industry in &self.industries {
            industry.render_into(out);
        }
    }
}

impl LatestSection {
    fn parse(lines: &[&str]) -> Self {
        let (intro, sections) = split_at_level(lines, 3);
        let months = sections
            .into_iter()
            .map(|(month, body)| MonthSection::parse(month, &body))
            .collect();
        Self { intro, months }
    }

    fn push_month(&mut self, month: MonthSection) {
        match self.months.last_mut() {
            Some(last) => last.ensure_trailing_blank(),
            None => ensure_blank(&mut self.intro),
        }
        self.months.push(month);
    }
}

impl ReportDocument {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();

        let Some(anchor) = lines.iter().position(|line| *line == LATEST_HEADING) else {
            return Self {
                head: lines.iter().map(|line| line.to_string()).collect(),
                latest: None,
                tail: Vec::new(),
            };
        };

        let body_start = anchor + 1;
        let end = lines[body_start..]
            .iter()
            .position(|line| matches!(heading(line), Some((level, _)) if level <= 2))
            .map(|offset| body_start + offset)
            .unwrap_or(lines.len());

        let latest = LatestSection::parse(&lines[body_start..end]);
        debug!("Parsed report with {} month sections", latest.months.len());

        Self {
            head: lines[..anchor].iter().map(|line| line.to_string()).collect(),
            latest: Some(latest),
            tail: lines[end..].iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn has_latest_section(&self) -> bool {
        self.latest.is_some()
    }

    pub fn months(&self) -> &[MonthSection] {
        self.latest
            .as_ref()
            .map(|latest| latest.months.as_slice())
            .unwrap_or(&[])
    }

    pub fn month(&self, month: &str) -> Option<&MonthSection> {
        self.months().iter().find(|section| section.month == month)
    }

    /// Place `entry` under its month and industry, creating whatever
    /// sections are missing.
    pub fn record(&mut self, entry: &ReportEntry) -> Result<Placement, TrackerError> {
        let latest = self.latest.as_mut().ok_or_else(|| {
            TrackerError::StructureError(format!("missing `{}` section", LATEST_HEADING))
        })?;
        let month = month_key(&entry.date);

        let placement = match latest.months.iter_mut().find(|section| section.month == month) {
            Some(section) => match section
                .industries
                .iter_mut()
                .find(|industry| industry.name == entry.industry)
            {
                Some(industry) => industry.add_entry(entry),
                None => {
                    section.push_industry(IndustrySection::with_entry(entry));
                    Placement::NewIndustry
                }
            },
            None => {
                latest.push_month(MonthSection::with_entry(month, entry));
                Placement::NewMonth
            }
        };
        debug!(
            "Placed entry for {} / {} as {:?}",
            month, entry.industry, placement
        );
        Ok(placement)
    }

    pub fn render(&self) -> String {
        let mut out: Vec<String> = self.head.clone();
        if let Some(latest) = &self.latest {
            out.push(LATEST_HEADING.to_string());
            out.extend(latest.intro.iter().cloned());
            for month in &latest.months {
                month.render_into(&mut out);
            }
        }
        out.extend(self.tail.iter().cloned());
        out.join("\n")
    }
}
