//! Default report layout and the "last updated" footer.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use super::document::LATEST_HEADING;
use super::table::{TABLE_HEADER, TABLE_SEPARATOR};
use super::ReportEntry;
use crate::utils::{format_timestamp, month_key};

const REPORT_TITLE: &str = "# AI 行业冲击监测";
const REPORT_TAGLINE: &str = "> 自动追踪 AI 技术对各行各业的冲击与变革";
const CATEGORY_HEADING: &str = "## 📁 按行业分类";
const FOOTER_PREFIX: &str = "*本仓库由 AI 自动维护，最后更新时间: ";

/// Placeholder industry categories listed in a fresh report
pub const INDUSTRY_CATEGORIES: [&str; 8] = [
    "💻 科技与互联网",
    "🏥 医疗健康",
    "🎓 教育培训",
    "🏦 金融服务",
    "🎨 内容创作",
    "🏭 制造业",
    "🛒 零售电商",
    "⚖️ 法律服务",
];

static FOOTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*本仓库由 AI 自动维护，最后更新时间:.*\*").expect("valid footer regex"));

pub fn footer_line(now: NaiveDateTime) -> String {
    format!("{}{}*", FOOTER_PREFIX, format_timestamp(now))
}

/// Full report for a first entry.
pub fn scaffold(entry: &ReportEntry, now: NaiveDateTime) -> String {
    let mut lines: Vec<String> = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        REPORT_TAGLINE.to_string(),
        String::new(),
        LATEST_HEADING.to_string(),
        String::new(),
        format!("### {}", month_key(&entry.date)),
        String::new(),
        format!("#### {}", entry.industry),
        String::new(),
        TABLE_HEADER.to_string(),
        TABLE_SEPARATOR.to_string(),
        entry.to_row(),
        String::new(),
        CATEGORY_HEADING.to_string(),
        String::new(),
    ];
    for category in INDUSTRY_CATEGORIES {
        lines.push(format!("### {}", category));
        lines.push("...".to_string());
        lines.push(String::new());
    }
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(footer_line(now));
    lines.push(String::new());
    lines.join("\n")
}

/// Rewrite every "last updated" footer with `now`.
pub fn refresh_footer(text: &str, now: NaiveDateTime) -> String {
    let footer = footer_line(now);
    FOOTER_RE.replace_all(text, NoExpand(&footer)).into_owned()
}
