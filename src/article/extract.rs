//! Generic title and paragraph extraction from article HTML.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Title used when the page has neither `<h1>` nor `<title>`
pub const UNKNOWN_TITLE: &str = "未知标题";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub content: String,
}

/// Best-effort generic extraction: first `<h1>`, then `<title>`, for the title;
/// every non-empty `<p>` joined by newlines for the body.
pub fn extract_article(html: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);

    let title = first_text(&document, "h1")
        .or_else(|| first_text(&document, "title"))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let paragraphs: Vec<String> = match Selector::parse("p") {
        Ok(sel) => document
            .select(&sel)
            .map(|node| element_text(&node))
            .filter(|text| !text.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    };
    debug!("Extracted {} paragraphs, title {:?}", paragraphs.len(), title);

    ExtractedArticle {
        title,
        content: paragraphs.join("\n"),
    }
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    let sel = Selector::parse(css).ok()?;
    document.select(&sel).next().map(|node| element_text(&node))
}

fn element_text(node: &ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}
