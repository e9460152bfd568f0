//! HTML main-content extraction
//!
//! Isolates the readable article text from a documentation page, discarding
//! scripts, styles and site boilerplate.

use regex::Regex;
use ::scraper::{ElementRef, Html, Selector};

/// Title substituted when the markup has no `<title>` element
pub const NO_TITLE_SENTINEL: &str = "No title found";

/// Content region selectors, tried in priority order. First match wins.
const REGION_SELECTORS: &[&str] = &["article.main-page-content", "main#content", "body"];

/// Containers whose text is site chrome, not article content
const BOILERPLATE_CLASSES: &[&str] = &["sidebar", "newsletter-container", "prevnext-container"];

/// Extracted page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
}

/// Extract title, description and main content from raw markup.
///
/// Never fails: malformed markup degrades through the selector chain down to
/// a plain tag-strip of the whole document. Output is deterministic for
/// identical input.
pub fn extract(markup: &str, max_chars: usize) -> ExtractedContent {
    // Script and style bodies must never leak into output, so they are
    // removed before the DOM parse and before the regex fallback alike.
    let stripped = strip_script_style(markup);
    let document = Html::parse_document(&stripped);

    let title = extract_title(&document);
    let description = extract_description(&document);

    let region_text = select_main_region(&document).unwrap_or_else(|| strip_tags(&stripped));
    let content = truncate_chars(&clean_text(&region_text), max_chars);

    ExtractedContent {
        title,
        description,
        content,
    }
}

/// Remove `<script>` and `<style>` regions, non-greedy and case-insensitive
fn strip_script_style(markup: &str) -> String {
    let re = Regex::new(r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>")
        .expect("Failed to compile script/style regex");
    re.replace_all(markup, " ").into_owned()
}

/// First `<title>` text, trimmed; sentinel when absent
fn extract_title(document: &Html) -> String {
    if let Ok(selector) = Selector::parse("title") {
        if let Some(element) = document.select(&selector).next() {
            return element.text().collect::<String>().trim().to_string();
        }
    }
    NO_TITLE_SENTINEL.to_string()
}

/// `meta[name="description"]` content attribute, if present and non-empty
fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Walk the region selectors and return the text of the first match.
///
/// This is a strict fallback chain, not a merge: an MDN article container
/// wins over `main#content`, which wins over `body`.
fn select_main_region(document: &Html) -> Option<String> {
    for selector_str in REGION_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                return Some(collect_text(element));
            }
        }
    }
    None
}

/// Collect text under an element, skipping boilerplate containers
fn collect_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text_into(element, &mut out);
    out
}

fn collect_text_into(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            if is_boilerplate(&child_el) {
                continue;
            }
            collect_text_into(child_el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        }
    }
}

fn is_boilerplate(element: &ElementRef) -> bool {
    element
        .value()
        .classes()
        .any(|class| BOILERPLATE_CLASSES.contains(&class))
}

/// Replace every remaining tag with a single space
fn strip_tags(markup: &str) -> String {
    let re = Regex::new(r"<[^>]*>").expect("Failed to compile tag regex");
    re.replace_all(markup, " ").into_owned()
}

/// Collapse runs of whitespace (including newlines) to single spaces
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Hard cut at `max_chars` characters. Not word-boundary aware: the cut
/// must be reproducible regardless of where words fall.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
