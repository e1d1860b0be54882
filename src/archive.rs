//! Past-answer archive
//!
//! Fetches a web page listing previous puzzle answers and extracts them. The
//! page is expected to carry a heading whose text is the configured needle,
//! followed by a `<ul>` or `<ol>` with one answer per `<li>`.

use crate::config::ArchiveConfig;
use crate::core::{HintError, Word};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Archive fetch and parse failures
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{tag:?} is not an element name")]
    InvalidTag { tag: String },

    #[error("no <{tag}> heading with text {needle:?}")]
    MissingHeading { tag: String, needle: String },

    #[error("no list found after the <{tag}> heading")]
    MissingList { tag: String },

    #[error("the list after the <{tag}> heading has no items")]
    EmptyList { tag: String },

    #[error("archive item {item:?} is not a puzzle word: {source}")]
    NotAWord { item: String, source: HintError },
}

/// Download the archive page and extract its answers
///
/// # Errors
/// `Http` for network failures and non-success status codes, otherwise any
/// error from [`parse_past_answers`].
pub fn fetch_past_answers(config: &ArchiveConfig) -> Result<Vec<Word>, ArchiveError> {
    let html = fetch_html(&config.url, config.timeout())?;
    let answers = parse_past_answers(&html, &config.tag, &config.needle)?;
    info!(url = %config.url, count = answers.len(), "fetched past answers");
    Ok(answers)
}

fn fetch_html(url: &str, timeout: Duration) -> Result<String, ArchiveError> {
    info!(%url, "fetching past answers");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    debug!(bytes = body.len(), "archive page downloaded");
    Ok(body)
}

/// Extract answers from archive HTML
///
/// Finds the first `<tag>` element whose text equals `needle` (whitespace
/// collapsed), then its next `<ul>`/`<ol>` sibling before any further `<tag>`,
/// and returns the text of each `<li>` in that list as a lowercase word in page
/// order. Items that only group a nested list (a month label, say) are
/// skipped in favour of the nested items.
///
/// # Errors
/// - `InvalidTag` if `tag` is not a valid element selector
/// - `MissingHeading` if no heading matches
/// - `MissingList` if no list follows it
/// - `EmptyList` if the list has no items
/// - `NotAWord` for an item that is not a five-letter word
///
/// # Examples
/// ```
/// use wordle_hints::archive::parse_past_answers;
///
/// let html = "<h2>All Wordle answers</h2><ul><li>CRANE</li><li>Slate</li></ul>";
/// let words = parse_past_answers(html, "h2", "All Wordle answers").unwrap();
/// assert_eq!(words[0].text(), "crane");
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_past_answers(
    html: &str,
    tag: &str,
    needle: &str,
) -> Result<Vec<Word>, ArchiveError> {
    let tag = tag.to_ascii_lowercase();
    let needle = collapse_whitespace(needle);
    let heading_selector =
        Selector::parse(&tag).map_err(|_| ArchiveError::InvalidTag { tag: tag.clone() })?;
    let document = Html::parse_document(html);

    let heading = document
        .select(&heading_selector)
        .find(|heading| text_of(*heading) == needle)
        .ok_or_else(|| ArchiveError::MissingHeading {
            tag: tag.clone(),
            needle: needle.clone(),
        })?;

    let list = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|sibling| !heading_selector.matches(sibling))
        .find(|sibling| is_list(*sibling))
        .ok_or_else(|| ArchiveError::MissingList { tag: tag.clone() })?;

    let items = list_items(list);
    if items.is_empty() {
        return Err(ArchiveError::EmptyList { tag });
    }
    debug!(items = items.len(), "archive list parsed");

    items
        .into_iter()
        .map(|item| match Word::parse(&item) {
            Ok(word) => Ok(word),
            Err(source) => Err(ArchiveError::NotAWord { item, source }),
        })
        .collect()
}

fn is_list(element: ElementRef<'_>) -> bool {
    matches!(element.value().name(), "ul" | "ol")
}

/// Texts of the `<li>` elements under `list` that do not wrap a nested list
fn list_items(list: ElementRef<'_>) -> Vec<String> {
    list.descendent_elements()
        .filter(|element| element.value().name() == "li")
        .filter(|item| !item.descendent_elements().any(is_list))
        .map(text_of)
        .collect()
}

fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
