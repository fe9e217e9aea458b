//! HTML parsing for guest search result pages and job posting pages.

use scraper::{ElementRef, Html, Selector};

use crate::types::JobPosting;

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(card: ElementRef<'_>, css: &str) -> Option<String> {
    let sel = selector(css)?;
    card.select(&sel)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

/// Extract the numeric job id from a posting URL.
///
/// Handles both `/jobs/view/<id>` and slug URLs ending in `-<id>`.
pub fn job_id_from_url(url: &str) -> Option<String> {
    let id = if let Some((_, tail)) = url.rsplit_once("view/") {
        tail
    } else if let Some((_, tail)) = url.rsplit_once('-') {
        tail
    } else {
        return None;
    };

    let id = id.trim_end_matches('/');
    (!id.is_empty()).then(|| id.to_string())
}

fn parse_card(card: ElementRef<'_>) -> Option<JobPosting> {
    let title = first_text(card, "h3.base-search-card__title")?;

    let link_sel = selector("a.base-card__full-link")?;
    let href = card.select(&link_sel).next()?.value().attr("href")?;
    let url = href.split('?').next().unwrap_or_default().to_string();
    let id = job_id_from_url(&url)?;

    let posted = selector("time")
        .and_then(|sel| card.select(&sel).next())
        .and_then(|el| el.value().attr("datetime"))
        .unwrap_or_default()
        .to_string();

    Some(JobPosting {
        id,
        title,
        company: first_text(card, "h4.base-search-card__subtitle")
            .unwrap_or_else(|| "Unknown".to_string()),
        location: first_text(card, "span.job-search-card__location")
            .unwrap_or_else(|| "Unknown".to_string()),
        url,
        posted,
        description: String::new(),
    })
}

/// Number of `div.base-card` elements on a page, parsed or not.
pub fn count_cards(html: &str) -> usize {
    let document = Html::parse_document(html);
    match selector("div.base-card") {
        Some(sel) => document.select(&sel).count(),
        None => 0,
    }
}

/// Parse every usable job card out of a search results page.
///
/// Cards missing a title, a link, or an id in the link are dropped.
pub fn parse_search_results(html: &str) -> Vec<JobPosting> {
    let document = Html::parse_document(html);
    let Some(card_sel) = selector("div.base-card") else {
        return vec![];
    };

    document.select(&card_sel).filter_map(parse_card).collect()
}

/// Pull the plain-text description out of a job posting page.
pub fn parse_description(html: &str) -> String {
    let document = Html::parse_document(html);

    ["div.description__text", "div.show-more-less-html__markup"]
        .iter()
        .filter_map(|css| selector(css))
        .find_map(|sel| document.select(&sel).next().map(element_text))
        .unwrap_or_default()
}
