use serde::{Deserialize, Serialize};

/// Jobs returned per guest search page.
pub const PAGE_SIZE: usize = 25;

/// What to search for on the guest job search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub country: String,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(keywords: Vec<String>, country: impl Into<String>) -> Self {
        Self {
            keywords,
            country: country.into(),
            max_results: 30,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A single job card scraped from a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub posted: String,
    #[serde(default)]
    pub description: String,
}

/// LinkedIn geoId for the countries we know about, keyed by lowercase name.
pub fn geo_id(country: &str) -> Option<&'static str> {
    let id = match country.trim().to_lowercase().as_str() {
        "canada" => "101174742",
        "united states" => "103644278",
        "united kingdom" => "101165590",
        "australia" => "101452733",
        "germany" => "101282230",
        "france" => "105015875",
        "india" => "102713980",
        "china" => "102890883",
        "japan" => "101355337",
        "singapore" => "102454443",
        _ => return None,
    };
    Some(id)
}
