use serde::Deserialize;

use film_shelf_core::{Candidate, ResultPage};

/// Top-level response from an OMDb `?s=` search.
///
/// A successful search carries `Search` and `totalResults`; a failed one
/// carries `Response: "False"` and an `Error` message.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchEntry>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// One search hit.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct SearchEntry {
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(default)]
    pub poster: Option<String>,
}

impl From<SearchEntry> for Candidate {
    fn from(entry: SearchEntry) -> Self {
        Candidate {
            title: entry.title,
            year: entry.year,
            media_type: entry.media_type,
            poster: entry.poster,
            imdb_id: entry.imdb_id,
        }
    }
}

impl SearchResponse {
    /// Whether OMDb flagged the response as failed.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
            || self
                .response
                .as_deref()
                .is_some_and(|r| r.eq_ignore_ascii_case("false"))
    }

    pub fn into_result_page(self) -> ResultPage {
        if self.is_failure() {
            return ResultPage::error(
                self.error
                    .unwrap_or_else(|| "Unknown error from OMDb".to_string()),
            );
        }
        let total = self.total_results.as_deref().and_then(|t| t.parse().ok());
        let page = ResultPage::new(self.search.into_iter().map(Candidate::from).collect());
        match total {
            Some(t) => page.with_total_results(t),
            None => page,
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
