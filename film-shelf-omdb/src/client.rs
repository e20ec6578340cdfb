use std::time::Duration;

use film_shelf_core::{LookupError, MovieLookup, PosterSource, ResultPage};

use crate::config::OmdbConfig;
use crate::error::OmdbError;
use crate::types::SearchResponse;

/// How much of an unparseable body to echo back in error messages.
const BODY_PREVIEW_CHARS: usize = 200;

/// Blocking HTTP client for the OMDb search API and poster downloads.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("film-shelf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Run one title search. OMDb pages hold up to ten hits.
    pub fn search_page(&self, search: &str, page: u32) -> Result<ResultPage, OmdbError> {
        let params = self.search_params(search, page);
        log::debug!("OMDb search {:?} page {}", search, page);

        let resp = self.http.get(&self.endpoint).query(&params).send()?;
        let status = resp.status();
        let text = resp.text()?;

        // OMDb reports most problems (bad key, no results) as JSON with an
        // Error field, sometimes alongside a 401. Prefer that message.
        match serde_json::from_str::<SearchResponse>(&text) {
            Ok(response) if status.is_success() || response.is_failure() => {
                Ok(response.into_result_page())
            }
            Ok(_) => Err(OmdbError::ServerError {
                status: status.as_u16(),
                message: preview(&text),
            }),
            Err(_) if !status.is_success() => Err(OmdbError::ServerError {
                status: status.as_u16(),
                message: preview(&text),
            }),
            Err(e) => Err(OmdbError::Api(format!(
                "Failed to parse search results: {e}. Response: {}",
                preview(&text)
            ))),
        }
    }

    /// Download a poster image.
    pub fn download_poster(&self, url: &str) -> Result<Vec<u8>, OmdbError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OmdbError::ServerError {
                status: status.as_u16(),
                message: format!("poster download from {url} failed"),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }

    fn search_params(&self, search: &str, page: u32) -> Vec<(&'static str, String)> {
        search_params(search, page, self.api_key.as_deref())
    }
}

impl MovieLookup for OmdbClient {
    fn search(&self, search: &str, page: u32) -> Result<ResultPage, LookupError> {
        Ok(self.search_page(search, page)?)
    }
}

impl PosterSource for OmdbClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        Ok(self.download_poster(url)?)
    }
}

/// Query parameters for a search request.
fn search_params(search: &str, page: u32, api_key: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("s", search.to_string()), ("page", page.to_string())];
    if let Some(key) = api_key {
        params.push(("apikey", key.to_string()));
    }
    params
}

fn preview(text: &str) -> String {
    text.chars().take(BODY_PREVIEW_CHARS).collect()
}
