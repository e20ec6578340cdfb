use serde::{Deserialize, Serialize};

pub mod error;
pub mod naming;

pub use error::LookupError;
pub use naming::{
    DEFAULT_FORBIDDEN_CHARACTERS, DEFAULT_NEXT_PAGE, DEFAULT_POSTER_SENTINEL, NamingRules,
    clean_name, construct_search, file_extension, poster_extension, poster_file_name,
};

/// A metadata record returned by the lookup service for one query.
///
/// Candidates only live for one disambiguation round and are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Movie or series title as the service spells it
    pub title: String,

    /// Release year. Usually four digits, but series come back as ranges
    /// (e.g., "2005–2013"), so it stays text.
    pub year: String,

    /// Media type (e.g., "movie", "series", "episode")
    pub media_type: String,

    /// Poster URL, or the service's "not available" sentinel
    pub poster: Option<String>,

    /// Service-side identifier (e.g., "tt0133093")
    pub imdb_id: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            media_type: "movie".to_string(),
            ..Default::default()
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_imdb_id(mut self, id: impl Into<String>) -> Self {
        self.imdb_id = Some(id.into());
        self
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}", self.title, self.year, self.media_type)?;
        if let Some(id) = &self.imdb_id {
            write!(f, ", {}", id)?;
        }
        write!(f, "]")
    }
}

/// The context threaded through one file's disambiguation.
///
/// The filename is fixed at construction; only the search string and page
/// change from round to round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    filename: String,
    search: String,
    page: u32,
}

impl QueryState {
    /// Start from a filename: search derived from the name, page 1.
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let search = construct_search(&filename);
        Self {
            filename,
            search,
            page: 1,
        }
    }

    /// Start with an explicit search string and page. Page 0 is treated as 1.
    pub fn with_search(filename: impl Into<String>, search: impl Into<String>, page: u32) -> Self {
        Self {
            filename: filename.into(),
            search: search.into(),
            page: page.max(1),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Same search, next page.
    pub fn next_page(&self) -> Self {
        Self {
            filename: self.filename.clone(),
            search: self.search.clone(),
            page: self.page + 1,
        }
    }

    /// New search text, back to page 1.
    pub fn revised(&self, search: impl Into<String>) -> Self {
        Self {
            filename: self.filename.clone(),
            search: search.into(),
            page: 1,
        }
    }

    /// Search re-derived from the filename, back to page 1.
    pub fn restarted(&self) -> Self {
        Self::new(self.filename.clone())
    }
}

/// Candidates returned for one (search, page) request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPage {
    /// Candidates in service order
    pub candidates: Vec<Candidate>,

    /// Service-reported error (no matches, malformed query, ...)
    pub error: Option<String>,

    /// Total number of matches across all pages, when the service says
    pub total_results: Option<u32>,
}

impl ResultPage {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    /// A page carrying only a service error.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            error: Some(msg.into()),
            ..Default::default()
        }
    }

    pub fn with_total_results(mut self, total: u32) -> Self {
        self.total_results = Some(total);
        self
    }

    /// Look up a candidate by its 1-based display index.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        index.checked_sub(1).and_then(|i| self.candidates.get(i))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Searches a movie metadata service.
///
/// Implementors return `Ok` with [`ResultPage::error`] set when the service
/// answered but found nothing, and `Err` only when the call itself failed.
pub trait MovieLookup {
    fn search(&self, search: &str, page: u32) -> Result<ResultPage, LookupError>;
}

/// Downloads poster artwork.
pub trait PosterSource {
    /// Fetch the raw image bytes behind `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LookupError>;
}

/// The person answering prompts during disambiguation.
///
/// Both methods return `None` when no more input can be read (e.g., stdin
/// closed); callers treat that as a skip.
pub trait Operator {
    /// Present `page` for `state` and return the raw answer.
    fn choose(&mut self, state: &QueryState, page: &ResultPage) -> Option<String>;

    /// Report `message` for `state` and ask for replacement search terms.
    /// An empty answer skips the file.
    fn revise_search(&mut self, state: &QueryState, message: &str) -> Option<String>;
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
