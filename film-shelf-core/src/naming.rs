//! Filename-derived search strings and filesystem-safe destination names.

/// Characters that are illegal in Windows filenames. Each one is replaced
/// with a space when building folder and file names.
pub const DEFAULT_FORBIDDEN_CHARACTERS: &str = r#"<>/\:"|?*"#;

/// Poster value OMDb uses when it has no image for a title.
pub const DEFAULT_POSTER_SENTINEL: &str = "N/A";

/// Operator input that requests the next page of results.
pub const DEFAULT_NEXT_PAGE: &str = "n";

/// Extension used for downloaded artwork when the poster URL has none.
const FALLBACK_IMAGE_EXTENSION: &str = "jpg";

/// Rules for turning a chosen match into names on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    /// Characters replaced by a space in generated names.
    pub forbidden: String,
    /// Poster value meaning "no artwork exists".
    pub poster_sentinel: String,
    /// Input token that advances to the next result page.
    pub next_page: String,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            forbidden: DEFAULT_FORBIDDEN_CHARACTERS.to_string(),
            poster_sentinel: DEFAULT_POSTER_SENTINEL.to_string(),
            next_page: DEFAULT_NEXT_PAGE.to_string(),
        }
    }
}

impl NamingRules {
    pub fn with_next_page(mut self, token: impl Into<String>) -> Self {
        self.next_page = token.into();
        self
    }

    /// Clean a name using this rule set's forbidden characters.
    pub fn clean(&self, name: &str) -> String {
        clean_name(name, &self.forbidden)
    }

    /// Destination folder name: `"<Title> (<Year>)"`, cleaned.
    pub fn folder_name(&self, title: &str, year: &str) -> String {
        self.clean(&format!("{} ({})", title, year))
    }

    /// Destination file name: `"<cleaned Title>.<ext>"`, or just the cleaned
    /// title when the source file had no extension.
    pub fn file_name(&self, title: &str, extension: Option<&str>) -> String {
        let title = self.clean(title);
        match extension {
            Some(ext) => format!("{}.{}", title, ext),
            None => title,
        }
    }

    /// Returns the poster URL when it points at real artwork.
    ///
    /// `None` for a missing poster or the sentinel value.
    pub fn poster_url<'a>(&self, poster: Option<&'a str>) -> Option<&'a str> {
        poster.filter(|p| !p.is_empty() && *p != self.poster_sentinel)
    }

    /// Check whether `input` is the next-page token.
    pub fn is_next_page(&self, input: &str) -> bool {
        input.trim() == self.next_page
    }
}

/// Construct a search string from a filename.
///
/// Drops the extension (everything after the final `.`) and turns the
/// remaining dots into spaces. Nothing else is normalized, so release tags
/// and years stay in the query.
///
/// A name without any dot has no extension and is used whole.
pub fn construct_search(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };
    stem.replace('.', " ")
}

/// Replace every forbidden character with a space, then collapse runs of
/// spaces into one.
pub fn clean_name(name: &str, forbidden: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if forbidden.contains(c) { ' ' } else { c };
        if c == ' ' && cleaned.ends_with(' ') {
            continue;
        }
        cleaned.push(c);
    }
    cleaned
}

/// Text after the final `.` of a filename, if there is any.
pub fn file_extension(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Image extension for a poster URL, taken from the last path segment.
///
/// Query strings and fragments are ignored. Falls back to `jpg` when the
/// segment has no extension.
pub fn poster_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    file_extension(segment).unwrap_or(FALLBACK_IMAGE_EXTENSION)
}

/// File name the artwork is saved under: `folder.<ext>`.
pub fn poster_file_name(url: &str) -> String {
    format!("folder.{}", poster_extension(url))
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
