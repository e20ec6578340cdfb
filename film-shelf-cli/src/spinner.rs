//! Spinners shown while the program waits on the network.
//!
//! Lookups and poster downloads block, so the wrapped service shows a
//! spinner for the duration of each call and clears it before any prompt.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use film_shelf_core::{LookupError, MovieLookup, PosterSource, ResultPage};

/// Create a ticking spinner, or a hidden one when `quiet` is set.
pub(crate) fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Wraps a lookup service so each call shows a spinner.
pub(crate) struct Spinning<'a, S: ?Sized> {
    inner: &'a S,
    quiet: bool,
}

impl<'a, S: ?Sized> Spinning<'a, S> {
    pub(crate) fn new(inner: &'a S, quiet: bool) -> Self {
        Self { inner, quiet }
    }
}

impl<S: MovieLookup + ?Sized> MovieLookup for Spinning<'_, S> {
    fn search(&self, search: &str, page: u32) -> Result<ResultPage, LookupError> {
        let pb = spinner(self.quiet, format!("Searching \"{}\" (page {})", search, page));
        let result = self.inner.search(search, page);
        pb.finish_and_clear();
        result
    }
}

impl<S: PosterSource + ?Sized> PosterSource for Spinning<'_, S> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        let pb = spinner(self.quiet, "Downloading poster".to_string());
        let result = self.inner.fetch(url);
        pb.finish_and_clear();
        result
    }
}
