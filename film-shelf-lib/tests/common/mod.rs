#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use film_shelf_lib::{
    Candidate, LookupError, MovieLookup, Operator, PosterSource, QueryState, ResultPage,
};

/// Lookup that answers from a fixed table and records every request.
/// Requests not in the table get OMDb's "Movie not found!" error.
#[derive(Default)]
pub struct MockLookup {
    pages: HashMap<(String, u32), Result<ResultPage, String>>,
    pub calls: RefCell<Vec<(String, u32)>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, search: &str, page: u32, result: ResultPage) -> Self {
        self.pages.insert((search.to_string(), page), Ok(result));
        self
    }

    pub fn with_failure(mut self, search: &str, page: u32, msg: &str) -> Self {
        self.pages
            .insert((search.to_string(), page), Err(msg.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.borrow().clone()
    }
}

impl MovieLookup for MockLookup {
    fn search(&self, search: &str, page: u32) -> Result<ResultPage, LookupError> {
        self.calls.borrow_mut().push((search.to_string(), page));
        match self.pages.get(&(search.to_string(), page)) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(msg)) => Err(LookupError::http(msg.clone())),
            None => Ok(ResultPage::error("Movie not found!")),
        }
    }
}

/// Poster source returning canned bytes (or a canned failure).
pub struct MockPosters {
    result: Result<Vec<u8>, String>,
    pub fetched: RefCell<Vec<String>>,
}

impl MockPosters {
    pub fn serving(bytes: &[u8]) -> Self {
        Self {
            result: Ok(bytes.to_vec()),
            fetched: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(msg.to_string()),
            fetched: RefCell::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl PosterSource for MockPosters {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        self.fetched.borrow_mut().push(url.to_string());
        self.result.clone().map_err(LookupError::http)
    }
}

/// Operator answering from a script; runs dry like a closed stdin.
#[derive(Default)]
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    /// (state, number of candidates shown) for each page presented
    pub presented: Vec<(QueryState, usize)>,
    /// (state, message) for each revise prompt
    pub revisions: Vec<(QueryState, String)>,
}

impl ScriptedOperator {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Operator for ScriptedOperator {
    fn choose(&mut self, state: &QueryState, page: &ResultPage) -> Option<String> {
        self.presented.push((state.clone(), page.len()));
        self.answers.pop_front()
    }

    fn revise_search(&mut self, state: &QueryState, message: &str) -> Option<String> {
        self.revisions.push((state.clone(), message.to_string()));
        self.answers.pop_front()
    }
}

pub fn matrix() -> Candidate {
    Candidate::new("The Matrix", "1999")
        .with_poster("http://x/p.jpg")
        .with_imdb_id("tt0133093")
}

pub fn page_of(candidates: Vec<Candidate>) -> ResultPage {
    ResultPage::new(candidates)
}

/// Every path under `root`, relative and sorted, for before/after snapshots.
pub fn snapshot(root: &std::path::Path) -> Vec<String> {
    fn walk(dir: &std::path::Path, root: &std::path::Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap().flatten() {
            let path = entry.path();
            out.push(path.strip_prefix(root).unwrap().display().to_string());
            if path.is_dir() {
                walk(&path, root, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
