//! The search/select/paginate cycle for a single file.
//!
//! ```text
//! QUERYING ──page──▶ PRESENTING ──k in 1..=N──▶ Confirmed
//!    ▲  │                │  │
//!    │  └─error─▶ revise │  └─0 / input closed──▶ Skipped
//!    │     │      search │
//!    └─────┴─────────────┘  (new text, next page, out-of-range number)
//! ```
//!
//! Every "try again" path loops back into QUERYING instead of recursing, so
//! an operator can correct the search as often as they like.

use film_shelf_core::{Candidate, MovieLookup, NamingRules, Operator, QueryState, ResultPage};

/// Message shown when the service answers with an empty, error-free page.
const NO_RESULTS: &str = "No results.";

/// How a file's disambiguation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the file alone.
    Skipped,
    /// Rename the file after this candidate.
    Confirmed(Candidate),
}

/// Meaning of an operator's answer to a presented page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// `0`
    Skip,
    /// The next-page token
    NextPage,
    /// A 1-based index into the page
    Select(usize),
    /// Anything else, including out-of-range numbers
    Search(String),
    /// Blank input: start over from the filename
    Restart,
}

/// Interpret raw operator input against a page of `page_len` candidates.
///
/// A number outside `1..=page_len` is not rejected; it becomes the new
/// search text, exactly like any other non-numeric input.
pub fn interpret_choice(input: &str, page_len: usize, rules: &NamingRules) -> Choice {
    let input = input.trim();
    if input.is_empty() {
        return Choice::Restart;
    }
    if rules.is_next_page(input) {
        return Choice::NextPage;
    }
    match input.parse::<i64>() {
        Ok(0) => Choice::Skip,
        Ok(n) if n >= 1 && n as u64 <= page_len as u64 => Choice::Select(n as usize),
        _ => Choice::Search(input.to_string()),
    }
}

enum Step {
    Querying(QueryState),
    Presenting(QueryState, ResultPage),
    Done(Resolution),
}

/// Disambiguate `filename`, starting from a search derived from its name.
pub fn disambiguate(
    filename: &str,
    lookup: &dyn MovieLookup,
    operator: &mut dyn Operator,
    rules: &NamingRules,
) -> Resolution {
    disambiguate_from(QueryState::new(filename), lookup, operator, rules)
}

/// Disambiguate starting from an explicit search string and page.
pub fn disambiguate_from(
    state: QueryState,
    lookup: &dyn MovieLookup,
    operator: &mut dyn Operator,
    rules: &NamingRules,
) -> Resolution {
    let mut step = Step::Querying(state);
    loop {
        step = match step {
            Step::Querying(state) => query(state, lookup, operator),
            Step::Presenting(state, page) => present(state, page, operator, rules),
            Step::Done(resolution) => return resolution,
        };
    }
}

fn query(state: QueryState, lookup: &dyn MovieLookup, operator: &mut dyn Operator) -> Step {
    log::debug!(
        "Searching {:?} (page {}) for {}",
        state.search(),
        state.page(),
        state.filename()
    );

    let message = match lookup.search(state.search(), state.page()) {
        Ok(page) if page.error.is_none() && !page.is_empty() => {
            return Step::Presenting(state, page);
        }
        Ok(page) => page.error.unwrap_or_else(|| NO_RESULTS.to_string()),
        Err(e) => {
            log::debug!("Lookup failed for {:?}: {}", state.search(), e);
            e.to_string()
        }
    };

    match operator.revise_search(&state, &message) {
        Some(terms) if !terms.trim().is_empty() => Step::Querying(state.revised(terms.trim())),
        _ => Step::Done(Resolution::Skipped),
    }
}

fn present(
    state: QueryState,
    page: ResultPage,
    operator: &mut dyn Operator,
    rules: &NamingRules,
) -> Step {
    let Some(input) = operator.choose(&state, &page) else {
        return Step::Done(Resolution::Skipped);
    };

    match interpret_choice(&input, page.len(), rules) {
        Choice::Skip => Step::Done(Resolution::Skipped),
        Choice::NextPage => Step::Querying(state.next_page()),
        Choice::Select(n) => match page.get(n) {
            Some(candidate) => Step::Done(Resolution::Confirmed(candidate.clone())),
            None => Step::Querying(state.revised(input.trim())),
        },
        Choice::Search(terms) => Step::Querying(state.revised(terms)),
        Choice::Restart => Step::Querying(state.restarted()),
    }
}
