use std::io::Cursor;

use film_shelf_core::{Candidate, Operator, QueryState, ResultPage};

use super::ConsoleOperator;

fn operator(input: &str) -> ConsoleOperator<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleOperator::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), "n")
}

fn page() -> ResultPage {
    ResultPage::new(vec![
        Candidate::new("The Matrix", "1999"),
        Candidate::new("The Matrix Reloaded", "2003"),
    ])
}

#[test]
fn choose_lists_candidates_and_reads_answer() {
    let mut op = operator("2\n");
    let state = QueryState::new("The.Matrix.1999.mkv");

    let answer = op.choose(&state, &page());

    assert_eq!(answer.as_deref(), Some("2"));
    let shown = String::from_utf8(op.into_output()).unwrap();
    assert!(shown.contains("Choose entry for"));
    assert!(shown.contains("The.Matrix.1999.mkv"));
    assert!(shown.contains("  0: Skip this file"));
    assert!(shown.contains("  1: The Matrix (1999) [movie]"));
    assert!(shown.contains("  2: The Matrix Reloaded (2003) [movie]"));
    assert!(shown.contains("  n: Next page of results"));
}

#[test]
fn answers_keep_inner_text_and_drop_line_endings() {
    let mut op = operator("blade runner\r\n\n");
    let state = QueryState::new("x.mkv");

    assert_eq!(op.choose(&state, &page()).as_deref(), Some("blade runner"));
    assert_eq!(op.choose(&state, &page()).as_deref(), Some(""));
}

#[test]
fn closed_input_returns_none() {
    let mut op = operator("");
    let state = QueryState::new("x.mkv");

    assert_eq!(op.choose(&state, &page()), None);
    assert_eq!(op.revise_search(&state, "Movie not found!"), None);
}

#[test]
fn revise_prompt_shows_error() {
    let mut op = operator("heat\n");
    let state = QueryState::new("Heat.1995.mkv");

    assert_eq!(
        op.revise_search(&state, "Movie not found!").as_deref(),
        Some("heat")
    );
    let shown = String::from_utf8(op.into_output()).unwrap();
    assert!(shown.contains("Heat.1995.mkv"));
    assert!(shown.contains("Movie not found!"));
    assert!(shown.contains("leave blank to skip"));
}

#[test]
fn candidate_lines_show_imdb_id() {
    let mut op = operator("1\n");
    let page = ResultPage::new(vec![
        Candidate::new("The Matrix", "1999").with_imdb_id("tt0133093"),
    ]);

    op.choose(&QueryState::new("m.mkv"), &page);

    let shown = String::from_utf8(op.into_output()).unwrap();
    assert!(shown.contains("  1: The Matrix (1999) [movie, tt0133093]"));
}
