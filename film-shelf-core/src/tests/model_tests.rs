use super::*;

#[test]
fn query_state_derives_search_from_filename() {
    let state = QueryState::new("The.Matrix.1999.mkv");
    assert_eq!(state.filename(), "The.Matrix.1999.mkv");
    assert_eq!(state.search(), "The Matrix 1999");
    assert_eq!(state.page(), 1);
}

#[test]
fn next_page_keeps_search_and_filename() {
    let state = QueryState::with_search("a.mkv", "alien", 3);
    let next = state.next_page();
    assert_eq!(next.filename(), "a.mkv");
    assert_eq!(next.search(), "alien");
    assert_eq!(next.page(), 4);
}

#[test]
fn revised_resets_page() {
    let state = QueryState::with_search("a.mkv", "alien", 5);
    let revised = state.revised("aliens 1986");
    assert_eq!(revised.filename(), "a.mkv");
    assert_eq!(revised.search(), "aliens 1986");
    assert_eq!(revised.page(), 1);
}

#[test]
fn restarted_goes_back_to_filename_search() {
    let state = QueryState::new("Heat.1995.mkv").revised("something else").next_page();
    let restarted = state.restarted();
    assert_eq!(restarted.search(), "Heat 1995");
    assert_eq!(restarted.page(), 1);
}

#[test]
fn page_zero_is_clamped() {
    assert_eq!(QueryState::with_search("a.mkv", "a", 0).page(), 1);
}

#[test]
fn result_page_indexes_from_one() {
    let page = ResultPage::new(vec![
        Candidate::new("Alien", "1979"),
        Candidate::new("Aliens", "1986"),
    ]);
    assert_eq!(page.len(), 2);
    assert!(page.get(0).is_none());
    assert_eq!(page.get(1).map(|c| c.title.as_str()), Some("Alien"));
    assert_eq!(page.get(2).map(|c| c.title.as_str()), Some("Aliens"));
    assert!(page.get(3).is_none());
}

#[test]
fn error_page_has_no_candidates() {
    let page = ResultPage::error("Movie not found!");
    assert!(page.is_empty());
    assert_eq!(page.error.as_deref(), Some("Movie not found!"));
}

#[test]
fn candidate_display_includes_year_and_type() {
    let c = Candidate::new("The Matrix", "1999").with_media_type("movie");
    assert_eq!(c.to_string(), "The Matrix (1999) [movie]");
}

#[test]
fn candidate_display_shows_imdb_id_when_known() {
    let c = Candidate::new("The Matrix", "1999").with_imdb_id("tt0133093");
    assert_eq!(c.to_string(), "The Matrix (1999) [movie, tt0133093]");
}
