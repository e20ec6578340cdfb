use super::*;

const MATRIX_SEARCH: &str = r#"{
    "Search": [
        {
            "Title": "The Matrix",
            "Year": "1999",
            "imdbID": "tt0133093",
            "Type": "movie",
            "Poster": "https://m.media-amazon.com/images/M/MV5B._V1_SX300.jpg"
        },
        {
            "Title": "The Matrix Reloaded",
            "Year": "2003",
            "imdbID": "tt0234215",
            "Type": "movie",
            "Poster": "N/A"
        }
    ],
    "totalResults": "142",
    "Response": "True"
}"#;

#[test]
fn parses_search_hits_in_order() {
    let response: SearchResponse = serde_json::from_str(MATRIX_SEARCH).unwrap();
    assert!(!response.is_failure());
    let page = response.into_result_page();
    assert!(page.error.is_none());
    assert_eq!(page.total_results, Some(142));
    assert_eq!(page.len(), 2);

    let first = page.get(1).unwrap();
    assert_eq!(first.title, "The Matrix");
    assert_eq!(first.year, "1999");
    assert_eq!(first.media_type, "movie");
    assert_eq!(first.imdb_id.as_deref(), Some("tt0133093"));
    assert_eq!(
        first.poster.as_deref(),
        Some("https://m.media-amazon.com/images/M/MV5B._V1_SX300.jpg")
    );

    let second = page.get(2).unwrap();
    assert_eq!(second.poster.as_deref(), Some("N/A"));
}

#[test]
fn not_found_becomes_error_page() {
    let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert!(response.is_failure());
    let page = response.into_result_page();
    assert!(page.is_empty());
    assert_eq!(page.error.as_deref(), Some("Movie not found!"));
}

#[test]
fn false_response_without_message_still_errors() {
    let body = r#"{"Response":"False"}"#;
    let page = serde_json::from_str::<SearchResponse>(body)
        .unwrap()
        .into_result_page();
    assert!(page.error.is_some());
}

#[test]
fn missing_optional_fields_default() {
    let body = r#"{"Search":[{"Title":"Metropolis"}],"Response":"True"}"#;
    let page = serde_json::from_str::<SearchResponse>(body)
        .unwrap()
        .into_result_page();
    let c = page.get(1).unwrap();
    assert_eq!(c.title, "Metropolis");
    assert_eq!(c.year, "");
    assert!(c.poster.is_none());
    assert!(page.total_results.is_none());
}
