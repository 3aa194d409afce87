//! Example query loading integration tests.

use rqlens::queries;
use std::path::Path;
use tempfile::TempDir;

const DEFAULT_QUERY: &str = "SELECT * WHERE {\n  ?s ?p ?o\n} LIMIT 10";

fn query_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("cities.rq"), "SELECT ?city WHERE { }").expect("write");
    std::fs::write(dir.path().join("all-triples.rq"), "SELECT * WHERE { ?s ?p ?o }")
        .expect("write");
    std::fs::write(dir.path().join("notes.txt"), "not a query").expect("write");
    dir
}

#[tokio::test]
async fn test_list_queries_sorted_rq_stems() {
    let dir = query_dir();
    let names = queries::list_queries(dir.path()).await.unwrap();
    assert_eq!(names, vec!["all-triples", "cities"]);
}

#[tokio::test]
async fn test_list_queries_missing_dir_errors() {
    let err = queries::list_queries(Path::new("/nonexistent/queries"))
        .await
        .unwrap_err();
    assert_eq!(err.category(), "Query Error");
}

#[tokio::test]
async fn test_load_query_returns_file_contents() {
    let dir = query_dir();
    let text = queries::load_query(dir.path(), "cities", DEFAULT_QUERY).await;
    assert_eq!(text, "SELECT ?city WHERE { }");
}

#[tokio::test]
async fn test_load_query_falls_back_on_missing_file() {
    let dir = query_dir();
    let text = queries::load_query(dir.path(), "ghost", DEFAULT_QUERY).await;
    // Never an error: a comment explains the problem, the default follows.
    assert!(text.starts_with("# Error loading query:"));
    assert!(text.ends_with(DEFAULT_QUERY));
}
