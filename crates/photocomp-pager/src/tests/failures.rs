//! Error absorption and recovery.

use crate::tests::harness::{ids, org, token, Scripted, ScriptedSource};
use crate::{Loader, Page};

#[tokio::test]
async fn initial_load_failure_lands_in_state() {
    let source = ScriptedSource::new(vec![Scripted::Fail("connection refused".to_string())]);
    let mut loader = Loader::new(source);

    loader.initial_load().await;

    assert_eq!(loader.state().last_error(), Some("connection refused"));
    assert!(loader.state().is_empty());
    assert!(!loader.state().is_loading());
    assert!(!loader.state().has_more());
}

#[tokio::test]
async fn load_more_failure_keeps_items_and_token() {
    let source = ScriptedSource::new(vec![
        Scripted::Page(Page::new(vec![org("1", "Alpha")], Some(token("p2")))),
        Scripted::Fail("server error".to_string()),
    ]);
    let mut loader = Loader::new(source);

    loader.initial_load().await;
    loader.load_more().await;

    assert_eq!(loader.state().last_error(), Some("server error"));
    assert_eq!(ids(loader.state().items()), vec!["1"]);
    // Token untouched: the load-more control stays available.
    assert_eq!(loader.state().continuation().unwrap().as_str(), "p2");
}

#[tokio::test]
async fn failed_load_more_can_be_retried_with_same_cursor() {
    let source = ScriptedSource::new(vec![
        Scripted::Page(Page::new(vec![org("1", "Alpha")], Some(token("p2")))),
        Scripted::Fail("server error".to_string()),
        Scripted::Page(Page::last(vec![org("2", "Bravo")])),
    ]);
    let mut loader = Loader::new(source);

    loader.initial_load().await;
    loader.load_more().await;
    assert!(loader.state().last_error().is_some());

    loader.load_more().await;

    assert_eq!(loader.state().last_error(), None);
    assert_eq!(ids(loader.state().items()), vec!["1", "2"]);
    assert_eq!(
        loader.source().calls(),
        vec![None, Some("p2".to_string()), Some("p2".to_string())]
    );
}

#[tokio::test]
async fn starting_a_load_clears_previous_error() {
    let source = ScriptedSource::new(vec![
        Scripted::Fail("first failure".to_string()),
        Scripted::Page(Page::last(vec![org("1", "Alpha")])),
    ]);
    let mut loader = Loader::new(source);

    loader.initial_load().await;
    assert_eq!(loader.state().last_error(), Some("first failure"));

    loader.refresh().await;
    assert_eq!(loader.state().last_error(), None);
    assert_eq!(loader.state().len(), 1);
}

#[tokio::test]
async fn refresh_failure_keeps_stale_items_visible() {
    let source = ScriptedSource::new(vec![
        Scripted::Page(Page::last(vec![org("1", "Alpha")])),
        Scripted::Fail("refresh failed".to_string()),
    ]);
    let mut loader = Loader::new(source);

    loader.initial_load().await;
    loader.refresh().await;

    // The stale list stays on screen next to the error.
    assert_eq!(ids(loader.state().items()), vec!["1"]);
    assert_eq!(loader.state().last_error(), Some("refresh failed"));
}
