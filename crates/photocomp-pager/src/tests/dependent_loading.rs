//! Parent/child passes: drain order, partial failure, aggregation.

use crate::tests::harness::{
    event, ids, org, token, Scripted, ScriptedChildSource, ScriptedSource,
};
use crate::{ChildCursor, DependentLoader, Page};

#[tokio::test]
async fn initial_load_fetches_first_child_page_per_parent() {
    let parents = ScriptedSource::single_page(vec![org("a", "Alpha"), org("b", "Bravo")]);
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![
            event("e1", "a", "Kickoff"),
            event("e2", "a", "Retro"),
        ]))]),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "e3", "b", "Summit",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;

    assert_eq!(ids(loader.parents().items()), vec!["a", "b"]);
    // Children aggregate in parent order, not completion order.
    assert_eq!(ids(loader.children()), vec!["e1", "e2", "e3"]);
    assert_eq!(
        loader.child_source().calls(),
        vec![("a".to_string(), None), ("b".to_string(), None)]
    );
    assert!(!loader.has_more());
    assert!(!loader.in_flight());
}

#[tokio::test]
async fn children_drain_before_more_parents() {
    let parents = ScriptedSource::new(vec![
        Scripted::Page(Page::new(
            vec![org("a", "Alpha"), org("b", "Bravo")],
            Some(token("parents-2")),
        )),
        Scripted::Page(Page::last(vec![org("c", "Charlie")])),
    ]);
    let children = ScriptedChildSource::new(vec![
        (
            "a",
            vec![
                Scripted::Page(Page::new(
                    vec![event("e1", "a", "Kickoff")],
                    Some(token("a-2")),
                )),
                Scripted::Page(Page::last(vec![event("e2", "a", "Retro")])),
            ],
        ),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "e3", "b", "Summit",
        )]))]),
        ("c", vec![Scripted::Page(Page::last(vec![event(
            "e4", "c", "Expo",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;
    assert_eq!(loader.parent_source().call_count(), 1);
    assert_eq!(
        loader.child_cursor("a"),
        Some(&ChildCursor::More(token("a-2")))
    );

    // First pass: parent "a" still owes a child page, so no parent fetch.
    loader.load_more().await;
    assert_eq!(loader.parent_source().call_count(), 1);
    assert_eq!(ids(loader.children()), vec!["e1", "e3", "e2"]);
    assert_eq!(loader.child_cursor("a"), Some(&ChildCursor::Exhausted));
    assert!(loader.has_more());

    // Second pass: children drained, now the next parent page arrives
    // with first child pages for the parents it introduced.
    loader.load_more().await;
    assert_eq!(loader.parent_source().call_count(), 2);
    assert_eq!(ids(loader.parents().items()), vec!["a", "b", "c"]);
    assert_eq!(ids(loader.children()), vec!["e1", "e3", "e2", "e4"]);
    assert!(!loader.has_more());
}

#[tokio::test]
async fn one_failing_parent_does_not_block_the_others() {
    let parents = ScriptedSource::single_page(vec![
        org("a", "Alpha"),
        org("b", "Bravo"),
        org("c", "Charlie"),
    ]);
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![event(
            "e1", "a", "Kickoff",
        )]))]),
        (
            "b",
            vec![
                Scripted::Fail("bravo is down".to_string()),
                Scripted::Page(Page::last(vec![event("e2", "b", "Summit")])),
            ],
        ),
        ("c", vec![Scripted::Page(Page::last(vec![event(
            "e3", "c", "Expo",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;

    // The other parents' children applied despite "b" failing.
    assert_eq!(ids(loader.children()), vec!["e1", "e3"]);
    assert_eq!(loader.child_errors().len(), 1);
    assert!(loader.child_errors()[0].contains("bravo is down"));

    // The failed parent stays pending and gets retried next pass.
    assert_eq!(loader.child_cursor("b"), Some(&ChildCursor::NotFetched));
    assert!(loader.has_more());

    loader.load_more().await;
    assert_eq!(loader.child_source().calls_for("b"), 2);
    assert_eq!(ids(loader.children()), vec!["e1", "e3", "e2"]);
    assert!(loader.child_errors().is_empty());
    assert!(!loader.has_more());
}

#[tokio::test]
async fn parent_page_failure_abandons_the_pass() {
    let parents = ScriptedSource::new(vec![Scripted::Fail("cannot list".to_string())]);
    let children = ScriptedChildSource::new(vec![]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;

    assert_eq!(loader.parents().last_error(), Some("cannot list"));
    assert_eq!(loader.child_source().call_count(), 0);
    assert!(loader.children().is_empty());
    assert!(!loader.in_flight());
}

#[tokio::test]
async fn duplicated_parent_keeps_its_children_and_is_not_refetched() {
    let parents = ScriptedSource::new(vec![
        Scripted::Page(Page::new(
            vec![org("a", "Alpha"), org("b", "Bravo")],
            Some(token("parents-2")),
        )),
        // The server repeats "b" on the second page.
        Scripted::Page(Page::last(vec![org("b", "Bravo"), org("c", "Charlie")])),
    ]);
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![event(
            "e1", "a", "Kickoff",
        )]))]),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "e2", "b", "Summit",
        )]))]),
        ("c", vec![Scripted::Page(Page::last(vec![event(
            "e3", "c", "Expo",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;
    loader.load_more().await;

    assert_eq!(ids(loader.parents().items()), vec!["a", "b", "c"]);
    assert_eq!(loader.child_source().calls_for("b"), 1);
    assert_eq!(ids(loader.children()), vec!["e1", "e2", "e3"]);
}

#[tokio::test]
async fn aggregated_children_are_unique_by_id() {
    let parents = ScriptedSource::single_page(vec![org("a", "Alpha"), org("b", "Bravo")]);
    // Both parents report the same event; the aggregate keeps one copy.
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![event(
            "shared", "a", "Joint Meetup",
        )]))]),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "shared", "b", "Joint Meetup",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;

    assert_eq!(ids(loader.children()), vec!["shared"]);
}

#[tokio::test]
async fn children_of_groups_by_parent() {
    let parents = ScriptedSource::single_page(vec![org("a", "Alpha"), org("b", "Bravo")]);
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![
            event("e1", "a", "Kickoff"),
            event("e2", "a", "Retro"),
        ]))]),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "e3", "b", "Summit",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;

    let alpha: Vec<&str> = loader
        .children_of("a")
        .iter()
        .map(|child| child.id.as_str())
        .collect();
    assert_eq!(alpha, vec!["e1", "e2"]);
    assert_eq!(loader.children_of("b").len(), 1);
    assert!(loader.children_of("missing").is_empty());
}

#[tokio::test]
async fn exhausted_loader_performs_no_further_fetches() {
    let parents = ScriptedSource::single_page(vec![org("a", "Alpha")]);
    let children = ScriptedChildSource::new(vec![("a", vec![Scripted::Page(Page::last(
        vec![event("e1", "a", "Kickoff")],
    ))])]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;
    assert!(!loader.has_more());

    loader.load_more().await;
    loader.load_more().await;

    assert_eq!(loader.parent_source().call_count(), 1);
    assert_eq!(loader.child_source().call_count(), 1);
}

#[tokio::test]
async fn repeated_initial_load_starts_over() {
    let parents = ScriptedSource::new(vec![
        Scripted::Page(Page::last(vec![org("a", "Alpha")])),
        Scripted::Page(Page::last(vec![org("b", "Bravo")])),
    ]);
    let children = ScriptedChildSource::new(vec![
        ("a", vec![Scripted::Page(Page::last(vec![event(
            "e1", "a", "Kickoff",
        )]))]),
        ("b", vec![Scripted::Page(Page::last(vec![event(
            "e2", "b", "Summit",
        )]))]),
    ]);
    let mut loader = DependentLoader::new(parents, children);

    loader.initial_load().await;
    assert_eq!(ids(loader.children()), vec!["e1"]);

    loader.initial_load().await;
    assert_eq!(ids(loader.parents().items()), vec!["b"]);
    assert_eq!(ids(loader.children()), vec!["e2"]);
    assert_eq!(loader.child_cursor("a"), None);
}
