mod common;

use chrono::NaiveDate;
use memdex_search::{RetrievalEngine, Window};
use memdex_store::IndexStore;
use tempfile::TempDir;

fn feb_6() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
}

#[test]
fn test_build_then_query_same_day() {
    let temp = TempDir::new().unwrap();
    let store = IndexStore::new(temp.path().join("memory").join("index"));
    store.ensure_ready().unwrap();

    let doc = common::persist(&store, "2026-02-06", &common::fix_bug_conversation());
    assert_eq!(doc.topics[0].id, "topic_001");
    assert_eq!(doc.topics[0].blog_ref, "2026-02-06-chat-with-channing/");
    assert_eq!(doc.stats.problem_solving, 1);

    // Stored form uses the documented key names
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path_for("2026-02-06")).unwrap())
            .unwrap();
    assert_eq!(stored["sessionKey"], "agent:main:main");
    assert_eq!(stored["topics"][0]["id"], "topic_001");
    assert_eq!(stored["stats"]["problemSolving"], 1);
    assert_eq!(stored["stats"]["architectureDesign"], 0);

    let engine = RetrievalEngine::new(store);
    let window = Window::new(feb_6(), 7);

    let cache = engine.search("cache", &window).unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache[0].relevance, 0.8);
    assert_eq!(cache[0].snippet, "chased a stale cache entry");

    let fix = engine.search("fix", &window).unwrap();
    assert_eq!(fix.len(), 1);
    assert_eq!(fix[0].relevance, 1.0);

    let arch = engine
        .search_by_sentiment("architecture-design", &window)
        .unwrap();
    assert!(arch.is_empty());
}

#[test]
fn test_rebuild_replaces_previous_document() {
    let temp = TempDir::new().unwrap();
    let store = IndexStore::new(temp.path());

    common::persist(&store, "2026-02-06", &common::fix_bug_conversation());
    let replacement = memdex_core::RawConversation {
        topics: vec![common::topic(
            "schema sketch",
            &["tables"],
            &[],
            "architecture-design",
        )],
        ..Default::default()
    };
    common::persist(&store, "2026-02-06", &replacement);

    let engine = RetrievalEngine::new(store);
    let window = Window::new(feb_6(), 7);
    assert!(engine.search("cache", &window).unwrap().is_empty());
    assert_eq!(
        engine
            .search_by_sentiment("architecture-design", &window)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_multi_day_window() {
    let temp = TempDir::new().unwrap();
    let store = IndexStore::new(temp.path());

    for date in ["2026-01-28", "2026-01-30", "2026-02-03", "2026-02-06"] {
        let raw = memdex_core::RawConversation {
            topics: vec![common::topic(
                &format!("standup {date}"),
                &[],
                &[],
                "casual",
            )],
            ..Default::default()
        };
        common::persist(&store, date, &raw);
    }

    let engine = RetrievalEngine::new(store);
    let hits = engine
        .search_by_sentiment("casual", &Window::new(feb_6(), 7))
        .unwrap();
    let dates: Vec<&str> = hits.iter().map(|h| h.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-01-30", "2026-02-03", "2026-02-06"]);

    let hits = engine
        .search("standup", &Window::new(feb_6(), 3))
        .unwrap();
    let dates: Vec<&str> = hits.iter().map(|h| h.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-02-03", "2026-02-06"]);
}
