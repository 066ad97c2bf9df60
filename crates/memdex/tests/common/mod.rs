use memdex_core::{IndexBuilder, RawConversation, RawTopic};
use memdex_store::{IndexDocument, IndexStore};

pub fn topic(title: &str, keywords: &[&str], decisions: &[&str], sentiment: &str) -> RawTopic {
    RawTopic {
        title: title.to_string(),
        keywords: Some(keywords.iter().map(|s| s.to_string()).collect()),
        decisions: Some(decisions.iter().map(|s| s.to_string()).collect()),
        sentiment: Some(sentiment.to_string()),
        ..Default::default()
    }
}

pub fn fix_bug_conversation() -> RawConversation {
    RawConversation {
        session_key: Some("agent:main:main".to_string()),
        topics: vec![topic("fix bug", &["cache"], &["use LRU"], "problem-solving")],
        actions: None,
        context_snapshot: Some("chased a stale cache entry".to_string()),
    }
}

pub fn persist(store: &IndexStore, date: &str, raw: &RawConversation) -> IndexDocument {
    IndexBuilder::default()
        .build_and_persist(store, date, raw)
        .unwrap()
}
