//! Weighted substring scoring

use memdex_store::TopicEntry;

const TITLE_WEIGHT: f64 = 1.0;
const KEYWORD_WEIGHT: f64 = 0.8;
const DECISION_WEIGHT: f64 = 0.6;

/// Case-insensitive substring score of `query` against a topic.
///
/// Title counts once; every matching keyword and decision adds its weight.
pub fn match_score(topic: &TopicEntry, query: &str) -> f64 {
    let query = query.to_lowercase();
    let hits = |text: &str| text.to_lowercase().contains(&query);

    let mut score = 0.0;
    if hits(topic.title.as_str()) {
        score += TITLE_WEIGHT;
    }
    // Per hit, not weight * count: ties rely on identical float sums
    for keyword in &topic.keywords {
        if hits(keyword.as_str()) {
            score += KEYWORD_WEIGHT;
        }
    }
    for decision in &topic.decisions {
        if hits(decision.as_str()) {
            score += DECISION_WEIGHT;
        }
    }
    score
}
