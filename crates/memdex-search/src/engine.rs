//! Window scans over the index store

use crate::score::match_score;
use crate::window::Window;
use memdex_store::{IndexDocument, IndexStore, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// A topic matched by keyword search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub date: String,
    pub topic: String,
    pub relevance: f64,
    pub decisions: Vec<String>,
    pub snippet: String,
}

/// A topic matched by sentiment tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentHit {
    pub date: String,
    pub topic: String,
    pub decisions: Vec<String>,
}

/// Read-only retrieval over an [`IndexStore`]
pub struct RetrievalEngine {
    store: IndexStore,
}

impl RetrievalEngine {
    pub fn new(store: IndexStore) -> Self {
        Self { store }
    }

    /// Topics matching `query`, most relevant first.
    ///
    /// Equal scores keep scan order: oldest date first, then topic position.
    pub fn search(&self, query: &str, window: &Window) -> Result<Vec<SearchHit>> {
        let mut hits = Vec::new();
        for doc in self.documents_in(window)? {
            for topic in &doc.topics {
                let relevance = match_score(topic, query);
                if relevance > 0.0 {
                    hits.push(SearchHit {
                        date: doc.date.clone(),
                        topic: topic.title.clone(),
                        relevance,
                        decisions: topic.decisions.clone(),
                        snippet: doc.context_snapshot.clone(),
                    });
                }
            }
        }

        hits.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        });
        Ok(hits)
    }

    /// Topics whose sentiment equals `sentiment` exactly, in scan order
    pub fn search_by_sentiment(&self, sentiment: &str, window: &Window) -> Result<Vec<SentimentHit>> {
        let mut hits = Vec::new();
        for doc in self.documents_in(window)? {
            for topic in doc.topics.iter().filter(|t| t.sentiment == sentiment) {
                hits.push(SentimentHit {
                    date: doc.date.clone(),
                    topic: topic.title.clone(),
                    decisions: topic.decisions.clone(),
                });
            }
        }
        Ok(hits)
    }

    /// Documents inside `window`. Files that fail to load are skipped.
    fn documents_in(&self, window: &Window) -> Result<Vec<IndexDocument>> {
        let dates = self.store.list_dates(window.cutoff())?;

        let mut documents = Vec::with_capacity(dates.len());
        for date in dates {
            match self.store.read(&date) {
                Ok(doc) => documents.push(doc),
                Err(e) => tracing::warn!(date = %date, error = %e, "skipping unreadable index"),
            }
        }
        Ok(documents)
    }
}
