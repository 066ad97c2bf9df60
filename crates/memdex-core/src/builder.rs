//! Builds normalized index documents from raw conversations

use crate::config::Config;
use crate::raw::{RawActions, RawConversation, RawTopic};
use memdex_store::{Actions, IndexDocument, IndexStore, Stats, TopicEntry};

const PROBLEM_SOLVING: &str = "problem-solving";
const ARCHITECTURE_DESIGN: &str = "architecture-design";

/// Topic id for the 0-based `index`: `topic_001`, `topic_002`, ...
pub fn topic_id(index: usize) -> String {
    format!("topic_{:03}", index + 1)
}

/// Blog reference for topics recorded on `date`
pub fn blog_ref(date: &str, suffix: &str) -> String {
    format!("{date}{suffix}")
}

pub struct IndexBuilder {
    config: Config,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Assemble the document for `date`. Topic order is preserved.
    pub fn build(&self, date: &str, raw: &RawConversation) -> IndexDocument {
        let topics: Vec<TopicEntry> = raw
            .topics
            .iter()
            .enumerate()
            .map(|(idx, topic)| self.entry(date, idx, topic))
            .collect();

        let stats = self.stats(&topics);

        IndexDocument {
            date: date.to_string(),
            session_key: raw.session_key.clone(),
            topics,
            actions: actions(raw.actions.as_ref()),
            context_snapshot: raw.context_snapshot.clone().unwrap_or_default(),
            stats,
        }
    }

    /// Build and write the document, replacing any existing one for `date`
    pub fn build_and_persist(
        &self,
        store: &IndexStore,
        date: &str,
        raw: &RawConversation,
    ) -> memdex_store::Result<IndexDocument> {
        let document = self.build(date, raw);
        let path = store.write(date, &document)?;
        tracing::info!(path = %path.display(), topics = document.topics.len(), "index generated");
        Ok(document)
    }

    fn entry(&self, date: &str, idx: usize, topic: &RawTopic) -> TopicEntry {
        let sentiment = match topic.sentiment.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.config.default_sentiment.clone(),
        };

        TopicEntry {
            id: topic_id(idx),
            title: topic.title.clone(),
            keywords: topic.keywords.clone().unwrap_or_default(),
            decisions: topic.decisions.clone().unwrap_or_default(),
            sentiment,
            participants: topic
                .participants
                .clone()
                .unwrap_or_else(|| self.config.default_participants.clone()),
            blog_ref: blog_ref(date, &self.config.blog_ref_suffix),
            time_range: topic.time_range.clone(),
        }
    }

    fn stats(&self, topics: &[TopicEntry]) -> Stats {
        let count = |tag: &str| topics.iter().filter(|t| t.sentiment == tag).count();
        Stats {
            total_topics: topics.len(),
            problem_solving: count(PROBLEM_SOLVING),
            architecture_design: count(ARCHITECTURE_DESIGN),
            token_savings: self.config.token_savings.clone(),
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

fn actions(raw: Option<&RawActions>) -> Actions {
    let Some(raw) = raw else {
        return Actions::default();
    };
    Actions {
        tasks_triggered: raw.tasks_triggered.clone().unwrap_or_default(),
        tasks_paused: raw.tasks_paused.clone().unwrap_or_default(),
        skills_created: raw.skills_created.clone().unwrap_or_default(),
        files_modified: raw.files_modified.clone().unwrap_or_default(),
    }
}
