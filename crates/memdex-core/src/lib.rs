//! Index building and configuration for daily conversation memory

mod builder;
mod config;
mod raw;

pub use builder::{blog_ref, topic_id, IndexBuilder};
pub use config::{Config, INDEX_DIR_ENV};
pub use raw::{RawActions, RawConversation, RawTopic};
