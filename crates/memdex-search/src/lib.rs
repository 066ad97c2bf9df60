//! Day-windowed keyword and sentiment retrieval over the index store

mod engine;
mod score;
mod window;

pub use engine::{RetrievalEngine, SearchHit, SentimentHit};
pub use score::match_score;
pub use window::Window;
