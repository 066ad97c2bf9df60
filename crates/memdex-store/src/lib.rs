//! Date-keyed JSON index store for daily conversation topics

mod date;
mod error;
mod io;
mod store;
mod types;

pub use date::{format_date_key, parse_date_key};
pub use error::{Result, StoreError};
pub use store::IndexStore;
pub use types::{Actions, IndexDocument, Stats, TopicEntry};
