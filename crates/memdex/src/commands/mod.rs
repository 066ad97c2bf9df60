pub mod generate;
pub mod search;
pub mod sentiment;
pub mod usage;
