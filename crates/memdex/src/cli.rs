use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memdex")]
#[command(version)]
#[command(about = "Daily conversation memory index and retrieval")]
pub struct Cli {
    /// Search topics by keyword
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// List topics tagged with this sentiment
    #[arg(long, value_name = "TAG")]
    pub sentiment: Option<String>,

    /// Target date for index generation (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<Option<String>>,

    /// How many days back to look
    #[arg(long, value_name = "N")]
    pub days: Option<u32>,

    /// Index directory (defaults to memory/index)
    #[arg(long, value_name = "PATH")]
    pub index_dir: Option<PathBuf>,
}

/// Selected operation. Search beats sentiment beats date.
#[derive(Debug, PartialEq)]
pub enum Mode {
    Search(String),
    Sentiment(String),
    Generate(Option<String>),
    Usage,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(query) = &self.search {
            Mode::Search(query.clone())
        } else if let Some(tag) = &self.sentiment {
            Mode::Sentiment(tag.clone())
        } else if let Some(date) = &self.date {
            Mode::Generate(date.clone())
        } else {
            Mode::Usage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["memdex"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_parse_search_with_days() {
        let cli = parse(&["--search", "cache", "--days", "3"]);
        assert_eq!(cli.mode(), Mode::Search("cache".to_string()));
        assert_eq!(cli.days, Some(3));
    }

    #[test]
    fn test_cli_parse_sentiment() {
        let cli = parse(&["--sentiment", "problem-solving"]);
        assert_eq!(cli.mode(), Mode::Sentiment("problem-solving".to_string()));
        assert_eq!(cli.days, None);
    }

    #[test]
    fn test_cli_parse_date_with_and_without_value() {
        let cli = parse(&["--date", "2026-02-06"]);
        assert_eq!(cli.mode(), Mode::Generate(Some("2026-02-06".to_string())));

        let cli = parse(&["--date"]);
        assert_eq!(cli.mode(), Mode::Generate(None));
    }

    #[test]
    fn test_search_takes_priority() {
        let cli = parse(&["--date", "2026-02-06", "--sentiment", "casual", "--search", "x"]);
        assert_eq!(cli.mode(), Mode::Search("x".to_string()));

        let cli = parse(&["--date", "2026-02-06", "--sentiment", "casual"]);
        assert_eq!(cli.mode(), Mode::Sentiment("casual".to_string()));
    }

    #[test]
    fn test_no_flags_is_usage() {
        assert_eq!(parse(&[]).mode(), Mode::Usage);
        assert_eq!(parse(&["--days", "3"]).mode(), Mode::Usage);
    }

    #[test]
    fn test_negative_days_rejected() {
        assert!(Cli::try_parse_from(["memdex", "--search", "x", "--days", "-1"]).is_err());
        assert!(Cli::try_parse_from(["memdex", "--search", "x", "--days", "abc"]).is_err());
    }
}
