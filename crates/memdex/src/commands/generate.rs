//! `--date`: acknowledges the target date. Building needs conversation data,
//! which only programmatic callers of `memdex_core::IndexBuilder` have.

use memdex_store::format_date_key;

pub fn message(date: Option<&str>) -> String {
    let date = match date {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format_date_key(chrono::Local::now().date_naive()),
    };
    format!("Generate index for {date} - use with conversation data")
}

pub fn run(date: Option<&str>) -> anyhow::Result<()> {
    println!("{}", message(date));
    Ok(())
}
