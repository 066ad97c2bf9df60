pub const USAGE: &str = "Usage:
  memdex --date 2026-02-06
  memdex --search \"keyword\" --days 7
  memdex --sentiment problem-solving";

pub fn run() -> anyhow::Result<()> {
    println!("{USAGE}");
    Ok(())
}
