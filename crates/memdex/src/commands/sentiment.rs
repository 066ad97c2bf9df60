use memdex_search::{RetrievalEngine, Window};
use memdex_store::IndexStore;

pub fn render(engine: &RetrievalEngine, tag: &str, window: &Window) -> anyhow::Result<String> {
    let hits = engine.search_by_sentiment(tag, window)?;
    Ok(serde_json::to_string_pretty(&hits)?)
}

pub fn run(store: IndexStore, tag: &str, days: u32) -> anyhow::Result<()> {
    let engine = RetrievalEngine::new(store);
    let output = render(&engine, tag, &Window::ending_today(days))?;
    println!("{output}");
    Ok(())
}
