use std::path::Path;

use crate::app::{AppContext, Result};
use crate::domain::FeedItem;
use crate::loader::FeedLoader;

pub async fn load_feed(ctx: &AppContext, url: Option<&str>, json: bool) -> Result<()> {
    let loader = ctx.loader(url)?;
    let items = loader.load_feed().await?;

    print!("{}", render_items(&items, json)?);
    Ok(())
}

pub fn show_config(ctx: &AppContext, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn render_items(items: &[FeedItem], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(items)?;
        out.push('\n');
        return Ok(out);
    }

    if items.is_empty() {
        return Ok("No items\n".to_string());
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}  {}\n", item.id, item.display_description()));
        if let Some(location) = &item.location {
            out.push_str(&format!("    location: {}\n", location));
        }
        out.push_str(&format!("    image: {}\n", item.image_url));
    }
    out.push_str(&format!("Total: {}\n", items.len()));
    Ok(out)
}
