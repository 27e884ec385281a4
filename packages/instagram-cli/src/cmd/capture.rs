//! `capture` — save raw API responses as fixture files for offline tests,
//! then show what the extractor makes of each post.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use instagram_client::InstagramClient;

pub async fn run(shortcodes: &[String], dir: &Path, skip_fixture: bool) -> Result<()> {
    let client = InstagramClient::new();
    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for (i, shortcode) in shortcodes.iter().enumerate() {
        if i > 0 {
            // Pace consecutive requests; the endpoint is quick to throttle.
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        match capture_post(&client, shortcode, dir, skip_fixture).await {
            Ok(()) => succeeded += 1,
            Err(e) => {
                failed += 1;
                eprintln!("❌ Failed to capture {}: {:#}", shortcode, e);
            }
        }
    }

    if shortcodes.len() > 1 {
        println!();
        println!("📊 Summary: {} succeeded, {} failed", succeeded, failed);
    }
    if failed > 0 {
        bail!("{} of {} captures failed", failed, shortcodes.len());
    }
    Ok(())
}

async fn capture_post(
    client: &InstagramClient,
    shortcode: &str,
    dir: &Path,
    skip_fixture: bool,
) -> Result<()> {
    println!("🔍 Extracting post: {}", shortcode);

    if !skip_fixture {
        let raw = client.fetch_raw(shortcode).await?;
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create fixtures directory {}", dir.display()))?;
        let path = dir.join(format!("{}.json", shortcode));
        fs::write(&path, serde_json::to_string_pretty(&raw)?)
            .with_context(|| format!("failed to write fixture {}", path.display()))?;
        println!("💾 Raw API response saved to: {}", path.display());
    }

    let post = client.fetch_post(shortcode).await?;
    println!("✅ Post extracted successfully:");
    println!("   - Author: @{}", post.author.username);
    println!("   - Media items: {}", post.media.len());
    println!("   - Description length: {} chars", post.description.len());
    Ok(())
}
