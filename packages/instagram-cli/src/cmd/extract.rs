//! `extract` — fetch one post and print the normalized record.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use instagram_client::{InstagramClient, RequestFingerprint};

pub async fn run(shortcode: &str, fingerprint: Option<&Path>) -> Result<()> {
    let mut client = InstagramClient::new();

    if let Some(path) = fingerprint {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read fingerprint file {}", path.display()))?;
        let tokens: RequestFingerprint = serde_json::from_str(&raw)
            .with_context(|| format!("invalid fingerprint file {}", path.display()))?;
        client = client.with_fingerprint(tokens);
    }

    let post = client.fetch_post(shortcode).await?;
    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}
