//! `demo` — run the extractor over a few known posts.

use anyhow::Result;
use instagram_client::InstagramClient;

/// Shortcodes covering the three media shapes: a plain video, a plain
/// image, and a mixed carousel.
const DEMO_SHORTCODES: [&str; 3] = ["DJ_1LHjIUKb", "DKEcNBuJIdN", "DKHRsO_tx_o"];

pub async fn run() -> Result<()> {
    let client = InstagramClient::new();

    for shortcode in DEMO_SHORTCODES {
        println!("Fetching data for shortcode: {}", shortcode);
        match client.fetch_post(shortcode).await {
            Ok(post) => {
                println!("{}", serde_json::to_string_pretty(&post)?);
                println!("Post URL: {}", post.url);
            }
            Err(e) => eprintln!("Error fetching data for {}: {}", shortcode, e),
        }
        println!("------------------------------------");
    }

    Ok(())
}
