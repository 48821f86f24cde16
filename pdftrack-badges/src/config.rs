use anyhow::{Context, Result, bail};
use log::info;

use crate::model::PdfConfig;

/// Loads the pdf-config document from a local path or an http(s) URL.
pub async fn load_config(location: &str) -> Result<PdfConfig> {
    if location.starts_with("http://") || location.starts_with("https://") {
        info!("Fetching PDF config from {location}");
        let response = reqwest::get(location)
            .await
            .with_context(|| format!("Failed to fetch {location}"))?;
        if !response.status().is_success() {
            bail!("Failed to fetch {location}: {}", response.status());
        }
        response
            .json::<PdfConfig>()
            .await
            .with_context(|| format!("Invalid PDF config at {location}"))
    } else {
        info!("Reading PDF config from {location}");
        let data = std::fs::read_to_string(location)
            .with_context(|| format!("Failed to read {location}"))?;
        serde_json::from_str(&data).with_context(|| format!("Invalid PDF config at {location}"))
    }
}
