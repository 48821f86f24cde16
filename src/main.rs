use anyhow::Result;
use log::{error, info};
use std::env;
use std::path::Path;

use pdftrack_badges::annotate::{Annotator, discover_documents};
use pdftrack_badges::config::load_config;
use pdftrack_badges::model::{Element, ElementKind, PdfConfig};
use pdftrack_badges::open_store;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config_location =
        env::var("PDF_CONFIG").unwrap_or_else(|_| "pdf-config.json".to_string());
    let versions_path =
        env::var("PDF_VERSIONS").unwrap_or_else(|_| "pdf-versions.json".to_string());
    let files_dir = env::var("PDF_DIR").unwrap_or_else(|_| "assets/files".to_string());

    info!("Starting pdftrack...");

    let store = open_store(Path::new(&versions_path))?;
    let annotator = Annotator::new(store);

    let mut elements = match load_config(&config_location).await {
        Ok(config) => {
            let mut elements = page_elements(&config);
            annotator.apply_config(&config, &mut elements);
            elements
        }
        Err(e) => {
            // Badges still get computed for whatever already carries a path.
            error!("Failed to load PDF config: {e:#}");
            discover_documents(&files_dir)
        }
    };

    annotator.annotate(&mut elements);

    for element in &elements {
        if let (Some(path), Some(badge)) = (element.path.as_deref(), element.badge.as_ref()) {
            if badge.is_new {
                info!("{path}: v{} (NOVO)", badge.version);
            } else {
                info!("{path}: v{}", badge.version);
            }
        }
    }

    info!("pdftrack finished.");
    Ok(())
}

/// One viewer and one button per configured type, matching the site layout.
fn page_elements(config: &PdfConfig) -> Vec<Element> {
    let mut elements = Vec::new();
    for pdf_type in config.pdfs.keys() {
        elements.push(Element::new(ElementKind::Viewer, pdf_type.as_str()));
        elements.push(Element::new(ElementKind::Button, pdf_type.as_str()));
    }
    elements
}
