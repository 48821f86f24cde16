use std::path::PathBuf;

use glob::glob;
use log::{info, warn};
use tokio::time::{Duration, sleep};

use crate::model::{Badge, Element, ElementKind, PdfConfig};
use crate::repository::{VersionRepository, VersionStore};
use crate::version::{base_name, extract_version};

/// Directory the site serves documents from; configured filenames resolve under it.
const FILES_PREFIX: &str = "assets/files";

/// Viewports at least this wide get the passive auto-dismiss behavior.
const DESKTOP_MIN_WIDTH: u32 = 768;

/// Delay between the first page interaction and passive dismissal.
const AUTO_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Attaches version badges to document elements and records acknowledgements.
pub struct Annotator<S: VersionStore> {
    repository: VersionRepository<S>,
    auto_dismiss_armed: bool,
}

impl<S: VersionStore> Annotator<S> {
    pub fn new(store: S) -> Self {
        Self {
            repository: VersionRepository::new(store),
            auto_dismiss_armed: false,
        }
    }

    /// Resolves configured filenames into every element of the matching type,
    /// viewer src and button href alike.
    pub fn apply_config(&self, config: &PdfConfig, elements: &mut [Element]) {
        for (pdf_type, entry) in &config.pdfs {
            let path = format!("{FILES_PREFIX}/{}", entry.arquivo);
            for element in elements.iter_mut().filter(|e| &e.pdf_type == pdf_type) {
                element.path = Some(path.clone());
            }
        }
    }

    /// Attaches a badge to every element whose filename carries a version
    /// token. Elements without a token stay untracked.
    pub fn annotate(&self, elements: &mut [Element]) {
        for element in elements.iter_mut() {
            let Some(filename) = element.filename() else {
                continue;
            };
            let Some(version) = extract_version(filename) else {
                continue;
            };
            let base = base_name(filename);
            let is_new = self.repository.is_new_version(&base, &version);
            element.badge = Some(Badge { version, is_new });
        }
    }

    /// Click dismissal: record the version as seen and drop the NOVO indicator.
    /// The version label itself stays on the badge.
    pub fn dismiss(&self, element: &mut Element) {
        let Some(filename) = element.filename() else {
            return;
        };
        let base = base_name(filename);
        if let Some(badge) = element.badge.as_mut() {
            self.repository.mark_seen(&base, &badge.version);
            badge.is_new = false;
        }
    }

    /// Arms the passive dismissal timer on the first page interaction.
    /// Returns whether the timer was armed: rearming is a no-op, and mobile
    /// viewport widths never arm.
    pub fn arm_auto_dismiss(&mut self, viewport_width: u32) -> bool {
        if self.auto_dismiss_armed || viewport_width < DESKTOP_MIN_WIDTH {
            return false;
        }
        self.auto_dismiss_armed = true;
        true
    }

    /// Waits out the dismissal delay, then acknowledges every badge still
    /// marked new. Cannot be cancelled once armed.
    pub async fn run_auto_dismiss(&self, elements: &mut [Element]) {
        sleep(AUTO_DISMISS_DELAY).await;
        let mut dismissed = 0;
        for element in elements.iter_mut() {
            if element.badge.as_ref().is_some_and(|b| b.is_new) {
                self.dismiss(element);
                dismissed += 1;
            }
        }
        if dismissed > 0 {
            info!("Auto-dismissed {dismissed} new badges.");
        }
    }
}

/// No-config fallback: discover documents directly from the files directory.
pub fn discover_documents(dir: &str) -> Vec<Element> {
    let pattern = format!("{dir}/*.pdf");
    info!("Searching for documents in: {pattern}");
    let paths: Vec<PathBuf> = match glob(&pattern) {
        Ok(entries) => entries.filter_map(Result::ok).collect(),
        Err(e) => {
            warn!("Invalid document pattern {pattern}: {e}");
            return Vec::new();
        }
    };

    if paths.is_empty() {
        warn!("No documents found in '{dir}'");
        return Vec::new();
    }

    info!("Found {} documents.", paths.len());
    paths
        .into_iter()
        .map(|path| {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Element::with_path(
                ElementKind::Viewer,
                base_name(&filename),
                path.to_string_lossy().into_owned(),
            )
        })
        .collect()
}
