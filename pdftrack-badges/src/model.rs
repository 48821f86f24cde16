use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a page element presents a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Inline embedded viewer (desktop layout).
    Viewer,
    /// Download/open link (mobile layout).
    Button,
}

/// A page element referencing a PDF by category. Paths are resolved from the
/// config document; badges are attached by the annotator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub pdf_type: String,
    pub path: Option<String>,
    pub badge: Option<Badge>,
}

impl Element {
    pub fn new(kind: ElementKind, pdf_type: impl Into<String>) -> Self {
        Self {
            kind,
            pdf_type: pdf_type.into(),
            path: None,
            badge: None,
        }
    }

    pub fn with_path(kind: ElementKind, pdf_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            pdf_type: pdf_type.into(),
            path: Some(path.into()),
            badge: None,
        }
    }

    /// Last path component, the part the version token is parsed from.
    pub fn filename(&self) -> Option<&str> {
        self.path.as_deref().map(|p| p.rsplit('/').next().unwrap_or(p))
    }
}

/// Version badge attached next to a document element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub version: String,
    pub is_new: bool,
}

impl Badge {
    /// Markup fragment rendered into the page, matching the site's badge CSS.
    pub fn to_html(&self) -> String {
        let class = if self.is_new {
            "version-badge new"
        } else {
            "version-badge"
        };
        let new_label = if self.is_new {
            "<span class=\"badge-new-label\">NOVO</span>"
        } else {
            ""
        };
        format!(
            "<div class=\"{class}\"><div class=\"badge-star\"><span class=\"badge-version\">v{}</span></div>{new_label}</div>",
            self.version
        )
    }
}

/// The `pdf-config.json` document. Field names match the site's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    pub pdfs: HashMap<String, PdfEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfEntry {
    pub arquivo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_takes_last_path_component() {
        let element = Element::with_path(ElementKind::Button, "agenda", "assets/files/agenda_v2.pdf");
        assert_eq!(element.filename(), Some("agenda_v2.pdf"));
    }

    #[test]
    fn filename_without_directories() {
        let element = Element::with_path(ElementKind::Viewer, "agenda", "agenda_v2.pdf");
        assert_eq!(element.filename(), Some("agenda_v2.pdf"));
    }

    #[test]
    fn filename_absent_without_path() {
        let element = Element::new(ElementKind::Viewer, "agenda");
        assert_eq!(element.filename(), None);
    }

    #[test]
    fn badge_html_shows_new_label_only_when_new() {
        let badge = Badge {
            version: "2".to_string(),
            is_new: true,
        };
        let html = badge.to_html();
        assert!(html.contains("version-badge new"));
        assert!(html.contains("v2"));
        assert!(html.contains("NOVO"));

        let seen = Badge {
            version: "2".to_string(),
            is_new: false,
        };
        let html = seen.to_html();
        assert!(!html.contains("new"));
        assert!(!html.contains("NOVO"));
    }

    #[test]
    fn config_parses_wire_format() {
        let config: PdfConfig = serde_json::from_str(
            r#"{ "pdfs": { "agenda": { "arquivo": "agenda_v2.pdf" } } }"#,
        )
        .unwrap();
        assert_eq!(config.pdfs["agenda"].arquivo, "agenda_v2.pdf");
    }
}
