use std::sync::LazyLock;

use regex::Regex;

// Suffix patterns tried in order, end-anchored against the filename with the
// extension already stripped: agenda_v2, agenda_2, agendav2. Tokens may carry
// embedded dots (2.1).
static PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)_v(\d+(?:\.\d+)*)$").expect("valid pattern"),
        Regex::new(r"_(\d+(?:\.\d+)*)$").expect("valid pattern"),
        Regex::new(r"(?i)v(\d+(?:\.\d+)*)$").expect("valid pattern"),
    ]
});

fn strip_pdf_ext(filename: &str) -> &str {
    let len = filename.len();
    // Byte-wise compare so non-ASCII filenames never split mid-character.
    if len >= 4 && filename.as_bytes()[len - 4..].eq_ignore_ascii_case(b".pdf") {
        &filename[..len - 4]
    } else {
        filename
    }
}

/// Extracts the version token from a filename, or `None` for untracked documents.
pub fn extract_version(filename: &str) -> Option<String> {
    let stem = strip_pdf_ext(filename);
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(stem).map(|caps| caps[1].to_string()))
}

/// Stable document identity: filename with extension and version suffix removed.
pub fn base_name(filename: &str) -> String {
    let stem = strip_pdf_ext(filename);
    for pattern in PATTERNS.iter() {
        if let Some(found) = pattern.find(stem) {
            return stem[..found.start()].to_string();
        }
    }
    stem.to_string()
}

/// Leading-integer value of a token. Dotted tokens compare by their integer
/// part only ("2.10" counts as 2), matching the site's parseInt comparison.
pub fn numeric_value(token: &str) -> u64 {
    token
        .split('.')
        .next()
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_underscore_v_suffix() {
        assert_eq!(extract_version("agenda_v2.pdf"), Some("2".to_string()));
    }

    #[test]
    fn extracts_underscore_suffix() {
        assert_eq!(extract_version("agenda_2.pdf"), Some("2".to_string()));
    }

    #[test]
    fn extracts_bare_v_suffix() {
        assert_eq!(extract_version("agendav2.pdf"), Some("2".to_string()));
    }

    #[test]
    fn extracts_dotted_token() {
        assert_eq!(extract_version("agenda_v2.1.pdf"), Some("2.1".to_string()));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extract_version("agenda_v3.PDF"), Some("3".to_string()));
    }

    #[test]
    fn v_prefix_is_case_insensitive() {
        assert_eq!(extract_version("agenda_V2.pdf"), Some("2".to_string()));
    }

    #[test]
    fn works_without_extension() {
        assert_eq!(extract_version("agenda_v2"), Some("2".to_string()));
    }

    #[test]
    fn no_token_means_untracked() {
        assert_eq!(extract_version("agenda.pdf"), None);
        assert_eq!(extract_version("agenda_final.pdf"), None);
    }

    #[test]
    fn token_must_be_end_anchored() {
        assert_eq!(extract_version("agenda_v2_rascunho.pdf"), None);
    }

    #[test]
    fn base_name_strips_version_suffix() {
        assert_eq!(base_name("agenda_v2.pdf"), "agenda");
        assert_eq!(base_name("agenda_2.pdf"), "agenda");
        assert_eq!(base_name("relatorio_v5.pdf"), "relatorio");
    }

    #[test]
    fn base_name_strips_dotted_suffix() {
        assert_eq!(base_name("agenda_v2.1.pdf"), "agenda");
    }

    #[test]
    fn base_name_without_version_is_the_stem() {
        assert_eq!(base_name("agenda.pdf"), "agenda");
    }

    #[test]
    fn numeric_value_uses_integer_part() {
        assert_eq!(numeric_value("2"), 2);
        assert_eq!(numeric_value("10"), 10);
        // parseInt semantics: the fractional part is dropped, so 2.10 == 2.
        assert_eq!(numeric_value("2.10"), 2);
    }

    #[test]
    fn numeric_value_of_garbage_is_zero() {
        assert_eq!(numeric_value(""), 0);
    }
}
