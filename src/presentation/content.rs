//! The built-in OPD-EMR overview deck.

use super::config::{ConfigError, DeckFile};
use once_cell::sync::Lazy;

/// Where the deck tool writes when no output path is given.
pub const DEFAULT_OUTPUT: &str = "OPD-EMR_Presentation.pptx";

const OPD_EMR_YAML: &str = include_str!("opd_emr.yaml");

static OPD_EMR: Lazy<Result<DeckFile, String>> =
    Lazy::new(|| DeckFile::parse(OPD_EMR_YAML, "built-in OPD-EMR deck").map_err(|e| e.to_string()));

/// The 14-slide OPD-EMR system overview.
pub fn opd_emr_deck() -> Result<DeckFile, ConfigError> {
    OPD_EMR.clone().map_err(|message| ConfigError::Parse {
        origin: "built-in OPD-EMR deck".to_string(),
        message,
    })
}

/// Raw YAML of the built-in deck, a starting point for custom decks.
pub fn opd_emr_yaml() -> &'static str {
    OPD_EMR_YAML
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::types::{LayoutKind, TitleStyle};

    #[test]
    fn test_built_in_deck_shape() {
        let deck = opd_emr_deck().unwrap();
        assert_eq!(deck.slides.len(), 14);

        let first = &deck.slides[0];
        let last = &deck.slides[13];
        for slide in [first, last] {
            assert_eq!(slide.layout_kind, LayoutKind::Title);
            assert_eq!(slide.title_style, Some(TitleStyle::emphasis("primary")));
        }
        assert_eq!(first.title, "OPD-EMR");
        assert_eq!(last.title, "Thank You!");

        for slide in &deck.slides[1..13] {
            assert_eq!(slide.layout_kind, LayoutKind::TitleAndBody);
            assert!(slide.title_style.is_none());
            assert!(!slide.body_text.is_empty());
        }
    }

    #[test]
    fn test_built_in_text_is_verbatim() {
        let deck = opd_emr_deck().unwrap();
        assert_eq!(
            deck.slides[0].body_text,
            "Outpatient Department - Electronic Medical Records System\n\n\
             Modern Healthcare Management Solution\n\n\
             Presented by: [Your Name]\nDate: [Presentation Date]\nVersion: 1.0.0"
        );
        assert!(deck.slides[1].body_text.starts_with("What is OPD-EMR?\n• Complete Healthcare"));
        assert!(deck.slides[1].body_text.ends_with("✅ Secure Data Management"));
        assert!(deck.slides[8].body_text.contains("• Fast Response Times (<200ms average)"));
        assert!(deck.slides[12].body_text.ends_with("5. Go Live with confidence"));
    }

    #[test]
    fn test_raw_yaml_matches_parsed_deck() {
        let reparsed = DeckFile::parse(opd_emr_yaml(), "printed deck").unwrap();
        assert_eq!(reparsed, opd_emr_deck().unwrap());
    }

    #[test]
    fn test_built_in_palette_covers_title_colors() {
        let deck = opd_emr_deck().unwrap();
        for slide in &deck.slides {
            if let Some(color) = slide.title_style.as_ref().and_then(|s| s.color.as_deref()) {
                assert!(deck.palette.contains(color));
            }
        }
    }
}
