//! Slide descriptions consumed by the deck builder.

use crate::common::unit::{MAX_FONT_PT, MIN_FONT_PT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The structural template a slide uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Title slide: title plus optional subtitle
    #[serde(rename = "TITLE")]
    Title,
    /// Title bar with one body placeholder
    #[serde(rename = "TITLE_AND_BODY")]
    TitleAndBody,
}

/// Font override for a slide title.
///
/// Only the fields that are set are written; everything else is inherited
/// from the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleStyle {
    /// Palette color name, resolved when the deck is built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl TitleStyle {
    /// The emphasis used on the opening and closing slides.
    pub fn emphasis(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            size_pt: Some(44.0),
            bold: Some(true),
        }
    }

    /// Whether `size_pt`, if set, is a font size DrawingML accepts.
    pub fn has_valid_size(&self) -> bool {
        self.size_pt
            .is_none_or(|pt| (MIN_FONT_PT..=MAX_FONT_PT).contains(&pt))
    }
}

/// One slide's content and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideSpec {
    pub title: String,
    pub layout_kind: LayoutKind,
    /// Plain text; each line becomes one paragraph
    #[serde(default)]
    pub body_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TitleStyle>,
}

impl SlideSpec {
    pub fn new(title: impl Into<String>, layout_kind: LayoutKind, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout_kind,
            body_text: body_text.into(),
            title_style: None,
        }
    }

    pub fn with_title_style(mut self, style: TitleStyle) -> Self {
        self.title_style = Some(style);
        self
    }
}

/// Document properties recorded in the deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Creation time; the build time when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub path: std::path::PathBuf,
    pub slide_count: usize,
    /// Size of the written file
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_kind_names() {
        let kind: LayoutKind = serde_saphyr::from_str("TITLE_AND_BODY").unwrap();
        assert_eq!(kind, LayoutKind::TitleAndBody);
        assert!(serde_saphyr::from_str::<LayoutKind>("TITLE_ONLY").is_err());
    }

    #[test]
    fn test_slide_spec_defaults() {
        let spec: SlideSpec = serde_saphyr::from_str("title: Title\nlayout_kind: TITLE\n").unwrap();
        assert_eq!(spec, SlideSpec::new("Title", LayoutKind::Title, ""));
    }

    #[test]
    fn test_title_style_size_range() {
        assert!(TitleStyle::emphasis("primary").has_valid_size());
        assert!(TitleStyle::default().has_valid_size());
        let tiny = TitleStyle {
            size_pt: Some(0.5),
            ..Default::default()
        };
        assert!(!tiny.has_valid_size());
        let nan = TitleStyle {
            size_pt: Some(f32::NAN),
            ..Default::default()
        };
        assert!(!nan.has_valid_size());
    }
}
