//! Deck assembly: one rendered slide per [`SlideSpec`], saved as one `.pptx`.

use super::palette::StylePalette;
use super::types::{BuildReport, DeckMetadata, SlideSpec};
use crate::common::{Error, Result};
use std::path::Path;

#[cfg(feature = "ooxml")]
use super::types::LayoutKind;
#[cfg(feature = "ooxml")]
use crate::ooxml::pptx::{LayoutSlot, MutablePresentation, RunFormat};

/// Builds a deck from slide specs and a palette.
///
/// ```rust,no_run
/// use opd_deck::presentation::{DeckBuilder, LayoutKind, SlideSpec, StylePalette};
///
/// let specs = [
///     SlideSpec::new("Title", LayoutKind::Title, ""),
///     SlideSpec::new("Summary", LayoutKind::TitleAndBody, "Point A\nPoint B"),
/// ];
/// let report = DeckBuilder::new(StylePalette::default()).build(&specs, "out.pptx")?;
/// assert_eq!(report.slide_count, 2);
/// # Ok::<(), opd_deck::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    palette: StylePalette,
    metadata: DeckMetadata,
}

impl DeckBuilder {
    pub fn new(palette: StylePalette) -> Self {
        Self {
            palette,
            metadata: DeckMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: DeckMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    /// Reject specs that cannot be rendered, before anything is written.
    pub fn validate(&self, specs: &[SlideSpec]) -> Result<()> {
        if specs.is_empty() {
            return Err(Error::build("cannot build a deck with no slides"));
        }

        for (index, spec) in specs.iter().enumerate() {
            let Some(style) = &spec.title_style else {
                continue;
            };
            if let Some(color) = &style.color
                && !self.palette.contains(color)
            {
                return Err(Error::build(format!(
                    "slide {} ({:?}): unknown palette color '{}'",
                    index + 1,
                    spec.title,
                    color
                )));
            }
            if !style.has_valid_size() {
                return Err(Error::build(format!(
                    "slide {} ({:?}): title size {}pt is outside 1-4000pt",
                    index + 1,
                    spec.title,
                    style.size_pt.unwrap_or_default()
                )));
            }
        }
        Ok(())
    }

    /// Render `specs` in order and save the deck to `output`.
    ///
    /// Overwrites an existing file. On failure no file is created or
    /// modified.
    #[cfg(feature = "ooxml")]
    pub fn build<P: AsRef<Path>>(&self, specs: &[SlideSpec], output: P) -> Result<BuildReport> {
        let output = output.as_ref();
        self.validate(specs)?;

        let presentation = self.render(specs)?;
        let bytes = presentation.save(output)?;

        tracing::info!(
            path = %output.display(),
            slides = specs.len(),
            bytes,
            "saved presentation"
        );

        Ok(BuildReport {
            path: output.to_path_buf(),
            slide_count: presentation.slide_count(),
            bytes,
        })
    }

    /// Without the `ooxml` feature there is no way to write the deck.
    #[cfg(not(feature = "ooxml"))]
    pub fn build<P: AsRef<Path>>(&self, _specs: &[SlideSpec], _output: P) -> Result<BuildReport> {
        Err(Error::ooxml_missing())
    }

    /// Render validated specs into an in-memory presentation.
    #[cfg(feature = "ooxml")]
    pub fn render(&self, specs: &[SlideSpec]) -> Result<MutablePresentation> {
        let mut presentation = MutablePresentation::new();
        {
            let props = presentation.properties_mut();
            props.title = self.metadata.title.clone();
            props.creator = self.metadata.author.clone();
            if let Some(created) = self.metadata.created {
                props.created = created;
            }
        }

        for (index, spec) in specs.iter().enumerate() {
            let layout = match spec.layout_kind {
                LayoutKind::Title => LayoutSlot::TitleSlide,
                LayoutKind::TitleAndBody => LayoutSlot::TitleAndContent,
            };
            let slide = presentation.add_slide(layout);
            slide.set_title(&spec.title);
            slide.set_body(&spec.body_text);

            if let Some(style) = &spec.title_style {
                *slide.title_style_mut() = self.resolve_title_style(style)?;
            }

            tracing::debug!(
                slide = index + 1,
                title = %spec.title,
                layout = layout.name(),
                "added slide"
            );
        }

        Ok(presentation)
    }

    #[cfg(feature = "ooxml")]
    fn resolve_title_style(&self, style: &super::types::TitleStyle) -> Result<RunFormat> {
        let color = match &style.color {
            Some(name) => Some(
                self.palette
                    .get(name)
                    .ok_or_else(|| Error::build(format!("unknown palette color '{name}'")))?,
            ),
            None => None,
        };
        Ok(RunFormat {
            size: style.size_pt,
            bold: style.bold,
            color,
        })
    }
}

/// Build `specs` with `palette` into `output`.
pub fn build<P: AsRef<Path>>(
    specs: &[SlideSpec],
    palette: &StylePalette,
    output: P,
) -> Result<BuildReport> {
    DeckBuilder::new(palette.clone()).build(specs, output)
}
