/// Placeholder shapes for PPTX slides.
///
/// A placeholder carries no geometry of its own: position, size and default
/// text style come from the matching `p:ph` on the layout and master.
use super::text::TextFrame;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Which layout placeholder a shape fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Centered title of the Title Slide layout
    CenteredTitle,
    /// Title bar of content layouts
    Title,
    /// Subtitle of the Title Slide layout (`idx="1"`)
    Subtitle,
    /// Content placeholder (`idx="1"`)
    Body,
}

impl PlaceholderKind {
    /// The `p:ph` element matching the layout's placeholder.
    fn ph_xml(self) -> &'static str {
        match self {
            PlaceholderKind::CenteredTitle => r#"<p:ph type="ctrTitle"/>"#,
            PlaceholderKind::Title => r#"<p:ph type="title"/>"#,
            PlaceholderKind::Subtitle => r#"<p:ph type="subTitle" idx="1"/>"#,
            PlaceholderKind::Body => r#"<p:ph idx="1"/>"#,
        }
    }

    fn base_name(self) -> &'static str {
        match self {
            PlaceholderKind::CenteredTitle | PlaceholderKind::Title => "Title",
            PlaceholderKind::Subtitle => "Subtitle",
            PlaceholderKind::Body => "Content Placeholder",
        }
    }
}

/// A placeholder shape holding text.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderShape {
    /// Shape ID, unique within the slide (the group shape is id 1)
    pub(crate) shape_id: u32,
    pub(crate) kind: PlaceholderKind,
    pub(crate) text: TextFrame,
}

impl PlaceholderShape {
    pub(crate) fn new(shape_id: u32, kind: PlaceholderKind, text: &str) -> Self {
        Self {
            shape_id,
            kind,
            text: TextFrame::from_text(text),
        }
    }

    pub fn kind(&self) -> PlaceholderKind {
        self.kind
    }

    /// Shape name as PowerPoint assigns it, e.g. "Title 1".
    pub fn name(&self) -> String {
        format!("{} {}", self.kind.base_name(), self.shape_id - 1)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name())
        )?;
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str("<p:nvPr>");
        xml.push_str(self.kind.ph_xml());
        xml.push_str("</p:nvPr>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        self.text.write_paragraphs(xml)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}
