/// Slide types and implementation for PPTX presentations.
use super::shape::{PlaceholderKind, PlaceholderShape};
use super::text::RunFormat;
use crate::ooxml::error::Result;

/// The slide layouts shipped in the package template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutSlot {
    /// `slideLayout1.xml`, "Title Slide": centered title and subtitle
    TitleSlide,
    /// `slideLayout2.xml`, "Title and Content": title and one body placeholder
    TitleAndContent,
}

impl LayoutSlot {
    pub const ALL: [LayoutSlot; 2] = [LayoutSlot::TitleSlide, LayoutSlot::TitleAndContent];

    /// 1-based layout number in the package.
    pub fn number(self) -> u32 {
        match self {
            LayoutSlot::TitleSlide => 1,
            LayoutSlot::TitleAndContent => 2,
        }
    }

    pub fn partname(self) -> String {
        format!("/ppt/slideLayouts/slideLayout{}.xml", self.number())
    }

    /// Layout name as shown in PowerPoint's layout gallery.
    pub fn name(self) -> &'static str {
        match self {
            LayoutSlot::TitleSlide => "Title Slide",
            LayoutSlot::TitleAndContent => "Title and Content",
        }
    }

    fn title_kind(self) -> PlaceholderKind {
        match self {
            LayoutSlot::TitleSlide => PlaceholderKind::CenteredTitle,
            LayoutSlot::TitleAndContent => PlaceholderKind::Title,
        }
    }

    fn body_kind(self) -> PlaceholderKind {
        match self {
            LayoutSlot::TitleSlide => PlaceholderKind::Subtitle,
            LayoutSlot::TitleAndContent => PlaceholderKind::Body,
        }
    }
}

/// A mutable slide in a presentation.
///
/// Holds the title placeholder and, when set, the second placeholder of the
/// layout (subtitle or body).
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID in `p:sldIdLst`
    pub(crate) slide_id: u32,
    pub(crate) layout: LayoutSlot,
    pub(crate) title: PlaceholderShape,
    pub(crate) body: Option<PlaceholderShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout: LayoutSlot) -> Self {
        // IDs: 1=group, 2=title, 3=body
        let body = match layout {
            LayoutSlot::TitleAndContent => Some(PlaceholderShape::new(3, layout.body_kind(), "")),
            LayoutSlot::TitleSlide => None,
        };
        Self {
            slide_id,
            layout,
            title: PlaceholderShape::new(2, layout.title_kind(), ""),
            body,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> LayoutSlot {
        self.layout
    }

    /// Set the title text. Title formatting is kept.
    pub fn set_title(&mut self, title: &str) {
        self.title.text.set_text(title);
    }

    pub fn title(&self) -> String {
        self.title.text.text()
    }

    /// Formatting applied to the title's first paragraph.
    pub fn title_style_mut(&mut self) -> &mut RunFormat {
        self.title.text.first_paragraph_format_mut()
    }

    /// Set the text of the body placeholder (the subtitle on a Title Slide).
    ///
    /// An empty string on a Title Slide removes the subtitle; on Title and
    /// Content the body placeholder always stays.
    pub fn set_body(&mut self, text: &str) {
        if text.is_empty() && self.layout == LayoutSlot::TitleSlide {
            self.body = None;
            return;
        }
        match self.body {
            Some(ref mut body) => body.text.set_text(text),
            None => self.body = Some(PlaceholderShape::new(3, self.layout.body_kind(), text)),
        }
    }

    pub fn body(&self) -> Option<String> {
        self.body.as_ref().map(|b| b.text.text())
    }

    pub fn shapes(&self) -> impl Iterator<Item = &PlaceholderShape> {
        std::iter::once(&self.title).chain(self.body.as_ref())
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in self.shapes() {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
