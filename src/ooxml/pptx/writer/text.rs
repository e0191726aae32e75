/// Text frames and run formatting for placeholder shapes.
use crate::common::RGBColor;
use crate::common::unit::font_size_centipoints;
use crate::common::xml::{escape_xml, is_xml_char};
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// Character formatting written into `a:rPr`.
///
/// Unset fields are left out so the run inherits from the layout and master.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFormat {
    /// Font size in points
    pub size: Option<f32>,
    pub bold: Option<bool>,
    pub color: Option<RGBColor>,
}

impl RunFormat {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.bold.is_none() && self.color.is_none()
    }

    /// Write the properties as `tag` (`a:rPr`, or `a:endParaRPr` for an
    /// empty paragraph).
    fn write_xml(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(xml, r#"<{tag} lang="en-US" dirty="0""#)?;

        if let Some(size) = self.size {
            let sz = font_size_centipoints(size).ok_or_else(|| {
                OoxmlError::InvalidFormat(format!("font size {size}pt is out of range"))
            })?;
            write!(xml, r#" sz="{}""#, sz)?;
        }

        if let Some(bold) = self.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }

        match self.color {
            Some(color) => {
                write!(
                    xml,
                    r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></{tag}>"#,
                    color.to_hex()
                )?;
            },
            None => xml.push_str("/>"),
        }
        Ok(())
    }
}

/// One paragraph holding a single run of plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub format: RunFormat,
}

/// The text of a shape, one paragraph per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Split `text` on `\n` so that joining the paragraphs with `\n` gives
    /// `text` back. An empty string is a single empty paragraph.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text
                .split('\n')
                .map(|line| Paragraph {
                    text: line.to_string(),
                    format: RunFormat::default(),
                })
                .collect(),
        }
    }

    /// Replace the text, keeping the first paragraph's formatting.
    pub fn set_text(&mut self, text: &str) {
        let first_format = self.first_format().clone();
        *self = Self::from_text(text);
        if let Some(first) = self.paragraphs.first_mut() {
            first.format = first_format;
        }
    }

    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.paragraphs.iter().map(|p| p.text.as_str()).collect();
        lines.join("\n")
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn first_format(&self) -> &RunFormat {
        static EMPTY: RunFormat = RunFormat {
            size: None,
            bold: None,
            color: None,
        };
        self.paragraphs.first().map_or(&EMPTY, |p| &p.format)
    }

    /// Formatting of the first paragraph's run.
    pub fn first_paragraph_format_mut(&mut self) -> &mut RunFormat {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        &mut self.paragraphs[0].format
    }

    /// Write `<a:p>` elements for every paragraph.
    pub(crate) fn write_paragraphs(&self, xml: &mut String) -> Result<()> {
        for paragraph in &self.paragraphs {
            xml.push_str("<a:p>");
            if paragraph.text.is_empty() {
                paragraph.format.write_xml(xml, "a:endParaRPr")?;
            } else {
                // A vertical tab is a soft line break within the paragraph
                for (i, segment) in paragraph.text.split(LINE_BREAK).enumerate() {
                    if i > 0 {
                        xml.push_str("<a:br>");
                        paragraph.format.write_xml(xml, "a:rPr")?;
                        xml.push_str("</a:br>");
                    }
                    if segment.is_empty() {
                        continue;
                    }
                    xml.push_str("<a:r>");
                    paragraph.format.write_xml(xml, "a:rPr")?;
                    xml.push_str("<a:t>");
                    write_text(xml, segment)?;
                    xml.push_str("</a:t>");
                    xml.push_str("</a:r>");
                }
            }
            xml.push_str("</a:p>");
        }
        Ok(())
    }
}

/// Soft line break inside a paragraph, written as `<a:br>`.
const LINE_BREAK: char = '\u{b}';

/// Escape run text. Carriage returns are written as character references
/// so XML line-end normalization leaves them intact.
fn write_text(xml: &mut String, text: &str) -> Result<()> {
    if let Some(bad) = text.chars().find(|&ch| !is_xml_char(ch)) {
        return Err(OoxmlError::InvalidFormat(format!(
            "text contains U+{:04X}, which XML cannot represent",
            bad as u32
        )));
    }
    let escaped = escape_xml(text);
    if escaped.contains('\r') {
        xml.push_str(&escaped.replace('\r', "&#xD;"));
    } else {
        xml.push_str(&escaped);
    }
    Ok(())
}
