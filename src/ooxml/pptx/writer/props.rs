//! Document properties (`docProps/core.xml` and `docProps/app.xml`).

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Core properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreProperties {
    pub title: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    pub created: DateTime<Utc>,
}

impl CoreProperties {
    pub fn new(created: DateTime<Utc>) -> Self {
        Self {
            title: None,
            creator: None,
            created,
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_xml(title));
            xml.push_str("</dc:title>");
        }

        if let Some(ref creator) = self.creator {
            xml.push_str("<dc:creator>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</dc:creator>");
            xml.push_str("<cp:lastModifiedBy>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</cp:lastModifiedBy>");
        }

        xml.push_str("<cp:revision>1</cp:revision>");

        let stamp = self.created.to_rfc3339_opts(SecondsFormat::Secs, true);
        xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&stamp);
        xml.push_str("</dcterms:created>");
        xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&stamp);
        xml.push_str("</dcterms:modified>");

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended properties for `docProps/app.xml`.
pub(crate) fn app_properties_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime>");
    xml.push_str("<Application>");
    xml.push_str(env!("CARGO_PKG_NAME"));
    xml.push_str("</Application>");
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("<Slides>");
    xml.push_str(&slide_count.to_string());
    xml.push_str("</Slides>");
    xml.push_str("<Notes>0</Notes>");
    xml.push_str("<HiddenSlides>0</HiddenSlides>");
    xml.push_str("</Properties>");
    xml
}
