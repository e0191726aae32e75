/// Presentation writer for PPTX.
use super::props::{CoreProperties, app_properties_xml};
use super::slide::{LayoutSlot, MutableSlide};
use crate::common::unit::inches_to_emu;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::Path;
use tracing::debug;

const PRESENTATION_PARTNAME: &str = "/ppt/presentation.xml";
const CORE_PROPS_PARTNAME: &str = "/docProps/core.xml";
const APP_PROPS_PARTNAME: &str = "/docProps/app.xml";

/// First id in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Slides are kept in insertion order, which is the order they appear in
/// the saved deck.
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    properties: CoreProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
            properties: CoreProperties::new(chrono::Utc::now()),
        }
    }

    /// Append a slide using `layout` and return it for filling in.
    pub fn add_slide(&mut self, layout: LayoutSlot) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.properties
    }

    /// Generate presentation.xml content with the relationship IDs of the
    /// master and of each slide, in slide order.
    fn generate_presentation_xml(&self, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(xml, r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#, master_rel_id)?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the full OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION_PARTNAME)?;
        let master_uri = PackURI::new(template::SLIDE_MASTER_PARTNAME)?;
        let theme_uri = PackURI::new(template::THEME_PARTNAME)?;

        // Create the presentation part first to collect relationship ids
        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_parts = Vec::with_capacity(self.slides.len());
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            let layout_uri = PackURI::new(slide.layout().partname())?;

            let mut slide_part = Part::new(slide_uri.clone(), ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));
            slide_parts.push(slide_part);

            debug!(
                slide = index + 1,
                layout = slide.layout().name(),
                "serialized slide"
            );
        }

        let mut property_parts = Vec::new();
        for (partname, content_type, xml) in template::presentation_property_parts() {
            let uri = PackURI::new(partname)?;
            let reltype = match partname {
                template::PRES_PROPS_PARTNAME => rt::PRES_PROPS,
                template::VIEW_PROPS_PARTNAME => rt::VIEW_PROPS,
                _ => rt::TABLE_STYLES,
            };
            pres_part.relate_to(&uri, reltype);
            property_parts.push(Part::new(uri, content_type, xml));
        }
        pres_part.relate_to(&theme_uri, rt::THEME);

        pres_part.set_blob(self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?);
        package.add_part(pres_part)?;

        // Master: layouts by the ids in its sldLayoutIdLst, then the theme
        let mut master_part = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml(),
        );
        for layout in LayoutSlot::ALL {
            let layout_uri = PackURI::new(layout.partname())?;
            master_part.rels_mut().add_with_id(
                &format!("rId{}", layout.number()),
                &layout_uri,
                rt::SLIDE_LAYOUT,
            )?;
        }
        master_part
            .rels_mut()
            .add_with_id("rId3", &theme_uri, rt::THEME)?;
        package.add_part(master_part)?;

        for layout in LayoutSlot::ALL {
            let xml = match layout {
                LayoutSlot::TitleSlide => template::slide_layout_1_xml(),
                LayoutSlot::TitleAndContent => template::slide_layout_2_xml(),
            };
            let mut layout_part = Part::new(PackURI::new(layout.partname())?, ct::PML_SLIDE_LAYOUT, xml);
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(layout_part)?;
        }

        for slide_part in slide_parts {
            package.add_part(slide_part)?;
        }

        package.add_part(Part::new(
            theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml(),
        ))?;
        for part in property_parts {
            package.add_part(part)?;
        }

        // Document properties
        let core_uri = PackURI::new(CORE_PROPS_PARTNAME)?;
        let app_uri = PackURI::new(APP_PROPS_PARTNAME)?;
        package.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml(),
        ))?;
        package.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            app_properties_xml(self.slides.len()),
        ))?;

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        package.validate()?;
        Ok(package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the presentation to `path`, replacing any existing file.
    ///
    /// The archive is written to a temporary file next to `path` and renamed
    /// into place, so `path` either holds the complete deck or is untouched.
    /// Returns the number of bytes written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;

        // NamedTempFile creates files as 0600
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(path).map_err(|e| e.error)?;
        Ok(bytes.len() as u64)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
