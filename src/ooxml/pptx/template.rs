//! Presentation template parts.
//!
//! The slide master, both layouts, the theme and the three property parts are
//! static XML shipped with the crate, minified at compile time. Parts whose
//! content depends on the deck (presentation.xml, slides, docProps) are
//! generated by the writer instead.

use crate::ooxml::opc::constants::content_type as ct;
use xml_minifier::minified_xml;

pub const SLIDE_MASTER_PARTNAME: &str = "/ppt/slideMasters/slideMaster1.xml";
pub const THEME_PARTNAME: &str = "/ppt/theme/theme1.xml";
pub const PRES_PROPS_PARTNAME: &str = "/ppt/presProps.xml";
pub const VIEW_PROPS_PARTNAME: &str = "/ppt/viewProps.xml";
pub const TABLE_STYLES_PARTNAME: &str = "/ppt/tableStyles.xml";

/// Slide master with title and body placeholders and the text styles both
/// layouts inherit. Its `sldLayoutIdLst` refers to layout 1 as `rId1` and
/// layout 2 as `rId2`.
pub fn default_slide_master_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/slideMasters/slideMaster1.xml")
}

/// Slide layout 1 (Title Slide): centered title and subtitle.
pub fn slide_layout_1_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/slideLayouts/slideLayout1.xml")
}

/// Slide layout 2 (Title and Content): title plus one body placeholder.
pub fn slide_layout_2_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/slideLayouts/slideLayout2.xml")
}

pub fn default_theme_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    minified_xml!("src/ooxml/pptx/resources/presProps.xml")
}

/// Presentation-level parts related from `presentation.xml`, other than the
/// master and slides: (partname, content type, xml).
pub fn presentation_property_parts() -> [(&'static str, &'static str, &'static str); 3] {
    [
        (PRES_PROPS_PARTNAME, ct::PML_PRES_PROPS, default_pres_props_xml()),
        (VIEW_PROPS_PARTNAME, ct::PML_VIEW_PROPS, default_view_props_xml()),
        (TABLE_STYLES_PARTNAME, ct::PML_TABLE_STYLES, default_table_styles_xml()),
    ]
}
