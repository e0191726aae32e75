//! Package parts.
//!
//! Every part the writer produces is serialized up front, so a part is just
//! its name, content type, bytes and outgoing relationships.

use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob: blob.into(),
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the part content, e.g. once relationship ids it embeds are known.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Relate this part to `target`, returning the relationship ID.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_part_rels_use_part_directory() {
        let mut part = Part::new(
            PackURI::new("/ppt/slides/slide3.xml").unwrap(),
            ct::PML_SLIDE,
            "<p:sld/>",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        let r_id = part.relate_to(&layout, rt::SLIDE_LAYOUT);

        assert_eq!(r_id, "rId1");
        assert_eq!(part.rels().base_uri(), "/ppt/slides");
        assert_eq!(
            part.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
        assert_eq!(part.blob(), b"<p:sld/>");
        assert_eq!(part.content_type(), ct::PML_SLIDE);
    }
}
