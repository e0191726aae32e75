/// In-memory OPC package assembled before writing.
///
/// Parts are stored in insertion order, which becomes the archive member
/// order when the package is written.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;

pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,
    parts: Vec<Part>,
    /// Partname to index in `parts`
    index: HashMap<String, usize>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a part. Part names must be unique within the package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        let name = part.partname().to_string();
        if self.index.contains_key(&name) {
            return Err(OpcError::DuplicatePart(name));
        }
        self.index.insert(name, self.parts.len());
        self.parts.push(part);
        Ok(())
    }

    pub fn get_part(&self, partname: &PackURI) -> Option<&Part> {
        self.index
            .get(partname.as_str())
            .map(|&idx| &self.parts[idx])
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.index.contains_key(partname.as_str())
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(partname, reltype)
    }

    /// Check that every internal relationship points at a part in the package.
    pub fn validate(&self) -> Result<()> {
        let sources = std::iter::once((PACKAGE_URI, &self.rels))
            .chain(self.parts.iter().map(|p| (p.partname().as_str(), p.rels())));

        for (source, rels) in sources {
            for rel in rels.iter() {
                let target = resolve(rels.base_uri(), rel.target_ref());
                if !self.index.contains_key(&target) {
                    return Err(OpcError::InvalidRelationship(format!(
                        "{} {} points at missing part {}",
                        source,
                        rel.r_id(),
                        target
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a relative target reference against a base URI.
fn resolve(base_uri: &str, target_ref: &str) -> String {
    let mut segments: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
    for seg in target_ref.split('/') {
        match seg {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            _ => segments.push(seg),
        }
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn part(name: &str) -> Part {
        Part::new(PackURI::new(name).unwrap(), ct::XML, "<x/>")
    }

    #[test]
    fn test_add_part_rejects_duplicates() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/presProps.xml")).unwrap();
        assert!(matches!(
            pkg.add_part(part("/ppt/presProps.xml")),
            Err(OpcError::DuplicatePart(_))
        ));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_parts_iterate_in_insertion_order() {
        let mut pkg = OpcPackage::new();
        for name in ["/ppt/slides/slide2.xml", "/ppt/slides/slide10.xml", "/ppt/slides/slide1.xml"] {
            pkg.add_part(part(name)).unwrap();
        }
        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            ["/ppt/slides/slide2.xml", "/ppt/slides/slide10.xml", "/ppt/slides/slide1.xml"]
        );
    }

    #[test]
    fn test_validate_detects_dangling_relationship() {
        let mut pkg = OpcPackage::new();
        let mut slide = part("/ppt/slides/slide1.xml");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        pkg.add_part(slide).unwrap();
        assert!(pkg.validate().is_err());

        pkg.add_part(part("/ppt/slideLayouts/slideLayout1.xml")).unwrap();
        pkg.validate().unwrap();
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/ppt/slides", "../slideLayouts/slideLayout1.xml"), "/ppt/slideLayouts/slideLayout1.xml");
        assert_eq!(resolve("/", "ppt/presentation.xml"), "/ppt/presentation.xml");
    }
}
