/// Relationship objects for OPC packages.
///
/// A `.rels` part lists, for one source part (or the package itself), the
/// targets it refers to. Ids are allocated as `rId1`, `rId2`, ... in
/// insertion order and serialized in that same order.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as _;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    /// Target reference relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Relationship ID (e.g., "rId1")
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships for one source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI target references are made relative to
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Get or add a relationship to `target`.
    ///
    /// Reuses an existing relationship of the same type to the same target.
    /// Returns the relationship ID.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels
            .push(Relationship::new(r_id.clone(), reltype.to_string(), target_ref));
        r_id
    }

    /// Add a relationship with a caller-chosen id.
    ///
    /// Template parts reference their targets by fixed ids, so those ids
    /// must be reproduced exactly.
    pub fn add_with_id(&mut self, r_id: &str, target: &PackURI, reltype: &str) -> Result<()> {
        if self.get(r_id).is_some() {
            return Err(OpcError::InvalidRelationship(format!(
                "Duplicate relationship id '{}'",
                r_id
            )));
        }
        let target_ref = target.relative_ref(&self.base_uri);
        self.rels.push(Relationship::new(
            r_id.to_string(),
            reltype.to_string(),
            target_ref,
        ));
        Ok(())
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Lowest `rIdN` not in use.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id.strip_prefix("rId"))
            .filter_map(|n| n.parse().ok())
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for n in used {
            match n.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }
        format!("rId{}", next)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to `.rels` XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/")
    }
}
