/// Open Packaging Conventions (OPC) writer.
///
/// The container format underneath `.pptx`: a ZIP archive holding parts,
/// a `[Content_Types].xml` mapping each part to its content type, and
/// `.rels` parts describing how parts refer to each other.
///
/// This layer only writes packages. Parts are kept in insertion order so
/// the archive member order, and with it the output bytes, is stable.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
