//! Office Open XML (OOXML) writing.
//!
//! Layered the usual way for OOXML:
//!
//! 1. **OPC Layer** (`opc`): part names, content types, relationships and the
//!    ZIP package writer
//! 2. **PresentationML** (`pptx`): the slide model and its serialization into
//!    a `.pptx` package
//!
//! # Example
//!
//! ```rust,no_run
//! use opd_deck::ooxml::pptx::{LayoutSlot, MutablePresentation};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(LayoutSlot::TitleAndContent);
//! slide.set_title("Summary");
//! slide.set_body("Point A\nPoint B");
//! pres.save("out.pptx")?;
//! # Ok::<(), opd_deck::ooxml::OoxmlError>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
