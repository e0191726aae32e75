//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod props;
pub mod shape;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use props::CoreProperties;
pub use shape::{PlaceholderKind, PlaceholderShape};
pub use slide::{LayoutSlot, MutableSlide};
pub use text::{Paragraph, RunFormat, TextFrame};
