//! PowerPoint (.pptx) presentation writing.
//!
//! A presentation is built in memory with [`MutablePresentation`], one
//! [`MutableSlide`] per slide, and serialized into an OPC package together
//! with the template parts in [`template`].
//!
//! ```rust,no_run
//! use opd_deck::ooxml::pptx::{LayoutSlot, MutablePresentation};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(LayoutSlot::TitleSlide).set_title("OPD-EMR");
//! let bytes = pres.to_bytes()?;
//! # Ok::<(), opd_deck::ooxml::OoxmlError>(())
//! ```

pub mod template;
pub mod writer;

pub use writer::{
    CoreProperties, LayoutSlot, MutablePresentation, MutableSlide, PlaceholderKind,
    PlaceholderShape, RunFormat, TextFrame,
};
