//! opd-deck - builds the OPD-EMR overview deck as a PowerPoint (.pptx) file
//!
//! The deck is data: an ordered list of slide specs (title, layout, body
//! text, optional title style) and a palette of named colors. The builder
//! renders each slide spec onto a title or title-and-body layout and writes a
//! self-contained Office Open XML package.
//!
//! # Features
//!
//! - **ooxml** (default): the PresentationML writer. Without it every build
//!   fails with [`Error::DependencyMissing`].
//! - **serve** (default): the static-file server behind `opd-test-server`.
//!
//! # Example - Building the built-in deck
//!
//! ```no_run
//! use opd_deck::presentation::{DeckBuilder, content};
//!
//! # fn main() -> Result<(), opd_deck::Error> {
//! let deck = content::opd_emr_deck()?;
//! let report = DeckBuilder::new(deck.palette)
//!     .with_metadata(deck.metadata)
//!     .build(&deck.slides, content::DEFAULT_OUTPUT)?;
//! println!("wrote {}", report.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - A custom deck
//!
//! ```no_run
//! use opd_deck::presentation::{LayoutKind, SlideSpec, StylePalette, TitleStyle, build};
//!
//! # fn main() -> Result<(), opd_deck::Error> {
//! let specs = vec![
//!     SlideSpec::new("Title", LayoutKind::Title, "")
//!         .with_title_style(TitleStyle::emphasis("primary")),
//!     SlideSpec::new("Summary", LayoutKind::TitleAndBody, "Point A\nPoint B"),
//! ];
//! build(&specs, &StylePalette::healthcare(), "out.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared error, color, unit and XML helpers
pub mod common;

/// Slide specs, palettes, deck files and the deck builder
pub mod presentation;

/// OOXML (Office Open XML) package and PresentationML writer
#[cfg(feature = "ooxml")]
pub mod ooxml;

/// Static-file server for the HTML test pages
#[cfg(feature = "serve")]
pub mod serve;

pub use common::{Error, Result};
pub use presentation::{DeckBuilder, SlideSpec, StylePalette};
