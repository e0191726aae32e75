//! Deck model and builder.
//!
//! A deck is an ordered list of [`SlideSpec`]s plus a [`StylePalette`].
//! [`DeckBuilder`] renders each slide spec onto its layout and saves the result as
//! one `.pptx` file.
//!
//! # Architecture
//!
//! - `types`: slide specs, title styles, deck metadata, build reports
//! - `palette`: named colors referenced by title styles
//! - `config`: YAML deck files
//! - `content`: the built-in OPD-EMR deck
//! - `builder`: validation, rendering, save
//!
//! # Example
//!
//! ```rust,no_run
//! use opd_deck::presentation::{DeckBuilder, content};
//!
//! let deck = content::opd_emr_deck()?;
//! let report = DeckBuilder::new(deck.palette.clone())
//!     .with_metadata(deck.metadata.clone())
//!     .build(&deck.slides, content::DEFAULT_OUTPUT)?;
//! println!("{} slides, {} bytes", report.slide_count, report.bytes);
//! # Ok::<(), opd_deck::Error>(())
//! ```

// Submodule declarations
mod builder;
pub mod config;
pub mod content;
mod palette;
mod types;

// Re-exports
pub use builder::{DeckBuilder, build};
pub use config::{ConfigError, DeckFile};
pub use palette::StylePalette;
pub use types::{BuildReport, DeckMetadata, LayoutKind, SlideSpec, TitleStyle};
