//! Named colors for selective text emphasis.

use crate::common::RGBColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from semantic color name to RGB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylePalette {
    colors: BTreeMap<String, RGBColor>,
}

impl StylePalette {
    /// An empty palette.
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// The healthcare palette of the OPD-EMR deck.
    pub fn healthcare() -> Self {
        [
            ("primary", RGBColor::new(30, 64, 175)),
            ("accent-green", RGBColor::new(5, 150, 105)),
            ("accent-red", RGBColor::new(220, 38, 38)),
            ("neutral-dark", RGBColor::new(55, 65, 81)),
            ("neutral-light", RGBColor::new(156, 163, 175)),
        ]
        .into_iter()
        .collect()
    }

    pub fn get(&self, name: &str) -> Option<RGBColor> {
        self.colors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::healthcare()
    }
}

impl<S: Into<String>> FromIterator<(S, RGBColor)> for StylePalette {
    fn from_iter<I: IntoIterator<Item = (S, RGBColor)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
