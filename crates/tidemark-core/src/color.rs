#![forbid(unsafe_code)]

//! Color types and category palettes.
//!
//! Fill colors are looked up by record category through a [`Palette`]:
//! a many-to-one mapping with a fallback color, so unknown categories
//! still render. Future records override the palette with [`FUTURE`]
//! regardless of category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fill for future records and the NOW line.
pub const FUTURE: Rgb = Rgb::new(0xe0, 0xb8, 0x00);
/// Fill for memory marks.
pub const MEMORY: Rgb = Rgb::new(0x5a, 0x3f, 0x6e);
/// Default fill for magnitude dots.
pub const DEEP_SEA: Rgb = Rgb::new(0x0a, 0x23, 0x42);
/// Track background.
pub const NIGHT: Rgb = Rgb::new(0x05, 0x0d, 0x1a);

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Category → color lookup with a fallback for unknown categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: FxHashMap<String, Rgb>,
    fallback: Rgb,
}

impl Palette {
    /// Create an empty palette with the given fallback color.
    #[must_use]
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: FxHashMap::default(),
            fallback,
        }
    }

    /// Add a category color (builder pattern).
    #[must_use]
    pub fn with(mut self, category: impl Into<String>, color: Rgb) -> Self {
        self.colors.insert(category.into(), color);
        self
    }

    /// Add or replace a category color.
    pub fn set(&mut self, category: impl Into<String>, color: Rgb) {
        self.colors.insert(category.into(), color);
    }

    /// Fill color for a category; unknown categories get the fallback.
    #[must_use]
    pub fn color_for(&self, category: &str) -> Rgb {
        self.colors.get(category).copied().unwrap_or(self.fallback)
    }

    /// The fallback color.
    #[inline]
    #[must_use]
    pub const fn fallback(&self) -> Rgb {
        self.fallback
    }

    /// Number of explicit category entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The disaster-type colorway used by the night-scene charts.
    #[must_use]
    pub fn disasters() -> Self {
        Self::new(Rgb::new(0x16, 0x21, 0x3e))
            .with("Storm", Rgb::new(0x43, 0x61, 0xee))
            .with("Flood", Rgb::new(0x4c, 0xc9, 0xf0))
            .with("Earthquake", Rgb::new(0x72, 0x09, 0xb7))
            .with("Volcanic activity", Rgb::new(0xf7, 0x25, 0x85))
            .with("Mass movement (wet)", Rgb::new(0x3a, 0x0c, 0xa3))
            .with("Mass movement (dry)", Rgb::new(0x53, 0x34, 0x83))
            .with("Drought", Rgb::new(0x48, 0x95, 0xef))
            .with("Epidemic", Rgb::new(0xb5, 0x17, 0x9e))
            .with("Wildfire", Rgb::new(0x0f, 0x34, 0x60))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::disasters()
    }
}
