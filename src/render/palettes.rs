//! Categorical palettes for particle markers
//!
//! Palettes are loaded from palettes.json (embedded at compile time). Each
//! particle of a frame takes the next color of the cycle, so particle `i` is
//! always drawn with `colors[i % len]` and keeps its color across frames.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Embedded palettes.json content
const PALETTES_JSON: &str = include_str!("../../palettes.json");

/// Default palette name (matplotlib's property cycle)
pub const DEFAULT_PALETTE: &str = "tab10";

const FALLBACK_COLOR: [u8; 3] = [128, 128, 128];

/// Global palette registry, initialized lazily on first access
pub static PALETTE_REGISTRY: Lazy<PaletteRegistry> = Lazy::new(|| {
    PaletteRegistry::from_json(PALETTES_JSON).unwrap_or_else(|e| {
        error!(error = %e, "Failed to load palettes.json");
        PaletteRegistry::default()
    })
});

/// A single palette definition from palettes.json
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    /// Get a color by index (wraps around)
    pub fn color(&self, index: usize) -> [u8; 3] {
        if self.colors.is_empty() {
            return FALLBACK_COLOR;
        }
        parse_hex_color(&self.colors[index % self.colors.len()]).unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Registry of all available palettes
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    /// Lowercase keys for case-insensitive lookup
    palettes: HashMap<String, Palette>,
}

impl PaletteRegistry {
    /// Load palettes from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let definitions: Vec<Palette> = serde_json::from_str(json)?;

        let mut registry = Self::default();
        for def in definitions {
            registry.palettes.insert(def.name.to_lowercase(), def);
        }

        debug!(palettes = registry.palettes.len(), "Loaded palette registry");
        Ok(registry)
    }

    /// Get a palette by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(&name.to_lowercase())
    }

    /// Named palette, falling back to the default one
    pub fn resolve(&self, name: &str) -> Option<&Palette> {
        self.get(name).or_else(|| {
            warn!(palette = name, fallback = DEFAULT_PALETTE, "Unknown palette");
            self.get(DEFAULT_PALETTE)
        })
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (alpha ignored, `#` optional)
fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        warn!(color = hex, "Invalid hex color length");
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some([r, g, b])
}
