//! Export records and CSS snippets
//!
//! Plain serde records that a persistence layer can store as JSON, a bounded
//! newest-first history for saved items, and the CSS declarations the palette
//! views offer for copying.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::color::{color_name, Alpha, Rgb};
use crate::constants::css::{BOX_SHADOW_OPACITY, TEXT_SHADOW_OPACITY};
use crate::constants::history::{MAX_SAVED_COLORS, MAX_SAVED_PALETTES};
use crate::error::{Result, SwatchError};

/// A color the user saved, with the alpha and name shown at the time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedColor {
    pub hex: String,
    /// Opacity percentage
    pub alpha: Alpha,
    pub name: String,
    /// Milliseconds since the Unix epoch, supplied by the caller
    pub timestamp: u64,
}

impl SavedColor {
    pub fn capture(color: Rgb, alpha: Alpha, timestamp: u64) -> Self {
        let hex = color.to_hex();
        let name = color_name(&hex);
        Self {
            hex,
            alpha,
            name,
            timestamp,
        }
    }
}

/// A palette the user saved under a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub colors: Vec<String>,
    pub timestamp: u64,
}

impl SavedPalette {
    pub fn new(name: impl Into<String>, colors: &[Rgb], timestamp: u64) -> Self {
        Self {
            name: name.into(),
            colors: colors.iter().map(|c| c.to_hex()).collect(),
            timestamp,
        }
    }
}

/// Newest-first list that drops its oldest entries past a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HistoryFields<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct History<T> {
    capacity: usize,
    items: VecDeque<T>,
}

/// Unchecked wire form of [`History`]
#[derive(Deserialize)]
struct HistoryFields<T> {
    capacity: usize,
    items: VecDeque<T>,
}

/// Stored lists longer than their capacity keep only the newest entries
impl<T> From<HistoryFields<T>> for History<T> {
    fn from(fields: HistoryFields<T>) -> Self {
        let mut items = fields.items;
        items.truncate(fields.capacity);
        Self {
            capacity: fields.capacity,
            items,
        }
    }
}

impl<T> History<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert at the front, evicting the oldest entry when full
    pub fn push(&mut self, item: T) {
        self.items.push_front(item);
        self.items.truncate(self.capacity);
    }

    /// Remove every entry matching `predicate`, returning how many were removed
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl History<SavedColor> {
    /// Saved colors, up to 50
    pub fn colors() -> Self {
        Self::with_capacity(MAX_SAVED_COLORS)
    }
}

impl History<SavedPalette> {
    /// Saved palettes, up to 20
    pub fn palettes() -> Self {
        Self::with_capacity(MAX_SAVED_PALETTES)
    }
}

/// Downloadable palette document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteExport {
    pub name: String,
    pub colors: Vec<String>,
    /// ISO-8601 timestamp, supplied by the caller
    pub timestamp: String,
}

impl PaletteExport {
    pub fn new(name: impl Into<String>, colors: &[Rgb], timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: colors.iter().map(|c| c.to_hex()).collect(),
            timestamp: timestamp.into(),
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SwatchError::export(format!("Failed to serialize palette '{}'", self.name), e))
    }

    /// Suggested download name: lowercase, whitespace runs collapsed to `-`
    pub fn file_name(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut in_space = false;
        for c in self.name.chars() {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('-');
                }
                in_space = true;
            } else {
                slug.extend(c.to_lowercase());
                in_space = false;
            }
        }
        format!("{slug}-palette.json")
    }
}

fn join_hex(stops: &[Rgb]) -> String {
    stops.iter().map(|c| c.to_hex()).collect::<Vec<_>>().join(", ")
}

fn rgba(color: Rgb, opacity: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, opacity)
}

/// `background: linear-gradient(<angle>deg, <stops>);`
pub fn css_linear_gradient(stops: &[Rgb], angle_degrees: u16) -> String {
    format!("background: linear-gradient({angle_degrees}deg, {});", join_hex(stops))
}

/// `background: radial-gradient(circle, <stops>);`
pub fn css_radial_gradient(stops: &[Rgb]) -> String {
    format!("background: radial-gradient(circle, {});", join_hex(stops))
}

pub fn css_box_shadow(color: Rgb) -> String {
    format!("box-shadow: 0 4px 6px {};", rgba(color, BOX_SHADOW_OPACITY))
}

pub fn css_text_shadow(color: Rgb) -> String {
    format!("text-shadow: 2px 2px 4px {};", rgba(color, TEXT_SHADOW_OPACITY))
}
