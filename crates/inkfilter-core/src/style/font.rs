//! Font color descriptors

use super::{named, Color};
use std::borrow::Cow;
use std::fmt;

/// A font color as reported by a host spreadsheet
///
/// Hosts describe a cell's font color either as an RGB value, already
/// rendered as a hex string, or as a CSS color keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontColor {
    /// RGB color, hex string exactly as the host reported it (e.g. "#ff0000")
    Rgb(String),
    /// CSS color keyword (e.g. "tomato")
    Named(String),
}

impl FontColor {
    /// Create an RGB descriptor from a host hex string
    pub fn rgb<S: Into<String>>(hex: S) -> Self {
        FontColor::Rgb(hex.into())
    }

    /// Create a named-color descriptor
    pub fn named<S: Into<String>>(name: S) -> Self {
        FontColor::Named(name.into())
    }

    /// Resolve to the string compared against a target color
    ///
    /// RGB descriptors are returned as-is. Named colors go through the
    /// keyword table; a name missing from the table is returned unchanged,
    /// so it can never equal a `#RRGGBB` target.
    pub fn normalized(&self) -> Cow<'_, str> {
        match self {
            FontColor::Rgb(hex) => Cow::Borrowed(hex.as_str()),
            FontColor::Named(name) => named::resolve_name(name),
        }
    }
}

impl Default for FontColor {
    fn default() -> Self {
        FontColor::from(Color::BLACK)
    }
}

impl From<Color> for FontColor {
    fn from(color: Color) -> Self {
        FontColor::Rgb(color.to_hex())
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontColor::Rgb(hex) => write!(f, "{}", hex),
            FontColor::Named(name) => write!(f, "named:{}", name),
        }
    }
}
