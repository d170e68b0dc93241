//! Color types
//!
//! This module contains:
//! - [`Color`] - An RGB color
//! - [`FontColor`] - A font color as reported by a host, RGB or named
//! - [`named`] - The CSS color keyword table

mod color;
mod font;
pub mod named;

pub use color::Color;
pub use font::FontColor;
