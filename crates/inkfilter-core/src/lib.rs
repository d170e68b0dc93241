//! # inkfilter-core
//!
//! Core data structures for the inkfilter font-color filter.
//!
//! This crate provides the types shared by the filter and its hosts:
//! - [`CellValue`] - Scalar cell values (strings, numbers, booleans, dates)
//! - [`CellAddress`] and [`CellRange`] - A1-style cell addressing
//! - [`Color`] and [`FontColor`] - Colors and the font-color descriptors hosts report
//! - [`named`] - The static CSS color-name table
//!
//! ## Example
//!
//! ```rust
//! use inkfilter_core::{CellAddress, CellRange, FontColor};
//!
//! let range = CellRange::new(CellAddress::new(0, 0), CellAddress::new(1, 1));
//! assert_eq!(range.to_a1_string(), "A1:B2");
//!
//! let color = FontColor::named("Red");
//! assert_eq!(color.normalized(), "#ff0000");
//! ```

pub mod cell;
pub mod error;
pub mod style;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue, SharedString};
pub use error::{Error, Result};
pub use style::{named, Color, FontColor};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
