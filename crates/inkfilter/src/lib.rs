//! # inkfilter
//!
//! Select the cells of a spreadsheet range whose font color matches a given
//! color, as a spreadsheet custom function would.
//!
//! The host spreadsheet stays external: the filter talks to it through the
//! [`SpreadsheetHost`] and [`RangeHandle`] traits. Two hosts ship with the
//! crate, an in-memory [`MemorySheet`] and JSON [`SheetSnapshot`]s that load
//! into one.
//!
//! ## Example
//!
//! ```rust
//! use inkfilter::prelude::*;
//!
//! let mut sheet = MemorySheet::new("Sheet1");
//! sheet.set_cell("A1", "a", FontColor::rgb("#ff0000")).unwrap();
//! sheet.set_cell("B1", "b", FontColor::rgb("#00ff00")).unwrap();
//! sheet.set_cell("A2", "c", FontColor::named("red")).unwrap();
//! sheet.set_cell("B2", "d", FontColor::rgb("#ff0000")).unwrap();
//!
//! let block = sheet.read_values(&CellRange::parse("A1:B2").unwrap());
//! let found = filter_by_color(
//!     &sheet,
//!     &CellValue::from("#ff0000"),
//!     &block,
//!     &CellValue::from(1),
//!     &CellValue::from(1),
//! )
//! .unwrap();
//!
//! let found: Vec<String> = found.iter().map(|v| v.to_string()).collect();
//! assert_eq!(found, ["a", "c", "d"]);
//! ```

pub mod error;
pub mod filter;
pub mod host;
pub mod memory;
pub mod options;
pub mod prelude;
pub mod snapshot;

pub use error::{
    FilterError, FilterResult, HostError, InvalidInput, ProcessingError, SnapshotError,
    PROCESSING_ERROR_MESSAGE,
};
pub use filter::{
    block_extent, block_range, filter_by_color, resolve_name_value, validate_color, ColorFilter,
};
pub use host::{RangeHandle, SpreadsheetHost};
pub use memory::{MemoryCell, MemoryRange, MemorySheet};
pub use options::{ColumnLetters, FilterOptions};
pub use snapshot::{SheetSnapshot, SnapshotCell, SnapshotColor, SnapshotValue};

// Re-export core types
pub use inkfilter_core::{
    named, named::resolve_name, CellAddress, CellRange, CellValue, Color, FontColor,
    SharedString, MAX_COLS, MAX_ROWS,
};
