//! Prelude module - common imports for inkfilter users
//!
//! ```rust
//! use inkfilter::prelude::*;
//! ```

pub use crate::{
    // Entry points
    filter_by_color,
    resolve_name,
    // Cell types
    CellAddress,
    CellRange,
    CellValue,
    ColorFilter,
    // Options
    ColumnLetters,
    FilterOptions,
    FontColor,
    // Hosts
    MemorySheet,
    // Error types
    ProcessingError,
    RangeHandle,
    SheetSnapshot,
    SpreadsheetHost,
};
