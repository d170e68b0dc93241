//! Host spreadsheet interface
//!
//! The filter never owns cell data. It derives a range address, asks the
//! host for a handle to that range, then performs two independent reads
//! through the handle: font colors first, then values. The reads are not
//! atomic; a host that is edited between them may return values and colors
//! from different moments.

use crate::error::HostError;
use inkfilter_core::{CellRange, CellValue, FontColor};

/// A spreadsheet the filter can read from
pub trait SpreadsheetHost {
    /// Handle to a resolved range
    type Range<'a>: RangeHandle
    where
        Self: 'a;

    /// Resolve a range address against the live sheet
    fn resolve_range(&self, range: &CellRange) -> Result<Self::Range<'_>, HostError>;
}

/// A resolved rectangular range
///
/// Both reads return one inner `Vec` per row, top to bottom, each row
/// ordered left to right.
pub trait RangeHandle {
    /// Font color of every cell in the range
    fn font_colors(&self) -> Result<Vec<Vec<FontColor>>, HostError>;

    /// Current value of every cell in the range
    fn values(&self) -> Result<Vec<Vec<CellValue>>, HostError>;
}
