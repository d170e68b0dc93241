//! In-memory host sheet

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::host::{RangeHandle, SpreadsheetHost};
use inkfilter_core::{CellAddress, CellRange, CellValue, FontColor, Result};

/// A single stored cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCell {
    /// Cell value
    pub value: CellValue,
    /// Font color
    pub font_color: FontColor,
}

/// A sparse sheet held in memory
///
/// Cells that were never set read as [`CellValue::Empty`] with a black
/// (`#000000`) font.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    cells: BTreeMap<(u32, u16), MemoryCell>,
}

impl MemorySheet {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // === Cell Access ===

    /// Set a cell value by address string (e.g., "A1")
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_at(addr.row, addr.col, value);
        Ok(())
    }

    /// Set a cell's font color by address string
    pub fn set_font_color(&mut self, address: &str, color: FontColor) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_font_color_at(addr.row, addr.col, color);
        Ok(())
    }

    /// Set both value and font color by address string
    pub fn set_cell<V: Into<CellValue>>(
        &mut self,
        address: &str,
        value: V,
        color: FontColor,
    ) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.cells.insert(
            (addr.row, addr.col),
            MemoryCell {
                value: value.into(),
                font_color: color,
            },
        );
        Ok(())
    }

    /// Set a cell value by 0-based indices
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) {
        self.cells.entry((row, col)).or_default().value = value.into();
    }

    /// Set a cell's font color by 0-based indices
    pub fn set_font_color_at(&mut self, row: u32, col: u16, color: FontColor) {
        self.cells.entry((row, col)).or_default().font_color = color;
    }

    /// Get a stored cell by 0-based indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&MemoryCell> {
        self.cells.get(&(row, col))
    }

    /// Get a cell value by 0-based indices
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Get a cell's font color by 0-based indices
    pub fn font_color_at(&self, row: u32, col: u16) -> FontColor {
        self.cells
            .get(&(row, col))
            .map(|c| c.font_color.clone())
            .unwrap_or_default()
    }

    /// Iterate over stored cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &MemoryCell)> + '_ {
        self.cells
            .iter()
            .map(|((row, col), cell)| (CellAddress::new(*row, *col), cell))
    }

    /// Smallest range covering every stored cell
    pub fn used_range(&self) -> Option<CellRange> {
        let mut keys = self.cells.keys();
        let &(first_row, first_col) = keys.next()?;
        let (mut min_col, mut max_row, mut max_col) = (first_col, first_row, first_col);
        for &(row, col) in keys {
            min_col = min_col.min(col);
            max_row = max_row.max(row);
            max_col = max_col.max(col);
        }
        Some(CellRange::new(
            CellAddress::new(first_row, min_col),
            CellAddress::new(max_row, max_col),
        ))
    }

    /// Materialize the values of a range as a block of rows
    pub fn read_values(&self, range: &CellRange) -> Vec<Vec<CellValue>> {
        self.grid(range, |row, col| self.value_at(row, col))
    }

    /// Materialize the font colors of a range as a block of rows
    pub fn read_font_colors(&self, range: &CellRange) -> Vec<Vec<FontColor>> {
        self.grid(range, |row, col| self.font_color_at(row, col))
    }

    fn grid<T>(&self, range: &CellRange, read: impl Fn(u32, u16) -> T) -> Vec<Vec<T>> {
        let cols = range.col_count() as usize;
        let mut rows = Vec::with_capacity(range.row_count() as usize);
        let mut row = Vec::with_capacity(cols);
        for addr in range.cells() {
            row.push(read(addr.row, addr.col));
            if row.len() == cols {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(cols)));
            }
        }
        rows
    }
}

/// Handle to a range of a [`MemorySheet`]
#[derive(Debug, Clone, Copy)]
pub struct MemoryRange<'a> {
    sheet: &'a MemorySheet,
    range: CellRange,
}

impl SpreadsheetHost for MemorySheet {
    type Range<'a> = MemoryRange<'a>;

    fn resolve_range(&self, range: &CellRange) -> std::result::Result<MemoryRange<'_>, HostError> {
        Ok(MemoryRange {
            sheet: self,
            range: *range,
        })
    }
}

impl RangeHandle for MemoryRange<'_> {
    fn font_colors(&self) -> std::result::Result<Vec<Vec<FontColor>>, HostError> {
        Ok(self.sheet.read_font_colors(&self.range))
    }

    fn values(&self) -> std::result::Result<Vec<Vec<CellValue>>, HostError> {
        Ok(self.sheet.read_values(&self.range))
    }
}
