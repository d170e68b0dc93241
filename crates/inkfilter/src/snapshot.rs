//! JSON sheet snapshots
//!
//! A snapshot is a plain JSON description of a sheet's cells, values and
//! font colors:
//!
//! ```json
//! {
//!   "name": "Sheet1",
//!   "cells": [
//!     { "address": "A1", "value": "a", "font_color": "#ff0000" },
//!     { "address": "A2", "value": 3.5, "font_color": { "named": "red" } },
//!     { "address": "B2", "value": { "date": "2024-03-01T09:30:00" } }
//!   ]
//! }
//! ```
//!
//! Loading one yields a [`MemorySheet`] the filter can run against.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::memory::MemorySheet;
use inkfilter_core::{CellAddress, CellValue, FontColor};

/// Serialized form of a sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetSnapshot {
    /// Sheet name
    #[serde(default)]
    pub name: String,
    /// Non-empty cells
    #[serde(default)]
    pub cells: Vec<SnapshotCell>,
}

/// One cell of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCell {
    /// A1-style address
    pub address: String,
    /// Cell value (default: empty)
    #[serde(default)]
    pub value: SnapshotValue,
    /// Font color (default: black)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<SnapshotColor>,
}

/// A cell value as it appears in JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date { date: NaiveDateTime },
}

/// A font color as it appears in JSON: `"#rrggbb"` or `{ "named": "red" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotColor {
    Rgb(String),
    Named { named: String },
}

impl SheetSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to a JSON file
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Capture every stored cell of a sheet
    pub fn from_sheet(sheet: &MemorySheet) -> Self {
        let cells = sheet
            .cells()
            .map(|(addr, cell)| SnapshotCell {
                address: addr.to_a1_string(),
                value: SnapshotValue::from(&cell.value),
                font_color: Some(SnapshotColor::from(&cell.font_color)),
            })
            .collect();

        Self {
            name: sheet.name().to_string(),
            cells,
        }
    }

    /// Build a sheet from the snapshot
    ///
    /// Later entries for the same address replace earlier ones.
    pub fn to_sheet(&self) -> Result<MemorySheet, SnapshotError> {
        let mut sheet = MemorySheet::new(self.name.clone());

        for cell in &self.cells {
            let addr = CellAddress::parse(&cell.address).map_err(|source| SnapshotError::Cell {
                address: cell.address.clone(),
                source,
            })?;
            sheet.set_value_at(addr.row, addr.col, CellValue::from(cell.value.clone()));
            sheet.set_font_color_at(
                addr.row,
                addr.col,
                cell.font_color
                    .clone()
                    .map(FontColor::from)
                    .unwrap_or_default(),
            );
        }

        Ok(sheet)
    }
}

impl From<SnapshotValue> for CellValue {
    fn from(value: SnapshotValue) -> Self {
        match value {
            SnapshotValue::Null => CellValue::Empty,
            SnapshotValue::Bool(b) => CellValue::Boolean(b),
            SnapshotValue::Number(n) => CellValue::Number(n),
            SnapshotValue::String(s) => CellValue::string(s),
            SnapshotValue::Date { date } => CellValue::Date(date),
        }
    }
}

impl From<&CellValue> for SnapshotValue {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => SnapshotValue::Null,
            CellValue::Boolean(b) => SnapshotValue::Bool(*b),
            CellValue::Number(n) => SnapshotValue::Number(*n),
            CellValue::String(s) => SnapshotValue::String(s.to_string()),
            CellValue::Date(d) => SnapshotValue::Date { date: *d },
        }
    }
}

impl From<SnapshotColor> for FontColor {
    fn from(color: SnapshotColor) -> Self {
        match color {
            SnapshotColor::Rgb(hex) => FontColor::Rgb(hex),
            SnapshotColor::Named { named } => FontColor::Named(named),
        }
    }
}

impl From<&FontColor> for SnapshotColor {
    fn from(color: &FontColor) -> Self {
        match color {
            FontColor::Rgb(hex) => SnapshotColor::Rgb(hex.clone()),
            FontColor::Named(name) => SnapshotColor::Named {
                named: name.clone(),
            },
        }
    }
}
