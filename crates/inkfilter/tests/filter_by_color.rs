//! End-to-end tests for the font-color filter against in-memory and scripted hosts

use std::cell::RefCell;

use inkfilter::prelude::*;
use inkfilter::{FilterError, HostError, InvalidInput, PROCESSING_ERROR_MESSAGE};
use pretty_assertions::assert_eq;

fn values(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
    rows.iter()
        .map(|row| row.iter().map(|v| CellValue::from(*v)).collect())
        .collect()
}

/// Sheet from the reference scenario: A1:B2 holding a, b, c, d
fn scenario_sheet() -> MemorySheet {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.set_cell("A1", "a", FontColor::rgb("#ff0000")).unwrap();
    sheet.set_cell("B1", "b", FontColor::rgb("#00ff00")).unwrap();
    sheet.set_cell("A2", "c", FontColor::named("red")).unwrap();
    sheet.set_cell("B2", "d", FontColor::rgb("#ff0000")).unwrap();
    sheet
}

fn call<H: SpreadsheetHost>(
    host: &H,
    color: CellValue,
    block: &[Vec<CellValue>],
    col: CellValue,
    row: CellValue,
) -> Result<Vec<CellValue>, ProcessingError> {
    filter_by_color(host, &color, block, &col, &row)
}

/// Which step a scripted host should fail at
#[derive(Debug, Clone, Copy, PartialEq)]
enum FailAt {
    Nowhere,
    Resolve,
    FontColors,
    Values,
}

/// Host that records every access and can fail on demand
struct ScriptedHost {
    sheet: MemorySheet,
    fail_at: FailAt,
    calls: RefCell<Vec<String>>,
}

impl ScriptedHost {
    fn new(sheet: MemorySheet, fail_at: FailAt) -> Self {
        Self {
            sheet,
            fail_at,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

struct ScriptedRange<'a> {
    host: &'a ScriptedHost,
    range: CellRange,
}

impl SpreadsheetHost for ScriptedHost {
    type Range<'a> = ScriptedRange<'a>;

    fn resolve_range(&self, range: &CellRange) -> Result<ScriptedRange<'_>, HostError> {
        self.calls.borrow_mut().push(format!("resolve {range}"));
        if self.fail_at == FailAt::Resolve {
            return Err(HostError::Resolve {
                range: range.to_string(),
                message: "sheet was deleted".into(),
            });
        }
        Ok(ScriptedRange {
            host: self,
            range: *range,
        })
    }
}

impl RangeHandle for ScriptedRange<'_> {
    fn font_colors(&self) -> Result<Vec<Vec<FontColor>>, HostError> {
        self.host.calls.borrow_mut().push("font_colors".into());
        if self.host.fail_at == FailAt::FontColors {
            return Err(HostError::read("font colors", "quota exceeded"));
        }
        Ok(self.host.sheet.read_font_colors(&self.range))
    }

    fn values(&self) -> Result<Vec<Vec<CellValue>>, HostError> {
        self.host.calls.borrow_mut().push("values".into());
        if self.host.fail_at == FailAt::Values {
            return Err(HostError::read("values", "quota exceeded"));
        }
        Ok(self.host.sheet.read_values(&self.range))
    }
}

/// Host whose value grid is one row short
struct ShortHost(MemorySheet);

impl SpreadsheetHost for ShortHost {
    type Range<'a> = ShortRange<'a>;

    fn resolve_range(&self, range: &CellRange) -> Result<ShortRange<'_>, HostError> {
        Ok(ShortRange(&self.0, *range))
    }
}

struct ShortRange<'a>(&'a MemorySheet, CellRange);

impl RangeHandle for ShortRange<'_> {
    fn font_colors(&self) -> Result<Vec<Vec<FontColor>>, HostError> {
        Ok(self.0.read_font_colors(&self.1))
    }

    fn values(&self) -> Result<Vec<Vec<CellValue>>, HostError> {
        let mut grid = self.0.read_values(&self.1);
        grid.pop();
        Ok(grid)
    }
}

#[test]
fn test_reference_scenario() {
    let sheet = scenario_sheet();
    let block = values(&[&["a", "b"], &["c", "d"]]);

    let found = call(&sheet, "#ff0000".into(), &block, 1.into(), 1.into()).unwrap();

    assert_eq!(
        found,
        vec![CellValue::from("a"), CellValue::from("c"), CellValue::from("d")]
    );
}

#[test]
fn test_no_match_is_empty_not_error() {
    let sheet = scenario_sheet();
    let block = values(&[&["a", "b"], &["c", "d"]]);

    let found = call(&sheet, "#123456".into(), &block, 1.into(), 1.into()).unwrap();

    assert!(found.is_empty());
}

#[test]
fn test_comparison_is_case_sensitive() {
    let sheet = scenario_sheet();
    let block = values(&[&["a", "b"], &["c", "d"]]);

    // Hosts report lowercase hex, so an uppercase target matches nothing
    let found = call(&sheet, "#FF0000".into(), &block, 1.into(), 1.into()).unwrap();

    assert!(found.is_empty());
}

#[test]
fn test_returns_host_values_not_block_values() {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.set_cell("A1", 10.0, FontColor::rgb("#0000ff")).unwrap();
    sheet.set_cell("A2", true, FontColor::named("Blue")).unwrap();
    sheet.set_cell("A3", "skip", FontColor::rgb("#000000")).unwrap();

    // The block only fixes the extent; values come from the live read
    let block = values(&[&["stale"], &["stale"], &["stale"]]);
    let found = call(&sheet, "#0000ff".into(), &block, 1.into(), 1.into()).unwrap();

    assert_eq!(found, vec![CellValue::Number(10.0), CellValue::Boolean(true)]);
}

#[test]
fn test_offset_block() {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.set_cell("C5", "x", FontColor::rgb("#ff0000")).unwrap();
    sheet.set_cell("D6", "y", FontColor::rgb("#ff0000")).unwrap();
    sheet.set_cell("A1", "outside", FontColor::rgb("#ff0000")).unwrap();

    let block = values(&[&["", ""], &["", ""]]);
    let found = call(&sheet, "#ff0000".into(), &block, 3.into(), 5.into()).unwrap();

    assert_eq!(found, vec![CellValue::from("x"), CellValue::from("y")]);
}

#[test]
fn test_unknown_named_color_never_matches() {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.set_cell("A1", "a", FontColor::named("notacolor")).unwrap();
    sheet.set_cell("B1", "b", FontColor::named("RED")).unwrap();

    let block = values(&[&["a", "b"]]);
    let found = call(&sheet, "#ff0000".into(), &block, 1.into(), 1.into()).unwrap();

    assert_eq!(found, vec![CellValue::from("b")]);
}

#[test]
fn test_invalid_colors_fail() {
    let sheet = scenario_sheet();
    let block = values(&[&["a", "b"], &["c", "d"]]);

    for color in [
        CellValue::from("red"),
        CellValue::from("#ZZZZZZ"),
        CellValue::from("#FFF"),
        CellValue::from(""),
        CellValue::Number(16711680.0),
        CellValue::Empty,
    ] {
        assert_eq!(
            call(&sheet, color.clone(), &block, 1.into(), 1.into()),
            Err(ProcessingError),
            "{color:?}"
        );
    }
}

#[test]
fn test_invalid_ranges_fail() {
    let sheet = scenario_sheet();

    for block in [vec![], vec![vec![]], values(&[&["a", "b"], &["c"]])] {
        assert_eq!(
            call(&sheet, "#ff0000".into(), &block, 1.into(), 1.into()),
            Err(ProcessingError),
            "{block:?}"
        );
    }
}

#[test]
fn test_invalid_coordinates_fail() {
    let sheet = scenario_sheet();
    let block = values(&[&["a"]]);

    for bad in [
        CellValue::Number(0.0),
        CellValue::Number(-1.0),
        CellValue::Number(1.5),
        CellValue::from("1"),
        CellValue::Empty,
    ] {
        assert_eq!(
            call(&sheet, "#ff0000".into(), &block, bad.clone(), 1.into()),
            Err(ProcessingError),
            "col {bad:?}"
        );
        assert_eq!(
            call(&sheet, "#ff0000".into(), &block, 1.into(), bad.clone()),
            Err(ProcessingError),
            "row {bad:?}"
        );
    }
}

#[test]
fn test_invalid_input_never_touches_host() {
    let host = ScriptedHost::new(scenario_sheet(), FailAt::Nowhere);
    let block = values(&[&["a"]]);

    let _ = call(&host, "blue".into(), &block, 1.into(), 1.into());
    let _ = call(&host, "#0000ff".into(), &[], 1.into(), 1.into());
    let _ = call(&host, "#0000ff".into(), &block, 0.into(), 1.into());

    assert!(host.calls().is_empty());
}

#[test]
fn test_reads_colors_then_values() {
    let host = ScriptedHost::new(scenario_sheet(), FailAt::Nowhere);
    let block = values(&[&["a", "b"], &["c", "d"]]);

    let found = call(&host, "#00ff00".into(), &block, 1.into(), 1.into()).unwrap();

    assert_eq!(found, vec![CellValue::from("b")]);
    assert_eq!(host.calls(), vec!["resolve A1:B2", "font_colors", "values"]);
}

#[test]
fn test_host_failures_become_processing_error() {
    let block = values(&[&["a", "b"], &["c", "d"]]);

    for fail_at in [FailAt::Resolve, FailAt::FontColors, FailAt::Values] {
        let host = ScriptedHost::new(scenario_sheet(), fail_at);
        let err = call(&host, "#ff0000".into(), &block, 1.into(), 1.into()).unwrap_err();

        assert_eq!(err, ProcessingError, "{fail_at:?}");
        assert_eq!(err.to_string(), PROCESSING_ERROR_MESSAGE);
    }
}

#[test]
fn test_detailed_errors_keep_host_cause() {
    let host = ScriptedHost::new(scenario_sheet(), FailAt::Values);
    let block = values(&[&["a", "b"], &["c", "d"]]);

    let err = ColorFilter::new(&host)
        .filter("#ff0000", &block, 1, 1)
        .unwrap_err();

    assert_eq!(
        err,
        FilterError::HostAccess(HostError::read("values", "quota exceeded"))
    );
}

#[test]
fn test_host_shape_mismatch_fails() {
    let host = ShortHost(scenario_sheet());
    let block = values(&[&["a", "b"], &["c", "d"]]);

    let err = ColorFilter::new(&host)
        .filter("#ff0000", &block, 1, 1)
        .unwrap_err();
    assert!(matches!(
        err,
        FilterError::HostAccess(HostError::Shape { what: "values", .. })
    ));

    assert_eq!(
        call(&host, "#ff0000".into(), &block, 1.into(), 1.into()),
        Err(ProcessingError)
    );
}

#[test]
fn test_single_letter_columns_option() {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.set_cell("Z1", "z", FontColor::rgb("#ff0000")).unwrap();
    sheet.set_cell("AA1", "aa", FontColor::rgb("#ff0000")).unwrap();
    let block = values(&[&["", ""]]);

    let extended = ColorFilter::new(&sheet);
    assert_eq!(
        extended.filter("#ff0000", &block, 26, 1).unwrap(),
        vec![CellValue::from("z"), CellValue::from("aa")]
    );

    let single = ColorFilter::with_options(
        &sheet,
        FilterOptions::new().with_column_letters(ColumnLetters::Single),
    );
    assert_eq!(
        single.filter("#ff0000", &block, 26, 1).unwrap_err(),
        FilterError::InvalidInput(InvalidInput::BadCoordinates)
    );
    assert_eq!(
        single.filter("#ff0000", &values(&[&[""]]), 26, 1).unwrap(),
        vec![CellValue::from("z")]
    );
}

#[test]
fn test_snapshot_host() {
    let json = r##"{
        "name": "Sheet1",
        "cells": [
            { "address": "B2", "value": "keep", "font_color": { "named": "Tomato" } },
            { "address": "C2", "value": 7, "font_color": "#ff6347" },
            { "address": "B3", "value": "drop", "font_color": "#000000" }
        ]
    }"##;
    let sheet = SheetSnapshot::from_json(json).unwrap().to_sheet().unwrap();
    let block = sheet.read_values(&CellRange::parse("B2:C3").unwrap());

    let found = call(&sheet, "#ff6347".into(), &block, 2.into(), 2.into()).unwrap();

    assert_eq!(found, vec![CellValue::from("keep"), CellValue::Number(7.0)]);
}

#[test]
fn test_resolve_name_is_case_insensitive() {
    assert_eq!(resolve_name("RED"), "#ff0000");
    assert_eq!(resolve_name("Red"), "#ff0000");
    assert_eq!(resolve_name("red"), "#ff0000");
    assert_eq!(resolve_name("notacolor"), "notacolor");
}
