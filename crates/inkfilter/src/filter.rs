//! Font-color filter
//!
//! [`filter_by_color`] is the function a spreadsheet formula calls. It takes
//! the target color, the block of values the formula was given and the
//! block's top-left coordinate, then re-reads that block from the host to
//! learn each cell's font color and returns the values whose color matches.

use lazy_regex::regex_is_match;
use log::{debug, error, warn};

use crate::error::{FilterResult, HostError, InvalidInput, ProcessingError};
use crate::host::{RangeHandle, SpreadsheetHost};
use crate::options::{ColumnLetters, FilterOptions};
use inkfilter_core::{named, CellAddress, CellRange, CellValue, Error as CoreError, FontColor};

/// Filter a block by font color
///
/// Arguments arrive as dynamic cell values, the way a custom function
/// receives them. Any failure is logged and reported as a bare
/// [`ProcessingError`].
///
/// # Examples
///
/// ```
/// use inkfilter::{filter_by_color, CellValue, FontColor, MemorySheet};
///
/// let mut sheet = MemorySheet::new("Sheet1");
/// sheet.set_cell("A1", "keep", FontColor::rgb("#ff0000")).unwrap();
/// sheet.set_cell("B1", "drop", FontColor::rgb("#000000")).unwrap();
///
/// let block = vec![vec![CellValue::from("keep"), CellValue::from("drop")]];
/// let found = filter_by_color(
///     &sheet,
///     &CellValue::from("#ff0000"),
///     &block,
///     &CellValue::from(1),
///     &CellValue::from(1),
/// )
/// .unwrap();
/// assert_eq!(found, vec![CellValue::from("keep")]);
/// ```
pub fn filter_by_color<H: SpreadsheetHost>(
    host: &H,
    color: &CellValue,
    block: &[Vec<CellValue>],
    start_col: &CellValue,
    start_row: &CellValue,
) -> Result<Vec<CellValue>, ProcessingError> {
    ColorFilter::new(host).invoke(color, block, start_col, start_row)
}

/// Font-color filter bound to a host
pub struct ColorFilter<'h, H> {
    host: &'h H,
    options: FilterOptions,
}

impl<'h, H: SpreadsheetHost> ColorFilter<'h, H> {
    /// Create a filter with default options
    pub fn new(host: &'h H) -> Self {
        Self::with_options(host, FilterOptions::default())
    }

    /// Create a filter with custom options
    pub fn with_options(host: &'h H, options: FilterOptions) -> Self {
        Self { host, options }
    }

    /// Run the filter with dynamic arguments, hiding failure detail
    ///
    /// This is the error boundary: the detailed
    /// [`FilterError`](crate::FilterError) is logged and the caller only
    /// learns that the call failed.
    pub fn invoke(
        &self,
        color: &CellValue,
        block: &[Vec<CellValue>],
        start_col: &CellValue,
        start_row: &CellValue,
    ) -> Result<Vec<CellValue>, ProcessingError> {
        self.filter_values(color, block, start_col, start_row)
            .map_err(|err| {
                error!("font color filter failed: {err}");
                ProcessingError
            })
    }

    /// Run the filter with dynamic arguments, keeping failure detail
    ///
    /// Arguments are checked in order: color, block, then coordinates.
    pub fn filter_values(
        &self,
        color: &CellValue,
        block: &[Vec<CellValue>],
        start_col: &CellValue,
        start_row: &CellValue,
    ) -> FilterResult<Vec<CellValue>> {
        let color = color.as_string().ok_or(InvalidInput::BadColorFormat)?;
        validate_color(color)?;
        let (rows, cols) = block_extent(block)?;
        let start_col = coordinate(start_col)?;
        let start_row = coordinate(start_row)?;
        self.scan(color, rows, cols, start_col, start_row)
    }

    /// Run the filter with typed arguments
    ///
    /// `start_col` and `start_row` are 1-based.
    pub fn filter(
        &self,
        color: &str,
        block: &[Vec<CellValue>],
        start_col: u32,
        start_row: u32,
    ) -> FilterResult<Vec<CellValue>> {
        validate_color(color)?;
        let (rows, cols) = block_extent(block)?;
        self.scan(color, rows, cols, start_col, start_row)
    }

    fn scan(
        &self,
        color: &str,
        rows: usize,
        cols: usize,
        start_col: u32,
        start_row: u32,
    ) -> FilterResult<Vec<CellValue>> {
        let range = block_range(
            start_col,
            start_row,
            rows,
            cols,
            self.options.column_letters,
        )?;
        debug!("filtering {range} ({rows}x{cols}) for font color {color}");

        let handle = self.host.resolve_range(&range)?;
        let font_colors = handle.font_colors()?;
        check_shape("font colors", &font_colors, rows, cols)?;
        let values = handle.values()?;
        check_shape("values", &values, rows, cols)?;

        let mut matches = Vec::new();
        for (color_row, value_row) in font_colors.iter().zip(values) {
            for (font_color, value) in color_row.iter().zip(value_row) {
                let resolved = font_color.normalized();
                if let FontColor::Named(name) = font_color {
                    if resolved == name.as_str() {
                        warn!("unknown font color name '{name}' in {range}");
                    }
                }
                if resolved == color {
                    matches.push(value);
                }
            }
        }

        debug!("{} of {} cells in {range} matched", matches.len(), rows * cols);
        Ok(matches)
    }
}

/// Check a caller-supplied color against `#RRGGBB`
pub fn validate_color(color: &str) -> Result<(), InvalidInput> {
    if regex_is_match!("^#[0-9A-Fa-f]{6}$", color) {
        Ok(())
    } else {
        Err(InvalidInput::BadColorFormat)
    }
}

/// Row and column count of a non-empty rectangular block
pub fn block_extent(block: &[Vec<CellValue>]) -> Result<(usize, usize), InvalidInput> {
    let cols = block.first().map(Vec::len).unwrap_or(0);
    if cols == 0 || block.iter().any(|row| row.len() != cols) {
        return Err(InvalidInput::BadRange);
    }
    Ok((block.len(), cols))
}

/// Derive the range address a block occupies
///
/// `start_col` and `start_row` are the 1-based top-left coordinate.
///
/// # Examples
///
/// ```
/// use inkfilter::{block_range, ColumnLetters};
///
/// let range = block_range(1, 1, 2, 2, ColumnLetters::Extended).unwrap();
/// assert_eq!(range.to_a1_string(), "A1:B2");
///
/// assert!(block_range(26, 1, 1, 2, ColumnLetters::Single).is_err());
/// assert_eq!(
///     block_range(26, 1, 1, 2, ColumnLetters::Extended).unwrap().to_a1_string(),
///     "Z1:AA1"
/// );
/// ```
pub fn block_range(
    start_col: u32,
    start_row: u32,
    rows: usize,
    cols: usize,
    letters: ColumnLetters,
) -> Result<CellRange, InvalidInput> {
    let start = CellAddress::from_coordinates(start_col, start_row).map_err(|err| {
        debug!("rejected top-left coordinate ({start_col}, {start_row}): {err}");
        InvalidInput::BadCoordinates
    })?;

    let range = CellRange::with_extent(start, rows, cols).map_err(|err| match err {
        CoreError::InvalidRange(_) => InvalidInput::BadRange,
        err => {
            debug!("block of {rows}x{cols} at {start} leaves the sheet: {err}");
            InvalidInput::BadCoordinates
        }
    })?;

    if range.end.col > letters.max_col() {
        debug!(
            "block {range} reaches past column {}",
            CellAddress::column_to_letters(letters.max_col())
        );
        return Err(InvalidInput::BadCoordinates);
    }

    Ok(range)
}

/// Resolve a color name passed as a dynamic value
///
/// Non-string values are rejected; unknown names come back unchanged.
pub fn resolve_name_value(value: &CellValue) -> Result<String, InvalidInput> {
    let name = value
        .as_string()
        .ok_or(InvalidInput::NotAString(value.type_name()))?;
    Ok(named::resolve_name(name).into_owned())
}

/// Coerce a dynamic coordinate to a positive integer
fn coordinate(value: &CellValue) -> Result<u32, InvalidInput> {
    value
        .as_integer()
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(InvalidInput::BadCoordinates)
}

fn check_shape<T>(
    what: &'static str,
    grid: &[Vec<T>],
    rows: usize,
    cols: usize,
) -> Result<(), HostError> {
    let actual_cols = grid
        .iter()
        .find(|row| row.len() != cols)
        .map(Vec::len)
        .unwrap_or(cols);
    if grid.len() != rows || actual_cols != cols {
        return Err(HostError::Shape {
            what,
            rows,
            cols,
            actual_rows: grid.len(),
            actual_cols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::memory::MemorySheet;
    use pretty_assertions::assert_eq;

    fn block(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
        rows.iter()
            .map(|row| row.iter().map(|v| CellValue::from(*v)).collect())
            .collect()
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#ff0000").is_ok());
        assert!(validate_color("#A1b2C3").is_ok());

        for bad in ["red", "#ZZZZZZ", "#FFF", "", "ff0000", "#ff00000", "#ff0000\n"] {
            assert_eq!(validate_color(bad), Err(InvalidInput::BadColorFormat), "{bad:?}");
        }
    }

    #[test]
    fn test_block_extent() {
        assert_eq!(block_extent(&block(&[&["a", "b"], &["c", "d"]])), Ok((2, 2)));
        assert_eq!(block_extent(&block(&[&["a"]])), Ok((1, 1)));
        assert_eq!(block_extent(&[]), Err(InvalidInput::BadRange));
        assert_eq!(block_extent(&[vec![]]), Err(InvalidInput::BadRange));
        assert_eq!(
            block_extent(&block(&[&["a", "b"], &["c"]])),
            Err(InvalidInput::BadRange)
        );
    }

    #[test]
    fn test_block_range() {
        let range = block_range(3, 5, 2, 4, ColumnLetters::Extended).unwrap();
        assert_eq!(range.to_a1_string(), "C5:F6");

        let single = block_range(1, 1, 1, 1, ColumnLetters::Single).unwrap();
        assert_eq!(single.to_a1_string(), "A1");

        assert_eq!(
            block_range(26, 1, 1, 1, ColumnLetters::Single).unwrap().to_a1_string(),
            "Z1"
        );
        assert_eq!(
            block_range(27, 1, 1, 1, ColumnLetters::Single),
            Err(InvalidInput::BadCoordinates)
        );
        assert_eq!(
            block_range(27, 1, 1, 1, ColumnLetters::Extended).unwrap().to_a1_string(),
            "AA1"
        );
    }

    #[test]
    fn test_block_range_rejects_bad_coordinates() {
        assert_eq!(
            block_range(0, 1, 1, 1, ColumnLetters::Extended),
            Err(InvalidInput::BadCoordinates)
        );
        assert_eq!(
            block_range(1, 0, 1, 1, ColumnLetters::Extended),
            Err(InvalidInput::BadCoordinates)
        );
        assert_eq!(
            block_range(16_384, 1, 1, 2, ColumnLetters::Extended),
            Err(InvalidInput::BadCoordinates)
        );
        assert_eq!(
            block_range(1, 1_048_576, 2, 1, ColumnLetters::Extended),
            Err(InvalidInput::BadCoordinates)
        );
        assert_eq!(
            block_range(1, 1, 0, 1, ColumnLetters::Extended),
            Err(InvalidInput::BadRange)
        );
    }

    #[test]
    fn test_coordinate() {
        assert_eq!(coordinate(&CellValue::Number(1.0)), Ok(1));
        assert_eq!(coordinate(&CellValue::Number(42.0)), Ok(42));
        for bad in [
            CellValue::Number(0.0),
            CellValue::Number(-3.0),
            CellValue::Number(1.5),
            CellValue::Number(f64::NAN),
            CellValue::Number(5e9),
            CellValue::string("1"),
            CellValue::Boolean(true),
            CellValue::Empty,
        ] {
            assert_eq!(coordinate(&bad), Err(InvalidInput::BadCoordinates), "{bad:?}");
        }
    }

    #[test]
    fn test_resolve_name_value() {
        assert_eq!(
            resolve_name_value(&CellValue::from("Red")).unwrap(),
            "#ff0000"
        );
        assert_eq!(
            resolve_name_value(&CellValue::from("notacolor")).unwrap(),
            "notacolor"
        );
        assert_eq!(
            resolve_name_value(&CellValue::Number(1.0)),
            Err(InvalidInput::NotAString("number"))
        );
    }

    #[test]
    fn test_filter_typed() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.set_cell("C3", "x", FontColor::rgb("#00ff00")).unwrap();
        sheet.set_cell("D3", "y", FontColor::named("lime")).unwrap();
        sheet.set_cell("C4", "z", FontColor::rgb("#00FF00")).unwrap();

        let filter = ColorFilter::new(&sheet);
        let found = filter
            .filter("#00ff00", &block(&[&["x", "y"], &["z", ""]]), 3, 3)
            .unwrap();
        // Comparison is exact: "#00FF00" does not match "#00ff00"
        assert_eq!(found, vec![CellValue::from("x"), CellValue::from("y")]);
    }

    #[test]
    fn test_filter_named_colors() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.set_cell("A1", "known", FontColor::named("RED")).unwrap();
        sheet.set_cell("B1", "unknown", FontColor::named("crimsonish")).unwrap();
        sheet.set_cell("C1", "hex-name", FontColor::named("#ff0000")).unwrap();
        sheet.set_cell("D1", "rgb", FontColor::rgb("#ff0000")).unwrap();

        let filter = ColorFilter::new(&sheet);
        let found = filter
            .filter("#ff0000", &block(&[&["", "", "", ""]]), 1, 1)
            .unwrap();
        // An unresolved name passes through unchanged and is compared as-is
        assert_eq!(
            found,
            vec![
                CellValue::from("known"),
                CellValue::from("hex-name"),
                CellValue::from("rgb"),
            ]
        );
        assert!(filter
            .filter("#000000", &block(&[&["", "", "", ""]]), 1, 1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_filter_values_checks_color_first() {
        let sheet = MemorySheet::new("Sheet1");
        let filter = ColorFilter::new(&sheet);
        let err = filter
            .filter_values(
                &CellValue::Number(1.0),
                &[],
                &CellValue::Number(0.0),
                &CellValue::Number(0.0),
            )
            .unwrap_err();
        assert_eq!(err, FilterError::InvalidInput(InvalidInput::BadColorFormat));

        let err = filter
            .filter_values(
                &CellValue::from("#000000"),
                &[],
                &CellValue::Number(0.0),
                &CellValue::Number(0.0),
            )
            .unwrap_err();
        assert_eq!(err, FilterError::InvalidInput(InvalidInput::BadRange));
    }

    #[test]
    fn test_check_shape() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert!(check_shape("values", &grid, 2, 2).is_ok());
        assert_eq!(
            check_shape("values", &grid, 2, 3),
            Err(HostError::Shape {
                what: "values",
                rows: 2,
                cols: 3,
                actual_rows: 2,
                actual_cols: 2,
            })
        );
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(check_shape("values", &ragged, 2, 2).is_err());
    }
}
