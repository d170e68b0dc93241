//! Filter options

/// How column letters are derived for the range address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLetters {
    /// Only `A` through `Z`; blocks reaching past column 26 are rejected
    Single,
    /// Full bijective base-26 lettering, `A` through `XFD`
    #[default]
    Extended,
}

impl ColumnLetters {
    /// Highest 0-based column index this scheme can address
    pub fn max_col(&self) -> u16 {
        match self {
            ColumnLetters::Single => 25,
            ColumnLetters::Extended => inkfilter_core::MAX_COLS - 1,
        }
    }
}

/// Options for a [`ColorFilter`](crate::ColorFilter)
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Column lettering scheme (default: extended)
    pub column_letters: ColumnLetters,
}

impl FilterOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column lettering scheme
    pub fn with_column_letters(mut self, column_letters: ColumnLetters) -> Self {
        self.column_letters = column_letters;
        self
    }
}
