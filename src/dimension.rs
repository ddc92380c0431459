use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing a dimension string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimensionParseError {
    #[error("no 'x' separator in {0:?}")]
    MissingSeparator(String),

    #[error("more than one 'x' separator in {0:?}")]
    ExtraSeparator(String),

    #[error("nothing before the 'x' in {0:?}")]
    EmptyColumns(String),

    #[error("nothing after the 'x' in {0:?}")]
    EmptyRows(String),

    #[error("{side} of {text:?} is not a base-10 integer")]
    NotANumber { side: &'static str, text: String },
}

/// An ordered pair of grid dimensions: columns first, then rows.
///
/// This is the structured form of the `"5x5"` strings users type into the
/// size editor and that the widget service stores. Components are unsigned,
/// so a negative numeral fails to parse and the caller falls back to its
/// default; zero is allowed because a zero spare margin is a valid choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub columns: u32,
    pub rows: u32,
}

impl Dimension {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Parses a `"<columns>x<rows>"` string.
    ///
    /// Surrounding whitespace is trimmed first. The text must contain the
    /// `x` separator exactly once, with a numeral on each side. Never
    /// panics; malformed input comes back as a [`DimensionParseError`].
    pub fn parse(text: &str) -> Result<Self, DimensionParseError> {
        let trimmed = text.trim();

        let pos = trimmed
            .find('x')
            .ok_or_else(|| DimensionParseError::MissingSeparator(trimmed.to_string()))?;
        let (prefix, rest) = trimmed.split_at(pos);
        let suffix = &rest[1..];

        if suffix.contains('x') {
            return Err(DimensionParseError::ExtraSeparator(trimmed.to_string()));
        }
        if prefix.is_empty() {
            return Err(DimensionParseError::EmptyColumns(trimmed.to_string()));
        }
        if suffix.is_empty() {
            return Err(DimensionParseError::EmptyRows(trimmed.to_string()));
        }

        let columns = prefix
            .parse::<u32>()
            .map_err(|_| DimensionParseError::NotANumber {
                side: "column count",
                text: trimmed.to_string(),
            })?;
        let rows = suffix
            .parse::<u32>()
            .map_err(|_| DimensionParseError::NotANumber {
                side: "row count",
                text: trimmed.to_string(),
            })?;

        Ok(Self { columns, rows })
    }
}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Dimension {
    /// Canonical `"<columns>x<rows>"` rendering, with no padding or sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
