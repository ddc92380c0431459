use crate::dimension::Dimension;
use crate::storage::LoadOutcome;

/// Grid shape used when no stored size exists or the stored one is malformed.
pub const DEFAULT_SIZE: Dimension = Dimension::new(5, 5);
/// Spare-margin fallback: one extra blank column and row.
pub const DEFAULT_EMPTY: Dimension = Dimension::new(1, 1);

/// A fully resolved grid configuration.
///
/// Invariant: both fields are always well-formed dimensions. There is no
/// constructor that accepts raw text without routing it through default
/// substitution, so downstream render code never sees a partial config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Primary grid shape.
    pub size: Dimension,
    /// Extra blank trailing columns/rows always kept available.
    pub empty_margin: Dimension,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            empty_margin: DEFAULT_EMPTY,
        }
    }
}

impl GridConfig {
    /// Resolves raw size and empty-margin text into a valid configuration.
    ///
    /// The two fields are handled independently: a malformed size falls back
    /// to [`DEFAULT_SIZE`] without disturbing the empty-margin resolution,
    /// and vice versa. Never fails.
    pub fn resolve(raw_size: Option<&str>, raw_empty: Option<&str>) -> Self {
        Self {
            size: resolve_field("size", raw_size, DEFAULT_SIZE),
            empty_margin: resolve_field("empty margin", raw_empty, DEFAULT_EMPTY),
        }
    }

    /// Bridges an asynchronous load outcome into a configuration: a loaded
    /// record has its fields resolved normally, a failed load resolves to
    /// pure defaults.
    pub fn from_load(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded(record) => {
                Self::resolve(record.size.as_deref(), record.empty.as_deref())
            }
            LoadOutcome::Failed => {
                log::warn!("No stored configuration available, using defaults");
                Self::default()
            }
        }
    }
}

fn resolve_field(field: &str, raw: Option<&str>, default: Dimension) -> Dimension {
    let Some(text) = raw else {
        return default;
    };
    match Dimension::parse(text) {
        Ok(dimension) => dimension,
        Err(err) => {
            log::warn!("Invalid {} {:?} ({}), using default {}", field, text, err, default);
            default
        }
    }
}
