use crate::config::GridConfig;

/// Which drawing target a render call addresses. The main surface shows the
/// final grid; the preview surface lives inside the settings editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSurface {
    Main,
    Preview,
}

/// Parameter block handed to the table-rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: u32,
    pub rows: u32,
    /// Blank trailing columns kept available beyond `columns`.
    pub spare_columns: u32,
    /// Blank trailing rows kept available beyond `rows`.
    pub spare_rows: u32,
    pub column_headers: bool,
    pub row_headers: bool,
    pub context_menu: bool,
}

impl TableSpec {
    /// The spec this widget always renders with: the configured shape plus
    /// headers and the context menu enabled.
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            columns: config.size.columns,
            rows: config.size.rows,
            spare_columns: config.empty_margin.columns,
            spare_rows: config.empty_margin.rows,
            column_headers: true,
            row_headers: true,
            context_menu: true,
        }
    }
}

/// The grid-rendering engine collaborator.
pub trait TableRenderer {
    fn render(&mut self, surface: RenderSurface, spec: &TableSpec);
}
