//! The view-selection state machine for one widget instance.
//!
//! A controller is created in exactly one of two modes and never switches
//! between them; submit and cancel leave the component entirely by
//! notifying the host rather than changing internal state.
//!
//! ```text
//!                  ┌───────────────┐  preview   ┌─────────────────┐
//!   mode = Edit ───►               ├────────────►  render to the  │
//!                  │ SettingsMode  ◄────────────┤ preview surface │
//!                  │               │            └─────────────────┘
//!                  └───┬───────┬───┘
//!                submit│       │cancel
//!                      ▼       ▼
//!                host.completed / host.cancelled
//!
//!   mode = Display ──► render to the main surface, once, on enter()
//! ```

use crate::config::GridConfig;
use crate::render::{RenderSurface, TableRenderer, TableSpec};
use crate::storage::{ConfigStore, StoredConfig, WidgetId};
use thiserror::Error;

/// Fixed per instance: whether this widget shows its settings editor or the
/// final grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Edit,
    Display,
}

/// Errors surfaced to the embedding host. These are re-entrancy or wiring
/// mistakes, not user input problems; malformed user input never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("operation is only valid while the settings editor is active")]
    NotInSettingsMode,

    #[error("a save is already in flight for this widget")]
    SaveInFlight,
}

/// The settings editor surface: two text fields and a show toggle.
pub trait SettingsSurface {
    /// Writes the size and empty-margin field contents.
    fn set_fields(&mut self, size_text: &str, empty_text: &str);
    /// Makes the settings surface visible.
    fn reveal(&mut self);
}

/// Lifecycle signals back to the hosting container.
pub trait Host {
    fn completed(&mut self, id: WidgetId);
    fn cancelled(&mut self, id: WidgetId);
}

/// Drives one widget instance from load to render.
///
/// Holds only the resolved configuration, the fixed mode, and an in-flight
/// save flag; everything with side effects is an injected collaborator.
pub struct ViewController<S, R, V, H> {
    id: WidgetId,
    mode: ViewMode,
    config: GridConfig,
    save_in_flight: bool,
    store: S,
    renderer: R,
    settings: V,
    host: H,
}

impl<S, R, V, H> ViewController<S, R, V, H>
where
    S: ConfigStore,
    R: TableRenderer,
    V: SettingsSurface,
    H: Host,
{
    pub fn new(id: WidgetId, mode: ViewMode, store: S, renderer: R, settings: V, host: H) -> Self {
        Self {
            id,
            mode,
            config: GridConfig::default(),
            save_in_flight: false,
            store,
            renderer,
            settings,
            host,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The configuration resolved by the last `enter()`. Defaults until then.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// One-time startup: performs the single load, resolves the stored state
    /// into a valid configuration, then shows whichever view the mode calls
    /// for. In `Display` mode that is a main-surface render; in `Edit` mode
    /// the settings fields are populated with the canonical `"CxR"` strings
    /// and the surface is revealed without rendering any grid.
    pub async fn enter(&mut self) {
        let outcome = self.store.load(self.id).await;
        self.config = GridConfig::from_load(outcome);
        log::info!(
            "Widget {} entering {:?} with size {} and empty margin {}",
            self.id,
            self.mode,
            self.config.size,
            self.config.empty_margin
        );

        match self.mode {
            ViewMode::Display => {
                let spec = TableSpec::from_config(&self.config);
                self.renderer.render(RenderSurface::Main, &spec);
            }
            ViewMode::Edit => {
                self.settings.set_fields(
                    &self.config.size.to_string(),
                    &self.config.empty_margin.to_string(),
                );
                self.settings.reveal();
            }
        }
    }

    /// Renders the current field contents to the preview surface, falling
    /// back to defaults for anything malformed. Touches neither persisted
    /// state nor controller state, so it can be repeated freely.
    pub fn preview(&mut self, size_text: &str, empty_text: &str) -> Result<(), ControllerError> {
        self.ensure_settings_mode()?;

        let config = GridConfig::resolve(Some(size_text), Some(empty_text));
        let spec = TableSpec::from_config(&config);
        self.renderer.render(RenderSurface::Preview, &spec);
        Ok(())
    }

    /// Persists the raw field strings unchanged; validation is deferred to
    /// the next load. On save success the host is told the configuration is
    /// complete. On save failure nothing is signalled and the settings
    /// surface stays open. Only one save may be in flight per instance.
    pub async fn submit(
        &mut self,
        size_text: &str,
        empty_text: &str,
    ) -> Result<(), ControllerError> {
        self.ensure_settings_mode()?;
        if self.save_in_flight {
            return Err(ControllerError::SaveInFlight);
        }

        self.save_in_flight = true;
        let record = StoredConfig::new(size_text, empty_text);
        let saved = self.store.save(self.id, record).await;
        self.save_in_flight = false;

        if saved {
            self.host.completed(self.id);
        } else {
            log::error!("Save failed for widget {}, settings stay open", self.id);
        }
        Ok(())
    }

    /// Abandons configuration: notifies the host, persists nothing.
    pub fn cancel(&mut self) -> Result<(), ControllerError> {
        self.ensure_settings_mode()?;
        self.host.cancelled(self.id);
        Ok(())
    }

    fn ensure_settings_mode(&self) -> Result<(), ControllerError> {
        match self.mode {
            ViewMode::Edit => Ok(()),
            ViewMode::Display => Err(ControllerError::NotInSettingsMode),
        }
    }
}
