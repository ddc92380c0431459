#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod controller;
pub mod dimension;
pub mod render;
pub mod storage;

pub use config::GridConfig;
pub use config::{DEFAULT_EMPTY, DEFAULT_SIZE};
pub use controller::{ControllerError, Host, SettingsSurface, ViewController, ViewMode};
pub use dimension::{Dimension, DimensionParseError};
pub use render::{RenderSurface, TableRenderer, TableSpec};
pub use storage::{ConfigStore, InMemoryStore, LoadOutcome, StoredConfig, WidgetId};
