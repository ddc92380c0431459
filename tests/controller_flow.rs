use futures::FutureExt;
use futures::executor::block_on;
use futures::future::{self, BoxFuture};
use gridsize::{
    ConfigStore, ControllerError, Host, LoadOutcome, RenderSurface, SettingsSurface, StoredConfig,
    TableRenderer, TableSpec, ViewController, ViewMode, WidgetId,
};
use std::cell::RefCell;
use std::rc::Rc;

// Store with a canned load outcome; saves always succeed.
struct ScriptedStore {
    outcome: LoadOutcome,
}

impl ConfigStore for ScriptedStore {
    fn load(&self, _id: WidgetId) -> BoxFuture<'_, LoadOutcome> {
        future::ready(self.outcome.clone()).boxed()
    }

    fn save(&self, _id: WidgetId, _record: StoredConfig) -> BoxFuture<'_, bool> {
        future::ready(true).boxed()
    }
}

#[derive(Clone, Default)]
struct RenderLog {
    calls: Rc<RefCell<Vec<(RenderSurface, TableSpec)>>>,
}

impl TableRenderer for RenderLog {
    fn render(&mut self, surface: RenderSurface, spec: &TableSpec) {
        self.calls.borrow_mut().push((surface, *spec));
    }
}

#[derive(Clone, Default)]
struct FieldPanel {
    fields: Rc<RefCell<Option<(String, String)>>>,
    revealed: Rc<RefCell<bool>>,
}

impl SettingsSurface for FieldPanel {
    fn set_fields(&mut self, size_text: &str, empty_text: &str) {
        *self.fields.borrow_mut() = Some((size_text.to_string(), empty_text.to_string()));
    }

    fn reveal(&mut self) {
        *self.revealed.borrow_mut() = true;
    }
}

#[derive(Clone, Default)]
struct HostLog {
    completed: Rc<RefCell<Vec<WidgetId>>>,
    cancelled: Rc<RefCell<Vec<WidgetId>>>,
}

impl Host for HostLog {
    fn completed(&mut self, id: WidgetId) {
        self.completed.borrow_mut().push(id);
    }

    fn cancelled(&mut self, id: WidgetId) {
        self.cancelled.borrow_mut().push(id);
    }
}

// Route warn!/error! fallback logs to test output when RUST_LOG is set.
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn controller(
    mode: ViewMode,
    outcome: LoadOutcome,
) -> (
    ViewController<ScriptedStore, RenderLog, FieldPanel, HostLog>,
    RenderLog,
    FieldPanel,
    HostLog,
) {
    init_logs();
    let renderer = RenderLog::default();
    let panel = FieldPanel::default();
    let host = HostLog::default();
    let controller = ViewController::new(
        WidgetId::new(),
        mode,
        ScriptedStore { outcome },
        renderer.clone(),
        panel.clone(),
        host.clone(),
    );
    (controller, renderer, panel, host)
}

#[test]
fn test_display_mode_failed_load_renders_defaults() {
    let (mut ctrl, renderer, panel, _host) = controller(ViewMode::Display, LoadOutcome::Failed);
    block_on(ctrl.enter());

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (surface, spec) = calls[0];
    assert_eq!(surface, RenderSurface::Main);
    assert_eq!(spec.columns, 5);
    assert_eq!(spec.rows, 5);
    assert_eq!(spec.spare_columns, 1);
    assert_eq!(spec.spare_rows, 1);
    assert!(spec.column_headers && spec.row_headers && spec.context_menu);

    // Display mode never touches the settings surface.
    assert!(panel.fields.borrow().is_none());
    assert!(!*panel.revealed.borrow());
}

#[test]
fn test_display_mode_renders_stored_shape() {
    let record = StoredConfig::new("8x2", "3x0");
    let (mut ctrl, renderer, _panel, _host) =
        controller(ViewMode::Display, LoadOutcome::Loaded(record));
    block_on(ctrl.enter());

    let calls = renderer.calls.borrow();
    let (_, spec) = calls[0];
    assert_eq!((spec.columns, spec.rows), (8, 2));
    assert_eq!((spec.spare_columns, spec.spare_rows), (3, 0));
}

#[test]
fn test_edit_mode_populates_fields_without_rendering() {
    let record = StoredConfig::new("3x4", "0x1");
    let (mut ctrl, renderer, panel, _host) =
        controller(ViewMode::Edit, LoadOutcome::Loaded(record));
    block_on(ctrl.enter());

    assert_eq!(
        *panel.fields.borrow(),
        Some(("3x4".to_string(), "0x1".to_string()))
    );
    assert!(*panel.revealed.borrow());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn test_edit_mode_fields_default_on_failed_load() {
    let (mut ctrl, _renderer, panel, _host) = controller(ViewMode::Edit, LoadOutcome::Failed);
    block_on(ctrl.enter());

    assert_eq!(
        *panel.fields.borrow(),
        Some(("5x5".to_string(), "1x1".to_string()))
    );
}

#[test]
fn test_preview_renders_to_preview_surface() {
    let record = StoredConfig::new("3x4", "0x1");
    let (mut ctrl, renderer, _panel, _host) =
        controller(ViewMode::Edit, LoadOutcome::Loaded(record));
    block_on(ctrl.enter());

    ctrl.preview("3x4", "0x1").unwrap();

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (surface, spec) = calls[0];
    assert_eq!(surface, RenderSurface::Preview);
    assert_eq!((spec.columns, spec.rows), (3, 4));
    assert_eq!((spec.spare_columns, spec.spare_rows), (0, 1));
}

#[test]
fn test_preview_falls_back_per_field() {
    let (mut ctrl, renderer, _panel, _host) = controller(ViewMode::Edit, LoadOutcome::Failed);
    block_on(ctrl.enter());

    ctrl.preview("junk", "2x2").unwrap();

    let (_, spec) = renderer.calls.borrow()[0];
    assert_eq!((spec.columns, spec.rows), (5, 5));
    assert_eq!((spec.spare_columns, spec.spare_rows), (2, 2));
}

#[test]
fn test_preview_is_repeatable() {
    let (mut ctrl, renderer, _panel, _host) = controller(ViewMode::Edit, LoadOutcome::Failed);
    block_on(ctrl.enter());

    ctrl.preview("2x2", "1x1").unwrap();
    ctrl.preview("2x2", "1x1").unwrap();
    ctrl.preview("6x3", "0x0").unwrap();

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[2].1.columns, 6);
    // Preview never disturbs the resolved configuration.
    assert_eq!(ctrl.config().size.to_string(), "5x5");
}

#[test]
fn test_display_mode_rejects_settings_operations() {
    let (mut ctrl, renderer, _panel, host) = controller(ViewMode::Display, LoadOutcome::Failed);
    block_on(ctrl.enter());

    assert_eq!(
        ctrl.preview("2x2", "1x1"),
        Err(ControllerError::NotInSettingsMode)
    );
    assert_eq!(
        block_on(ctrl.submit("2x2", "1x1")),
        Err(ControllerError::NotInSettingsMode)
    );
    assert_eq!(ctrl.cancel(), Err(ControllerError::NotInSettingsMode));

    // Only the enter() render happened, and the host heard nothing.
    assert_eq!(renderer.calls.borrow().len(), 1);
    assert!(host.completed.borrow().is_empty());
    assert!(host.cancelled.borrow().is_empty());
}
