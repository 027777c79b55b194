//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSheetBuilder` - Builder pattern for creating controllers with observers attached
//! - `TestSheet` - the controller plus its recorded callbacks and surface
//! - Gesture drivers like `drag()` that emit evenly spaced pointer events
//! - `LogCapture` - collects `tracing` output emitted inside a closure

use snapsheet::surface::RecordingSurface;
use snapsheet::{DragZone, PointerEvent, SheetConfig, SheetController, SheetOptions, SnapState};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// TestSheetBuilder - Builder pattern for creating test controllers
// ============================================================================

/// Builder for creating test controllers.
///
/// # Example
/// ```ignore
/// let mut t = TestSheetBuilder::new()
///     .with_initial(SnapState::Full)
///     .with_height(600.0)
///     .build();
/// ```
pub struct TestSheetBuilder {
    height: f32,
    config: SheetConfig,
    initial: SnapState,
}

impl Default for TestSheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSheetBuilder {
    /// Create a new builder: 800px container, default config, half.
    pub fn new() -> Self {
        Self {
            height: 800.0,
            config: SheetConfig::default(),
            initial: SnapState::Half,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_initial(mut self, state: SnapState) -> Self {
        self.initial = state;
        self
    }

    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the controller with every observer recording into the returned sheet.
    pub fn build(self) -> TestSheet {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let snap_point_calls = Rc::new(RefCell::new(Vec::new()));
        let closes = Rc::new(Cell::new(0));
        let surface = RecordingSurface::new();

        let log = calls.clone();
        let options = SheetOptions::new(self.initial).on_state_change(move |s| log.borrow_mut().push(s));
        let mut sheet = SheetController::new(self.height, self.config, options)
            .expect("test geometry must be valid")
            .with_surface(surface.clone());

        let log = snap_point_calls.clone();
        sheet.set_on_snap_point_change(move |s| log.borrow_mut().push(s));
        let counter = closes.clone();
        sheet.set_on_close(move || counter.set(counter.get() + 1));

        TestSheet {
            sheet,
            calls,
            snap_point_calls,
            closes,
            surface,
        }
    }
}

// ============================================================================
// TestSheet
// ============================================================================

pub struct TestSheet {
    pub sheet: SheetController,
    pub calls: Rc<RefCell<Vec<SnapState>>>,
    pub snap_point_calls: Rc<RefCell<Vec<SnapState>>>,
    pub closes: Rc<Cell<usize>>,
    pub surface: RecordingSurface,
}

impl TestSheet {
    /// States passed to `on_state_change`, in order
    pub fn calls(&self) -> Vec<SnapState> {
        self.calls.borrow().clone()
    }

    pub fn snap_point_calls(&self) -> Vec<SnapState> {
        self.snap_point_calls.borrow().clone()
    }

    /// Press, move in `steps` even steps from `from_y` to `to_y` over
    /// `duration_ms`, but do not release.
    pub fn drag_without_release(
        &mut self,
        pointer_id: u64,
        from_y: f32,
        to_y: f32,
        start_ms: u64,
        duration_ms: u64,
        steps: u64,
    ) -> bool {
        let started = self
            .sheet
            .handle_pointer_down(&PointerEvent::at_ms(pointer_id, from_y, start_ms), DragZone::Handle);
        for k in 1..=steps {
            let y = from_y + (to_y - from_y) * k as f32 / steps as f32;
            let t = start_ms + duration_ms * k / steps;
            self.sheet.handle_pointer_move(&PointerEvent::at_ms(pointer_id, y, t));
        }
        started
    }

    /// Full gesture: press, even moves, release at `to_y`.
    pub fn drag(&mut self, pointer_id: u64, from_y: f32, to_y: f32, start_ms: u64, duration_ms: u64, steps: u64) {
        self.drag_without_release(pointer_id, from_y, to_y, start_ms, duration_ms, steps);
        self.sheet
            .handle_pointer_up(&PointerEvent::at_ms(pointer_id, to_y, start_ms + duration_ms));
    }

    /// Gesture that moves then holds still long enough to shed all velocity.
    pub fn slow_drag(&mut self, pointer_id: u64, from_y: f32, to_y: f32, start_ms: u64) {
        self.drag_without_release(pointer_id, from_y, to_y, start_ms, 400, 20);
        self.sheet
            .handle_pointer_up(&PointerEvent::at_ms(pointer_id, to_y, start_ms + 1000));
    }
}

/// Compact geometry: full 100, half 200, collapsed 300 (travel 200)
pub fn compact_config() -> SheetConfig {
    SheetConfig {
        full_top_inset: 100.0,
        half_fraction: 0.5,
        collapsed_peek: 100.0,
        ..Default::default()
    }
}

// ============================================================================
// LogCapture - tracing output as a string
// ============================================================================

/// In-memory `tracing` sink for asserting on log lines.
///
/// # Example
/// ```ignore
/// let logs = LogCapture::new();
/// logs.capture(|| sheet.dispose());
/// assert!(logs.contents().contains("disposed"));
/// ```
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with this capture as the thread's subscriber (warn and above)
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
