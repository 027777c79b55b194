//! Controller lifecycle - construction, mounting state and teardown.

use super::{SheetCallbacks, SheetController};
use crate::config::{SheetConfig, SheetOptions};
use crate::error::{SheetError, SheetResult};
use crate::geometry::SnapOffsets;
use crate::input::InteractionState;
use crate::snap::SnapResolver;
use crate::surface::{NullSurface, SheetSurface};
use tracing::{debug, warn};

impl SheetController {
    /// Create a controller for a container of `container_height` px.
    ///
    /// `options.initial_state` wins over `config.initial_state` when set.
    pub fn new(container_height: f32, config: SheetConfig, options: SheetOptions) -> SheetResult<Self> {
        config.validate()?;
        let offsets = SnapOffsets::from_container(container_height, &config)?;
        let resolver = SnapResolver::new(config.fling_velocity);
        let initial_state = options.resolve_initial_state(&config);

        debug!(
            container_height,
            initial = %initial_state,
            full = offsets.full,
            half = offsets.half,
            collapsed = offsets.collapsed,
            "sheet controller created"
        );

        Ok(Self {
            config,
            resolver,
            offsets,
            container_height,
            state: initial_state,
            open: true,
            interaction: InteractionState::default(),
            controlled: None,
            pending: None,
            last_transition: None,
            callbacks: SheetCallbacks {
                on_state_change: options.on_state_change,
                ..Default::default()
            },
            surface: Box::new(NullSurface),
            disposed: false,
        })
    }

    /// Controller with default config and options
    pub fn with_defaults(container_height: f32) -> SheetResult<Self> {
        Self::new(container_height, SheetConfig::default(), SheetOptions::default())
    }

    /// Bind the render node and place it at the committed state without animating
    pub fn attach_surface(&mut self, surface: impl SheetSurface + 'static) {
        self.surface = Box::new(surface);
        let offset = self.offsets.offset_of(self.state);
        self.surface.set_offset(offset, None);
    }

    /// Builder form of [`SheetController::attach_surface`]
    pub fn with_surface(mut self, surface: impl SheetSurface + 'static) -> Self {
        self.attach_surface(surface);
        self
    }

    /// Recompute snap offsets after the container resized.
    ///
    /// A live drag keeps the bounds it started with; the new offsets apply to
    /// its release and to everything after.
    pub fn set_container_height(&mut self, height: f32) -> SheetResult<()> {
        if self.disposed {
            return Err(SheetError::Disposed);
        }

        self.offsets = SnapOffsets::from_container(height, &self.config)?;
        self.container_height = height;
        debug!(height, "sheet container resized");

        if self.interaction.is_idle() {
            let offset = self.offsets.offset_of(self.state);
            self.surface.set_offset(offset, None);
        }
        Ok(())
    }

    /// Show or remove the sheet.
    ///
    /// Closing mid-drag abandons the drag: the committed state stays as it
    /// was and no callback fires.
    pub fn set_open(&mut self, open: bool) {
        if !self.accepts_events("set_open") || self.open == open {
            return;
        }
        self.open = open;
        debug!(open, "sheet visibility changed");

        if !open {
            if let Some(session) = self.interaction.take_session() {
                debug!(pointer = session.pointer_id, "drag abandoned by close");
                let resting = self.offsets.offset_of(session.start_state);
                self.surface.set_offset(resting, None);
                self.flush_pending();
            }
        } else {
            let offset = self.offsets.offset_of(self.state);
            self.surface.set_offset(offset, None);
        }
    }

    /// Tear down: drop the drag, stop animation, release every callback.
    ///
    /// Idempotent. Every handler called afterwards is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        if let Some(session) = self.interaction.take_session() {
            debug!(pointer = session.pointer_id, "drag dropped by dispose");
        }
        self.surface.cancel_animation();
        self.callbacks.clear();
        self.pending = None;
        self.disposed = true;
        debug!(state = %self.state, "sheet controller disposed");
    }

    /// Returns false (and logs) if the controller can no longer take events
    pub(crate) fn accepts_events(&self, event: &'static str) -> bool {
        if self.disposed {
            warn!(event, "event delivered to disposed sheet controller");
            return false;
        }
        true
    }
}

impl Drop for SheetController {
    fn drop(&mut self) {
        self.dispose();
    }
}
