//! BottomSheet view - binds a `SheetController` to GPUI elements.
//!
//! The sheet fills its window: window coordinates are container coordinates.
//! Mouse input has no pointer ids, so every drag uses `MOUSE_POINTER_ID`.

use super::surface::ShellSurface;
use crate::constants::{HANDLE_GRIP_WIDTH, HANDLE_HEIGHT};
use crate::controller::SheetController;
use crate::presentation::SheetFrame;
use crate::types::{DragZone, PointerEvent, SheetKey, SnapState};
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::time::Instant;
use tracing::warn;

const MOUSE_POINTER_ID: u64 = 0;

/// A draggable bottom sheet hosting arbitrary content
pub struct BottomSheet {
    controller: SheetController,
    surface: ShellSurface,
    focus_handle: FocusHandle,
    content_scroll: ScrollHandle,
    content: Option<AnyView>,
    epoch: Instant,
}

impl BottomSheet {
    pub fn new(mut controller: SheetController, cx: &mut Context<Self>) -> Self {
        let surface = ShellSurface::new(controller.current_offset());
        controller.attach_surface(surface.clone());
        Self {
            controller,
            surface,
            focus_handle: cx.focus_handle(),
            content_scroll: ScrollHandle::new(),
            content: None,
            epoch: Instant::now(),
        }
    }

    pub fn with_content(mut self, content: AnyView) -> Self {
        self.content = Some(content);
        self
    }

    pub fn controller(&self) -> &SheetController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SheetController {
        &mut self.controller
    }

    /// Forward the parent's controlled props
    pub fn set_props(&mut self, open: bool, snap_point: Option<SnapState>, cx: &mut Context<Self>) {
        self.controller.set_open(open);
        self.controller.set_snap_point(snap_point);
        cx.notify();
    }

    fn pointer(&self, position: Point<Pixels>) -> PointerEvent {
        PointerEvent::new(MOUSE_POINTER_ID, f32::from(position.y), self.epoch.elapsed())
    }

    fn content_scroll_top(&self) -> f32 {
        -f32::from(self.content_scroll.offset().y)
    }

    fn sync_container(&mut self, window: &Window) {
        let height = f32::from(window.viewport_size().height);
        if (height - self.controller.container_height()).abs() > 0.5 {
            if let Err(err) = self.controller.set_container_height(height) {
                warn!(%err, "bottom sheet does not fit the window");
            }
        }
    }

    fn render_backdrop(&self, opacity: f32, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("bottom-sheet-backdrop")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, opacity))
            .on_click(cx.listener(|this, _, _, cx| {
                if this.controller.handle_backdrop_click() {
                    cx.notify();
                }
            }))
    }

    fn render_handle(&self, frame: &SheetFrame, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("bottom-sheet-handle")
            .track_focus(&self.focus_handle)
            .w_full()
            .h(px(HANDLE_HEIGHT))
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    let pointer = this.pointer(event.position);
                    if this.controller.handle_pointer_down(&pointer, DragZone::Handle) {
                        cx.stop_propagation();
                        cx.notify();
                    }
                }),
            )
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
                let handled = SheetKey::from_key_name(&event.keystroke.key)
                    .is_some_and(|key| this.controller.handle_key(key));
                if handled {
                    cx.stop_propagation();
                    cx.notify();
                }
            }))
            .child(
                div()
                    .w(px(HANDLE_GRIP_WIDTH))
                    .h(px(4.0))
                    .rounded(px(2.0))
                    .bg(hsla(0.0, 0.0, 0.5, if frame.handle.aria_expanded { 0.6 } else { 0.9 })),
            )
    }

    fn render_content(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("bottom-sheet-content")
            .flex_1()
            .w_full()
            .overflow_y_scroll()
            .track_scroll(&self.content_scroll)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, _, cx| {
                    let pointer = this.pointer(event.position);
                    let zone = DragZone::Content {
                        scroll_top: this.content_scroll_top(),
                    };
                    if this.controller.handle_pointer_down(&pointer, zone) {
                        cx.notify();
                    }
                }),
            )
            .when_some(self.content.clone(), |d, content| d.child(content))
    }
}

impl Render for BottomSheet {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_container(window);

        let Some(frame) = self.controller.frame() else {
            // Closed: nothing at all, not a collapsed sheet.
            return div().into_any_element();
        };

        let now = Instant::now();
        let offset = if frame.dragging {
            frame.offset
        } else {
            self.surface.offset_at(now)
        };
        if self.surface.is_animating(now) {
            window.request_animation_frame();
        }

        let sheet_height = (self.controller.container_height() - offset).max(0.0);

        div()
            .id("bottom-sheet-root")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _, cx| {
                let pointer = this.pointer(event.position);
                if this.controller.handle_pointer_move(&pointer) {
                    cx.notify();
                }
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event: &MouseUpEvent, _, cx| {
                    let pointer = this.pointer(event.position);
                    if this.controller.handle_pointer_up(&pointer) {
                        cx.notify();
                    }
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| {
                    // Released outside the window: treat as a lost pointer
                    if this.controller.handle_pointer_cancel(MOUSE_POINTER_ID) {
                        cx.notify();
                    }
                }),
            )
            .when_some(frame.backdrop_opacity, |d, opacity| {
                d.child(self.render_backdrop(opacity, cx))
            })
            .child(
                div()
                    .id("bottom-sheet")
                    .absolute()
                    .left_0()
                    .top(px(offset))
                    .w_full()
                    .h(px(sheet_height))
                    .flex()
                    .flex_col()
                    .bg(rgb(0xffffff))
                    .rounded(px(12.0))
                    .shadow_lg()
                    .child(self.render_handle(&frame, cx))
                    .child(self.render_content(cx)),
            )
            .into_any_element()
    }
}
