//! Controlled `snap_point` prop and imperative requests versus live drags.

use crate::helpers::TestSheetBuilder;
use snapsheet::controller::PendingRequest;
use snapsheet::{PointerEvent, SheetHandle, SnapState, TransitionReason};

#[test]
fn test_prop_never_overrides_live_drag() {
    let mut t = TestSheetBuilder::new().build();

    // Drag from half toward collapsed
    t.drag_without_release(1, 400.0, 690.0, 0, 400, 20);
    assert!(!t.sheet.set_snap_point(Some(SnapState::Full)));
    assert_eq!(t.sheet.state(), SnapState::Half);
    assert_eq!(t.sheet.current_offset(), 690.0);

    t.sheet.handle_pointer_up(&PointerEvent::at_ms(1, 690.0, 1000));

    // Drag's own target commits first, then the queued prop
    assert_eq!(t.calls(), vec![SnapState::Collapsed, SnapState::Full]);
    assert_eq!(t.sheet.state(), SnapState::Full);
    assert_eq!(t.sheet.inspect().last_transition, Some(TransitionReason::ControlledProp));
}

#[test]
fn test_queued_prop_matching_drag_result_is_silent() {
    let mut t = TestSheetBuilder::new().build();
    t.drag_without_release(1, 400.0, 690.0, 0, 400, 20);
    t.sheet.set_snap_point(Some(SnapState::Collapsed));
    t.sheet.handle_pointer_up(&PointerEvent::at_ms(1, 690.0, 1000));

    assert_eq!(t.calls(), vec![SnapState::Collapsed]);
    assert!(t.sheet.pending_request().is_none());
}

#[test]
fn test_last_queued_request_wins() {
    let mut t = TestSheetBuilder::new().build();
    t.drag_without_release(1, 400.0, 410.0, 0, 50, 2);

    t.sheet.set_snap_point(Some(SnapState::Full));
    t.sheet.set_snap_point(Some(SnapState::Collapsed));
    assert_eq!(
        t.sheet.pending_request(),
        Some(PendingRequest {
            target: SnapState::Collapsed,
            reason: TransitionReason::ControlledProp,
        })
    );

    t.sheet.handle_pointer_up(&PointerEvent::at_ms(1, 410.0, 500));
    assert_eq!(t.calls(), vec![SnapState::Collapsed]);
}

#[test]
fn test_prop_change_when_idle_notifies_observers() {
    let mut t = TestSheetBuilder::new().build();
    assert!(t.sheet.set_snap_point(Some(SnapState::Collapsed)));
    assert_eq!(t.calls(), vec![SnapState::Collapsed]);
    assert_eq!(t.snap_point_calls(), vec![SnapState::Collapsed]);
}

#[test]
fn test_snap_to_during_drag_is_deferred() {
    let mut t = TestSheetBuilder::new().build();
    t.drag_without_release(1, 400.0, 410.0, 0, 50, 2);

    t.sheet.snap_to(SnapState::Full).unwrap();
    assert_eq!(t.sheet.state(), SnapState::Half);

    t.sheet.handle_pointer_cancel(1);
    assert_eq!(t.sheet.state(), SnapState::Full);
    assert_eq!(t.sheet.inspect().last_transition, Some(TransitionReason::Imperative));
}

#[test]
fn test_handle_rejects_invalid_state_without_mutation() {
    let t = TestSheetBuilder::new().build();
    let calls = t.calls.clone();
    let handle = SheetHandle::new(t.sheet);

    assert!(handle.snap_to_named("expanded").is_err());
    assert!(handle.snap_to_named("").is_err());
    assert_eq!(handle.state().unwrap(), SnapState::Half);
    assert!(calls.borrow().is_empty());

    handle.snap_to_named("full").unwrap();
    assert_eq!(*calls.borrow(), vec![SnapState::Full]);
}

#[test]
fn test_released_control_is_not_replayed_after_drag() {
    let mut t = TestSheetBuilder::new().build();
    t.drag_without_release(1, 400.0, 690.0, 0, 400, 20);
    t.sheet.set_snap_point(Some(SnapState::Full));
    t.sheet.set_snap_point(None);
    assert_eq!(t.sheet.inspect().pending, None);

    t.sheet.handle_pointer_up(&PointerEvent::at_ms(1, 690.0, 1000));

    // Only the drag's own target commits
    assert_eq!(t.calls(), vec![SnapState::Collapsed]);
    assert_eq!(t.sheet.state(), SnapState::Collapsed);
    assert_eq!(t.sheet.inspect().last_transition, Some(TransitionReason::DragRelease));
}
