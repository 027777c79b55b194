//! Keyboard affordances on the drag handle and backdrop clicks.

use crate::helpers::TestSheetBuilder;
use snapsheet::{SheetKey, SnapState};

#[test]
fn test_escape_sequence_ends_in_close_request() {
    let mut t = TestSheetBuilder::new().with_initial(SnapState::Full).build();

    t.sheet.handle_key(SheetKey::Escape);
    t.sheet.handle_key(SheetKey::Escape);
    t.sheet.handle_key(SheetKey::Escape);

    assert_eq!(t.sheet.state(), SnapState::Collapsed);
    assert_eq!(t.calls(), vec![SnapState::Half, SnapState::Collapsed]);
    assert_eq!(t.closes.get(), 1);
}

#[test]
fn test_enter_cycles_with_full_stepping_back() {
    let mut t = TestSheetBuilder::new().with_initial(SnapState::Collapsed).build();

    for _ in 0..4 {
        t.sheet.handle_key(SheetKey::Enter);
    }

    assert_eq!(
        t.calls(),
        vec![SnapState::Half, SnapState::Full, SnapState::Half, SnapState::Full]
    );
    assert_eq!(t.closes.get(), 0);
}

#[test]
fn test_space_matches_enter() {
    let mut a = TestSheetBuilder::new().build();
    let mut b = TestSheetBuilder::new().build();
    a.sheet.handle_key(SheetKey::Enter);
    b.sheet.handle_key(SheetKey::Space);
    assert_eq!(a.sheet.state(), b.sheet.state());
}

#[test]
fn test_backdrop_click_drops_full_to_half() {
    let mut t = TestSheetBuilder::new().with_initial(SnapState::Full).build();
    assert!(t.sheet.frame().unwrap().backdrop_opacity.is_some());

    assert!(t.sheet.handle_backdrop_click());
    assert_eq!(t.sheet.state(), SnapState::Half);
    assert!(t.sheet.frame().unwrap().backdrop_opacity.is_none());

    // No backdrop below full
    assert!(!t.sheet.handle_backdrop_click());
    assert_eq!(t.calls(), vec![SnapState::Half]);
}

#[test]
fn test_keys_ignored_when_closed() {
    let mut t = TestSheetBuilder::new().build();
    t.sheet.set_open(false);
    assert!(!t.sheet.handle_key(SheetKey::Enter));
    assert!(!t.sheet.handle_key(SheetKey::Escape));
    assert_eq!(t.closes.get(), 0);
    assert!(t.calls().is_empty());
}
