use super::*;

fn state(total: u32, current: u32) -> PaginationState {
    PaginationState::new(total, current, 30, 5)
}

fn opened(total: u32, current: u32) -> PaginationState {
    let mut s = state(total, current);
    s.toggle();
    assert!(s.is_open());
    s
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_state_starts_closed_on_given_page() {
    let s = state(100, 42);
    assert!(!s.is_open());
    assert_eq!(s.current_page(), 42);
    assert_eq!(s.total_pages(), 100);
}

#[test]
fn new_state_clamps_initial_page() {
    assert_eq!(state(10, 0).current_page(), 1);
    assert_eq!(state(10, 99).current_page(), 10);
}

#[test]
fn zero_total_is_one_page() {
    let s = state(0, 3);
    assert_eq!(s.total_pages(), 1);
    assert_eq!(s.current_page(), 1);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_is_inert_with_single_page() {
    let mut s = state(1, 1);
    assert!(!s.can_toggle());
    assert!(s.toggle().is_noop());
    assert!(!s.is_open());
}

#[test]
fn opening_centers_current_page() {
    let mut s = state(1_000_000, 5000);
    let t = s.toggle();
    assert!(s.is_open());
    assert_eq!(t.scroll, Some(ScrollRequest::ToIndex(4997)));
    assert_eq!(t.selected, None);
}

#[test]
fn closing_has_no_effects() {
    let mut s = opened(100, 5);
    let t = s.toggle();
    assert!(!s.is_open());
    assert!(t.is_noop());
}

#[test]
fn container_style_follows_toggle() {
    let mut s = state(100, 5);
    assert_eq!(s.container_style(), "width: 0px; height: 32px;");
    s.toggle();
    assert_eq!(s.container_style(), "width: 151px; height: 32px;");
}

// =============================================================
// Arrows while closed
// =============================================================

#[test]
fn scroll_right_closed_advances_and_emits() {
    let mut s = state(10, 4);
    let t = s.scroll_right();
    assert_eq!(s.current_page(), 5);
    assert_eq!(t.selected, Some(5));
    assert_eq!(t.scroll, None);
}

#[test]
fn scroll_right_at_last_page_is_noop() {
    let mut s = state(10, 10);
    assert!(s.scroll_right().is_noop());
    assert_eq!(s.current_page(), 10);
}

#[test]
fn scroll_left_closed_retreats_and_emits() {
    let mut s = state(10, 4);
    let t = s.scroll_left();
    assert_eq!(s.current_page(), 3);
    assert_eq!(t.selected, Some(3));
}

#[test]
fn scroll_left_at_first_page_is_noop() {
    let mut s = state(10, 1);
    assert!(s.scroll_left().is_noop());
    assert_eq!(s.current_page(), 1);
}

// =============================================================
// Arrows while open
// =============================================================

#[test]
fn scroll_right_open_moves_viewport_one_window() {
    let mut s = opened(100, 50);
    let t = s.scroll_right();
    assert_eq!(t.scroll, Some(ScrollRequest::By(150.0)));
    assert_eq!(t.selected, None);
    assert_eq!(s.current_page(), 50);
}

#[test]
fn scroll_left_open_moves_viewport_back_one_window() {
    let mut s = opened(100, 50);
    let t = s.scroll_left();
    assert_eq!(t.scroll, Some(ScrollRequest::By(-150.0)));
    assert_eq!(s.current_page(), 50);
}

#[test]
fn open_scroll_window_matches_shrunken_layout() {
    let mut s = PaginationState::new(3, 2, 20, 5);
    s.toggle();
    assert_eq!(s.scroll_right().scroll, Some(ScrollRequest::By(60.0)));
}

// =============================================================
// Clicking an entry
// =============================================================

#[test]
fn select_page_emits_exactly_that_page_and_closes() {
    let mut s = opened(100, 5);
    let t = s.select_page(73);
    assert_eq!(t.selected, Some(73));
    assert_eq!(t.scroll, None);
    assert_eq!(s.current_page(), 73);
    assert!(!s.is_open());
}

#[test]
fn select_page_clamps_out_of_range_values() {
    let mut s = opened(100, 5);
    assert_eq!(s.select_page(500).selected, Some(100));
    assert_eq!(s.select_page(0).selected, Some(1));
}

// =============================================================
// Typing a page
// =============================================================

#[test]
fn enter_page_recenters_and_emits() {
    let mut s = state(1_000, 1);
    let t = s.enter_page("250");
    assert_eq!(s.current_page(), 250);
    assert_eq!(t.selected, Some(250));
    assert_eq!(t.scroll, Some(ScrollRequest::ToIndex(247)));
}

#[test]
fn enter_page_clamps_high_and_low() {
    let mut s = state(1_000, 10);
    assert_eq!(s.enter_page("99999").selected, Some(1_000));
    assert_eq!(s.enter_page("-3").selected, Some(1));
    assert_eq!(s.current_page(), 1);
}

#[test]
fn non_numeric_entry_leaves_page_unchanged() {
    let mut s = state(1_000, 10);
    let t = s.enter_page("ten");
    assert_eq!(t.selected, None);
    assert_eq!(t.scroll, None);
    assert_eq!(s.current_page(), 10);
}

#[test]
fn rejected_entry_reverts_display_to_current_page() {
    let mut s = state(1_000, 10);
    let t = s.enter_page("abc");
    assert_eq!(t.display, Some(10));
    assert!(!t.is_noop());
}

#[test]
fn accepted_entry_displays_clamped_page() {
    let mut s = state(1_000, 10);
    assert_eq!(s.enter_page("99999").display, Some(1_000));
    assert_eq!(s.enter_page(" 42 ").display, Some(42));
}

#[test]
fn arrow_step_updates_display() {
    let mut s = state(10, 4);
    assert_eq!(s.scroll_right().display, Some(5));
    assert_eq!(s.scroll_left().display, Some(4));
}

#[test]
fn viewport_scroll_leaves_display_alone() {
    let mut s = opened(100, 50);
    assert_eq!(s.scroll_right().display, None);
}

#[test]
fn enter_page_keeps_list_open_state() {
    let mut s = opened(1_000, 10);
    s.enter_page("20");
    assert!(s.is_open());
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn current_page_stays_in_range_under_any_sequence() {
    let mut s = state(7, 4);
    for _ in 0..20 {
        s.scroll_right();
        assert!((1..=7).contains(&s.current_page()));
    }
    for _ in 0..20 {
        s.scroll_left();
        assert!((1..=7).contains(&s.current_page()));
    }
    for raw in ["0", "8", "x", "3.7", "-1", "1e12", ""] {
        s.enter_page(raw);
        assert!((1..=7).contains(&s.current_page()), "after {raw:?}");
    }
}
