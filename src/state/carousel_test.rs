use super::*;

// =============================================================
// Paged stepping
// =============================================================

#[test]
fn paged_window_count_rounds_up() {
    let carousel = Carousel::new(22, 6, Stepping::Paged);
    assert_eq!(carousel.windows(), 4);
}

#[test]
fn paged_tick_advances_by_one_and_wraps() {
    let mut carousel = Carousel::new(22, 6, Stepping::Paged);
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(carousel.index());
        carousel.tick();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn paged_last_window_is_short() {
    let mut carousel = Carousel::new(22, 6, Stepping::Paged);
    carousel.go_to(3);
    assert_eq!(carousel.window(), 18..22);
}

#[test]
fn paged_first_window_is_full() {
    let carousel = Carousel::new(22, 6, Stepping::Paged);
    assert_eq!(carousel.window(), 0..6);
}

#[test]
fn paged_exact_multiple_has_no_empty_page() {
    let carousel = Carousel::new(12, 6, Stepping::Paged);
    assert_eq!(carousel.windows(), 2);
}

// =============================================================
// Sliding stepping
// =============================================================

#[test]
fn sliding_window_count_is_offsets_plus_one() {
    let carousel = Carousel::new(10, 5, Stepping::Sliding);
    assert_eq!(carousel.windows(), 6);
}

#[test]
fn sliding_window_moves_one_item() {
    let mut carousel = Carousel::new(10, 5, Stepping::Sliding);
    carousel.next();
    assert_eq!(carousel.window(), 1..6);
}

#[test]
fn sliding_next_wraps_after_last_offset() {
    let mut carousel = Carousel::new(10, 5, Stepping::Sliding);
    carousel.go_to(5);
    assert_eq!(carousel.window(), 5..10);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn sliding_prev_wraps_to_last_offset() {
    let mut carousel = Carousel::new(10, 5, Stepping::Sliding);
    carousel.prev();
    assert_eq!(carousel.index(), 5);
}

#[test]
fn sliding_fewer_items_than_view_is_static() {
    let mut carousel = Carousel::new(3, 5, Stepping::Sliding);
    assert_eq!(carousel.windows(), 1);
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.window(), 0..3);
}

// =============================================================
// Degenerate lists and pausing
// =============================================================

#[test]
fn empty_list_has_single_empty_window() {
    let mut carousel = Carousel::new(0, 6, Stepping::Paged);
    assert_eq!(carousel.windows(), 1);
    carousel.tick();
    assert_eq!(carousel.index(), 0);
    assert!(carousel.window().is_empty());
}

#[test]
fn zero_per_view_is_treated_as_one() {
    let carousel = Carousel::new(4, 0, Stepping::Paged);
    assert_eq!(carousel.windows(), 4);
    assert_eq!(carousel.window(), 0..1);
}

#[test]
fn go_to_clamps_out_of_range() {
    let mut carousel = Carousel::new(22, 6, Stepping::Paged);
    carousel.go_to(40);
    assert_eq!(carousel.index(), 3);
}

#[test]
fn paused_tick_keeps_index_but_manual_steps_work() {
    let mut carousel = Carousel::new(10, 5, Stepping::Sliding);
    carousel.set_paused(true);
    carousel.tick();
    assert_eq!(carousel.index(), 0);
    carousel.next();
    assert_eq!(carousel.index(), 1);
    carousel.set_paused(false);
    carousel.tick();
    assert_eq!(carousel.index(), 2);
}

#[test]
fn reducer_hover_pauses_ticks() {
    let carousel = Rc::new(Carousel::new(10, 5, Stepping::Sliding));
    let carousel = carousel.reduce(CarouselAction::Hover(true));
    let carousel = carousel.reduce(CarouselAction::Tick);
    assert!(carousel.is_paused());
    assert_eq!(carousel.index(), 0);
    let carousel = carousel.reduce(CarouselAction::Hover(false));
    let carousel = carousel.reduce(CarouselAction::Tick);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn reducer_prev_and_go_to() {
    let carousel = Rc::new(Carousel::new(22, 6, Stepping::Paged));
    let carousel = carousel.reduce(CarouselAction::Prev);
    assert_eq!(carousel.index(), 3);
    let carousel = carousel.reduce(CarouselAction::GoTo(1));
    assert_eq!(carousel.index(), 1);
    let carousel = carousel.reduce(CarouselAction::Next);
    assert_eq!(carousel.index(), 2);
}
