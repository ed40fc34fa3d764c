use super::*;

#[test]
fn fully_inside_viewport_is_one() {
    assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
}

#[test]
fn entirely_below_the_fold_is_zero() {
    assert_eq!(visible_fraction(900.0, 1_100.0, 800.0), 0.0);
}

#[test]
fn entirely_scrolled_past_is_zero() {
    assert_eq!(visible_fraction(-400.0, -100.0, 800.0), 0.0);
}

#[test]
fn partially_below_the_fold() {
    assert_eq!(visible_fraction(700.0, 900.0, 800.0), 0.5);
}

#[test]
fn partially_above_the_top() {
    assert_eq!(visible_fraction(-150.0, 50.0, 800.0), 0.25);
}

#[test]
fn taller_than_viewport_counts_visible_share() {
    assert_eq!(visible_fraction(-500.0, 1_500.0, 1_000.0), 0.5);
}

#[test]
fn collapsed_element_is_never_visible() {
    assert_eq!(visible_fraction(200.0, 200.0, 800.0), 0.0);
    assert_eq!(visible_fraction(200.0, 300.0, 0.0), 0.0);
}
