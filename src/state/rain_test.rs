use super::*;

fn config() -> RainConfig {
    RainConfig {
        font_size: 16.0,
        characters: "01AIXPT",
        speed: 0.8,
    }
}

#[test]
fn one_column_per_font_width() {
    let field = RainField::new(config(), 100.0, 50.0);
    assert_eq!(field.columns(), 6);
    assert!(field.drops().iter().all(|&d| d == 1.0));
}

#[test]
fn step_draws_one_glyph_per_column_and_advances() {
    let mut field = RainField::new(config(), 32.0, 160.0);
    let glyphs = field.step(|| 0.0);
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].ch, '0');
    assert_eq!(glyphs[1].x, 16.0);
    assert_eq!(glyphs[0].y, 16.0);
    assert_eq!(field.drops(), &[1.8, 1.8]);
}

#[test]
fn top_of_random_range_picks_last_character() {
    let mut field = RainField::new(config(), 16.0, 160.0);
    let glyphs = field.step(|| 0.999_999);
    assert_eq!(glyphs[0].ch, 'T');
}

#[test]
fn drop_below_bottom_resets_only_on_lucky_roll() {
    let mut field = RainField::new(config(), 16.0, 8.0);
    field.step(|| 0.5);
    assert_eq!(field.drops(), &[1.8]);

    field.step(|| 0.99);
    assert_eq!(field.drops(), &[0.8]);
}

#[test]
fn drop_inside_canvas_never_resets() {
    let mut field = RainField::new(config(), 16.0, 1_000.0);
    field.step(|| 0.99);
    assert_eq!(field.drops(), &[1.8]);
}

#[test]
fn resize_keeps_existing_drops() {
    let mut field = RainField::new(config(), 32.0, 160.0);
    field.step(|| 0.0);
    field.resize(48.0, 160.0);
    assert_eq!(field.drops(), &[1.8, 1.8, 1.0]);
    field.resize(16.0, 160.0);
    assert_eq!(field.columns(), 1);
}

#[test]
fn empty_charset_draws_nothing() {
    let mut field = RainField::new(
        RainConfig {
            characters: "",
            ..config()
        },
        32.0,
        160.0,
    );
    assert!(field.step(|| 0.3).is_empty());
}
