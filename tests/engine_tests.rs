//! Engine tests - compositor tick order, line lifecycle, draw policies

use tui_rain::core::RainEngine;
use tui_rain::types::{Color, EMPTY_CELL};

#[test]
fn line_count_is_invariant_across_ticks() {
    let mut engine = RainEngine::new(12, 20, 99);
    engine.configure_lines(8, 6);
    assert_eq!(engine.line_count(), 8);

    for _ in 0..50 {
        engine.tick(0.0).unwrap();
        assert_eq!(engine.line_count(), 8);
        for line in engine.lines() {
            assert!(line.length() <= line.max_length());
        }
    }
}

#[test]
fn fixed_line_walks_across_row_zero() {
    let mut engine = RainEngine::new(5, 5, 7);
    engine.configure_lines(0, 10);
    engine.add_uniform_line(0, 0, 3, '#');

    // Growth: one more visible cell per tick, anchored at (0, 0).
    engine.tick(0.0).unwrap();
    assert_eq!(engine.grid().get_char(0, 0), Ok('#'));
    assert_eq!(engine.grid().get_char(0, 1), Ok(EMPTY_CELL));

    engine.tick(0.0).unwrap();
    engine.tick(0.0).unwrap();
    // Three ticks in, all three cells of the streak are visible and the
    // line has tipped over into its shrinking phase.
    for column in 0..3 {
        assert_eq!(engine.grid().get_char(0, column), Ok('#'));
    }
    assert!(engine.lines()[0].is_shrinking());

    // Shrinking: the tail falls away along the column axis.
    engine.tick(0.0).unwrap();
    assert_eq!(engine.grid().get_char(0, 0), Ok(EMPTY_CELL));
    assert_eq!(engine.grid().get_char(0, 1), Ok('#'));
    assert_eq!(engine.grid().get_char(0, 2), Ok('#'));
}

#[test]
fn dead_line_is_replaced_in_slot_by_a_rolled_one() {
    let mut engine = RainEngine::new(5, 5, 7);
    engine.configure_lines(0, 10);
    engine.add_uniform_line(0, 0, 3, '#');
    assert!(!engine.lines()[0].is_randomized());

    // 3 growth ticks + 3 shrink ticks exhaust the fixed streak.
    for _ in 0..6 {
        engine.tick(0.0).unwrap();
    }

    assert_eq!(engine.line_count(), 1);
    let replacement = &engine.lines()[0];
    assert!(replacement.is_randomized());
    assert!(replacement.row() < 5);
    assert!(replacement.max_length() < 10);
}

#[test]
fn line_clipped_at_the_grid_edge_never_panics() {
    let mut engine = RainEngine::new(3, 3, 5);
    engine.configure_lines(0, 10);
    // Anchored one cell from the edge; most of its run is off-grid, and
    // shrinking pushes the anchor past the boundary entirely.
    engine.add_uniform_line(0, 2, 6, '#');

    for _ in 0..15 {
        engine.tick(0.0).unwrap();
        assert_eq!(engine.line_count(), 1);
    }
}

#[test]
fn texts_draw_over_lines() {
    let mut engine = RainEngine::new(5, 5, 1);
    engine.configure_lines(0, 10);
    engine.add_uniform_line(0, 0, 3, 'X');
    engine.add_text(0, 0, "AB", Color::Green);

    engine.tick(0.0).unwrap();

    // The line wrote 'X' at (0, 0) first; the text pass wins the cell.
    assert_eq!(engine.grid().get_char(0, 0), Ok('A'));
    assert_eq!(engine.grid().get_char(1, 0), Ok('B'));
    assert_eq!(engine.grid().get_color(0, 0), Ok(Color::Green));
}

#[test]
fn button_colors_only_non_blank_cells() {
    let mut engine = RainEngine::new(8, 8, 4);
    engine
        .add_button("a", 0, 5, 3, 0, 0, Color::Red)
        .unwrap();

    engine.tick(0.0).unwrap();

    // Border cell: digit, colored.
    let border = engine.grid().get_char(0, 0).unwrap();
    assert!(border.is_ascii_digit());
    assert_eq!(engine.grid().get_color(0, 0), Ok(Color::Red));

    // Blank interior cell: blanked but left uncolored.
    assert_eq!(engine.grid().get_char(1, 1), Ok(EMPTY_CELL));
    assert_eq!(engine.grid().get_color(1, 1), Ok(Color::Transparent));

    // The centered label draws through the text pass, with color.
    assert_eq!(engine.grid().get_char(2, 1), Ok('A'));
    assert_eq!(engine.grid().get_color(2, 1), Ok(Color::Red));
}

#[test]
fn button_label_glitches_through_the_text_pass() {
    let mut engine = RainEngine::new(20, 9, 8);
    let handle = engine
        .add_button("steady", 1, 12, 5, 2, 2, Color::Cyan)
        .unwrap();

    // Zero glitch: the rendered label equals its canonical form.
    engine.tick(0.0).unwrap();
    let label = engine.button(handle).unwrap().label();
    assert_eq!(label.rendered(), label.canonical());

    // Full glitch: corrupted positions hold digits.
    engine.tick(1.0).unwrap();
    let label = engine.button(handle).unwrap().label();
    for (rendered, canonical) in label.rendered().iter().zip(label.canonical()) {
        assert!(rendered == canonical || rendered.is_ascii_digit());
    }
}

#[test]
fn out_of_range_fraction_fails_fast_and_mutates_nothing() {
    let mut engine = RainEngine::new(10, 10, 77);
    engine.configure_lines(4, 5);
    let handle = engine.add_text(2, 3, "HOLD", Color::Green);
    engine.tick(0.3).unwrap();

    let frame_before = engine.render();
    let rendered_before: Vec<char> = engine.text(handle).unwrap().rendered().to_vec();

    assert!(engine.tick(-0.1).is_err());
    assert!(engine.tick(1.5).is_err());

    assert_eq!(engine.render(), frame_before);
    assert_eq!(
        engine.text(handle).unwrap().rendered(),
        rendered_before.as_slice()
    );
}

#[test]
fn failed_button_leaves_the_engine_unchanged() {
    let mut engine = RainEngine::new(10, 10, 5);
    assert!(engine.add_button("far too long", 1, 6, 3, 0, 0, Color::Red).is_err());
    engine.tick(0.0).unwrap();
    // Nothing was registered, so nothing draws.
    assert_eq!(engine.grid().get_char(0, 0), Ok(EMPTY_CELL));
}

#[test]
fn render_is_idempotent_between_ticks() {
    let mut engine = RainEngine::new(6, 6, 31);
    engine.configure_lines(3, 4);
    engine.add_text(1, 1, "OK", Color::Green);
    engine.tick(0.0).unwrap();

    assert_eq!(engine.render(), engine.render());
}

#[test]
fn seeded_engines_animate_identically() {
    let mut a = RainEngine::new(9, 9, 123);
    let mut b = RainEngine::new(9, 9, 123);
    for engine in [&mut a, &mut b] {
        engine.configure_lines(5, 6);
        engine.add_text(2, 4, "twin", Color::Green);
        engine.add_button("go", 0, 6, 3, 3, 3, Color::Red).unwrap();
    }

    for _ in 0..25 {
        a.tick(0.5).unwrap();
        b.tick(0.5).unwrap();
        assert_eq!(a.render(), b.render());
    }
}

#[test]
fn fill_variant_shows_through_until_first_tick() {
    let engine = RainEngine::with_fill(3, 3, '.', 2);
    assert_eq!(engine.grid().get_char(1, 1), Ok('.'));

    let mut engine = engine;
    engine.tick(0.0).unwrap();
    // The first tick clears the pre-fill like any other frame.
    assert_eq!(engine.grid().get_char(1, 1), Ok(EMPTY_CELL));
}
