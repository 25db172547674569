// Host-side tests for field-wide operations: population, target
// assignment, release, explosion and resize.

use app_core::{Cursor, Field, FieldParams, Mode};
use glam::Vec2;

fn small_params(count: usize) -> FieldParams {
    FieldParams {
        particle_count: count,
        ..FieldParams::default()
    }
}

fn make_field(count: usize) -> Field {
    Field::new(800.0, 600.0, small_params(count), 42)
}

#[test]
fn new_field_populates_count_within_bounds() {
    let field = make_field(12);
    assert_eq!(field.len(), 12);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        assert_eq!(p.mode, Mode::Floating);
    }
}

#[test]
fn assign_targets_with_fewer_coordinates_leaves_rest_floating() {
    let mut field = make_field(12);
    let coords: Vec<Vec2> = (0..5).map(|i| Vec2::new(i as f32 * 10.0, 50.0)).collect();

    field.assign_targets(&coords);
    assert_eq!(field.count_in_mode(Mode::FormingText), 5);
    assert_eq!(field.count_in_mode(Mode::Floating), 7);
    for (i, coord) in coords.iter().enumerate() {
        assert_eq!(field.particles()[i].target, *coord);
        assert_eq!(field.particles()[i].mode, Mode::FormingText);
    }
}

#[test]
fn assign_targets_truncates_surplus_coordinates() {
    let mut field = make_field(3);
    let coords: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32, i as f32)).collect();

    field.assign_targets(&coords);
    assert_eq!(field.count_in_mode(Mode::FormingText), 3);
    for (i, p) in field.particles().iter().enumerate() {
        assert_eq!(p.target, coords[i]);
    }
}

#[test]
fn release_targets_returns_all_to_floating() {
    let mut field = make_field(12);
    let coords: Vec<Vec2> = (0..12).map(|i| Vec2::new(i as f32, 0.0)).collect();
    field.assign_targets(&coords);
    assert_eq!(field.count_in_mode(Mode::FormingText), 12);

    field.release_targets();
    assert_eq!(field.count_in_mode(Mode::Floating), 12);
}

#[test]
fn explode_all_then_step_displaces_every_particle() {
    let mut field = make_field(12);
    field.explode_all();
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

    field.step(&Cursor::new(120.0));
    for (p, prev) in field.particles().iter().zip(&before) {
        let moved = p.position.distance(*prev);
        assert!(moved > 0.0, "particle did not move after explosion");
        assert!(
            moved <= field.params.explode_speed,
            "displacement {moved} beyond explosion range"
        );
    }
}

#[test]
fn resize_replaces_population_at_new_bounds() {
    let mut field = make_field(12);
    field.resize(300.0, 200.0);
    assert_eq!(field.len(), 12);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 300.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 200.0);
    }
}

#[test]
fn forming_field_converges_even_under_cursor() {
    let mut field = make_field(12);
    let coords: Vec<Vec2> = (0..12)
        .map(|i| Vec2::new(100.0 + (i % 4) as f32 * 20.0, 100.0 + (i / 4) as f32 * 20.0))
        .collect();
    field.assign_targets(&coords);

    // Cursor parked in the middle of the glyph must not disturb assembly.
    let mut cursor = Cursor::new(120.0);
    cursor.set(Vec2::new(120.0, 120.0));

    for _ in 0..400 {
        field.step(&cursor);
    }
    for (p, coord) in field.particles().iter().zip(&coords) {
        assert!(
            p.position.distance(*coord) < 1.0,
            "particle stuck {} away from its target",
            p.position.distance(*coord)
        );
    }
}
