// File: crates/pulse-core/tests/curves.rs
// Purpose: Validate curve generation for linear, cubic, and horizontal modes.

use kurbo::{PathEl, Point};
use pulse_core::curve::{cubic_path, horizontal_path, linear_path};

fn pts(data: &[(f64, f64)]) -> Vec<Point> {
    data.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn fewer_than_two_points_yield_empty_paths() {
    let one = pts(&[(1.0, 1.0)]);
    assert!(linear_path(&[]).elements().is_empty());
    assert!(linear_path(&one).elements().is_empty());
    assert!(cubic_path(&one, 0.2).elements().is_empty());
    assert!(horizontal_path(&one).elements().is_empty());
}

#[test]
fn linear_path_connects_vertices() {
    let path = linear_path(&pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]));
    let els = path.elements();
    assert_eq!(els.len(), 3);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(els[1], PathEl::LineTo(Point::new(1.0, 2.0)));
    assert_eq!(els[2], PathEl::LineTo(Point::new(2.0, 1.0)));
}

#[test]
fn cubic_intensity_is_clamped() {
    let p = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 1.0), (3.0, 4.0)]);
    assert_eq!(cubic_path(&p, 5.0).elements(), cubic_path(&p, 1.0).elements());
    assert_eq!(cubic_path(&p, 0.0).elements(), cubic_path(&p, 0.05).elements());
    assert_eq!(cubic_path(&p, -3.0).elements(), cubic_path(&p, 0.05).elements());
    assert_ne!(cubic_path(&p, 0.05).elements(), cubic_path(&p, 1.0).elements());
}

#[test]
fn two_sample_cubic_collapses_onto_the_chord() {
    // With endpoints reusing themselves as neighbors, both control points
    // land on the straight segment between the samples.
    let p = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let path = cubic_path(&p, 0.2);
    let els = path.elements();
    assert_eq!(els.len(), 2);
    let PathEl::CurveTo(c1, c2, end) = els[1] else {
        panic!("expected CurveTo, got {:?}", els[1]);
    };
    assert_eq!(end, Point::new(1.0, 1.0));
    assert!((c1.x - 0.2).abs() < 1e-12 && (c1.y - 0.2).abs() < 1e-12);
    assert!((c2.x - 0.8).abs() < 1e-12 && (c2.y - 0.8).abs() < 1e-12);
}

#[test]
fn cubic_first_span_reuses_first_sample_as_missing_neighbor() {
    let p = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
    let intensity = 0.25;
    let path = cubic_path(&p, intensity);
    let els = path.elements();
    assert_eq!(els.len(), 3);

    // First span: prev_prev == points[0], next == points[2].
    let PathEl::CurveTo(c1, c2, _) = els[1] else {
        panic!("expected CurveTo");
    };
    assert_eq!(c1, Point::new(0.0 + 1.0 * intensity, 0.0 + 2.0 * intensity));
    assert_eq!(c2, Point::new(1.0 - 2.0 * intensity, 2.0 - 0.0 * intensity));

    // Last span: next == points[2] reused as its own neighbor.
    let PathEl::CurveTo(d1, d2, end) = els[2] else {
        panic!("expected CurveTo");
    };
    assert_eq!(end, Point::new(2.0, 0.0));
    assert_eq!(d1, Point::new(1.0 + 2.0 * intensity, 2.0 + 0.0 * intensity));
    assert_eq!(d2, Point::new(2.0 - 1.0 * intensity, 0.0 - (-2.0) * intensity));
}

#[test]
fn horizontal_controls_sit_at_midpoint_with_endpoint_ys() {
    let path = horizontal_path(&pts(&[(0.0, 0.0), (2.0, 4.0), (6.0, 1.0)]));
    let els = path.elements();
    assert_eq!(els.len(), 3);
    let PathEl::CurveTo(c1, c2, end) = els[1] else {
        panic!("expected CurveTo");
    };
    assert_eq!(c1, Point::new(1.0, 0.0));
    assert_eq!(c2, Point::new(1.0, 4.0));
    assert_eq!(end, Point::new(2.0, 4.0));
    let PathEl::CurveTo(c1, c2, _) = els[2] else {
        panic!("expected CurveTo");
    };
    assert_eq!(c1, Point::new(4.0, 4.0));
    assert_eq!(c2, Point::new(4.0, 1.0));
}
