// File: crates/pulse-render-svg/tests/svg.rs
// Purpose: Validate pixel scale mapping and the shape of the emitted SVG document.

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use pulse_core::gradient::{GradientStop, MappedGradient};
use pulse_core::{RenderBackend, StrokePaint, ViewState};
use pulse_render_svg::{SvgBackend, TimeScale, ValueScale};

// 120x120 canvas with the fixed 10px margin: both axes map onto [10, 110].
fn backend() -> SvgBackend {
    SvgBackend::new(120.0, 120.0, &ViewState::new(0.0, 100.0, 0.0, 100.0))
}

fn red() -> Color {
    Color::from_rgb8(255, 0, 0)
}

#[test]
fn time_scale_maps_endpoints_and_midpoint() {
    let x = TimeScale::new(10.0, 110.0, 0.0, 100.0);
    assert_eq!(x.to_px(0.0), 10.0);
    assert_eq!(x.to_px(100.0), 110.0);
    assert_eq!(x.to_px(50.0), 60.0);
}

#[test]
fn value_scale_inverts_the_axis() {
    let y = ValueScale::new(10.0, 630.0, 0.0, 100.0);
    assert_eq!(y.to_px(0.0), 630.0);
    assert_eq!(y.to_px(100.0), 10.0);
    assert_eq!(y.to_px(50.0), 320.0);
}

#[test]
fn degenerate_ranges_do_not_divide_by_zero() {
    let x = TimeScale::new(10.0, 110.0, 5.0, 5.0);
    assert_eq!(x.to_px(5.0), 10.0);
    assert!(x.to_px(5.0 + 1e-15).is_finite());
    let y = ValueScale::new(10.0, 110.0, 2.0, 2.0);
    assert_eq!(y.to_px(2.0), 110.0);
}

#[test]
fn segments_stroke_as_one_multi_subpath_element() {
    let mut svg = backend();
    svg.stroke_segments(
        &[
            [Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
            [Point::new(0.0, 100.0), Point::new(100.0, 0.0)],
        ],
        &StrokePaint::solid(red(), 2.0),
    );
    let out = svg.to_svg_string();
    assert!(out.contains("M10.00 110.00L110.00 10.00M10.00 10.00L110.00 110.00"));
    assert!(out.contains(r#"stroke="rgb(255,0,0)""#));
    assert!(out.contains(r#"stroke-width="2.00""#));
    assert!(!out.contains("stroke-dasharray"));
}

#[test]
fn dashed_paint_emits_a_dasharray() {
    let mut svg = backend();
    svg.stroke_segments(
        &[[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]],
        &StrokePaint::dashed(red(), 1.0, vec![4.0, 4.0]),
    );
    assert!(svg.to_svg_string().contains(r#"stroke-dasharray="4.00 4.00""#));
}

#[test]
fn fill_path_combines_color_and_alpha_opacity() {
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, 0.0));
    path.line_to(Point::new(100.0, 0.0));
    path.line_to(Point::new(50.0, 100.0));
    path.close_path();

    let mut svg = backend();
    svg.fill_path(&path, red(), 0.5);
    let out = svg.to_svg_string();
    assert!(out.contains(r#"fill="rgb(255,0,0)""#));
    // Opaque color at alpha 0.5.
    assert!(out.contains(r#"fill-opacity="0.500""#));
    assert!(out.contains("Z\""));
}

#[test]
fn gradient_fill_defines_user_space_stops() {
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, 0.0));
    path.line_to(Point::new(100.0, 100.0));

    let gradient = MappedGradient {
        start: Point::new(50.0, 0.0),
        end: Point::new(50.0, 100.0),
        stops: vec![
            GradientStop { color: red(), offset: 0.0 },
            GradientStop { color: Color::from_rgb8(0, 0, 255), offset: 1.0 },
        ],
    };
    let mut svg = backend();
    svg.fill_path_gradient(&path, &gradient, 1.0);
    let out = svg.to_svg_string();

    assert!(out.contains(r#"<linearGradient id="grad1" gradientUnits="userSpaceOnUse""#));
    // Chart-space axis maps through the same scales as geometry: y flips.
    assert!(out.contains(r#"x1="60.00" y1="110.00" x2="60.00" y2="10.00""#));
    assert!(out.contains(r#"<stop offset="0.0000" stop-color="rgb(255,0,0)""#));
    assert!(out.contains(r#"<stop offset="1.0000" stop-color="rgb(0,0,255)""#));
    assert!(out.contains(r##"fill="url(#grad1)""##));
}

#[test]
fn clip_applies_to_following_elements_only() {
    let mut svg = backend();
    svg.set_clip(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    svg.draw_circle(Point::new(50.0, 50.0), 3.0, red());
    svg.set_clip(None);
    svg.draw_circle(Point::new(50.0, 50.0), 3.0, red());
    let out = svg.to_svg_string();

    // y-up logical rect lands normalized: top edge at logical y=50.
    assert!(out.contains(
        r#"<clipPath id="clip1"><rect x="10.00" y="60.00" width="100.00" height="50.00"/></clipPath>"#
    ));
    let clipped = out
        .lines()
        .filter(|l| l.starts_with("<circle") && l.contains(r##"clip-path="url(#clip1)""##))
        .count();
    let unclipped = out
        .lines()
        .filter(|l| l.starts_with("<circle") && !l.contains("clip-path"))
        .count();
    assert_eq!(clipped, 1);
    assert_eq!(unclipped, 1);
}

#[test]
fn document_wraps_body_and_omits_empty_defs() {
    let mut svg = backend();
    svg.draw_circle(Point::new(0.0, 0.0), 2.0, red());
    let out = svg.to_svg_string();
    assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="120""#));
    assert!(out.ends_with("</svg>\n"));
    assert!(!out.contains("<defs>"));
    assert!(out.contains(r#"<circle cx="10.00" cy="110.00" r="2.00""#));
}

#[test]
fn empty_geometry_emits_nothing() {
    let mut svg = backend();
    svg.stroke_segments(&[], &StrokePaint::solid(red(), 1.0));
    svg.stroke_path(&BezPath::new(), &StrokePaint::solid(red(), 1.0));
    svg.fill_path(&BezPath::new(), red(), 1.0);
    let out = backend().to_svg_string();
    assert_eq!(svg.to_svg_string(), out);
}
