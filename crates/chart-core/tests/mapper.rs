// File: crates/chart-core/tests/mapper.rs
// Purpose: Data-to-pixel mapping: y flip, margins/insets, degenerate spans.

use chart_core::{Bounds, CanvasGeometry, Color, CoordinateMapper, LineStyle, PlotSeries, ScreenPoint};

fn bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Bounds {
    Bounds { x_min, x_max, y_min, y_max }
}

#[test]
fn corners_map_with_flipped_y() {
    let geom = CanvasGeometry::new(100, 100, 0, 0).unwrap();
    let m = CoordinateMapper::new(bounds(0.0, 10.0, 0.0, 10.0), &geom);
    assert_eq!(m.map(0.0, 0.0), ScreenPoint::new(0.0, 100.0));
    assert_eq!(m.map(10.0, 10.0), ScreenPoint::new(100.0, 0.0));
    assert_eq!(m.map(5.0, 5.0), ScreenPoint::new(50.0, 50.0));
}

#[test]
fn margin_and_inset_shrink_the_data_area() {
    let geom = CanvasGeometry::new(200, 200, 20, 10).unwrap();
    let m = CoordinateMapper::new(bounds(0.0, 1.0, 0.0, 1.0), &geom);
    // data area is [30, 170] on both axes
    assert_eq!(m.map(0.0, 0.0), ScreenPoint::new(30.0, 170.0));
    assert_eq!(m.map(1.0, 1.0), ScreenPoint::new(170.0, 30.0));
}

#[test]
fn constant_series_maps_to_one_column() {
    let geom = CanvasGeometry::new(200, 100, 10, 5).unwrap();
    let s = PlotSeries::new("flat-x", vec![3.0; 4], vec![0.0, 1.0, 2.0, 3.0], Color::blue(), LineStyle::Solid)
        .unwrap();
    let pts = CoordinateMapper::for_series(&s, &geom).map_series(&s);
    assert_eq!(pts.len(), 4);
    assert!(pts.iter().all(|p| p.x == pts[0].x && p.x.is_finite()));
    assert_eq!(pts[0].x, 15.0);

    let s = PlotSeries::new("flat-y", vec![0.0, 1.0, 2.0], vec![7.0; 3], Color::blue(), LineStyle::Solid).unwrap();
    let pts = CoordinateMapper::for_series(&s, &geom).map_series(&s);
    assert!(pts.iter().all(|p| p.y == pts[0].y && p.y.is_finite()));
}

#[test]
fn series_are_mapped_against_their_own_bounds() {
    let geom = CanvasGeometry::new(200, 200, 20, 0).unwrap();
    let low = PlotSeries::new("low", vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0], Color::blue(), LineStyle::Solid).unwrap();
    let high = PlotSeries::new("high", vec![0.0, 1.0, 2.0], vec![20.0, 10.0, 20.0], Color::red(), LineStyle::Dotted).unwrap();

    let a = CoordinateMapper::for_series(&low, &geom).map_series(&low);
    let b = CoordinateMapper::for_series(&high, &geom).map_series(&high);
    assert_eq!(a, vec![ScreenPoint::new(20.0, 180.0), ScreenPoint::new(100.0, 20.0), ScreenPoint::new(180.0, 180.0)]);
    assert_eq!(b, vec![ScreenPoint::new(20.0, 20.0), ScreenPoint::new(100.0, 180.0), ScreenPoint::new(180.0, 20.0)]);
}

#[test]
fn unmap_inverts_map() {
    let geom = CanvasGeometry::new(640, 480, 40, 12).unwrap();
    let m = CoordinateMapper::new(bounds(-3.0, 9.0, 100.0, 250.0), &geom);
    let (x, y) = m.unmap(m.map(4.5, 180.0));
    assert!((x - 4.5).abs() < 1e-3, "x = {x}");
    assert!((y - 180.0).abs() < 1e-2, "y = {y}");
}

#[test]
fn bounds_follow_raw_samples() {
    let s = PlotSeries::new("b", vec![2.0, -1.0, 5.0], vec![0.5, 3.0, -2.0], Color::black(), LineStyle::Dashed).unwrap();
    assert_eq!(s.bounds(), bounds(-1.0, 5.0, -2.0, 3.0));
}
