// File: crates/colorline-core/tests/scale.rs
// Purpose: Domain extents, linear mapping, inversion, ticks and tick labels.

use approx::assert_relative_eq;
use colorline_core::grid::{tick_step, ticks};
use colorline_core::{extent, x_scale, y_scale, Dimensions, LinearScale, Record, Viewport};

fn dims() -> Dimensions {
    Dimensions::from_viewport(Viewport::new(1000.0, 500.0), 0.9, 0.9)
}

fn sample() -> Vec<Record> {
    vec![Record::new(0, 12), Record::new(1, 4), Record::new(2, 20), Record::new(3, 9)]
}

#[test]
fn x_scale_spans_painting_numbers() {
    let d = dims();
    let s = x_scale(&sample(), &d);
    assert_eq!(s.domain(), (0.0, 3.0));
    assert_relative_eq!(s.map(0.0), 0.0);
    assert_relative_eq!(s.map(3.0), d.bounded_width);
}

#[test]
fn y_scale_is_inverted() {
    let d = dims();
    let s = y_scale(&sample(), &d);
    assert_eq!(s.domain(), (4.0, 20.0));
    assert_relative_eq!(s.map(4.0), d.bounded_height);
    assert_relative_eq!(s.map(20.0), 0.0);
    assert_relative_eq!(s.map(12.0), d.bounded_height / 2.0);
}

#[test]
fn empty_records_give_zero_domains() {
    let d = dims();
    assert_eq!(x_scale(&[], &d).domain(), (0.0, 0.0));
    assert_eq!(y_scale(&[], &d).domain(), (0.0, 0.0));
    let none: Vec<Record> = Vec::new();
    assert_eq!(extent(&none, |r| r.num_colors as f64), None);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new((5.0, 5.0), (100.0, 0.0));
    assert_relative_eq!(s.map(5.0), 50.0);
    assert_relative_eq!(s.map(-40.0), 50.0);
}

#[test]
fn extrapolates_outside_domain() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_relative_eq!(s.map(-1.0), -10.0);
    assert_relative_eq!(s.map(15.0), 150.0);
}

#[test]
fn invert_round_trips() {
    let s = LinearScale::new((4.0, 20.0), (395.0, 0.0));
    assert_relative_eq!(s.invert(395.0), 4.0);
    assert_relative_eq!(s.invert(0.0), 20.0);
    assert_relative_eq!(s.invert(s.map(13.0)), 13.0, epsilon = 1e-9);
    assert_relative_eq!(LinearScale::new((2.0, 6.0), (7.0, 7.0)).invert(7.0), 4.0);
}

#[test]
fn extent_ignores_nan() {
    let values = [3.0, f64::NAN, -1.0, 8.0];
    assert_eq!(extent(&values[..], |v| *v), Some((-1.0, 8.0)));
}

#[test]
fn unit_interval_ticks() {
    let t = ticks(0.0, 1.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[1], 0.1);
    assert_eq!(t[3], 0.3);
    assert_eq!(t[10], 1.0);
}

#[test]
fn ticks_stay_inside_domain() {
    assert_eq!(ticks(3.0, 5.0, 10), vec![3.0, 3.2, 3.4, 3.6, 3.8, 4.0, 4.2, 4.4, 4.6, 4.8, 5.0]);
    assert_eq!(ticks(1.0, 98.0, 10), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
    assert_eq!(ticks(0.0, 402.0, 10), (0..=8).map(|i| i as f64 * 50.0).collect::<Vec<_>>());
}

#[test]
fn reversed_and_degenerate_ticks() {
    assert_eq!(ticks(2.0, 0.0, 2), vec![2.0, 1.0, 0.0]);
    assert_eq!(ticks(7.0, 7.0, 10), vec![7.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    assert_eq!(tick_step(1.0, 0.0, 10), -0.1);
    assert_eq!(tick_step(0.0, 402.0, 10), 50.0);
}

#[test]
fn tick_labels() {
    let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    let f = s.tick_format(10);
    assert_eq!(f.precision, 1);
    assert_eq!(f.format(0.0), "0.0");
    assert_eq!(f.format(0.30000000000000004), "0.3");

    let big = LinearScale::new((0.0, 25_000.0), (0.0, 100.0)).tick_format(10);
    assert_eq!(big.precision, 0);
    assert_eq!(big.format(15_000.0), "15,000");
    assert_eq!(big.format(-2_500.0), "\u{2212}2,500");
    assert_eq!(big.format(-0.2), "0");
}

#[test]
fn degenerate_domain_labels_use_six_decimals() {
    let f = LinearScale::new((3.0, 3.0), (0.0, 10.0)).tick_format(10);
    assert_eq!(f.format(3.0), "3.000000");
}
