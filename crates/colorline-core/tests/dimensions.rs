// File: crates/colorline-core/tests/dimensions.rs
// Purpose: Canvas and bounded-area sizing from a viewport snapshot.

use approx::assert_relative_eq;
use colorline_core::{Dimensions, Margins, Viewport};

#[test]
fn bounded_area_subtracts_default_margins() {
    let dims = Dimensions::from_viewport(Viewport::new(1000.0, 500.0), 0.9, 0.9);
    assert_relative_eq!(dims.width, 900.0);
    assert_relative_eq!(dims.height, 450.0);
    assert_eq!(dims.margins, Margins::new(15.0, 15.0, 40.0, 60.0));
    assert_relative_eq!(dims.bounded_width, 900.0 - 60.0 - 15.0);
    assert_relative_eq!(dims.bounded_height, 450.0 - 15.0 - 40.0);
}

#[test]
fn ratios_apply_independently() {
    let viewport = Viewport::new(1280.0, 720.0);
    for &(wr, hr) in &[(0.9, 0.9), (0.95, 0.95), (1.0, 0.5), (0.25, 1.0)] {
        let dims = Dimensions::from_viewport(viewport, wr, hr);
        assert_relative_eq!(dims.bounded_width, 1280.0 * wr - 60.0 - 15.0);
        assert_relative_eq!(dims.bounded_height, 720.0 * hr - 15.0 - 40.0);
    }
}

#[test]
fn tiny_viewport_yields_negative_bounds() {
    let dims = Dimensions::from_viewport(Viewport::new(50.0, 40.0), 1.0, 1.0);
    assert!(dims.bounded_width < 0.0);
    assert!(dims.bounded_height < 0.0);
}

#[test]
fn custom_margins() {
    let margins = Margins::new(0.0, 10.0, 0.0, 10.0);
    let dims = Dimensions::with_margins(Viewport::new(200.0, 100.0), 1.0, 1.0, margins);
    assert_relative_eq!(dims.bounded_width, 180.0);
    assert_relative_eq!(dims.bounded_height, 100.0);
}
