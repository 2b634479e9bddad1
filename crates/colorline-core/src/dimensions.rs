// File: crates/colorline-core/src/dimensions.rs
// Summary: Canvas and plot-area extents derived from a viewport snapshot.

use crate::types::{Margins, Viewport};

/// Outer canvas size plus the bounded (inside-margins) plot size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl Dimensions {
    /// Size the canvas to a fraction of the viewport using the default margins.
    /// Ratios are expected in (0, 1] and are not checked.
    pub fn from_viewport(viewport: Viewport, width_ratio: f64, height_ratio: f64) -> Self {
        Self::with_margins(viewport, width_ratio, height_ratio, Margins::default())
    }

    pub fn with_margins(viewport: Viewport, width_ratio: f64, height_ratio: f64, margins: Margins) -> Self {
        let width = viewport.width * width_ratio;
        let height = viewport.height * height_ratio;
        Self {
            width,
            height,
            margins,
            bounded_width: width - margins.hsum(),
            bounded_height: height - margins.vsum(),
        }
    }
}
