// File: crates/colorline-core/src/geometry.rs
// Summary: Points and the straight-segment line path built from scaled records.

use std::fmt::Write as _;

use crate::format::num;
use crate::scale::LinearScale;
use crate::types::{x_accessor, y_accessor, Record};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Polyline through points in insertion order, no smoothing.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    points: Vec<Point>,
}

impl LinePath {
    /// Map each record through the scales, keeping record order.
    pub fn from_records(records: &[Record], x_scale: &LinearScale, y_scale: &LinearScale) -> Self {
        let points = records
            .iter()
            .map(|r| Point::new(x_scale.map(x_accessor(r)), y_scale.map(y_accessor(r))))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// SVG path data (`M x,y L x,y ...`). A lone point closes on itself so it
    /// still renders as a dot; no points gives `None`.
    pub fn to_svg_data(&self) -> Option<String> {
        let (first, rest) = self.points.split_first()?;
        let mut d = format!("M{},{}", num(first.x), num(first.y));
        for p in rest {
            let _ = write!(d, "L{},{}", num(p.x), num(p.y));
        }
        if rest.is_empty() {
            d.push('Z');
        }
        Some(d)
    }
}
