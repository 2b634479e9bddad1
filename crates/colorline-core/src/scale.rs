// File: crates/colorline-core/src/scale.rs
// Summary: Linear domain-to-pixel scales built from record extents.

use log::debug;

use crate::dimensions::Dimensions;
use crate::format::TickFormat;
use crate::grid;
use crate::types::{x_accessor, y_accessor, Record};

/// Tick count used by axes when none is given.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Continuous linear mapping from a data domain to a pixel range.
///
/// Not clamped: values outside the domain extrapolate. A zero-width domain
/// maps everything to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 - d0 == 0.0 { 0.5 } else { (v - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Pixel back to data value; a zero-width range gives the domain midpoint.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if r1 - r0 == 0.0 { 0.5 } else { (px - r0) / (r1 - r0) };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_format(&self, count: usize) -> TickFormat {
        TickFormat::for_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Minimum and maximum of `accessor` over `data`, ignoring NaN.
/// `None` when nothing is comparable.
pub fn extent<T>(data: &[T], accessor: impl Fn(&T) -> f64) -> Option<(f64, f64)> {
    data.iter()
        .map(accessor)
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Scale whose domain is the extent of `accessor`, `[0, 0]` for empty input.
pub fn scale_for(records: &[Record], accessor: impl Fn(&Record) -> f64, range: (f64, f64)) -> LinearScale {
    let domain = extent(records, accessor).unwrap_or((0.0, 0.0));
    LinearScale::new(domain, range)
}

/// Painting number across `[0, bounded_width]`.
pub fn x_scale(records: &[Record], dims: &Dimensions) -> LinearScale {
    let s = scale_for(records, x_accessor, (0.0, dims.bounded_width));
    debug!("x scale: domain {:?} -> range {:?}", s.domain, s.range);
    s
}

/// Color count across `[bounded_height, 0]`; inverted because pixel y grows downward.
pub fn y_scale(records: &[Record], dims: &Dimensions) -> LinearScale {
    let s = scale_for(records, y_accessor, (dims.bounded_height, 0.0));
    debug!("y scale: domain {:?} -> range {:?}", s.domain, s.range);
    s
}
