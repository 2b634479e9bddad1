// File: crates/colorline-core/src/types.rs
// Summary: Shared types and constants (viewport, margins, records).

/// Default viewport width in pixels when no window size is supplied.
pub const VIEWPORT_WIDTH: f64 = 1280.0;
/// Default viewport height in pixels.
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// Pixel size of the window the chart is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per CSS pixel. Only affects axis edge alignment.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, device_pixel_ratio: 1.0 }
    }

    pub const fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

/// Space reserved around the plot area, in pixels.
/// Contract: not validated; oversized margins produce a negative plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(15.0, 15.0, 40.0, 60.0)
    }
}

/// One parsed data row: the painting's position in the series and how many
/// colors it uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub painting_number: i64,
    pub num_colors: i64,
}

impl Record {
    pub const fn new(painting_number: i64, num_colors: i64) -> Self {
        Self { painting_number, num_colors }
    }
}

/// Horizontal accessor: painting index.
pub fn x_accessor(record: &Record) -> f64 {
    record.painting_number as f64
}

/// Vertical accessor: color count.
pub fn y_accessor(record: &Record) -> f64 {
    record.num_colors as f64
}
