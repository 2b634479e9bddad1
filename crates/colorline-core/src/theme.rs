// File: crates/colorline-core/src/theme.rs
// Summary: Visual constants for the line and the axes.

/// Stroke and axis styling applied by the renderer. Colors are CSS color values.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub line_stroke: String,
    pub line_stroke_width: f64,
    pub axis_font_size: f64,
    pub axis_font_family: String,
    /// Length of each tick line.
    pub tick_size_inner: f64,
    /// Length of the domain path end caps.
    pub tick_size_outer: f64,
    /// Gap between tick line and label.
    pub tick_padding: f64,
    pub tick_count: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            line_stroke: "LightSeaGreen".to_string(),
            line_stroke_width: 1.5,
            axis_font_size: 10.0,
            axis_font_family: "sans-serif".to_string(),
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            tick_count: crate::scale::DEFAULT_TICK_COUNT,
        }
    }
}
