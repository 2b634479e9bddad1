// File: crates/colorline-core/src/config.rs
// Summary: Run configuration for one chart draw.

use std::path::PathBuf;

use crate::chart::RenderOptions;
use crate::data::DEFAULT_DATA_PATH;
use crate::dimensions::Dimensions;
use crate::page::DEFAULT_CONTAINER_ID;
use crate::theme::Theme;
use crate::types::Viewport;

/// Fraction of the viewport the canvas takes in each direction by default.
pub const DEFAULT_RATIO: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    pub container_id: String,
    pub viewport: Viewport,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            viewport: Viewport::default(),
            width_ratio: DEFAULT_RATIO,
            height_ratio: DEFAULT_RATIO,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_viewport(self.viewport, self.width_ratio, self.height_ratio)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: self.theme.clone(),
            device_pixel_ratio: self.viewport.device_pixel_ratio,
        }
    }
}
