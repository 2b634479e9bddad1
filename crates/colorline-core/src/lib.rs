// File: crates/colorline-core/src/lib.rs
// Summary: Core library entry point; CSV loading, scales and SVG line chart rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod data;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod page;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use chart::{draw_line_chart, LineChart, RenderOptions};
pub use config::ChartConfig;
pub use data::{load_records, read_records};
pub use dimensions::Dimensions;
pub use error::{Error, Result};
pub use geometry::{LinePath, Point};
pub use page::Page;
pub use scale::{extent, x_scale, y_scale, LinearScale};
pub use svg::Element;
pub use theme::Theme;
pub use types::{Margins, Record, Viewport};
