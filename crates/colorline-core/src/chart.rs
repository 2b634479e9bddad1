// File: crates/colorline-core/src/chart.rs
// Summary: Line chart renderer and the load -> scale -> render pipeline.

use std::path::Path;

use log::{debug, info};

use crate::axis::{crisp_offset, Axis};
use crate::config::ChartConfig;
use crate::data::load_records;
use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::format::num;
use crate::geometry::LinePath;
use crate::page::Page;
use crate::scale::{x_scale, y_scale, LinearScale};
use crate::svg::{Element, SVG_NS};
use crate::theme::Theme;
use crate::types::Record;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub device_pixel_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), device_pixel_ratio: 1.0 }
    }
}

/// One line chart over a borrowed record sequence. Scales are fixed at construction.
#[derive(Clone, Debug)]
pub struct LineChart<'a> {
    records: &'a [Record],
    dimensions: Dimensions,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl<'a> LineChart<'a> {
    pub fn new(records: &'a [Record], dimensions: Dimensions) -> Self {
        Self {
            records,
            dimensions,
            x_scale: x_scale(records, &dimensions),
            y_scale: y_scale(records, &dimensions),
        }
    }

    pub fn dimensions(&self) -> &Dimensions { &self.dimensions }
    pub fn x_scale(&self) -> &LinearScale { &self.x_scale }
    pub fn y_scale(&self) -> &LinearScale { &self.y_scale }

    pub fn line_path(&self) -> LinePath {
        LinePath::from_records(self.records, &self.x_scale, &self.y_scale)
    }

    /// Build the `<svg>` tree: bounds group, data path, left axis, bottom axis.
    pub fn to_svg(&self, opts: &RenderOptions) -> Element {
        let dims = &self.dimensions;
        let theme = &opts.theme;
        let offset = crisp_offset(opts.device_pixel_ratio);

        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", num(dims.width))
            .attr("height", num(dims.height));
        let bounds = svg.append(Element::new("g").attr(
            "transform",
            format!("translate({},{})", num(dims.margins.left), num(dims.margins.top)),
        ));

        // Draw data
        let mut line = Element::new("path");
        if let Some(d) = self.line_path().to_svg_data() {
            line.set_attr("d", d);
        }
        bounds.append(
            line.attr("fill", "none")
                .attr("stroke", &theme.line_stroke)
                .attr("stroke-width", num(theme.line_stroke_width)),
        );

        // Draw peripherals
        let y_axis = Axis::left(self.y_scale).with_theme(theme).with_offset(offset);
        bounds.append(y_axis.to_element(theme));

        let x_axis = Axis::bottom(self.x_scale).with_theme(theme).with_offset(offset);
        bounds.append(
            x_axis
                .to_element(theme)
                .attr("transform", format!("translate(0,{})", num(dims.bounded_height))),
        );

        svg
    }

    /// Append a new `<svg>` to `container`. Repeated calls add further copies.
    pub fn draw<'c>(&self, container: &'c mut Element, opts: &RenderOptions) -> &'c mut Element {
        debug!(
            "drawing {} records into {}x{} (bounded {}x{})",
            self.records.len(),
            self.dimensions.width,
            self.dimensions.height,
            self.dimensions.bounded_width,
            self.dimensions.bounded_height
        );
        container.append(self.to_svg(opts))
    }

    /// Standalone SVG document text.
    pub fn to_svg_document(&self, opts: &RenderOptions) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.to_svg(opts).write_to(&mut out);
        out.push('\n');
        out
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, self.to_svg_document(opts))?;
        info!("Wrote {}", output_path.display());
        Ok(())
    }
}

/// Load the configured CSV and draw its chart into the page's container.
///
/// The container is resolved after loading; a load failure leaves the page
/// untouched. Returns the loaded records.
pub fn draw_line_chart(config: &ChartConfig, page: &mut Page) -> Result<Vec<Record>> {
    let records = load_records(&config.data_path)?;
    let container = page.select_mut(&config.container_id)?;
    LineChart::new(&records, config.dimensions()).draw(container, &config.render_options());
    Ok(records)
}
