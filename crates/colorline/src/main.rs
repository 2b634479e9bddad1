// File: crates/colorline/src/main.rs
// Summary: Loads the paintings CSV and writes the colors-per-painting line chart as HTML or SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colorline_core::{draw_line_chart, load_records, ChartConfig, LineChart, Page, Viewport};
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Full page with the chart inside its container element
    Html,
    /// The chart alone
    Svg,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV with an unnamed index column and a `num_colors` column
    #[arg(default_value = colorline_core::data::DEFAULT_DATA_PATH)]
    input: PathBuf,

    /// Output file (defaults to chart.html or chart.svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    #[arg(long, default_value_t = colorline_core::types::VIEWPORT_WIDTH)]
    viewport_width: f64,

    #[arg(long, default_value_t = colorline_core::types::VIEWPORT_HEIGHT)]
    viewport_height: f64,

    #[arg(long, default_value_t = 1.0)]
    device_pixel_ratio: f64,

    /// Fraction of the viewport width used by the chart
    #[arg(long, default_value_t = colorline_core::config::DEFAULT_RATIO)]
    width_ratio: f64,

    /// Fraction of the viewport height used by the chart
    #[arg(long, default_value_t = colorline_core::config::DEFAULT_RATIO)]
    height_ratio: f64,

    /// Id of the page element the chart is appended to
    #[arg(long, default_value = colorline_core::page::DEFAULT_CONTAINER_ID)]
    container: String,
}

impl Args {
    fn config(&self) -> ChartConfig {
        ChartConfig {
            data_path: self.input.clone(),
            container_id: self.container.clone(),
            viewport: Viewport::new(self.viewport_width, self.viewport_height)
                .with_device_pixel_ratio(self.device_pixel_ratio),
            width_ratio: self.width_ratio,
            height_ratio: self.height_ratio,
            ..ChartConfig::default()
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| match self.format {
            Format::Html => PathBuf::from("chart.html"),
            Format::Svg => PathBuf::from("chart.svg"),
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    let out = args.output_path();
    info!("Using input file: {}", config.data_path.display());

    match args.format {
        Format::Html => {
            let mut page = Page::with_container("Paintings by number of colors", &config.container_id);
            draw_line_chart(&config, &mut page)
                .with_context(|| format!("failed to draw chart from '{}'", config.data_path.display()))?;
            std::fs::write(&out, page.to_html())
                .with_context(|| format!("writing {}", out.display()))?;
            info!("Wrote {}", out.display());
        }
        Format::Svg => {
            let records = load_records(&config.data_path)
                .with_context(|| format!("failed to load CSV '{}'", config.data_path.display()))?;
            LineChart::new(&records, config.dimensions())
                .render_to_svg(&config.render_options(), &out)
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }

    Ok(())
}
