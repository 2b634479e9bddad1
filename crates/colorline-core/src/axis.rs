// File: crates/colorline-core/src/axis.rs
// Summary: Left/bottom axis generation (domain line, tick lines, tick labels).

use crate::format::num;
use crate::scale::LinearScale;
use crate::svg::Element;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Left,
    Bottom,
}

impl AxisOrient {
    /// Direction ticks point, away from the plot.
    fn k(self) -> f64 {
        match self {
            AxisOrient::Left => -1.0,
            AxisOrient::Bottom => 1.0,
        }
    }

    fn text_anchor(self) -> &'static str {
        match self {
            AxisOrient::Left => "end",
            AxisOrient::Bottom => "middle",
        }
    }
}

/// Half-pixel shift that puts 1px axis strokes on pixel centres on
/// standard-density displays.
pub fn crisp_offset(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > 1.0 { 0.0 } else { 0.5 }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub offset: f64,
}

impl Axis {
    pub fn new(orient: AxisOrient, scale: LinearScale) -> Self {
        let theme = Theme::default();
        Self {
            orient,
            scale,
            tick_count: theme.tick_count,
            tick_size_inner: theme.tick_size_inner,
            tick_size_outer: theme.tick_size_outer,
            tick_padding: theme.tick_padding,
            offset: 0.5,
        }
    }

    pub fn left(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Left, scale)
    }

    pub fn bottom(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Bottom, scale)
    }

    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.tick_count = theme.tick_count;
        self.tick_size_inner = theme.tick_size_inner;
        self.tick_size_outer = theme.tick_size_outer;
        self.tick_padding = theme.tick_padding;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Domain line: end caps of `tick_size_outer` joined along the range.
    fn domain_path(&self) -> String {
        let (r0, r1) = self.scale.range();
        let (r0, r1) = (r0 + self.offset, r1 + self.offset);
        let outer = num(self.orient.k() * self.tick_size_outer);
        let off = num(self.offset);
        match self.orient {
            AxisOrient::Left => format!("M{outer},{}H{off}V{}H{outer}", num(r0), num(r1)),
            AxisOrient::Bottom => format!("M{},{outer}V{off}H{}V{outer}", num(r0), num(r1)),
        }
    }

    fn tick(&self, value: f64, label: String) -> Element {
        let pos = num(self.scale.map(value) + self.offset);
        let k = self.orient.k();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let (transform, along, dy) = match self.orient {
            AxisOrient::Left => (format!("translate(0,{pos})"), "x", "0.32em"),
            AxisOrient::Bottom => (format!("translate({pos},0)"), "y", "0.71em"),
        };

        let mut g = Element::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", transform);
        g.append(
            Element::new("line")
                .attr("stroke", "currentColor")
                .attr(format!("{along}2"), num(k * self.tick_size_inner)),
        );
        g.append(
            Element::new("text")
                .attr("fill", "currentColor")
                .attr(along, num(k * spacing))
                .attr("dy", dy)
                .text(label),
        );
        g
    }

    /// Populate `group` with the domain path followed by one `g.tick` per tick.
    pub fn render_into(&self, group: &mut Element, theme: &Theme) {
        let ticks = self.scale.ticks(self.tick_count);
        let fmt = self.scale.tick_format(self.tick_count);

        group.append(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", self.domain_path()),
        );
        for v in ticks {
            group.append(self.tick(v, fmt.format(v)));
        }
        group.set_attr("fill", "none");
        group.set_attr("font-size", num(theme.axis_font_size));
        group.set_attr("font-family", &theme.axis_font_family);
        group.set_attr("text-anchor", self.orient.text_anchor());
    }

    /// A fresh `<g>` holding this axis.
    pub fn to_element(&self, theme: &Theme) -> Element {
        let mut g = Element::new("g");
        self.render_into(&mut g, theme);
        g
    }
}
