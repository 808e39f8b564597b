//! SVG output for computed outlines.
//!
//! [`SvgPathWriter`] is a [`PathConsumer`] that builds facet-svg [`PathData`] with
//! absolute `M`/`L`/`C`/`A`/`Z` commands. Arcs become elliptical-arc segments,
//! preceded by a line to the arc's start when the pen is elsewhere.
//! [`svg_document`] wraps filled paths in an [`Svg`] DOM serialized by `facet_xml`.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Path as SvgPath, PathData, Svg, SvgNode, facet_xml};
use glam::DVec2;

use crate::errors::RenderError;
use crate::types::Angle;

use super::defaults::{POINT_EPSILON, SVG_SIG_FIGS, SVG_ZERO_SNAP};
use super::path::{Path, PathConsumer};

/// Number formatting for SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Significant digits kept for every coordinate.
    pub sig_figs: i32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            sig_figs: SVG_SIG_FIGS,
        }
    }
}

/// Accumulates SVG path data.
#[derive(Debug, Clone)]
pub struct SvgPathWriter {
    options: SvgOptions,
    data: PathData,
    pen: Option<DVec2>,
    subpath_start: Option<DVec2>,
}

impl SvgPathWriter {
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            data: PathData::new(),
            pen: None,
            subpath_start: None,
        }
    }

    /// The path data written so far.
    pub fn finish(self) -> PathData {
        self.data
    }

    /// Apply one builder step to the accumulated data.
    fn push(&mut self, step: impl FnOnce(PathData) -> PathData) {
        let data = std::mem::replace(&mut self.data, PathData::new());
        self.data = step(data);
    }

    fn round(&self, value: f64) -> f64 {
        round_sig(value, self.options.sig_figs)
    }

    /// One SVG arc segment; `sweep` in degrees, `|sweep| < 360`.
    fn arc_segment(&mut self, radius: f64, sweep: f64, to: DVec2) {
        let r = self.round(radius);
        let large_arc = sweep.abs() > 180.0;
        // increasing angles run clockwise on a y-down canvas, which is SVG's sweep-flag 1
        let sweep_flag = sweep > 0.0;
        let (x, y) = (self.round(to.x), self.round(to.y));
        self.push(|d| d.a(r, r, 0.0, large_arc, sweep_flag, x, y));
        self.pen = Some(to);
    }
}

impl Default for SvgPathWriter {
    fn default() -> Self {
        Self::new(SvgOptions::default())
    }
}

impl PathConsumer for SvgPathWriter {
    fn move_to(&mut self, to: DVec2) {
        let (x, y) = (self.round(to.x), self.round(to.y));
        self.push(|d| d.m(x, y));
        self.pen = Some(to);
        self.subpath_start = Some(to);
    }

    fn line_to(&mut self, to: DVec2) {
        let (x, y) = (self.round(to.x), self.round(to.y));
        self.push(|d| d.l(x, y));
        self.pen = Some(to);
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        let (x1, y1) = (self.round(ctrl1.x), self.round(ctrl1.y));
        let (x2, y2) = (self.round(ctrl2.x), self.round(ctrl2.y));
        let (x, y) = (self.round(to.x), self.round(to.y));
        self.push(|d| d.c(x1, y1, x2, y2, x, y));
        self.pen = Some(to);
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: Angle, end: Angle, clockwise: bool) {
        let from = start.point_on_circle(center, radius);
        match self.pen {
            Some(pen) if pen.distance(from) <= POINT_EPSILON => {}
            Some(_) => self.line_to(from),
            None => self.move_to(from),
        }

        // zero-span check on the raw difference, before any wrapping
        let span = (end - start).raw();
        if span.abs() <= POINT_EPSILON || radius == 0.0 {
            return;
        }
        let sweep = if !clockwise && span < 0.0 {
            span.rem_euclid(360.0)
        } else if clockwise && span > 0.0 {
            span - 360.0 * (span / 360.0).ceil()
        } else {
            span
        };

        let to = end.point_on_circle(center, radius);
        if sweep.abs() >= 360.0 - POINT_EPSILON {
            // a full turn has coincident endpoints; SVG needs it split
            let half = Angle::degrees(start.raw() + sweep / 2.0);
            self.arc_segment(radius, sweep / 2.0, half.point_on_circle(center, radius));
            self.arc_segment(radius, sweep / 2.0, to);
        } else {
            self.arc_segment(radius, sweep, to);
        }
    }

    fn close(&mut self) {
        self.push(PathData::z);
        self.pen = self.subpath_start;
    }
}

/// The facet-svg path data for `path`.
pub fn path_data_builder(path: &Path, options: &SvgOptions) -> PathData {
    let mut writer = SvgPathWriter::new(*options);
    path.replay(&mut writer);
    writer.finish()
}

/// SVG path data (`d` attribute) for `path`.
pub fn path_data(path: &Path, options: &SvgOptions) -> String {
    path_data_builder(path, options).to_string()
}

/// A `<path>` element filling `path` with `fill`.
pub fn path_element(path: &Path, fill: &str, options: &SvgOptions) -> SvgPath {
    SvgPath {
        d: Some(path_data_builder(path, options)),
        fill: Some(fill.to_string()),
        stroke: None,
        stroke_width: None,
        stroke_dasharray: None,
        style: None,
    }
}

/// A standalone SVG document containing each path filled with its colour.
pub fn svg_document(
    width: f64,
    height: f64,
    paths: &[(&Path, &str)],
) -> Result<String, RenderError> {
    let options = SvgOptions::default();
    let w = fmt_num(width);
    let h = fmt_num(height);

    let svg = Svg {
        width: Some(w.clone()),
        height: Some(h.clone()),
        view_box: Some(format!("0 0 {w} {h}")),
        children: paths
            .iter()
            .map(|(path, fill)| SvgNode::Path(path_element(path, fill, &options)))
            .collect(),
    };

    let document = facet_xml::to_string_with_options(&svg, &SerializeOptions::default())
        .map_err(|e| RenderError::Serialize(e.to_string()))?;

    crate::log::debug!(width, height, paths = paths.len(), "svg document written");
    Ok(document)
}

/// Format a number with the default SVG precision.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, SVG_SIG_FIGS)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    round_sig(value, sig_figs).to_string()
}

/// Round to `sig_figs` significant digits; magnitudes below the zero snap become `0`.
fn round_sig(value: f64, sig_figs: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value.abs() < SVG_ZERO_SNAP {
        return 0.0;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let digits = sig_figs - 1 - magnitude;
    let rounded = if digits >= 0 {
        let scale = 10_f64.powi(digits);
        (value * scale).round() / scale
    } else {
        let scale = 10_f64.powi(-digits);
        (value / scale).round() * scale
    };

    // no negative zero in the output
    if rounded == 0.0 { 0.0 } else { rounded }
}
