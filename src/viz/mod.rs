//! Visualization: render the salary dashboard to **SVG** or **PNG**.
//!
//! - Pie chart of company sizes (top left)
//! - Parallel-coordinates plot of year / salary / remote ratio (bottom left)
//! - Bar chart of mean salary per experience level (right)
//!
//! Each chart is first computed as a list of [`geometry::Shape`]s, then drawn
//! with plotters by [`draw::draw_shapes`].

pub mod axis;
pub mod bar;
pub mod draw;
pub mod format;
pub mod geometry;
pub mod legend;
pub mod palette;
pub mod pcp;
pub mod pie;
pub mod scale;

pub use format::NumberFormat;
pub use geometry::Shape;

use crate::layout::{self, LayoutConfig};
use crate::models::{CompanySize, ExperienceLevel, Record};
use crate::stats::GroupSummary;
use anyhow::{Context, Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;

/// Geometry of all three charts on one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub width: u32,
    pub height: u32,
    pub pie: Vec<Shape>,
    pub bar: Vec<Shape>,
    pub pcp: Vec<Shape>,
}

impl Dashboard {
    /// All shapes in drawing order: pie, then bar, then PCP.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.pie.iter().chain(self.bar.iter()).chain(self.pcp.iter())
    }
}

/// Inputs for [`build_dashboard`] besides the data itself.
#[derive(Debug, Clone, Copy)]
pub struct Canvas<'a> {
    pub width: u32,
    pub height: u32,
    pub layout: &'a LayoutConfig,
    pub locale: &'a str,
}

/// Compute the geometry of every chart. Pure: no I/O, no drawing.
pub fn build_dashboard(
    records: &[Record],
    size_counts: &GroupSummary<CompanySize>,
    salary_by_level: &GroupSummary<ExperienceLevel>,
    canvas: Canvas<'_>,
) -> Dashboard {
    let plan = layout::plan(canvas.width as f64, canvas.height as f64, canvas.layout);
    let fmt = NumberFormat::new(canvas.locale);
    Dashboard {
        width: canvas.width,
        height: canvas.height,
        pie: pie::pie_chart(size_counts, &plan),
        bar: bar::bar_chart(salary_by_level, &plan, &fmt),
        pcp: pcp::pcp_chart(records, &plan, &fmt),
    }
}

/// Register a TrueType font as "sans-serif" for the `ab_glyph` text path.
///
/// Only bitmap output needs this; SVG output emits text elements and lets the
/// viewer pick the font.
pub fn register_font_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    // plotters keeps registered fonts for the lifetime of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    for style in [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic] {
        plotters::style::register_font("sans-serif", style, bytes)
            .map_err(|_| anyhow!("invalid font file {}", path.display()))?;
    }
    log::debug!("registered font {}", path.display());
    Ok(())
}

/// Write the dashboard to `out_path`; `.svg` selects the SVG backend, anything
/// else is encoded as a bitmap by extension (e.g. `.png`).
pub fn render_dashboard<P: AsRef<Path>>(dashboard: &Dashboard, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let size = (dashboard.width, dashboard.height);
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        paint(&root, dashboard)?;
    } else {
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        paint(&root, dashboard)?;
    }
    log::info!("wrote dashboard to {}", out_path.display());
    Ok(())
}

fn paint<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, dashboard: &Dashboard) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    draw::draw_shapes(root, dashboard.shapes())?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
