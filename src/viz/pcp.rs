//! Parallel-coordinates plot: one vertical axis per numeric dimension and one
//! polyline per record crossing them.
//!
//! Each axis has its own linear scale:
//! - year: observed extent made nice, or widened by ±0.5 when a single year is present
//! - salary: extent padded by 5% on both sides (lower bound never below 0), made nice
//! - remote ratio: fixed `[0, 100]`
//!
//! A record contributes a point to an axis only when its value is present and
//! inside that axis' (padded, niced) domain. The remaining points are joined
//! directly, so a missing middle value connects the outer two axes.

use super::axis::Axis;
use super::format::NumberFormat;
use super::geometry::{Anchor, Label, Point, Polyline, Shape, Stroke};
use super::legend::{Flow, LegendItem, legend_shapes};
use super::palette::{UNKNOWN, experience_color};
use super::scale::{LinearScale, PointScale, Scale};
use crate::layout::{Layout, Region};
use crate::models::{Dimension, ExperienceLevel, Record};
use crate::stats::extent;

pub const TITLE: &str = "Salary vs Year vs Remote Work (by Experience)";
pub const LEGEND_CAPTION: &str = "Line colors indicate Experience Level:";

pub const LINE_WIDTH: f64 = 1.5;
pub const LINE_OPACITY: f64 = 0.3;

const SALARY_PADDING: f64 = 0.05;
const AXIS_TICKS: usize = 5;
const LEGEND_PITCH: f64 = 85.0;

/// Domain of one dimension computed from the records.
pub fn dimension_domain(records: &[Record], dim: Dimension) -> (f64, f64) {
    let observed = extent(records.iter().map(|r| r.value(dim)));
    match dim {
        Dimension::RemoteRatio => (0.0, 100.0),
        Dimension::WorkYear => match observed {
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(d) => LinearScale::new(d, (0.0, 1.0)).nice(4).domain(),
            None => (0.0, 1.0),
        },
        Dimension::SalaryInUsd => match observed {
            Some((lo, hi)) => {
                let pad = (hi - lo) * SALARY_PADDING;
                let lo = if lo <= 0.0 { lo } else { lo - pad };
                let padded = (lo.max(0.0), hi + pad);
                LinearScale::new(padded, (0.0, 1.0)).nice(10).domain()
            }
            None => (0.0, 1.0),
        },
    }
}

/// Scales in plot-area coordinates (origin at the area's top-left corner).
#[derive(Debug, Clone)]
pub struct PcpScales {
    pub x: PointScale<Dimension>,
    y: [LinearScale; 3],
}

impl PcpScales {
    pub fn new(records: &[Record], area: &Region) -> Self {
        let x = PointScale::new(Dimension::ALL.to_vec(), (0.0, area.width), 1.0);
        let y = Dimension::ALL
            .map(|d| LinearScale::new(dimension_domain(records, d), (area.height, 0.0)));
        Self { x, y }
    }

    pub fn y(&self, dim: Dimension) -> &LinearScale {
        &self.y[dim as usize]
    }

    /// Points of one record's polyline, skipping dimensions whose value is
    /// missing or outside the axis domain (inclusive).
    pub fn project(&self, record: &Record) -> Vec<Point> {
        Dimension::ALL
            .iter()
            .filter_map(|dim| {
                let v = record.value(*dim)?;
                let y = self.y(*dim);
                if !y.contains(v) {
                    return None;
                }
                Some((self.x.apply(dim)?, y.map(v)))
            })
            .collect()
    }
}

fn line_color(record: &Record) -> plotters::style::RGBColor {
    record.experience().map(experience_color).unwrap_or(UNKNOWN)
}

/// One polyline per record, in record order, translated to canvas coordinates.
/// Records without any valid value yield an empty polyline.
pub fn pcp_lines(records: &[Record], scales: &PcpScales, area: &Region) -> Vec<Polyline> {
    records
        .iter()
        .map(|r| Polyline {
            points: scales
                .project(r)
                .into_iter()
                .map(|(x, y)| (area.x + x, area.y + y))
                .collect(),
            stroke: Stroke::new(line_color(r), LINE_WIDTH).opacity(LINE_OPACITY),
        })
        .collect()
}

fn tick_label(dim: Dimension, v: f64, fmt: &NumberFormat) -> Option<String> {
    match dim {
        Dimension::WorkYear => fmt.integer(v),
        Dimension::SalaryInUsd => Some(fmt.currency_si(v)),
        Dimension::RemoteRatio => Some(fmt.percent(v)),
    }
}

pub fn pcp_chart(records: &[Record], layout: &Layout, fmt: &NumberFormat) -> Vec<Shape> {
    let area = layout.pcp;
    let scales = PcpScales::new(records, &area);
    let mut out: Vec<Shape> = pcp_lines(records, &scales, &area)
        .into_iter()
        .filter(|l| !l.points.is_empty())
        .map(Shape::Polyline)
        .collect();
    let drawn = out.len();

    for dim in Dimension::ALL {
        let Some(x) = scales.x.apply(&dim) else {
            continue;
        };
        let axis_x = area.x + x;
        out.extend(
            Axis::left(scales.y(dim))
                .at((axis_x, area.y))
                .ticks(AXIS_TICKS)
                .format(move |v: &f64| tick_label(dim, *v, fmt))
                .shapes(),
        );
        out.push(Shape::Label(
            Label::new(dim.title(), (axis_x, area.y - 12.0), 11.0).anchor(Anchor::Middle),
        ));
    }

    out.push(Shape::Label(Label::title(
        TITLE,
        (area.x + area.width / 2.0, area.y - layout.margin.top / 2.0 + 5.0),
    )));

    let legend_y = area.bottom() + layout.pcp_margin.bottom - 25.0;
    out.push(Shape::Label(
        Label::new(LEGEND_CAPTION, (area.x, legend_y - 10.0), 11.0).italic(),
    ));
    let legend: Vec<LegendItem> = ExperienceLevel::ALL
        .iter()
        .map(|l| LegendItem::new(l.display_name(), experience_color(*l)))
        .collect();
    out.extend(legend_shapes(
        &legend,
        (area.x, legend_y),
        Flow::Row {
            pitch: LEGEND_PITCH,
        },
    ));

    log::debug!("pcp: {} of {} records drawn", drawn, records.len());
    out
}
