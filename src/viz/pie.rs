//! Company size distribution as a pie chart.

use super::geometry::{Label, Shape, Wedge, slice_separator};
use super::legend::{Flow, LegendItem, legend_shapes};
use super::palette::size_color;
use crate::layout::Layout;
use crate::models::CompanySize;
use crate::stats::GroupSummary;
use std::f64::consts::TAU;

pub const TITLE: &str = "Company Size Distribution";

/// Angular extent of one group. Angles are radians clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice<K> {
    pub key: K,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Sweep proportional to each group's value, in summary order (no sorting by size).
/// A zero total yields zero-width slices.
pub fn slices<K: Copy + Eq>(summary: &GroupSummary<K>) -> Vec<Slice<K>> {
    let total = summary.total();
    let k = if total > 0.0 { TAU / total } else { 0.0 };
    let mut angle = 0.0;
    summary
        .iter()
        .map(|g| {
            let start = angle;
            angle += g.value * k;
            Slice {
                key: g.key,
                value: g.value,
                start_angle: start,
                end_angle: angle,
            }
        })
        .collect()
}

pub fn pie_chart(counts: &GroupSummary<CompanySize>, layout: &Layout) -> Vec<Shape> {
    let area = layout.pie;
    let center = area.center();
    let radius = layout.pie_radius();

    let mut out: Vec<Shape> = slices(counts)
        .into_iter()
        .map(|s| {
            Shape::Wedge(Wedge {
                center,
                radius,
                start_angle: s.start_angle,
                end_angle: s.end_angle,
                fill: size_color(s.key),
                stroke: Some(slice_separator()),
            })
        })
        .collect();

    out.push(Shape::Label(Label::title(
        TITLE,
        (center.0, layout.margin.top / 2.0 + 10.0),
    )));

    let legend: Vec<LegendItem> = CompanySize::ALL
        .iter()
        .filter(|s| counts.get(s).is_some())
        .map(|s| LegendItem::new(s.display_name(), size_color(*s)))
        .collect();
    out.extend(legend_shapes(
        &legend,
        (area.right() + 20.0, area.y),
        Flow::Column,
    ));

    log::debug!("pie: {} slices, radius {:.1}", counts.len(), radius);
    out
}
