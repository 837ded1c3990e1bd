//! Average salary per experience level as a vertical bar chart.

use super::axis::Axis;
use super::format::NumberFormat;
use super::geometry::{Anchor, Label, Rect, Shape};
use super::palette::experience_color;
use super::scale::{BandScale, LinearScale, Scale};
use crate::layout::{Layout, Region};
use crate::models::ExperienceLevel;
use crate::stats::GroupSummary;

pub const TITLE: &str = "Average Salary by Experience Level";
pub const X_LABEL: &str = "Experience Level";
pub const Y_LABEL: &str = "Average Salary (USD)";

const BAND_PADDING: f64 = 0.2;
const Y_TICKS: usize = 10;

/// Scales in plot-area coordinates (origin at the area's top-left corner).
#[derive(Debug, Clone)]
pub struct BarScales {
    pub x: BandScale<ExperienceLevel>,
    pub y: LinearScale,
}

/// Band scale over the levels present (in summary order) and a niced
/// `[0, max mean]` value scale with pixel-down as value-down.
pub fn bar_scales(means: &GroupSummary<ExperienceLevel>, area: &Region) -> BarScales {
    let x = BandScale::new(means.keys(), (0.0, area.width)).with_padding(BAND_PADDING);
    let max = means.max_value().unwrap_or(0.0);
    let y = LinearScale::new((0.0, max), (area.height, 0.0)).nice(Y_TICKS);
    BarScales { x, y }
}

pub fn bar_chart(
    means: &GroupSummary<ExperienceLevel>,
    layout: &Layout,
    fmt: &NumberFormat,
) -> Vec<Shape> {
    let area = layout.bar;
    let scales = bar_scales(means, &area);
    let mut out = Vec::new();

    out.extend(
        Axis::bottom(&scales.x)
            .at((area.x, area.bottom()))
            .format(|level: &ExperienceLevel| Some(level.display_name().to_string()))
            .shapes(),
    );
    out.extend(
        Axis::left(&scales.y)
            .at((area.x, area.y))
            .ticks(Y_TICKS)
            .format(|v: &f64| Some(fmt.currency(*v)))
            .shapes(),
    );

    out.push(Shape::Label(
        Label::new(
            X_LABEL,
            (area.x + area.width / 2.0, area.bottom() + layout.margin.bottom - 25.0),
            12.0,
        )
        .anchor(Anchor::Middle),
    ));
    out.push(Shape::Label(
        Label::new(
            Y_LABEL,
            (area.x - layout.margin.left + 60.0, area.y + area.height / 2.0),
            12.0,
        )
        .anchor(Anchor::Middle)
        .vertical(),
    ));

    for g in means.iter() {
        let (Some(x), Some(y)) = (scales.x.apply(&g.key), scales.y.apply(&g.value)) else {
            continue;
        };
        out.push(Shape::Rect(Rect {
            x: area.x + x,
            y: area.y + y,
            width: scales.x.bandwidth(),
            height: area.height - y,
            fill: experience_color(g.key),
            stroke: None,
        }));
    }

    out.push(Shape::Label(Label::title(
        TITLE,
        (area.x + area.width / 2.0, area.y - layout.margin.top / 2.0 + 10.0),
    )));

    log::debug!(
        "bar: {} bars, y domain {:?}",
        means.len(),
        scales.y.domain()
    );
    out
}
