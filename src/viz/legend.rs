//! Color legends: one swatch + display name per category.

use super::geometry::{Baseline, Label, Point, Shape};
use plotters::style::RGBColor;

const SWATCH_PX: f64 = 15.0;
const GAP_PX: f64 = 4.0;
const FONT_PX: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: RGBColor,
}

impl LegendItem {
    pub fn new(label: impl Into<String>, color: RGBColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// How consecutive legend entries are placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    /// Stacked top to bottom, one swatch height plus a small gap apart.
    Column,
    /// Left to right at a fixed pitch in pixels.
    Row { pitch: f64 },
}

/// Swatches and labels for `items`, the first swatch's top-left corner at `origin`.
pub fn legend_shapes(items: &[LegendItem], origin: Point, flow: Flow) -> Vec<Shape> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        let (x, y) = match flow {
            Flow::Column => (origin.0, origin.1 + i as f64 * (SWATCH_PX + GAP_PX)),
            Flow::Row { pitch } => (origin.0 + i as f64 * pitch, origin.1),
        };
        out.push(Shape::swatch(x, y, SWATCH_PX, item.color));
        out.push(Shape::Label(
            Label::new(
                item.label.clone(),
                (x + SWATCH_PX + GAP_PX, y + SWATCH_PX / 2.0),
                FONT_PX,
            )
            .baseline(Baseline::Middle),
        ));
    }
    out
}
