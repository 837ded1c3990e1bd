//! Turn geometry descriptors into plotters drawing calls on any backend.

use super::geometry::{Anchor, Baseline, Label, Point, Shape, Stroke};
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontStyle, FontTransform};

fn px(p: Point) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

fn stroke_style(s: &Stroke) -> ShapeStyle {
    ShapeStyle {
        color: s.color.mix(s.opacity),
        filled: false,
        stroke_width: (s.width.round() as u32).max(1),
    }
}

fn text_style(label: &Label) -> TextStyle<'_> {
    let weight = if label.bold {
        FontStyle::Bold
    } else if label.italic {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    };
    let h = match label.anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    };
    let v = match label.baseline {
        Baseline::Top => VPos::Top,
        Baseline::Middle => VPos::Center,
        Baseline::Bottom => VPos::Bottom,
    };
    let style = TextStyle::from(FontDesc::new(FontFamily::SansSerif, label.size, weight))
        .color(&label.color)
        .pos(Pos::new(h, v));
    if label.vertical {
        style.transform(FontTransform::Rotate270)
    } else {
        style
    }
}

/// Draw `shapes` in order onto `area` (later shapes paint over earlier ones).
pub fn draw_shapes<'s, DB, I>(area: &DrawingArea<DB, Shift>, shapes: I) -> Result<()>
where
    DB: DrawingBackend,
    I: IntoIterator<Item = &'s Shape>,
{
    for shape in shapes {
        match shape {
            Shape::Wedge(w) => {
                let outline: Vec<(i32, i32)> = w.outline().into_iter().map(px).collect();
                area.draw(&Polygon::new(outline.clone(), w.fill.filled()))
                    .map_err(|e| anyhow!("{:?}", e))?;
                if let Some(s) = &w.stroke {
                    let mut closed = outline;
                    if let Some(first) = closed.first().copied() {
                        closed.push(first);
                    }
                    area.draw(&PathElement::new(closed, stroke_style(s)))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
            }
            Shape::Rect(r) => {
                let corners = [px((r.x, r.y)), px((r.x + r.width, r.y + r.height))];
                area.draw(&Rectangle::new(corners, r.fill.filled()))
                    .map_err(|e| anyhow!("{:?}", e))?;
                if let Some(s) = &r.stroke {
                    area.draw(&Rectangle::new(corners, stroke_style(s)))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
            }
            Shape::Polyline(l) => {
                let pts: Vec<(i32, i32)> = l.points.iter().copied().map(px).collect();
                area.draw(&PathElement::new(pts, stroke_style(&l.stroke)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Shape::Segment { from, to, stroke } => {
                area.draw(&PathElement::new(vec![px(*from), px(*to)], stroke_style(stroke)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Shape::Label(label) => {
                area.draw(&Text::new(label.text.as_str(), px(label.pos), text_style(label)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}
