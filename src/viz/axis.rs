//! Axis emission: domain line, tick marks and tick labels derived from a `Scale`.

use super::geometry::{Anchor, Baseline, Label, Point, Shape, Stroke};
use super::scale::Scale;
use plotters::style::RGBColor;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT_PX: f64 = 10.0;
const AXIS_COLOR: RGBColor = RGBColor(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    /// Vertical axis, ticks and labels to the left.
    Left,
    /// Horizontal axis, ticks and labels below.
    Bottom,
}

type TickFormat<'a, V> = Box<dyn Fn(&V) -> Option<String> + 'a>;

pub struct Axis<'a, S: Scale> {
    scale: &'a S,
    orient: Orient,
    origin: Point,
    tick_count: usize,
    format: TickFormat<'a, S::Value>,
}

impl<'a, S: Scale> Axis<'a, S> {
    pub fn new(scale: &'a S, orient: Orient) -> Self {
        Self {
            scale,
            orient,
            origin: (0.0, 0.0),
            tick_count: 10,
            format: Box::new(|_: &S::Value| None),
        }
    }

    pub fn left(scale: &'a S) -> Self {
        Self::new(scale, Orient::Left)
    }

    pub fn bottom(scale: &'a S) -> Self {
        Self::new(scale, Orient::Bottom)
    }

    /// Canvas offset added to every emitted coordinate.
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Label text for a tick; returning `None` leaves the tick out entirely.
    pub fn format<F>(mut self, f: F) -> Self
    where
        F: Fn(&S::Value) -> Option<String> + 'a,
    {
        self.format = Box::new(f);
        self
    }

    fn place(&self, along: f64, across: f64) -> Point {
        match self.orient {
            Orient::Left => (self.origin.0 + across, self.origin.1 + along),
            Orient::Bottom => (self.origin.0 + along, self.origin.1 + across),
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let stroke = Stroke::new(AXIS_COLOR, 1.0);
        let (r0, r1) = self.scale.range();
        let outer = match self.orient {
            Orient::Left => -TICK_SIZE,
            Orient::Bottom => TICK_SIZE,
        };

        let mut out = vec![
            Shape::segment(self.place(r0, outer), self.place(r0, 0.0), stroke),
            Shape::segment(self.place(r0, 0.0), self.place(r1, 0.0), stroke),
            Shape::segment(self.place(r1, 0.0), self.place(r1, outer), stroke),
        ];

        for value in self.scale.ticks(self.tick_count) {
            let Some(text) = (self.format)(&value) else {
                continue;
            };
            let Some(pos) = self.scale.apply(&value) else {
                continue;
            };
            let along = pos + self.scale.tick_offset();
            out.push(Shape::segment(
                self.place(along, 0.0),
                self.place(along, outer),
                stroke,
            ));
            let label_at = self.place(along, outer + outer.signum() * TICK_PADDING);
            let label = Label::new(text, label_at, TICK_FONT_PX);
            out.push(Shape::Label(match self.orient {
                Orient::Left => label.anchor(Anchor::End).baseline(Baseline::Middle),
                Orient::Bottom => label.anchor(Anchor::Middle).baseline(Baseline::Top),
            }));
        }
        out
    }
}
