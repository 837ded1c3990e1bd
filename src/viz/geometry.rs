//! Backend-independent drawing descriptors.
//!
//! Chart builders produce `Vec<Shape>` in absolute canvas pixels; `draw` turns
//! them into plotters calls.

use plotters::style::RGBColor;
use std::f64::consts::TAU;

pub type Point = (f64, f64);

/// Line color, width in pixels and opacity in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: RGBColor,
    pub width: f64,
    pub opacity: f64,
}

impl Stroke {
    pub fn new(color: RGBColor, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Pie slice. Angles are radians measured clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: RGBColor,
    pub stroke: Option<Stroke>,
}

impl Wedge {
    /// Point on the rim at `angle`.
    pub fn rim_point(&self, angle: f64) -> Point {
        (
            self.center.0 + self.radius * angle.sin(),
            self.center.1 - self.radius * angle.cos(),
        )
    }

    /// Closed polygon approximating the slice: center, rim samples, center.
    /// Roughly one sample per degree of sweep.
    pub fn outline(&self) -> Vec<Point> {
        let sweep = self.end_angle - self.start_angle;
        let steps = ((sweep.abs() / TAU) * 360.0).ceil().max(1.0) as usize;
        let mut pts = Vec::with_capacity(steps + 3);
        let full_circle = (sweep.abs() - TAU).abs() < 1e-9;
        if !full_circle {
            pts.push(self.center);
        }
        for i in 0..=steps {
            let a = self.start_angle + sweep * i as f64 / steps as f64;
            pts.push(self.rim_point(a));
        }
        if !full_circle {
            pts.push(self.center);
        }
        pts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: RGBColor,
    pub stroke: Option<Stroke>,
}

/// Open path through `points`, drawn as one continuous line.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Point,
    pub size: f64,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub bold: bool,
    pub italic: bool,
    /// Rotated a quarter turn counter-clockwise (vertical axis titles).
    pub vertical: bool,
    pub color: RGBColor,
}

impl Label {
    pub fn new(text: impl Into<String>, pos: Point, size: f64) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            anchor: Anchor::Start,
            baseline: Baseline::Bottom,
            bold: false,
            italic: false,
            vertical: false,
            color: RGBColor(0, 0, 0),
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }

    /// Bold, centered chart heading.
    pub fn title(text: impl Into<String>, pos: Point) -> Self {
        Self::new(text, pos, 16.0).anchor(Anchor::Middle).bold()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Wedge(Wedge),
    Rect(Rect),
    Polyline(Polyline),
    Segment { from: Point, to: Point, stroke: Stroke },
    Label(Label),
}

impl Shape {
    pub fn segment(from: Point, to: Point, stroke: Stroke) -> Self {
        Shape::Segment { from, to, stroke }
    }

    /// Filled square legend swatch with its own color as outline.
    pub fn swatch(x: f64, y: f64, size: f64, color: RGBColor) -> Self {
        Shape::Rect(Rect {
            x,
            y,
            width: size,
            height: size,
            fill: color,
            stroke: Some(Stroke::new(color, 1.0)),
        })
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Shape::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Shape::Polyline(p) => Some(p),
            _ => None,
        }
    }
}

/// White separator stroke used around pie slices.
pub fn slice_separator() -> Stroke {
    Stroke::new(RGBColor(255, 255, 255), 2.0)
}
