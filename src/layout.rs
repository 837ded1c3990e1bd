//! Viewport partitioning: where each of the three charts is drawn.
//!
//! Pure arithmetic over the viewport size. Degenerate (tiny or zero) viewports
//! produce degenerate regions; nothing is clamped.

/// Space reserved around a plot area for titles, axes and legends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed proportions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Margins around the pie and bar plot areas.
    pub margin: Margins,
    /// Margins specific to the parallel-coordinates axes and legend.
    pub pcp_margin: Margins,
    /// Share of the viewport width taken by the left column (pie + PCP).
    pub left_width_ratio: f64,
    /// Share of the viewport height taken by the pie block.
    pub pie_height_ratio: f64,
    /// Share of the viewport height taken by the PCP block.
    pub pcp_height_ratio: f64,
    /// Gap between the left column and the bar chart, as a share of the width.
    pub horizontal_spacing_ratio: f64,
    /// Gap between pie and PCP, as a share of the height.
    pub vertical_spacing_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: Margins {
                top: 60.0,
                right: 30.0,
                bottom: 80.0,
                left: 100.0,
            },
            pcp_margin: Margins {
                top: 30.0,
                right: 10.0,
                bottom: 50.0,
                left: 10.0,
            },
            left_width_ratio: 0.42,
            pie_height_ratio: 0.45,
            pcp_height_ratio: 0.40,
            horizontal_spacing_ratio: 0.08,
            vertical_spacing_ratio: 0.05,
        }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Plot areas of the three charts plus the margins they were derived with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub pie: Region,
    pub pcp: Region,
    pub bar: Region,
    pub margin: Margins,
    pub pcp_margin: Margins,
}

impl Layout {
    pub fn pie_radius(&self) -> f64 {
        self.pie.width.min(self.pie.height) / 2.0
    }
}

/// Split a `width` × `height` viewport into pie (top left), PCP (bottom left) and
/// bar (right) plot areas.
pub fn plan(width: f64, height: f64, cfg: &LayoutConfig) -> Layout {
    let m = cfg.margin;
    let spacing_h = width * cfg.horizontal_spacing_ratio;
    let spacing_v = height * cfg.vertical_spacing_ratio;

    let column_w = width * cfg.left_width_ratio - m.left - m.right;
    let pie_h = height * cfg.pie_height_ratio - m.top - m.bottom;
    let pie = Region {
        x: m.left,
        y: m.top,
        width: column_w,
        height: pie_h,
    };

    let pcp = Region {
        x: m.left,
        y: m.top + pie_h + m.bottom + spacing_v,
        width: column_w,
        height: height * cfg.pcp_height_ratio - m.top - cfg.pcp_margin.bottom,
    };

    let bar_x = m.left + column_w + m.right + spacing_h;
    let bar = Region {
        x: bar_x,
        y: m.top,
        width: width - bar_x - m.right,
        height: height - m.top - m.bottom,
    };

    Layout {
        width,
        height,
        pie,
        pcp,
        bar,
        margin: m,
        pcp_margin: cfg.pcp_margin,
    }
}
