//! Fixed categorical color mappings.

use crate::models::{CompanySize, ExperienceLevel};
use plotters::style::RGBColor;

/// The classic ten-color categorical scheme.
pub const CATEGORY10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // #1f77b4
    RGBColor(255, 127, 14),  // #ff7f0e
    RGBColor(44, 160, 44),   // #2ca02c
    RGBColor(214, 39, 40),   // #d62728
    RGBColor(148, 103, 189), // #9467bd
    RGBColor(140, 86, 75),   // #8c564b
    RGBColor(227, 119, 194), // #e377c2
    RGBColor(127, 127, 127), // #7f7f7f
    RGBColor(188, 189, 34),  // #bcbd22
    RGBColor(23, 190, 207),  // #17becf
];

/// Color for lines whose experience code is outside the known levels.
pub const UNKNOWN: RGBColor = RGBColor(160, 160, 160);

/// Experience levels take the scheme in canonical order (Entry first).
pub fn experience_color(level: ExperienceLevel) -> RGBColor {
    let idx = ExperienceLevel::ALL
        .iter()
        .position(|l| *l == level)
        .unwrap_or(0);
    CATEGORY10[idx % CATEGORY10.len()]
}

/// Pie slices: blue, green, orange for Small, Medium, Large.
pub fn size_color(size: CompanySize) -> RGBColor {
    match size {
        CompanySize::Small => CATEGORY10[0],
        CompanySize::Medium => CATEGORY10[2],
        CompanySize::Large => CATEGORY10[1],
    }
}
