//! One-shot load → aggregate → draw run.

use crate::layout::LayoutConfig;
use crate::models::{CompanySize, ExperienceLevel, Record};
use crate::stats::{self, GroupSummary};
use crate::storage;
use crate::viz::{self, Canvas, Dashboard};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything a dashboard run needs.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data: PathBuf,
    pub out: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Locale tag for tick label grouping (e.g. "en", "de").
    pub locale: String,
    /// TrueType font registered before drawing; needed for bitmap output.
    pub font: Option<PathBuf>,
    pub layout: LayoutConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("ds_salaries.csv"),
            out: PathBuf::from("dashboard.svg"),
            width: 1400,
            height: 900,
            locale: "en".into(),
            font: None,
            layout: LayoutConfig::default(),
        }
    }
}

/// The two derived summaries behind the pie and bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    pub size_counts: GroupSummary<CompanySize>,
    pub salary_by_level: GroupSummary<ExperienceLevel>,
}

pub fn summarize(records: &[Record]) -> Summaries {
    let outside = records
        .iter()
        .filter(|r| r.experience().is_none() || r.company_size().is_none())
        .count();
    if outside > 0 {
        log::warn!(
            "{} records carry an experience level or company size outside the known categories",
            outside
        );
    }
    Summaries {
        size_counts: stats::company_size_counts(records),
        salary_by_level: stats::mean_salary_by_experience(records),
    }
}

/// Geometry for `records` under `cfg`, without touching the filesystem.
pub fn build(records: &[Record], cfg: &DashboardConfig) -> Dashboard {
    let summaries = summarize(records);
    viz::build_dashboard(
        records,
        &summaries.size_counts,
        &summaries.salary_by_level,
        Canvas {
            width: cfg.width,
            height: cfg.height,
            layout: &cfg.layout,
            locale: &cfg.locale,
        },
    )
}

/// Load the dataset and draw the dashboard. A load failure returns before
/// anything is written.
pub fn run(cfg: &DashboardConfig) -> Result<Dashboard> {
    let records = storage::load_records(&cfg.data)?;
    if let Some(font) = &cfg.font {
        viz::register_font_file(font)?;
    }
    let dashboard = build(&records, cfg);
    viz::render_dashboard(&dashboard, &cfg.out)
        .with_context(|| format!("rendering {}", cfg.out.display()))?;
    Ok(dashboard)
}
