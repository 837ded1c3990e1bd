//! salary_charts
//!
//! Renders a static three-chart dashboard from a CSV of salary records and pairs
//! with the `salary-charts` CLI.
//!
//! ### Features
//! - Load `work_year`, `experience_level`, `company_size`, `salary_in_usd`,
//!   `remote_ratio` from a CSV (other columns ignored)
//! - Group counts and means with canonical category ordering
//! - Pie (company size), bar (mean salary by experience) and parallel-coordinates
//!   (year / salary / remote ratio) charts on one SVG or PNG canvas
//!
//! ### Example
//! ```no_run
//! use salary_charts::pipeline::{self, DashboardConfig};
//!
//! let cfg = DashboardConfig {
//!     data: "ds_salaries.csv".into(),
//!     out: "dashboard.svg".into(),
//!     ..DashboardConfig::default()
//! };
//! pipeline::run(&cfg)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod layout;
pub mod models;
pub mod pipeline;
pub mod stats;
pub mod storage;
pub mod viz;

pub use error::DataError;
pub use models::{CompanySize, Dimension, ExperienceLevel, Record};
