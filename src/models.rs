use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience level of a salary record, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "EN")]
    Entry,
    #[serde(rename = "MI")]
    Mid,
    #[serde(rename = "SE")]
    Senior,
    #[serde(rename = "EX")]
    Executive,
}

impl ExperienceLevel {
    /// Canonical ordering: Entry < Mid < Senior < Executive.
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "EN",
            ExperienceLevel::Mid => "MI",
            ExperienceLevel::Senior => "SE",
            ExperienceLevel::Executive => "EX",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "EN" => Some(ExperienceLevel::Entry),
            "MI" => Some(ExperienceLevel::Mid),
            "SE" => Some(ExperienceLevel::Senior),
            "EX" => Some(ExperienceLevel::Executive),
            _ => None,
        }
    }

    /// Human-readable name used in legends and axis labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Company size bucket, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl CompanySize {
    /// Canonical ordering: Small < Medium < Large.
    pub const ALL: [CompanySize; 3] = [CompanySize::Small, CompanySize::Medium, CompanySize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            CompanySize::Small => "S",
            CompanySize::Medium => "M",
            CompanySize::Large => "L",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "S" => Some(CompanySize::Small),
            "M" => Some(CompanySize::Medium),
            "L" => Some(CompanySize::Large),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompanySize::Small => "Small",
            CompanySize::Medium => "Medium",
            CompanySize::Large => "Large",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Categorical keys that can be written out with a code and a display name.
pub trait Category: Copy + Eq + std::hash::Hash + fmt::Debug {
    fn code(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
}

impl Category for ExperienceLevel {
    fn code(&self) -> &'static str {
        ExperienceLevel::code(self)
    }
    fn display_name(&self) -> &'static str {
        ExperienceLevel::display_name(self)
    }
}

impl Category for CompanySize {
    fn code(&self) -> &'static str {
        CompanySize::code(self)
    }
    fn display_name(&self) -> &'static str {
        CompanySize::display_name(self)
    }
}

/// Numeric columns plotted on the parallel-coordinates chart, in axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    WorkYear,
    SalaryInUsd,
    RemoteRatio,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::WorkYear,
        Dimension::SalaryInUsd,
        Dimension::RemoteRatio,
    ];

    /// CSV column backing this dimension.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::WorkYear => "work_year",
            Dimension::SalaryInUsd => "salary_in_usd",
            Dimension::RemoteRatio => "remote_ratio",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::WorkYear => "Year",
            Dimension::SalaryInUsd => "Salary (USD)",
            Dimension::RemoteRatio => "Remote Ratio (%)",
        }
    }
}

/// One salary observation (one CSV row). Columns not listed here are ignored.
///
/// Empty numeric cells load as `None`. All three numeric columns parse as floats,
/// so `2022.0` is a valid year. Categorical columns keep their raw text so that
/// values outside the fixed enumerations survive loading and are filtered where
/// they are grouped or colored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub work_year: Option<f64>,
    pub experience_level: String,
    pub company_size: String,
    pub salary_in_usd: Option<f64>,
    pub remote_ratio: Option<f64>,
}

impl Record {
    /// Header names a dataset must carry, whatever else it contains.
    pub const REQUIRED_COLUMNS: [&'static str; 5] = [
        "work_year",
        "experience_level",
        "company_size",
        "salary_in_usd",
        "remote_ratio",
    ];

    pub fn experience(&self) -> Option<ExperienceLevel> {
        ExperienceLevel::from_code(&self.experience_level)
    }

    pub fn company_size(&self) -> Option<CompanySize> {
        CompanySize::from_code(&self.company_size)
    }

    /// Numeric value of the record along a PCP dimension. NaN and infinities
    /// count as missing.
    pub fn value(&self, dim: Dimension) -> Option<f64> {
        let v = match dim {
            Dimension::WorkYear => self.work_year,
            Dimension::SalaryInUsd => self.salary_in_usd,
            Dimension::RemoteRatio => self.remote_ratio,
        };
        v.filter(|x| x.is_finite())
    }
}
