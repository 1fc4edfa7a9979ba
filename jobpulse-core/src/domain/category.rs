//! Category domain types
//!
//! The canonical business functions, seniority levels and remote status a
//! posting can be tagged with. The serialized form of every variant is the
//! exact label written to the dataset and to the remote tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical business function
///
/// Every classified posting carries exactly one of these. Raw upstream
/// department labels never leak past the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionCategory {
    Engineering,
    Sales,
    Marketing,
    Product,
    Design,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "Customer Success")]
    CustomerSuccess,
    Operations,
    #[serde(rename = "People & Talent")]
    PeopleTalent,
    Finance,
    #[serde(rename = "Legal & Compliance")]
    LegalCompliance,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Strategy & Business Development")]
    StrategyBizDev,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Unknown,
}

impl FunctionCategory {
    /// All categories, in canonical order
    pub const ALL: [FunctionCategory; 15] = [
        FunctionCategory::Engineering,
        FunctionCategory::Sales,
        FunctionCategory::Marketing,
        FunctionCategory::Product,
        FunctionCategory::Design,
        FunctionCategory::DataAnalytics,
        FunctionCategory::CustomerSuccess,
        FunctionCategory::Operations,
        FunctionCategory::PeopleTalent,
        FunctionCategory::Finance,
        FunctionCategory::LegalCompliance,
        FunctionCategory::It,
        FunctionCategory::StrategyBizDev,
        FunctionCategory::ProfessionalServices,
        FunctionCategory::Unknown,
    ];

    /// Categories broken out individually in company and snapshot reports
    pub const HEADLINE: [FunctionCategory; 4] = [
        FunctionCategory::Engineering,
        FunctionCategory::Sales,
        FunctionCategory::Marketing,
        FunctionCategory::Product,
    ];

    /// The label used in the dataset and in remote tables
    pub fn label(&self) -> &'static str {
        match self {
            FunctionCategory::Engineering => "Engineering",
            FunctionCategory::Sales => "Sales",
            FunctionCategory::Marketing => "Marketing",
            FunctionCategory::Product => "Product",
            FunctionCategory::Design => "Design",
            FunctionCategory::DataAnalytics => "Data & Analytics",
            FunctionCategory::CustomerSuccess => "Customer Success",
            FunctionCategory::Operations => "Operations",
            FunctionCategory::PeopleTalent => "People & Talent",
            FunctionCategory::Finance => "Finance",
            FunctionCategory::LegalCompliance => "Legal & Compliance",
            FunctionCategory::It => "IT",
            FunctionCategory::StrategyBizDev => "Strategy & Business Development",
            FunctionCategory::ProfessionalServices => "Professional Services",
            FunctionCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FunctionCategory {
    type Err = String;

    /// Parses an exact canonical label (surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("not a canonical function category: {:?}", s))
    }
}

/// Seniority level inferred from a job title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Executive,
    #[serde(rename = "Director/Lead")]
    DirectorLead,
    Senior,
    #[default]
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Junior,
}

impl SeniorityLevel {
    pub const ALL: [SeniorityLevel; 5] = [
        SeniorityLevel::Executive,
        SeniorityLevel::DirectorLead,
        SeniorityLevel::Senior,
        SeniorityLevel::MidLevel,
        SeniorityLevel::Junior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeniorityLevel::Executive => "Executive",
            SeniorityLevel::DirectorLead => "Director/Lead",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::MidLevel => "Mid-Level",
            SeniorityLevel::Junior => "Junior",
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeniorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label() == s)
            .ok_or_else(|| format!("not a seniority level: {:?}", s))
    }
}

/// Remote status of a posting
///
/// A posting flagged both remote and hybrid counts as remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteStatus {
    Yes,
    Hybrid,
    No,
}

impl RemoteStatus {
    pub fn from_flags(remote: bool, hybrid: bool) -> Self {
        if remote {
            RemoteStatus::Yes
        } else if hybrid {
            RemoteStatus::Hybrid
        } else {
            RemoteStatus::No
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RemoteStatus::Yes => "Yes",
            RemoteStatus::Hybrid => "Hybrid",
            RemoteStatus::No => "No",
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, RemoteStatus::Yes)
    }
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
