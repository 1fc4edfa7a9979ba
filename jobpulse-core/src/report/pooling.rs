//! Cross-posting ("talent pooling") report
//!
//! A title that is open at several companies at once is a candidate for a
//! shared talent pool. Titles are grouped by exact text.

use std::fmt;

use super::{mode, tally};
use crate::domain::{ClassifiedPosting, FunctionCategory, SeniorityLevel};

/// Number of opportunities kept in the report
pub const POOLING_REPORT_LIMIT: usize = 30;

/// Company names listed before the remainder is summarized
const LISTED_COMPANIES: usize = 10;

/// Minimum distinct companies for a title to qualify
const MIN_COMPANIES: usize = 2;

/// Pooling priority, by number of companies hiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn for_company_count(count: usize) -> Self {
        match count {
            5.. => Priority::High,
            3..=4 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High (5+ companies)",
            Priority::Medium => "Medium (3-4 companies)",
            Priority::Low => "Low (2 companies)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A title open at two or more companies
#[derive(Debug, Clone, PartialEq)]
pub struct PoolingOpportunity {
    pub title: String,
    /// Distinct companies, in order of first appearance
    pub companies: Vec<String>,
    /// Openings across all companies, duplicates included
    pub total_openings: usize,
    /// Most frequent function within the group
    pub function: FunctionCategory,
    /// Most frequent level within the group
    pub level: SeniorityLevel,
}

impl PoolingOpportunity {
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn priority(&self) -> Priority {
        Priority::for_company_count(self.company_count())
    }

    /// Comma-joined company names, the first ten followed by "(+N more)"
    pub fn companies_label(&self) -> String {
        let mut label = self
            .companies
            .iter()
            .take(LISTED_COMPANIES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        if self.companies.len() > LISTED_COMPANIES {
            label.push_str(&format!(
                " (+{} more)",
                self.companies.len() - LISTED_COMPANIES
            ));
        }

        label
    }
}

/// Titles posted by at least two companies, most widely posted first
pub fn pooling_report(rows: &[ClassifiedPosting]) -> Vec<PoolingOpportunity> {
    let mut report: Vec<PoolingOpportunity> = tally(rows.iter().map(|row| row.title.as_str()))
        .into_iter()
        .filter_map(|(title, total_openings)| {
            let group: Vec<&ClassifiedPosting> =
                rows.iter().filter(|row| row.title == title).collect();

            let companies: Vec<String> = tally(group.iter().map(|row| row.company.as_str()))
                .into_iter()
                .map(|(company, _)| company.to_string())
                .collect();

            if companies.len() < MIN_COMPANIES {
                return None;
            }

            Some(PoolingOpportunity {
                title: title.to_string(),
                companies,
                total_openings,
                function: mode(group.iter().map(|row| row.function))
                    .unwrap_or(FunctionCategory::Unknown),
                level: mode(group.iter().map(|row| row.level)).unwrap_or_default(),
            })
        })
        .collect();

    report.sort_by(|a, b| b.company_count().cmp(&a.company_count()));
    report.truncate(POOLING_REPORT_LIMIT);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemoteStatus;
    use crate::report::fixtures::{row, sample};

    #[test]
    fn test_pooling_excludes_single_company_titles() {
        let report = pooling_report(&sample());

        let titles: Vec<&str> = report.iter().map(|opp| opp.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Engineer", "Account Executive"]);
        assert!(!titles.contains(&"Senior Software Engineer"));
        assert!(!titles.contains(&"Product Manager"));
    }

    #[test]
    fn test_two_company_title_is_low_priority() {
        let report = pooling_report(&sample());
        let account_exec = report
            .iter()
            .find(|opp| opp.title == "Account Executive")
            .unwrap();

        assert_eq!(account_exec.company_count(), 2);
        assert_eq!(account_exec.total_openings, 2);
        assert_eq!(account_exec.priority(), Priority::Low);
        assert_eq!(account_exec.priority().label(), "Low (2 companies)");
        assert_eq!(account_exec.companies_label(), "Acme, Initech");
    }

    #[test]
    fn test_same_company_twice_does_not_qualify() {
        let rows = vec![
            row(
                "Designer",
                "Acme",
                FunctionCategory::Design,
                SeniorityLevel::MidLevel,
                RemoteStatus::No,
            ),
            row(
                "Designer",
                "Acme",
                FunctionCategory::Design,
                SeniorityLevel::MidLevel,
                RemoteStatus::No,
            ),
        ];

        assert!(pooling_report(&rows).is_empty());
    }

    #[test]
    fn test_mode_ties_go_to_first_encountered() {
        let rows = vec![
            row(
                "Generalist",
                "Acme",
                FunctionCategory::Operations,
                SeniorityLevel::Junior,
                RemoteStatus::No,
            ),
            row(
                "Generalist",
                "Globex",
                FunctionCategory::Sales,
                SeniorityLevel::Senior,
                RemoteStatus::No,
            ),
        ];

        let report = pooling_report(&rows);
        assert_eq!(report[0].function, FunctionCategory::Operations);
        assert_eq!(report[0].level, SeniorityLevel::Junior);
    }

    #[test]
    fn test_company_list_is_truncated() {
        let rows: Vec<ClassifiedPosting> = (0..12)
            .map(|i| {
                row(
                    "Recruiter",
                    &format!("C{}", i),
                    FunctionCategory::PeopleTalent,
                    SeniorityLevel::MidLevel,
                    RemoteStatus::No,
                )
            })
            .collect();

        let report = pooling_report(&rows);
        assert_eq!(report[0].company_count(), 12);
        assert_eq!(report[0].priority(), Priority::High);
        assert_eq!(
            report[0].companies_label(),
            "C0, C1, C2, C3, C4, C5, C6, C7, C8, C9 (+2 more)"
        );
    }

    #[test]
    fn test_priority_thresholds() {
        assert_eq!(Priority::for_company_count(2), Priority::Low);
        assert_eq!(Priority::for_company_count(3), Priority::Medium);
        assert_eq!(Priority::for_company_count(4), Priority::Medium);
        assert_eq!(Priority::for_company_count(5), Priority::High);
    }

    #[test]
    fn test_pooling_keeps_top_thirty() {
        let rows: Vec<ClassifiedPosting> = (0..40)
            .flat_map(|i| {
                ["Acme", "Globex"].into_iter().map(move |company| {
                    row(
                        &format!("Role {}", i),
                        company,
                        FunctionCategory::Unknown,
                        SeniorityLevel::MidLevel,
                        RemoteStatus::No,
                    )
                })
            })
            .collect();

        let report = pooling_report(&rows);
        assert_eq!(report.len(), POOLING_REPORT_LIMIT);
        assert_eq!(report[0].title, "Role 0");
    }
}
