//! Category normalizer
//!
//! Resolves the department label the board attaches to a posting into one of
//! the canonical function categories. The label table is a data asset
//! (`assets/function_mapping.toml`) rather than code: new upstream labels
//! appear over time and are appended there. Labels the table does not know
//! fall back to the title classifier, so a raw upstream label never survives
//! normalization.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::classify::classify_function;
use crate::domain::category::FunctionCategory;
use crate::error::{CoreError, Result};

const BUILTIN_MAPPING: &str = include_str!("../assets/function_mapping.toml");

/// On-disk shape of the mapping asset
#[derive(Debug, Deserialize)]
struct MappingAsset {
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

/// How a category was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The upstream label already was a canonical category
    Canonical,
    /// The upstream label was found in the mapping table
    Mapped,
    /// No usable label; the title classifier decided
    Inferred,
}

/// Result of resolving a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub category: FunctionCategory,
    pub source: Source,
}

/// Upstream label to canonical category resolver
#[derive(Debug, Clone)]
pub struct CategoryNormalizer {
    /// Keyed by trimmed, lower-cased upstream label
    labels: HashMap<String, FunctionCategory>,
}

impl CategoryNormalizer {
    /// Normalizer over the mapping asset compiled into the crate
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_MAPPING).expect("embedded function mapping is valid")
    }

    /// Parse a mapping asset
    ///
    /// Fails if any entry targets a label outside the canonical set.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let asset: MappingAsset = toml::from_str(content)?;

        let mut labels = HashMap::with_capacity(asset.labels.len());
        for (label, target) in asset.labels {
            let category = target
                .parse::<FunctionCategory>()
                .map_err(|_| CoreError::UnknownCategory {
                    label: label.clone(),
                    target: target.clone(),
                })?;
            labels.insert(lookup_key(&label), category);
        }

        Ok(Self { labels })
    }

    /// Load a mapping asset from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Number of upstream labels in the table
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve an upstream label, falling back to the title
    pub fn resolve(&self, upstream_label: Option<&str>, title: &str) -> Resolution {
        let label = upstream_label.map(str::trim).filter(|label| !label.is_empty());

        if let Some(label) = label {
            let canonical = FunctionCategory::ALL
                .into_iter()
                .find(|category| category.label().eq_ignore_ascii_case(label));
            if let Some(category) = canonical {
                return Resolution {
                    category,
                    source: Source::Canonical,
                };
            }

            if let Some(&category) = self.labels.get(&lookup_key(label)) {
                return Resolution {
                    category,
                    source: Source::Mapped,
                };
            }
        }

        Resolution {
            category: classify_function(title),
            source: Source::Inferred,
        }
    }

    /// Canonical category for an upstream label and title
    pub fn normalize(&self, upstream_label: Option<&str>, title: &str) -> FunctionCategory {
        self.resolve(upstream_label, title).category
    }
}

impl Default for CategoryNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lookup_key(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping_loads() {
        let normalizer = CategoryNormalizer::builtin();
        assert!(normalizer.len() > 50);
    }

    #[test]
    fn test_canonical_label_passes_through() {
        let normalizer = CategoryNormalizer::builtin();
        let resolution = normalizer.resolve(Some("Engineering"), "Head of Sales");

        assert_eq!(resolution.category, FunctionCategory::Engineering);
        assert_eq!(resolution.source, Source::Canonical);
    }

    #[test]
    fn test_canonical_label_ignores_case() {
        let normalizer = CategoryNormalizer::builtin();

        let resolution = normalizer.resolve(Some("engineering"), "Barista");
        assert_eq!(resolution.category, FunctionCategory::Engineering);
        assert_eq!(resolution.source, Source::Canonical);

        assert_eq!(
            normalizer.resolve(Some(" MARKETING "), "Barista"),
            Resolution {
                category: FunctionCategory::Marketing,
                source: Source::Canonical,
            }
        );
        assert_eq!(
            normalizer.normalize(Some("data & analytics"), "Barista"),
            FunctionCategory::DataAnalytics
        );
    }

    #[test]
    fn test_empty_label_uses_classifier() {
        let normalizer = CategoryNormalizer::builtin();

        assert_eq!(
            normalizer.normalize(Some(""), "Sales Director"),
            FunctionCategory::Sales
        );
        assert_eq!(
            normalizer.normalize(None, "Sales Director"),
            FunctionCategory::Sales
        );
        assert_eq!(
            normalizer.resolve(Some("   "), "Sales Director").source,
            Source::Inferred
        );
    }

    #[test]
    fn test_mapped_label_ignores_case_and_whitespace() {
        let normalizer = CategoryNormalizer::builtin();

        assert_eq!(
            normalizer.normalize(Some("Product & Design"), "Designer"),
            FunctionCategory::Product
        );
        assert_eq!(
            normalizer.normalize(Some("Product Development "), "Anything"),
            FunctionCategory::Product
        );
        assert_eq!(
            normalizer.normalize(Some("people operations"), "Anything"),
            FunctionCategory::PeopleTalent
        );
        assert_eq!(
            normalizer.resolve(Some("Strategy & BD"), "").source,
            Source::Mapped
        );
    }

    #[test]
    fn test_unmapped_label_never_leaks() {
        let normalizer = CategoryNormalizer::builtin();
        let resolution = normalizer.resolve(Some("Galactic Affairs"), "Data Analyst");

        assert_eq!(resolution.category, FunctionCategory::DataAnalytics);
        assert_eq!(resolution.source, Source::Inferred);
        assert_eq!(
            normalizer.normalize(Some("Galactic Affairs"), "Barista"),
            FunctionCategory::Unknown
        );
    }

    #[test]
    fn test_custom_asset() {
        let normalizer = CategoryNormalizer::from_toml_str(
            r#"
            [labels]
            "Moonshots" = "Strategy & Business Development"
            "#,
        )
        .unwrap();

        assert_eq!(normalizer.len(), 1);
        assert_eq!(
            normalizer.normalize(Some("Moonshots"), ""),
            FunctionCategory::StrategyBizDev
        );
    }

    #[test]
    fn test_asset_with_unknown_target_is_rejected() {
        let err = CategoryNormalizer::from_toml_str(
            r#"
            [labels]
            "Moonshots" = "Space Program"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::UnknownCategory { ref target, .. } if target == "Space Program"
        ));
    }

    #[test]
    fn test_malformed_asset_is_rejected() {
        let err = CategoryNormalizer::from_toml_str("labels = 3").unwrap_err();
        assert!(matches!(err, CoreError::MappingParse(_)));
    }
}
