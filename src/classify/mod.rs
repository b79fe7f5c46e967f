use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of subject-area tags for opportunities and student interests.
///
/// The set is fixed: labels are persisted as plain text by callers, so adding
/// or renaming a variant is a data-migration event, not a code tweak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DomainLabel {
    #[serde(rename = "AI")]
    Ai,
    Law,
    Biomedical,
    Engineering,
    General,
}

impl DomainLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainLabel::Ai => "AI",
            DomainLabel::Law => "Law",
            DomainLabel::Biomedical => "Biomedical",
            DomainLabel::Engineering => "Engineering",
            DomainLabel::General => "General",
        }
    }
}

impl std::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown domain label: {0}")]
pub struct ParseDomainLabelError(pub String);

impl std::str::FromStr for DomainLabel {
    type Err = ParseDomainLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AI" => Ok(DomainLabel::Ai),
            "Law" => Ok(DomainLabel::Law),
            "Biomedical" => Ok(DomainLabel::Biomedical),
            "Engineering" => Ok(DomainLabel::Engineering),
            "General" => Ok(DomainLabel::General),
            other => Err(ParseDomainLabelError(other.to_string())),
        }
    }
}

/// Keyword table, checked top to bottom. Order is load-bearing: a description
/// mentioning both "ai" and "legal" classifies as AI because AI is checked
/// first. Matching is plain substring, so "ai" also hits inside longer words.
const KEYWORD_TABLE: &[(DomainLabel, &[&str])] = &[
    (DomainLabel::Ai, &["ai", "machine learning", "neural", "deep learning"]),
    (DomainLabel::Law, &["law", "policy", "legal"]),
    (DomainLabel::Biomedical, &["biomedical", "health", "clinical"]),
    (DomainLabel::Engineering, &["robotics", "engineering", "hardware"]),
];

pub trait Classifier {
    fn classify(&self, description: &str) -> DomainLabel;
}

/// v0: Priority-ordered keyword classifier.
/// First category with any case-insensitive substring hit wins; no hit means
/// `General`. Total and deterministic.
#[derive(Default)]
pub struct KeywordClassifier;

impl Classifier for KeywordClassifier {
    fn classify(&self, description: &str) -> DomainLabel {
        let desc_lower = description.to_lowercase();

        for (label, keywords) in KEYWORD_TABLE {
            if keywords.iter().any(|kw| desc_lower.contains(kw)) {
                return *label;
            }
        }

        DomainLabel::General
    }
}
