//! Domain classification for incoming queries.
//!
//! Every query is routed to exactly one [`Domain`] before a prompt is
//! assembled. Classification is keyword-based: case-insensitive substring
//! matching against per-domain lists, first matching domain in a fixed
//! priority order wins, and anything unmatched falls back to
//! [`Domain::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The closed set of topic categories a query can be routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    GovernmentScheme,
    Health,
    Education,
    Environment,
    Other,
}

impl Domain {
    /// The wire/display form of the tag, e.g. `government-scheme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::GovernmentScheme => "government-scheme",
            Domain::Health => "health",
            Domain::Education => "education",
            Domain::Environment => "environment",
            Domain::Other => "other",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const GOVERNMENT_SCHEME_KEYWORDS: &[&str] = &[
    "scheme",
    "yojana",
    "pm awas",
    "awas",
    "pm kisan",
    "ayushman bharat",
    "pension",
    "ration card",
    "aadhaar",
    "subsidy",
    "mgnrega",
];

const HEALTH_KEYWORDS: &[&str] = &[
    "health",
    "symptom",
    "disease",
    "doctor",
    "hospital",
    "medicine",
    "vaccin",
    "fever",
    "heat stroke",
    "nutrition",
    "first aid",
    "pregnan",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "school",
    "education",
    "exam",
    "scholarship",
    "college",
    "student",
    "admission",
    "syllabus",
    "teacher",
    "tuition",
];

const ENVIRONMENT_KEYWORDS: &[&str] = &[
    "environment",
    "pollution",
    "waste",
    "recycl",
    "climate",
    "compost",
    "plastic",
    "tree plantation",
    "water conservation",
    "air quality",
];

/// Priority order for matching; earlier entries win ties.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (Domain::GovernmentScheme, GOVERNMENT_SCHEME_KEYWORDS),
    (Domain::Health, HEALTH_KEYWORDS),
    (Domain::Education, EDUCATION_KEYWORDS),
    (Domain::Environment, ENVIRONMENT_KEYWORDS),
];

/// Classifies a raw query into exactly one [`Domain`].
///
/// Total over all strings: the empty string and anything without a keyword
/// hit map to [`Domain::Other`]. No side effects beyond a debug trace on
/// fallback.
pub fn classify(query: &str) -> Domain {
    let normalized = query.to_lowercase();
    for (domain, keywords) in DOMAIN_KEYWORDS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return *domain;
        }
    }
    debug!("query matched no domain keywords, falling back to `other`");
    Domain::Other
}
