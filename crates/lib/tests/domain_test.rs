//! # Domain Classifier Tests
//!
//! Verifies the classification contract: keyword hits route to their
//! domain, priority order breaks ties, and everything else falls back to
//! `other`. The classifier is total, so there are no error cases to cover.

use sahayak::{classify, Domain};

#[test]
fn test_government_scheme_keywords() {
    assert_eq!(
        classify("How do I apply for PM Awas Yojana?"),
        Domain::GovernmentScheme
    );
    assert_eq!(
        classify("Am I eligible for the widow pension scheme?"),
        Domain::GovernmentScheme
    );
    assert_eq!(
        classify("My ration card application was rejected"),
        Domain::GovernmentScheme
    );
}

#[test]
fn test_health_keywords() {
    assert_eq!(
        classify("What are the symptoms of heat stroke?"),
        Domain::Health
    );
    assert_eq!(classify("Where is the nearest hospital?"), Domain::Health);
    assert_eq!(
        classify("When should my child be vaccinated?"),
        Domain::Health
    );
}

#[test]
fn test_education_keywords() {
    assert_eq!(
        classify("How to get admission in a government college?"),
        Domain::Education
    );
    assert_eq!(classify("My daughter needs a scholarship"), Domain::Education);
}

#[test]
fn test_environment_keywords() {
    assert_eq!(
        classify("How do I start composting kitchen waste?"),
        Domain::Environment
    );
    assert_eq!(
        classify("Why is the air quality so bad in winter?"),
        Domain::Environment
    );
}

/// A query hitting both a scheme keyword and a health keyword must go to
/// the higher-priority domain.
#[test]
fn test_priority_order_breaks_ties() {
    assert_eq!(
        classify("Which scheme covers hospital costs?"),
        Domain::GovernmentScheme
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(classify("SYMPTOMS OF DENGUE FEVER"), Domain::Health);
    assert_eq!(classify("Pm AwAs YoJaNa"), Domain::GovernmentScheme);
}

#[test]
fn test_unmatched_query_falls_back_to_other() {
    assert_eq!(classify("What time is the cricket match?"), Domain::Other);
}

#[test]
fn test_empty_query_falls_back_to_other() {
    assert_eq!(classify(""), Domain::Other);
}
