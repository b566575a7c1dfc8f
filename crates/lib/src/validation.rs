//! Field-level validation for coordination payloads.
//!
//! Validators collect every problem instead of stopping at the first, so a
//! caller can fix a whole payload in one round trip.

use crate::matching::{Opportunity, Volunteer};
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
    })
}

/// Validates a volunteer registration. Returns one message per problem;
/// an empty list means the payload is acceptable.
pub fn validate_volunteer(volunteer: &Volunteer) -> Vec<String> {
    let mut errors = Vec::new();

    if volunteer.name.trim().len() < 2 {
        errors.push("Name must be at least 2 characters long".to_string());
    }
    if !email_re().is_match(&volunteer.email) {
        errors.push("Valid email is required".to_string());
    }
    if volunteer.skills.is_empty() {
        errors.push("Skills must be a non-empty list".to_string());
    }
    if volunteer.location.trim().is_empty() {
        errors.push("Location is required".to_string());
    }
    if volunteer.interests.is_empty() {
        errors.push("At least one interest area is required".to_string());
    }
    if volunteer.max_hours_per_week > 168 {
        errors.push("Maximum hours per week cannot exceed 168".to_string());
    }

    errors
}

/// Validates an opportunity posting.
pub fn validate_opportunity(opportunity: &Opportunity) -> Vec<String> {
    let mut errors = Vec::new();

    if opportunity.title.trim().len() < 5 {
        errors.push("Title must be at least 5 characters long".to_string());
    }
    if opportunity.organization.trim().is_empty() {
        errors.push("Organization is required".to_string());
    }
    if opportunity.required_skills.is_empty() {
        errors.push("Required skills must be a non-empty list".to_string());
    }
    if opportunity.location.trim().is_empty() {
        errors.push("Location is required".to_string());
    }
    if opportunity.volunteers_needed < 1 {
        errors.push("At least 1 volunteer needed".to_string());
    }

    errors
}

/// Strips `<`, `>`, `{` and `}` from free text and trims it.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitizes every free-text field of a volunteer registration.
pub fn sanitize_volunteer(mut volunteer: Volunteer) -> Volunteer {
    volunteer.name = sanitize(&volunteer.name);
    volunteer.location = sanitize(&volunteer.location);
    volunteer.skills = volunteer.skills.iter().map(|s| sanitize(s)).collect();
    volunteer
}

/// Sanitizes every free-text field of an opportunity posting.
pub fn sanitize_opportunity(mut opportunity: Opportunity) -> Opportunity {
    opportunity.title = sanitize(&opportunity.title);
    opportunity.organization = sanitize(&opportunity.organization);
    opportunity.description = sanitize(&opportunity.description);
    opportunity.location = sanitize(&opportunity.location);
    opportunity.required_skills = opportunity
        .required_skills
        .iter()
        .map(|s| sanitize(s))
        .collect();
    opportunity
}
