//! Volunteer-opportunity matching.
//!
//! Compatibility is a weighted sum over six dimensions (skills, location,
//! interests, urgency, experience, availability); weights sum to 1.0 so
//! scores land in `[0, 1]`. Matching is deterministic and has no I/O.

use serde::{Deserialize, Serialize};

/// The closed set of impact areas an opportunity can serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactArea {
    Education,
    Healthcare,
    Environment,
    Poverty,
    Equality,
    DisasterRelief,
}

/// How urgently an opportunity needs people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Numeric level, 1 (low) through 4 (critical).
    pub fn level(&self) -> u8 {
        match self {
            Urgency::Low => 1,
            Urgency::Medium => 2,
            Urgency::High => 3,
            Urgency::Critical => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    fn score(&self) -> f32 {
        match self {
            ExperienceLevel::Beginner => 0.3,
            ExperienceLevel::Intermediate => 0.7,
            ExperienceLevel::Expert => 1.0,
        }
    }
}

/// When a volunteer can be called on.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub weekdays: bool,
    #[serde(default)]
    pub weekends: bool,
    #[serde(default)]
    pub emergency: bool,
}

impl Availability {
    fn any(&self) -> bool {
        self.weekdays || self.weekends || self.emergency
    }
}

/// A registered volunteer profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub location: String,
    pub interests: Vec<ImpactArea>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub availability: Availability,
    pub max_hours_per_week: u32,
}

/// A community opportunity looking for volunteers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub location: String,
    pub impact_area: ImpactArea,
    pub urgency: Urgency,
    pub volunteers_needed: usize,
}

/// The outcome of scoring one volunteer against one opportunity.
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    pub volunteer_id: String,
    pub opportunity_id: String,
    pub score: f32,
    pub reasons: Vec<String>,
    pub confidence: f32,
}

// Dimension weights; they sum to 1.0.
const SKILLS_WEIGHT: f32 = 0.4;
const LOCATION_WEIGHT: f32 = 0.2;
const INTERESTS_WEIGHT: f32 = 0.15;
const URGENCY_WEIGHT: f32 = 0.1;
const EXPERIENCE_WEIGHT: f32 = 0.1;
const AVAILABILITY_WEIGHT: f32 = 0.05;

/// Minimum score for an opportunity to be recommended to a volunteer.
pub const MIN_MATCH_SCORE: f32 = 0.3;

/// Minimum score for a volunteer to be proposed for an opportunity. Higher
/// than [`MIN_MATCH_SCORE`]: proposing a person is a stronger claim.
pub const VOLUNTEER_SEARCH_MIN_SCORE: f32 = 0.4;

/// Maximum number of recommendations returned per volunteer.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Scores one volunteer against one opportunity.
pub fn compatibility(volunteer: &Volunteer, opportunity: &Opportunity) -> MatchResult {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let skill_score = skill_match(&volunteer.skills, &opportunity.required_skills);
    score += skill_score * SKILLS_WEIGHT;
    if skill_score > 0.6 {
        reasons.push("Strong skill alignment".to_string());
    }

    let location_score = if volunteer.location.eq_ignore_ascii_case(&opportunity.location) {
        1.0
    } else {
        0.3
    };
    score += location_score * LOCATION_WEIGHT;
    if location_score == 1.0 {
        reasons.push("Perfect location match".to_string());
    }

    let interest_score = if volunteer.interests.contains(&opportunity.impact_area) {
        1.0
    } else {
        0.2
    };
    score += interest_score * INTERESTS_WEIGHT;
    if interest_score == 1.0 {
        reasons.push("Matches interests".to_string());
    }

    let urgency_score = f32::from(opportunity.urgency.level()) / f32::from(Urgency::Critical.level());
    score += urgency_score * URGENCY_WEIGHT;
    if opportunity.urgency >= Urgency::High {
        reasons.push("High urgency need".to_string());
    }

    score += volunteer.experience_level.score() * EXPERIENCE_WEIGHT;

    let availability_score = if volunteer.availability.any() { 0.8 } else { 0.2 };
    score += availability_score * AVAILABILITY_WEIGHT;

    MatchResult {
        volunteer_id: volunteer.id.clone(),
        opportunity_id: opportunity.id.clone(),
        score,
        reasons,
        confidence: (score * 1.2).min(1.0),
    }
}

/// Finds the best opportunities for a volunteer.
///
/// Filters by [`MIN_MATCH_SCORE`], sorts best-first, and returns at most
/// [`MAX_RECOMMENDATIONS`] results.
pub fn find_matches(volunteer: &Volunteer, opportunities: &[Opportunity]) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = opportunities
        .iter()
        .map(|opportunity| compatibility(volunteer, opportunity))
        .filter(|m| m.score >= MIN_MATCH_SCORE)
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

/// Finds suitable volunteers for an opportunity.
///
/// Filters by [`VOLUNTEER_SEARCH_MIN_SCORE`], sorts best-first, and caps
/// the list at the opportunity's headcount.
pub fn find_volunteers(opportunity: &Opportunity, volunteers: &[Volunteer]) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = volunteers
        .iter()
        .map(|volunteer| compatibility(volunteer, opportunity))
        .filter(|m| m.score >= VOLUNTEER_SEARCH_MIN_SCORE)
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(opportunity.volunteers_needed);
    matches
}

/// Fraction of the required skills the volunteer covers.
///
/// An opportunity with no required skills scores a neutral 0.5. Skill names
/// compare case-insensitively.
fn skill_match(volunteer_skills: &[String], required_skills: &[String]) -> f32 {
    if required_skills.is_empty() {
        return 0.5;
    }
    let matched = required_skills
        .iter()
        .filter(|required| {
            volunteer_skills
                .iter()
                .any(|skill| skill.eq_ignore_ascii_case(required))
        })
        .count();
    matched as f32 / required_skills.len() as f32
}
