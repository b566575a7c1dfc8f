//! Recording completed engagements and measuring their impact.

use crate::matching::{ImpactArea, Opportunity, Urgency, Volunteer};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reported outcomes of a finished engagement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Outcomes {
    #[serde(default)]
    pub hours_contributed: f32,
    #[serde(default)]
    pub people_impacted: u32,
    #[serde(default = "default_rating")]
    pub quality_rating: f32,
    #[serde(default = "default_rating")]
    pub sustainability_score: f32,
    #[serde(default)]
    pub feedback: Option<String>,
}

fn default_rating() -> f32 {
    0.5
}

/// One completed engagement with its computed impact score.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRecord {
    pub volunteer_id: String,
    pub volunteer_name: String,
    pub opportunity_id: String,
    pub opportunity_title: String,
    pub completed_at: DateTime<Utc>,
    pub hours_contributed: f32,
    pub people_impacted: u32,
    pub impact_score: f32,
    pub feedback: Option<String>,
}

/// Aggregated impact over a reporting window.
#[derive(Clone, Debug, Serialize)]
pub struct ImpactReport {
    pub report_period: String,
    pub total_completions: usize,
    pub total_volunteer_hours: f32,
    pub total_people_impacted: u32,
    pub total_impact_score: f32,
    pub unique_volunteers: usize,
    pub average_impact_per_hour: f32,
}

/// Keeps the history of completed engagements and answers report queries.
#[derive(Debug, Default)]
pub struct ImpactTracker {
    completed: Vec<CompletionRecord>,
}

impl ImpactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed engagement and returns the stored record.
    pub fn record_completion(
        &mut self,
        volunteer: &Volunteer,
        opportunity: &Opportunity,
        outcomes: Outcomes,
    ) -> CompletionRecord {
        let impact_score = impact_score(opportunity, &outcomes);
        let record = CompletionRecord {
            volunteer_id: volunteer.id.clone(),
            volunteer_name: volunteer.name.clone(),
            opportunity_id: opportunity.id.clone(),
            opportunity_title: opportunity.title.clone(),
            completed_at: Utc::now(),
            hours_contributed: outcomes.hours_contributed,
            people_impacted: outcomes.people_impacted,
            impact_score,
            feedback: outcomes.feedback,
        };
        info!(
            "recorded impact {:.2} for {} on '{}'",
            impact_score, volunteer.name, opportunity.title
        );
        self.completed.push(record.clone());
        record
    }

    /// Aggregates the completions of the last `timeframe_days` days.
    pub fn generate_report(&self, timeframe_days: i64) -> ImpactReport {
        let cutoff = Utc::now() - Duration::days(timeframe_days);
        let recent: Vec<&CompletionRecord> = self
            .completed
            .iter()
            .filter(|c| c.completed_at >= cutoff)
            .collect();

        let total_hours: f32 = recent.iter().map(|c| c.hours_contributed).sum();
        let total_impact: f32 = recent.iter().map(|c| c.impact_score).sum();
        let total_people: u32 = recent.iter().map(|c| c.people_impacted).sum();
        let mut volunteer_ids: Vec<&str> =
            recent.iter().map(|c| c.volunteer_id.as_str()).collect();
        volunteer_ids.sort_unstable();
        volunteer_ids.dedup();

        ImpactReport {
            report_period: format!("Last {timeframe_days} days"),
            total_completions: recent.len(),
            total_volunteer_hours: total_hours,
            total_people_impacted: total_people,
            total_impact_score: total_impact,
            unique_volunteers: volunteer_ids.len(),
            average_impact_per_hour: total_impact / total_hours.max(1.0),
        }
    }
}

/// Computes the normalized impact score of a completed engagement.
///
/// People reached contribute up to 0.4, hours weighted by quality up to
/// their raw product, and the total is scaled by the impact area, the
/// urgency of the opportunity, and a sustainability bonus. The result is
/// capped at 1.0.
pub fn impact_score(opportunity: &Opportunity, outcomes: &Outcomes) -> f32 {
    let mut base_score = (outcomes.people_impacted as f32 * 0.1).min(0.4);
    base_score += outcomes.hours_contributed * outcomes.quality_rating * 0.05;

    let scaled = base_score
        * area_multiplier(opportunity.impact_area)
        * urgency_multiplier(opportunity.urgency)
        * (1.0 + outcomes.sustainability_score);
    scaled.min(1.0)
}

/// Impact areas are not equal: disaster relief hours count double.
fn area_multiplier(area: ImpactArea) -> f32 {
    match area {
        ImpactArea::DisasterRelief => 2.0,
        ImpactArea::Healthcare => 1.5,
        ImpactArea::Poverty => 1.4,
        ImpactArea::Education => 1.3,
        ImpactArea::Equality => 1.3,
        ImpactArea::Environment => 1.2,
    }
}

fn urgency_multiplier(urgency: Urgency) -> f32 {
    match urgency {
        Urgency::Low => 0.5,
        Urgency::Medium => 1.0,
        Urgency::High => 1.5,
        Urgency::Critical => 2.0,
    }
}
