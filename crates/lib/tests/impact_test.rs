//! # Impact Tracking Tests

use sahayak::impact::{impact_score, ImpactTracker, Outcomes};
use sahayak::matching::{
    Availability, ExperienceLevel, ImpactArea, Opportunity, Urgency, Volunteer,
};
use sahayak::validation::{validate_opportunity, validate_volunteer};

fn volunteer(id: &str) -> Volunteer {
    Volunteer {
        id: id.to_string(),
        name: format!("Volunteer {id}"),
        email: format!("{id}@example.org"),
        skills: vec!["teaching".to_string()],
        location: "Pune".to_string(),
        interests: vec![ImpactArea::Education],
        experience_level: ExperienceLevel::Expert,
        availability: Availability {
            weekends: true,
            ..Default::default()
        },
        max_hours_per_week: 10,
    }
}

fn opportunity(area: ImpactArea, urgency: Urgency) -> Opportunity {
    Opportunity {
        id: "o1".to_string(),
        title: "After School Tutoring".to_string(),
        organization: "City Youth Program".to_string(),
        description: "Tutoring for students from low-income families".to_string(),
        required_skills: vec!["teaching".to_string()],
        location: "Pune".to_string(),
        impact_area: area,
        urgency,
        volunteers_needed: 3,
    }
}

fn outcomes(hours: f32, people: u32) -> Outcomes {
    Outcomes {
        hours_contributed: hours,
        people_impacted: people,
        quality_rating: 0.5,
        sustainability_score: 0.5,
        feedback: None,
    }
}

#[test]
fn test_impact_score_known_inputs() {
    // base = min(2 * 0.1, 0.4) + 4 * 0.5 * 0.05 = 0.3
    // scaled = 0.3 * 1.3 (education) * 1.0 (medium) * 1.5 = 0.585
    let o = opportunity(ImpactArea::Education, Urgency::Medium);
    let score = impact_score(&o, &outcomes(4.0, 2));
    assert!((score - 0.585).abs() < 1e-6, "got {score}");
}

#[test]
fn test_impact_score_caps_at_one() {
    let o = opportunity(ImpactArea::DisasterRelief, Urgency::Critical);
    let score = impact_score(&o, &outcomes(100.0, 1000));
    assert_eq!(score, 1.0);
}

#[test]
fn test_low_urgency_discounts_impact() {
    let low = impact_score(
        &opportunity(ImpactArea::Education, Urgency::Low),
        &outcomes(4.0, 2),
    );
    let high = impact_score(
        &opportunity(ImpactArea::Education, Urgency::High),
        &outcomes(4.0, 2),
    );
    assert!(low < high);
}

#[test]
fn test_report_aggregates_recent_completions() {
    let mut tracker = ImpactTracker::new();
    let o = opportunity(ImpactArea::Education, Urgency::Medium);

    tracker.record_completion(&volunteer("v1"), &o, outcomes(4.0, 10));
    tracker.record_completion(&volunteer("v1"), &o, outcomes(2.0, 5));
    tracker.record_completion(&volunteer("v2"), &o, outcomes(6.0, 20));

    let report = tracker.generate_report(30);
    assert_eq!(report.total_completions, 3);
    assert_eq!(report.unique_volunteers, 2);
    assert!((report.total_volunteer_hours - 12.0).abs() < 1e-6);
    assert_eq!(report.total_people_impacted, 35);
    assert!(report.total_impact_score > 0.0);
    assert!(report.average_impact_per_hour > 0.0);
}

#[test]
fn test_report_with_no_completions_is_zeroed() {
    let tracker = ImpactTracker::new();
    let report = tracker.generate_report(30);
    assert_eq!(report.total_completions, 0);
    assert_eq!(report.total_impact_score, 0.0);
    assert_eq!(report.unique_volunteers, 0);
}

// --- Validation ---

#[test]
fn test_valid_payloads_pass() {
    assert!(validate_volunteer(&volunteer("v1")).is_empty());
    assert!(validate_opportunity(&opportunity(ImpactArea::Education, Urgency::Medium)).is_empty());
}

#[test]
fn test_volunteer_rejections_accumulate() {
    let mut v = volunteer("v1");
    v.name = "A".to_string();
    v.email = "not-an-email".to_string();
    v.skills.clear();
    v.interests.clear();
    v.max_hours_per_week = 200;

    let errors = validate_volunteer(&v);
    assert!(errors.contains(&"Name must be at least 2 characters long".to_string()));
    assert!(errors.contains(&"Valid email is required".to_string()));
    assert!(errors.contains(&"Skills must be a non-empty list".to_string()));
    assert!(errors.contains(&"At least one interest area is required".to_string()));
    assert!(errors.contains(&"Maximum hours per week cannot exceed 168".to_string()));
    assert_eq!(errors.len(), 5);
}

#[test]
fn test_opportunity_rejections() {
    let mut o = opportunity(ImpactArea::Education, Urgency::Medium);
    o.title = "Shed".to_string();
    o.required_skills.clear();
    o.volunteers_needed = 0;

    let errors = validate_opportunity(&o);
    assert!(errors.contains(&"Title must be at least 5 characters long".to_string()));
    assert!(errors.contains(&"Required skills must be a non-empty list".to_string()));
    assert!(errors.contains(&"At least 1 volunteer needed".to_string()));
}
