//! # Domain Instruction Fragments
//!
//! One short instruction per [`Domain`], spliced between the base prompt
//! and the user's question when the final prompt is assembled.

use crate::domain::Domain;

pub const GOVERNMENT_SCHEME_INSTRUCTION: &str = "The question is about a government scheme or benefit. Name the scheme, state who is eligible, list the documents needed, and explain how to apply both online and at a local office. Mention the official portal or helpline where one exists.";

pub const HEALTH_INSTRUCTION: &str = "The question is about health. Give general wellness information only: describe warning signs that call for a doctor, and include simple home measures where they are safe. Never diagnose a condition or recommend a specific medicine.";

pub const EDUCATION_INSTRUCTION: &str = "The question is about education. Cover admissions, scholarships, examinations, or study resources as relevant, and point to the official board, university, or portal that owns the process.";

pub const ENVIRONMENT_INSTRUCTION: &str = "The question is about the environment. Give practical guidance on waste handling, water, trees, or pollution, and mention the local civic body responsible where that helps.";

pub const OTHER_INSTRUCTION: &str = "Answer the question helpfully and honestly. If it falls outside everyday citizen assistance, say what you can and cannot help with.";

/// Returns the instruction fragment for a domain tag.
pub fn instruction_for(domain: Domain) -> &'static str {
    match domain {
        Domain::GovernmentScheme => GOVERNMENT_SCHEME_INSTRUCTION,
        Domain::Health => HEALTH_INSTRUCTION,
        Domain::Education => EDUCATION_INSTRUCTION,
        Domain::Environment => ENVIRONMENT_INSTRUCTION,
        Domain::Other => OTHER_INSTRUCTION,
    }
}
