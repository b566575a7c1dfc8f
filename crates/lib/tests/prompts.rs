//! # Prompt Store Tests
//!
//! Covers loading the template files from disk, the fatal error on a
//! missing file, and the fixed assembly performed by the handler.

use sahayak::constants::{BASE_PROMPT_FILE, SAFETY_RULES_FILE};
use sahayak::handler::build_prompt;
use sahayak::prompts::domains::instruction_for;
use sahayak::{ConfigError, Domain, PromptStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_reads_both_templates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(BASE_PROMPT_FILE), "Base prompt text.\n").unwrap();
    fs::write(dir.path().join(SAFETY_RULES_FILE), "Safety text.\n").unwrap();

    let store = PromptStore::load(dir.path()).unwrap();
    assert_eq!(store.base_prompt(), "Base prompt text.");
    assert_eq!(store.safety_rules(), "Safety text.");
}

#[test]
fn test_load_fails_on_missing_safety_rules() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(BASE_PROMPT_FILE), "Base prompt text.\n").unwrap();

    let err = PromptStore::load(dir.path()).unwrap_err();
    match err {
        ConfigError::TemplateRead { path, .. } => {
            assert!(path.ends_with(SAFETY_RULES_FILE), "unexpected path: {path}")
        }
        other => panic!("expected TemplateRead, got {other:?}"),
    }
}

#[test]
fn test_load_fails_on_missing_directory() {
    let err = PromptStore::load("no/such/dir").unwrap_err();
    assert!(matches!(err, ConfigError::TemplateRead { .. }));
}

#[test]
fn test_builtin_store_is_populated() {
    let store = PromptStore::builtin();
    assert!(!store.base_prompt().is_empty());
    assert!(!store.safety_rules().is_empty());
}

#[test]
fn test_build_prompt_carries_all_sections() {
    let store = PromptStore::builtin();
    let query = "How do I apply for PM Awas Yojana?";
    let prompt = build_prompt(&store, Domain::GovernmentScheme, query);

    assert!(prompt.contains(store.safety_rules()));
    assert!(prompt.contains(store.base_prompt()));
    assert!(prompt.contains(instruction_for(Domain::GovernmentScheme)));
    assert!(prompt.contains(query));
}

/// Every domain tag has a distinct instruction fragment.
#[test]
fn test_each_domain_has_its_own_instruction() {
    let domains = [
        Domain::GovernmentScheme,
        Domain::Health,
        Domain::Education,
        Domain::Environment,
        Domain::Other,
    ];
    for (i, a) in domains.iter().enumerate() {
        for b in &domains[i + 1..] {
            assert_ne!(instruction_for(*a), instruction_for(*b));
        }
    }
}
