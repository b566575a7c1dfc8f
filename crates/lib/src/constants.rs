//! # Shared Constants
//!
//! Centralized location for values that are fixed across the whole
//! workspace, to avoid magic strings drifting between the crates.

/// The fixed Gemini model every query is sent to.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default endpoint for [`GEMINI_MODEL`]. Overridable via `GEMINI_API_URL`.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Sampling temperature sent with every upstream call.
pub const GENERATION_TEMPERATURE: f32 = 0.2;

/// Default directory holding the prompt template files.
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// File name of the base prompt template inside the prompts directory.
pub const BASE_PROMPT_FILE: &str = "base_prompt.txt";

/// File name of the safety rules template inside the prompts directory.
pub const SAFETY_RULES_FILE: &str = "safety_rules.txt";

/// Default timeout for the upstream call, in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
