//! Prompt assembly for a classified query.

use crate::domain::Domain;
use crate::prompts::domains::instruction_for;
use crate::templates::PromptStore;

/// Assembles the final prompt for a classified query.
///
/// Concatenation order is fixed: safety rules, base prompt, the domain's
/// instruction fragment, then the raw query. Pure function of its inputs
/// and the loaded templates; the full safety-rules text is always carried
/// verbatim.
pub fn build_prompt(store: &PromptStore, domain: Domain, query: &str) -> String {
    format!(
        "{safety}\n\n{base}\n\n{instruction}\n\n# Question\n{query}",
        safety = store.safety_rules(),
        base = store.base_prompt(),
        instruction = instruction_for(domain),
    )
}
