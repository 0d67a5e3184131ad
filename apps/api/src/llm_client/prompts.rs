// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Appended to system prompts whose answer is parsed as a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Return ONLY a JSON array. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Joins list items for prompt display, substituting `fallback` when empty.
pub fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
