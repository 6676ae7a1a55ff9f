// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the instructions every rewrite prompt appends.

/// Keeps the model from wrapping or annotating the rewritten text.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    Respond with the revised resume text only. \
    Do NOT add commentary, explanations, headings of your own or markdown code fences.";

/// Keeps rewrites anchored to what the candidate actually did.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Keep the candidate's real experience intact. \
    Do NOT invent employers, titles, dates, degrees or metrics that the resume does not support.";
