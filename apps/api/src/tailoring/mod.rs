// Tailoring: section targeting, the rewrite collaborator and keyword gaps.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod keywords;
pub mod prompts;
pub mod section;
pub mod transform;

pub use section::Section;
pub use transform::{LlmTailor, TailorError, TailorRequest, TextTransformer};
