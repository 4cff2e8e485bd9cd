// AI writing features: cover letters, resume building and optimization, and
// resume/job match scoring. All LLM calls go through llm_client — no direct
// Anthropic calls here.

pub mod handlers;
pub mod prompts;
pub mod render;
