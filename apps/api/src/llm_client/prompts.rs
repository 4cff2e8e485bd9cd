// Cross-cutting prompt fragments. Feature-specific prompts live in
// generation::prompts, alongside the handlers that use them.

/// System prompt for all plain-text career writing (letters, resumes).
pub const CAREER_WRITER_SYSTEM: &str = "You are a professional career writer. \
    Write polished, confident application material. \
    Output plain text only — no markdown headings, no code fences.";

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
