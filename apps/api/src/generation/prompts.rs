// All LLM prompt constants for the generation module.
// Replace the `{placeholder}` markers before sending.

/// Cover letter prompt. Placeholders: {job_title}, {company}, {location}.
pub const LETTER_PROMPT_TEMPLATE: &str = "Write a short professional job application letter \
    for a {job_title} position at {company} in {location}. \
    Make it sound confident and polished.";

/// Resume optimization prompt. Placeholders: {job_title}, {company},
/// {location}, {resume_text}.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "Optimize this resume for a job as '{job_title}' \
    at '{company}' in '{location}'. \
    Improve clarity, add strong bullet points, and include relevant keywords.\n\n\
    Resume:\n{resume_text}";

/// Resume builder prompt. Placeholders: {name}, {email}, {phone},
/// {job_goal}, {experience}, {skills}.
pub const RESUME_BUILD_PROMPT_TEMPLATE: &str = "\
Generate a full professional resume based on this information.
Format cleanly with bullet points, resume headings, and clear layout.

Name: {name}
Email: {email}
Phone: {phone}

Career Objective: {job_goal}

Experience:
{experience}

Skills:
{skills}

Do NOT use markdown. Output in formatted plain text.";

/// System prompt for match scoring — enforces JSON-only output.
pub const MATCH_SCORE_SYSTEM: &str = "You are an expert recruiter comparing a resume \
    against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Match scoring prompt. Placeholders: {job_title}, {company}, {location},
/// {job_description}, {resume_text}.
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = r#"Compare this resume to the job description and give a match score.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 85,
  "explanation": "one short paragraph explaining the score"
}

"score" is an integer from 0 to 100.

Job Title: {job_title}
Company: {company}
Location: {location}

Job Description:
{job_description}

Resume:
{resume_text}"#;
