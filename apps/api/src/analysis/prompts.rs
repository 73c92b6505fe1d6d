// LLM prompt constants for CV analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for role-targeted CV analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an expert career consultant and resume writer. \
    You analyze a CV against a specific job and produce an optimized version of it. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Analysis prompt template. Placeholders: `{cv_text}`, `{company}`, `{role}`,
/// `{skills}`, `{experience_years}`, `{job_description}`, `{link_instruction}`.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this CV for the job below and create an optimized version.

CV:
{cv_text}

Job: {company} - {role}
Required skills: {skills}
Required experience: {experience_years} years
Job description: {job_description}

{link_instruction}

Return a JSON object with this EXACT schema:
{
  "analysis": {
    "strengths": ["3-4 key strengths of the CV for this job"],
    "weaknesses": ["3-4 key weaknesses of the CV for this job"],
    "skills_match": ["required skills the CV demonstrates"],
    "missing_skills": ["required skills the CV does not demonstrate"],
    "overall_score": 0
  },
  "improved_cv": "the full optimized CV text, with all hyperlinks preserved",
  "changes_made": ["each change you made"],
  "recommendations": ["concrete next steps for the candidate"]
}

overall_score is an integer from 0 to 100."#;
