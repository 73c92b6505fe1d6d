// LLM prompt constants for cover letters.

/// System prompt for writing and rewriting cover letters.
pub const LETTER_SYSTEM: &str = "You are an expert career counselor and professional cover letter writer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Placeholders: `{name}`, `{email}`, `{phone}`, `{skills}`, `{experience}`,
/// `{company}`, `{role}`, `{job_requirements}`, `{style_guide}`.
pub const LETTER_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter for this candidate.

Candidate:
- Name: {name}
- Email: {email}
- Phone: {phone}
- Key skills: {skills}
- Experience: {experience}

Target position:
- Company: {company}
- Role: {role}
{job_requirements}

Writing style:
{style_guide}

Structure:
1. Opening paragraph (2-3 sentences): enthusiasm for the role and why the candidate fits.
2. Body paragraph (3-4 sentences): relevant skills and experience with concrete achievements.
3. Body paragraph (3-4 sentences): why this company, and how the candidate will contribute.
4. Closing paragraph (2-3 sentences): restate interest, ask for an interview, thank the reader.

Keep it between 250 and 350 words, plain text, no markdown. Start with the date and the
recipient block (Hiring Manager, company, city), then "Dear Hiring Manager,", the body
paragraphs separated by blank lines, and end with "Sincerely," followed by the name,
email and phone.

Return a JSON object with this EXACT schema:
{
  "cover_letter": "the complete letter text"
}"#;

/// Placeholders: `{original}`, `{company}`, `{role}`.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Here is a cover letter for the {role} position at {company}.
Write a DIFFERENT version of it: keep the same qualifications, experience and length,
but change the opening hook, vary the examples and sentence structure, and keep the
professional formatting.

Original letter:
{original}

Return a JSON object with this EXACT schema:
{
  "cover_letter": "the complete new letter text"
}"#;
