// LLM prompt constants for course recommendations.

pub const COURSES_SYSTEM: &str = "You are a career development expert who recommends learning resources. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Placeholders: `{company}`, `{role}`, `{missing_skills}`.
pub const COURSES_PROMPT_TEMPLATE: &str = r#"A candidate is applying for the {role} position at {company}.
Their CV is missing these skills: {missing_skills}

Recommend EXACTLY 5 learning resources, 3 free and 2 paid, that teach these skills.
Prefer free resources: YouTube playlists, freeCodeCamp, GitHub learning repositories,
official documentation, community channels.

Return a JSON array where each element has this EXACT schema:
{
  "title": "specific resource name",
  "platform": "YouTube | freeCodeCamp | GitHub | Udemy | Coursera | ...",
  "url": "direct link",
  "skillGap": "the missing skill it addresses",
  "duration": "estimated time, e.g. 12 hours",
  "difficulty": "Beginner | Intermediate | Advanced",
  "isPaid": false,
  "price": "Free, or a realistic price",
  "rating": 4.5,
  "description": "1-2 sentences",
  "channelName": "channel name for YouTube or community channels, else null"
}

difficulty MUST be exactly one of "Beginner", "Intermediate" or "Advanced"."#;
