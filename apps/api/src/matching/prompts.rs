// All LLM prompt constants for the Matching module.
// Templates use `{placeholder}` markers filled by `fill_template`.

/// System prompt for the match summary.
pub const SUMMARY_SYSTEM: &str = "You are an expert career counselor and internship matching specialist. \
    Analyze the candidate profile against the role description and provide a comprehensive match assessment. \
    Be honest, constructive, and specific in your analysis.";

/// Replace: {name}, {education}, {skills}, {interests}, {experience}, {projects},
///          {title}, {company}, {location}, {duration}, {description},
///          {requirements}, {responsibilities}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Candidate Profile:
- Name: {name}
- Education: {education}
- Skills: {skills}
- Interests: {interests}
- Experience: {experience}
- Projects: {projects}

Role:
- Title: {title}
- Company: {company}
- Location: {location}
- Duration: {duration}
- Description: {description}
- Requirements: {requirements}
- Responsibilities: {responsibilities}

Provide a 3-4 sentence match summary that:
1. Highlights the overall fit
2. Mentions key strengths
3. Notes any concerns
4. Gives an honest assessment"#;

/// System prompt for skill-gap identification. The answer is parsed as a JSON array.
pub const SKILL_GAPS_SYSTEM: &str = "You are a technical skills advisor. Identify missing or weak skills \
    and provide specific, actionable learning resources.";

/// Replace: {skills}, {requirements}, {preferred}
pub const SKILL_GAPS_PROMPT_TEMPLATE: &str = r#"Candidate Skills: {skills}
Required Skills: {requirements}
Preferred Skills: {preferred}

Identify the top 3-5 skill gaps and for each provide:
1. The skill name
2. Importance level (High/Medium/Low)
3. 2-3 specific learning resources (courses, books, platforms)

Return ONLY a JSON array in this format:
[
  {
    "skill": "Python",
    "importance": "High",
    "learning_resources": ["Coursera Python for Everybody", "Real Python tutorials", "LeetCode practice"]
  }
]"#;

/// System prompt for strengths. The answer is parsed as a JSON array of strings.
pub const STRENGTHS_SYSTEM: &str =
    "Identify the top 3-5 strengths this candidate has for the role.";

/// Replace: {skills}, {projects}, {experience}, {requirements}, {responsibilities}
pub const STRENGTHS_PROMPT_TEMPLATE: &str = r#"Candidate Skills: {skills}
Candidate Projects: {projects}
Candidate Experience: {experience}

Role Requirements: {requirements}
Role Responsibilities: {responsibilities}

Return ONLY a JSON array of 3-5 key strengths, like:
["Strong Python programming skills", "Relevant project experience in web development"]"#;

/// System prompt for recommendations.
pub const RECOMMENDATIONS_SYSTEM: &str = "You are a career advisor providing actionable recommendations \
    for internship and job applications. Be specific, encouraging, and practical.";

/// Replace: {name}, {title}, {company}, {gaps}, {skills}, {projects}
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Candidate: {name}
Role: {title} at {company}

Identified Skill Gaps:
{gaps}

Candidate Strengths:
- Skills: {skills}
- Projects: {projects}

Provide 4-5 specific, actionable recommendations for this candidate to:
1. Improve their application
2. Address skill gaps
3. Highlight their strengths
4. Prepare for the interview

Keep it concise and practical."#;

/// System prompt for the tailored resume.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer specializing in ATS-optimized resumes. \
    Create a professional resume that highlights relevant skills and experiences for the specific role. \
    Use clear formatting with sections: Summary, Education, Skills, Experience, Projects.";

/// Replace: {name}, {email}, {education}, {skills}, {experience}, {projects},
///          {certifications}, {title}, {company}, {requirements}, {responsibilities}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create an ATS-optimized resume for:

Candidate Information:
- Name: {name}
- Email: {email}
- Education: {education}
- Skills: {skills}
- Experience: {experience}
- Projects: {projects}
- Certifications: {certifications}

Target Role:
- Title: {title}
- Company: {company}
- Key Requirements: {requirements}
- Responsibilities: {responsibilities}

Create a resume that:
1. Uses keywords from the job description
2. Highlights relevant skills prominently
3. Tailors the summary to this specific role
4. Emphasizes matching experiences and projects
5. Is ATS-friendly (clear sections, no tables/graphics)

Format as plain text with clear section headers."#;

/// Fills `{key}` markers in `template` in a single pass. Inserted values are
/// never re-scanned, so user text containing `{title}` stays literal.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
