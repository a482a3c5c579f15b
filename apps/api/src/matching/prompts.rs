// All LLM prompt constants for the matching module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};

/// Match analysis prompt template.
/// Replace: {job_role}, {skills}, {experience_bonus}, {json_only_instruction}
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are a senior technical recruiter and career coach.
Analyze the match between the candidate and the job role.
Consider synonyms, related technologies, and industry standards.

Job Role: {job_role}
User Skills: {skills}
Experience Bonus (points): {experience_bonus}

Return a JSON object with this EXACT schema:
{
  "inferred_core_skills": ["skills typically required for this role"],
  "inferred_preferred_skills": ["nice-to-have skills for this role"],
  "matched_core_skills": ["core skills covered by the user's list"],
  "matched_preferred_skills": ["preferred skills covered by the user's list"],
  "missing_core_skills": ["core skills the user lacks"],
  "missing_preferred_skills": ["preferred skills the user lacks"],
  "core_match": 0,
  "preferred_match": 0,
  "overall_before_experience": 0,
  "recommendations": ["actionable, practical tips"]
}

Field rules:
- core_match: percentage 0-100 of core skills the user covers
- preferred_match: percentage 0-100 of preferred skills the user covers
- overall_before_experience: weighted average score 0-100, WITHOUT the experience bonus
- Ensure percentages are realistic and based on skill alignment.

{json_only_instruction}"#;

/// Renders the match prompt. Pure templating: same input, same prompt.
pub fn build_match_prompt(job_role: &str, skills: &[String], experience_bonus: u32) -> String {
    let skills = skills.join(", ");
    let bonus = experience_bonus.to_string();
    fill_template(
        MATCH_PROMPT_TEMPLATE,
        &[
            ("{job_role}", job_role),
            ("{skills}", &skills),
            ("{experience_bonus}", &bonus),
            ("{json_only_instruction}", JSON_ONLY_INSTRUCTION),
        ],
    )
}
