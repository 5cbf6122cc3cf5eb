// Prompt constants for the Roadmap module.
// The JSON shape in the template is the wire contract the validator enforces.

/// Roadmap prompt template. Replace `{job_role}` with the RAW (untrimmed,
/// original-case) role text before sending — the cache key is normalized,
/// the prompt is not.
const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a detailed career roadmap for a {job_role}.

Please respond with ONLY valid JSON (no markdown, no code blocks, no explanations) that matches this exact structure:
{
  "title": "Job Role Title",
  "description": "Brief description of the role and what they do",
  "estimatedDuration": "X-Y months",
  "stages": [
    {
      "stage": 1,
      "title": "Stage Title",
      "duration": "X-Y months",
      "description": "Description of what you'll learn in this stage",
      "skills": ["skill1", "skill2", "skill3", "skill4"],
      "tools": ["tool1", "tool2", "tool3"],
      "learningSteps": ["step1", "step2", "step3", "step4"]
    },
    {
      "stage": 2,
      "title": "Stage Title",
      "duration": "X-Y months",
      "description": "Description of what you'll learn in this stage",
      "skills": ["skill1", "skill2", "skill3", "skill4"],
      "tools": ["tool1", "tool2", "tool3"],
      "learningSteps": ["step1", "step2", "step3", "step4"]
    },
    {
      "stage": 3,
      "title": "Stage Title",
      "duration": "X-Y months",
      "description": "Description of what you'll learn in this stage",
      "skills": ["skill1", "skill2", "skill3", "skill4"],
      "tools": ["tool1", "tool2", "tool3"],
      "learningSteps": ["step1", "step2", "step3", "step4"]
    },
    {
      "stage": 4,
      "title": "Stage Title",
      "duration": "X-Y months",
      "description": "Description of what you'll learn in this stage",
      "skills": ["skill1", "skill2", "skill3", "skill4"],
      "tools": ["tool1", "tool2", "tool3"],
      "learningSteps": ["step1", "step2", "step3", "step4"]
    }
  ]
}

Important:
- The roadmap MUST have exactly 4 stages
- Each stage MUST have exactly 4 skills, 3 tools, and 4 learning steps
- Skills should be specific and actionable
- Tools should be actual software/frameworks/technologies people use in this field
- Learning steps should be concrete and sequential
- Estimated duration should be realistic for this career
- Return ONLY the JSON, no other text"#;

/// Builds the completion prompt for a job role.
pub fn build_prompt(job_role: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE.replace("{job_role}", job_role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_substitutes_role() {
        let prompt = build_prompt("Data Scientist");
        assert!(prompt.starts_with("Generate a detailed career roadmap for a Data Scientist."));
        assert!(!prompt.contains("{job_role}"));
    }

    #[test]
    fn test_build_prompt_keeps_schema_braces_intact() {
        let prompt = build_prompt("DevOps Engineer");
        assert!(prompt.contains(r#""estimatedDuration": "X-Y months""#));
        assert!(prompt.contains("exactly 4 stages"));
        assert!(prompt.contains("exactly 4 skills, 3 tools, and 4 learning steps"));
    }

    #[test]
    fn test_build_prompt_uses_raw_role_text() {
        // Normalization is a cache concern only; the prompt sees the original.
        let prompt = build_prompt("  UX Designer  ");
        assert!(prompt.contains("for a   UX Designer  ."));
    }
}
