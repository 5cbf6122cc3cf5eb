//! Structural validation of the model's JSON before it is deserialized into
//! typed roadmap values.
//!
//! Checks run in a fixed order and fail fast with a distinct message:
//! top-level fields, stage count, per-stage fields, per-stage list sizes,
//! stage numbering. A failure at any step discards the whole object.

use serde_json::Value;

const EXPECTED_STAGES: usize = 4;
const EXPECTED_SKILLS: usize = 4;
const EXPECTED_TOOLS: usize = 3;
const EXPECTED_STEPS: usize = 4;

/// Validates a parsed completion against the required roadmap shape.
/// Returns the human-readable failure message on the first violation.
pub fn validate_roadmap(value: &Value) -> Result<(), String> {
    let missing_fields = || {
        "Invalid roadmap structure: missing required fields (title, description, \
         estimatedDuration, stages)"
            .to_string()
    };

    let Some(obj) = value.as_object() else {
        return Err(missing_fields());
    };

    let has_text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };

    if !has_text("title") || !has_text("description") || !has_text("estimatedDuration") {
        return Err(missing_fields());
    }

    let Some(stages) = obj.get("stages").and_then(Value::as_array) else {
        return Err(missing_fields());
    };

    if stages.len() != EXPECTED_STAGES {
        return Err(format!(
            "Expected {EXPECTED_STAGES} stages, got {}. Each stage must have: stage number, \
             title, duration, description, skills array, tools array, and learningSteps array.",
            stages.len()
        ));
    }

    for stage in stages {
        validate_stage_fields(stage)?;
    }

    for stage in stages {
        validate_stage_cardinality(stage)?;
    }

    validate_stage_numbering(stages)?;

    Ok(())
}

/// Every stage must carry a non-zero stage number, non-empty text fields,
/// and array-typed skills/tools/learningSteps.
fn validate_stage_fields(stage: &Value) -> Result<(), String> {
    let invalid = || {
        "Invalid stage structure: all stages must have stage, title, duration, description, \
         skills, tools, and learningSteps"
            .to_string()
    };

    let Some(obj) = stage.as_object() else {
        return Err(invalid());
    };

    let has_text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };
    let has_array = |key: &str| obj.get(key).is_some_and(Value::is_array);

    let ordinal_ok = obj
        .get("stage")
        .and_then(Value::as_u64)
        .is_some_and(|n| n > 0);

    if !ordinal_ok
        || !has_text("title")
        || !has_text("duration")
        || !has_text("description")
        || !has_array("skills")
        || !has_array("tools")
        || !has_array("learningSteps")
    {
        return Err(invalid());
    }

    Ok(())
}

/// The prompt asks for 4 skills / 3 tools / 4 learning steps; the model does
/// not always comply, so the counts are re-checked here rather than trusted.
fn validate_stage_cardinality(stage: &Value) -> Result<(), String> {
    let obj = stage.as_object().expect("checked by validate_stage_fields");
    let len_of = |key: &str| obj[key].as_array().map(Vec::len).unwrap_or(0);

    let ordinal = obj["stage"].as_u64().unwrap_or(0);
    let (skills, tools, steps) = (len_of("skills"), len_of("tools"), len_of("learningSteps"));

    if skills != EXPECTED_SKILLS || tools != EXPECTED_TOOLS || steps != EXPECTED_STEPS {
        return Err(format!(
            "Invalid stage {ordinal}: expected exactly {EXPECTED_SKILLS} skills, \
             {EXPECTED_TOOLS} tools, and {EXPECTED_STEPS} learningSteps \
             (got {skills}, {tools}, {steps})"
        ));
    }

    Ok(())
}

/// Stage ordinals must be exactly the unique set 1..=4.
fn validate_stage_numbering(stages: &[Value]) -> Result<(), String> {
    let mut seen = [false; EXPECTED_STAGES];

    for stage in stages {
        let ordinal = stage["stage"].as_u64().unwrap_or(0) as usize;
        if !(1..=EXPECTED_STAGES).contains(&ordinal) || seen[ordinal - 1] {
            return Err(format!(
                "Invalid stage numbering: stage values must be the unique ordinals 1 through \
                 {EXPECTED_STAGES}"
            ));
        }
        seen[ordinal - 1] = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_stage(ordinal: u64) -> Value {
        json!({
            "stage": ordinal,
            "title": format!("Stage {ordinal}"),
            "duration": "1-2 months",
            "description": "What you'll learn in this stage",
            "skills": ["s1", "s2", "s3", "s4"],
            "tools": ["t1", "t2", "t3"],
            "learningSteps": ["l1", "l2", "l3", "l4"]
        })
    }

    fn sample_roadmap() -> Value {
        json!({
            "title": "Data Scientist",
            "description": "Turns raw data into decisions",
            "estimatedDuration": "12-18 months",
            "stages": [sample_stage(1), sample_stage(2), sample_stage(3), sample_stage(4)]
        })
    }

    #[test]
    fn test_valid_roadmap_passes() {
        assert!(validate_roadmap(&sample_roadmap()).is_ok());
    }

    #[test]
    fn test_missing_title_reports_missing_fields() {
        let mut roadmap = sample_roadmap();
        roadmap.as_object_mut().unwrap().remove("title");
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid roadmap structure: missing required fields"));
    }

    #[test]
    fn test_empty_description_reports_missing_fields() {
        let mut roadmap = sample_roadmap();
        roadmap["description"] = json!("");
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid roadmap structure"));
    }

    #[test]
    fn test_non_array_stages_reports_missing_fields() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"] = json!("not an array");
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid roadmap structure"));
    }

    #[test]
    fn test_three_stages_reports_observed_count() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"].as_array_mut().unwrap().pop();
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Expected 4 stages, got 3."));
    }

    #[test]
    fn test_five_stages_reports_observed_count() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"].as_array_mut().unwrap().push(sample_stage(5));
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Expected 4 stages, got 5."));
    }

    #[test]
    fn test_stage_missing_tools_reports_stage_structure() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"][2].as_object_mut().unwrap().remove("tools");
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid stage structure"));
    }

    #[test]
    fn test_stage_with_zero_ordinal_reports_stage_structure() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"][0]["stage"] = json!(0);
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid stage structure"));
    }

    #[test]
    fn test_wrong_skill_count_reports_cardinality() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"][1]["skills"] = json!(["only", "three", "skills"]);
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert_eq!(
            err,
            "Invalid stage 2: expected exactly 4 skills, 3 tools, and 4 learningSteps \
             (got 3, 3, 4)"
        );
    }

    #[test]
    fn test_duplicate_ordinals_rejected() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"][3]["stage"] = json!(2);
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid stage numbering"));
    }

    #[test]
    fn test_out_of_range_ordinal_rejected() {
        let mut roadmap = sample_roadmap();
        roadmap["stages"][3]["stage"] = json!(7);
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid stage numbering"));
    }

    #[test]
    fn test_field_check_runs_before_cardinality_check() {
        // Stage 1 has a short skills list AND stage 3 is missing a field;
        // the structure error must win because field checks run first.
        let mut roadmap = sample_roadmap();
        roadmap["stages"][0]["skills"] = json!(["one"]);
        roadmap["stages"][2].as_object_mut().unwrap().remove("duration");
        let err = validate_roadmap(&roadmap).unwrap_err();
        assert!(err.starts_with("Invalid stage structure"));
    }
}
