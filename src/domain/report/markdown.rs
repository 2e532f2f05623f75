//! Markdown projection of an extraction result
//!
//! Works on raw JSON so it is total: malformed or missing fields are
//! rendered as absent rather than failing.

use serde_json::Value;

/// Read a string field, trimmed; missing or non-string values become empty
fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Normalize a field that may be a list of strings or a single text blob
fn list_field(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string().trim().to_string(),
            })
            .filter(|entry| !entry.is_empty())
            .collect(),
        Some(Value::String(s)) => {
            let text = s.trim();
            if text.is_empty() {
                vec![]
            } else {
                vec![text.to_string()]
            }
        }
        _ => vec![],
    }
}

/// Render an extraction JSON value as a markdown document.
/// Deterministic and side-effect free; the output always ends with exactly
/// one trailing newline.
pub fn qa_json_to_markdown(qa_json: &Value) -> String {
    let mut lines: Vec<String> = Vec::new();

    let vacancy = text_field(qa_json, "vacancy");
    if vacancy.is_empty() {
        lines.push("# Interview Insights".to_string());
    } else {
        lines.push(format!("# Interview Insights - {}", vacancy));
    }

    let role = text_field(qa_json, "employee_role_identified");
    if !role.is_empty() {
        lines.push(format!("**Role:** {}", role));
        lines.push(String::new());
    }

    let stages = list_field(qa_json, "stages_of_conversation_short");
    if !stages.is_empty() {
        lines.push("**Conversation stages:**".to_string());
        lines.extend(stages.iter().map(|stage| format!("- {}", stage)));
        lines.push(String::new());
    }

    let items = qa_json
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            continue;
        }
        let number = index + 1;

        let question = text_field(item, "question");
        if question.is_empty() {
            lines.push(format!("## Q{}", number));
        } else {
            lines.push(format!("## Q{}. {}", number, question));
        }

        let timecode = text_field(item, "timecode");
        if !timecode.is_empty() {
            lines.push(format!("- **Timecode:** {}", timecode));
        }
        let place = text_field(item, "place_in_the_text");
        if !place.is_empty() {
            lines.push(format!("- **Place in transcript:** {}", place));
        }

        let answer = text_field(item, "candidates_answer");
        if !answer.is_empty() {
            lines.push(String::new());
            lines.push("**Candidate's answer (summary):**".to_string());
            lines.push(answer);
        }

        let evaluation = text_field(item, "short_candidate_answer_evaluation");
        if !evaluation.is_empty() {
            lines.push(String::new());
            lines.push("**Short evaluation:**".to_string());
            lines.push(evaluation);
        }

        let key_idea = text_field(item, "key_idea");
        if !key_idea.is_empty() {
            lines.push(String::new());
            lines.push("**Key idea:**".to_string());
            lines.push(key_idea);
        }

        let errors = list_field(item, "errors_and_problems");
        if !errors.is_empty() {
            lines.push(String::new());
            lines.push("**Issues:**".to_string());
            lines.extend(errors.iter().map(|error| format!("- {}", error)));
        }

        let improvements = list_field(item, "what_to_fix");
        if !improvements.is_empty() {
            lines.push(String::new());
            lines.push("**What to improve:**".to_string());
            lines.extend(improvements.iter().map(|tip| format!("- {}", tip)));
        }

        // The original schema named the English example with an `_eng`
        // suffix; accept both spellings.
        let ideal_ru = text_field(item, "the_ideal_answer_example_ru");
        let mut ideal_en = text_field(item, "the_ideal_answer_example_en");
        if ideal_en.is_empty() {
            ideal_en = text_field(item, "the_ideal_answer_example_eng");
        }
        if !ideal_ru.is_empty() || !ideal_en.is_empty() {
            lines.push(String::new());
            lines.push("**Ideal answer:**".to_string());
            lines.push("*RU:*".to_string());
            lines.push(format!(
                "> {}",
                if ideal_ru.is_empty() { "-" } else { ideal_ru.as_str() }
            ));
            lines.push("*EN:*".to_string());
            lines.push(format!(
                "> {}",
                if ideal_en.is_empty() { "-" } else { ideal_en.as_str() }
            ));
        }

        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    let mut text = lines.join("\n").trim_end().to_string();
    text.push('\n');
    text
}
