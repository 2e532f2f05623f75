//! Extraction result schema types
//!
//! These types are both the JSON schema sent to the LLM (via schemars) and
//! the validated shape its output must deserialize into. Payloads missing
//! required fields or carrying unknown keys are rejected at deserialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One interviewer question paired with the candidate's answer.
/// Questions without an answer in the transcript are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QaItem {
    /// Concise formulation of the interviewer's question, preserving nuance
    pub question: String,
    /// Approximate timecode when the question was asked
    pub timecode: String,
    /// Semantic reference point in the transcript text
    pub place_in_the_text: String,
    /// Essence of the answer given by the candidate
    pub candidates_answer: String,
    pub short_candidate_answer_evaluation: String,
    /// Errors in the candidate's answer, possibly empty
    #[serde(default)]
    pub errors_and_problems: Vec<String>,
    pub what_to_fix: String,
    pub the_ideal_answer_example_en: String,
    pub the_ideal_answer_example_ru: String,
    pub key_idea: String,
}

/// Full extraction result for one transcript.
/// Constructed once per LLM call, never mutated after persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QaExtraction {
    /// Vacancy or position being interviewed for
    #[serde(default)]
    pub vacancy: Option<String>,
    pub employee_role_identified: String,
    pub stages_of_conversation_short: Vec<String>,
    /// Question/answer pairs in transcript appearance order
    #[serde(default)]
    pub items: Vec<QaItem>,
}

impl QaExtraction {
    /// JSON schema for the structured-output request body
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(QaExtraction);
        serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "vacancy": "Backend Engineer",
            "employee_role_identified": "Senior Backend Developer",
            "stages_of_conversation_short": ["intro", "technical"],
            "items": [{
                "question": "What is polymorphism?",
                "timecode": "00:03:12",
                "place_in_the_text": "after the introduction",
                "candidates_answer": "Same interface, different behavior.",
                "short_candidate_answer_evaluation": "Correct but shallow.",
                "errors_and_problems": ["No runtime vs compile-time distinction"],
                "what_to_fix": "Mention dynamic dispatch.",
                "the_ideal_answer_example_en": "Polymorphism lets...",
                "the_ideal_answer_example_ru": "Полиморфизм позволяет...",
                "key_idea": "One interface, many implementations."
            }]
        })
    }

    #[test]
    fn deserializes_valid_payload() {
        let extraction: QaExtraction = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(extraction.vacancy.as_deref(), Some("Backend Engineer"));
        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].question, "What is polymorphism?");
    }

    #[test]
    fn rejects_missing_required_field() {
        let mut value = sample_json();
        value
            .as_object_mut()
            .unwrap()
            .remove("employee_role_identified");
        assert!(serde_json::from_value::<QaExtraction>(value).is_err());
    }

    #[test]
    fn rejects_wrong_type() {
        let mut value = sample_json();
        value["stages_of_conversation_short"] = serde_json::json!("not a list");
        assert!(serde_json::from_value::<QaExtraction>(value).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut value = sample_json();
        value["unexpected"] = serde_json::json!(true);
        assert!(serde_json::from_value::<QaExtraction>(value).is_err());
    }

    #[test]
    fn vacancy_and_items_are_optional() {
        let value = serde_json::json!({
            "employee_role_identified": "Analyst",
            "stages_of_conversation_short": []
        });
        let extraction: QaExtraction = serde_json::from_value(value).unwrap();
        assert!(extraction.vacancy.is_none());
        assert!(extraction.items.is_empty());
    }

    #[test]
    fn serializes_with_stable_field_order() {
        let extraction: QaExtraction = serde_json::from_value(sample_json()).unwrap();
        let text = serde_json::to_string_pretty(&extraction).unwrap();
        let vacancy_pos = text.find("\"vacancy\"").unwrap();
        let role_pos = text.find("\"employee_role_identified\"").unwrap();
        let items_pos = text.find("\"items\"").unwrap();
        assert!(vacancy_pos < role_pos && role_pos < items_pos);
    }

    #[test]
    fn non_ascii_preserved_in_json() {
        let extraction: QaExtraction = serde_json::from_value(sample_json()).unwrap();
        let text = serde_json::to_string_pretty(&extraction).unwrap();
        assert!(text.contains("Полиморфизм"));
    }

    #[test]
    fn json_schema_names_all_fields() {
        let schema = QaExtraction::json_schema();
        let text = schema.to_string();
        assert!(text.contains("employee_role_identified"));
        assert!(text.contains("stages_of_conversation_short"));
        assert!(text.contains("the_ideal_answer_example_ru"));
    }
}
