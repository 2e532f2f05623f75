//! Token usage accounting for one LLM call

use serde::Serialize;
use serde_json::Value;

/// Normalized token usage. Fields are present only when the provider
/// reported them; absent fields are never substituted with zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub cached_input_tokens: Option<u64>,
    pub reasoning_tokens: Option<u64>,
}

impl TokenUsage {
    /// Decode a provider usage payload. Accepts the flat token counters and
    /// the nested `*_tokens_details` objects of the Responses API;
    /// unrecognized keys are discarded.
    pub fn from_value(value: &Value) -> Self {
        let Some(usage) = value.as_object() else {
            return Self::default();
        };

        let counter = |key: &str| usage.get(key).and_then(Value::as_u64);
        let nested = |outer: &str, inner: &str| {
            usage
                .get(outer)
                .and_then(Value::as_object)
                .and_then(|details| details.get(inner))
                .and_then(Value::as_u64)
        };

        Self {
            input_tokens: counter("input_tokens"),
            output_tokens: counter("output_tokens"),
            total_tokens: counter("total_tokens"),
            cached_input_tokens: counter("cached_input_tokens")
                .or_else(|| nested("input_tokens_details", "cached_tokens")),
            reasoning_tokens: counter("reasoning_tokens")
                .or_else(|| nested("output_tokens_details", "reasoning_tokens")),
        }
    }

    /// True when the provider reported no usage at all
    pub fn is_empty(&self) -> bool {
        self.input_tokens.is_none()
            && self.output_tokens.is_none()
            && self.total_tokens.is_none()
            && self.cached_input_tokens.is_none()
            && self.reasoning_tokens.is_none()
    }

    /// Sidecar document written next to the extraction JSON
    pub fn to_sidecar(&self) -> UsageSidecar {
        UsageSidecar {
            usage: UsageBody {
                input_tokens: self.input_tokens,
                output_tokens: self.output_tokens,
                total_tokens: self.total_tokens,
                input_tokens_details: self.cached_input_tokens.map(|cached_tokens| {
                    InputTokensDetails {
                        cached_tokens: Some(cached_tokens),
                    }
                }),
                output_tokens_details: self.reasoning_tokens.map(|reasoning_tokens| {
                    OutputTokensDetails {
                        reasoning_tokens: Some(reasoning_tokens),
                    }
                }),
            },
        }
    }
}

/// Sidecar JSON shape: `{"usage": {...}}`
#[derive(Debug, Serialize)]
pub struct UsageSidecar {
    pub usage: UsageBody,
}

#[derive(Debug, Serialize)]
pub struct UsageBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens_details: Option<InputTokensDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens_details: Option<OutputTokensDetails>,
}

#[derive(Debug, Serialize)]
pub struct InputTokensDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_tokens: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct OutputTokensDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_tokens: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_responses_api_shape() {
        let value = json!({
            "input_tokens": 1200,
            "output_tokens": 340,
            "total_tokens": 1540,
            "input_tokens_details": {"cached_tokens": 800},
            "output_tokens_details": {"reasoning_tokens": 120}
        });
        let usage = TokenUsage::from_value(&value);
        assert_eq!(usage.input_tokens, Some(1200));
        assert_eq!(usage.output_tokens, Some(340));
        assert_eq!(usage.total_tokens, Some(1540));
        assert_eq!(usage.cached_input_tokens, Some(800));
        assert_eq!(usage.reasoning_tokens, Some(120));
    }

    #[test]
    fn decodes_flat_keys() {
        let value = json!({
            "cached_input_tokens": 5,
            "reasoning_tokens": 7
        });
        let usage = TokenUsage::from_value(&value);
        assert_eq!(usage.cached_input_tokens, Some(5));
        assert_eq!(usage.reasoning_tokens, Some(7));
        assert!(usage.input_tokens.is_none());
    }

    #[test]
    fn missing_fields_stay_absent() {
        let usage = TokenUsage::from_value(&json!({"input_tokens": 10}));
        assert_eq!(usage.input_tokens, Some(10));
        assert!(usage.output_tokens.is_none());
        assert!(usage.total_tokens.is_none());
        assert!(!usage.is_empty());
    }

    #[test]
    fn non_object_yields_empty() {
        assert!(TokenUsage::from_value(&json!(null)).is_empty());
        assert!(TokenUsage::from_value(&json!("usage")).is_empty());
    }

    #[test]
    fn unrecognized_keys_discarded() {
        let usage = TokenUsage::from_value(&json!({"billing_tier": "pro"}));
        assert!(usage.is_empty());
    }

    #[test]
    fn sidecar_omits_absent_fields() {
        let usage = TokenUsage {
            input_tokens: Some(10),
            output_tokens: None,
            total_tokens: None,
            cached_input_tokens: None,
            reasoning_tokens: Some(3),
        };
        let text = serde_json::to_string(&usage.to_sidecar()).unwrap();
        assert!(text.contains("\"input_tokens\":10"));
        assert!(text.contains("\"reasoning_tokens\":3"));
        assert!(!text.contains("output_tokens_details\":null"));
        assert!(!text.contains("total_tokens"));
    }
}
