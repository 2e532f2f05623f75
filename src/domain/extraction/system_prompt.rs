//! System prompt value object

/// Extraction instruction template. `{vacancy}` and `{language}` are
/// substituted at build time.
const QA_EXTRACTOR_TEMPLATE: &str = r#"You are an expert at extracting question and answer pairs from interview transcripts.
Given a transcript of an interview. There are two people involved: the interviewer and the candidate for the vacancy: {vacancy}.
Your task is to identify and extract the questions asked by the interviewer and the corresponding answers provided by the interviewee.
Please follow these guidelines:
1. Identify each question asked by the interviewer.
2. Identify the corresponding answer provided by the interviewee.
3. If a question does not have a corresponding answer, it should be omitted from the output
4. Output the results in {language} language."#;

/// Value object representing the complete system prompt for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    content: String,
}

impl SystemPrompt {
    /// Build a system prompt for the given vacancy and output language.
    /// Vacancy defaults to "unknown"; the language code is passed through
    /// without validation.
    pub fn build(vacancy: Option<&str>, language: &str) -> Self {
        let content = QA_EXTRACTOR_TEMPLATE
            .replace("{vacancy}", vacancy.unwrap_or("unknown"))
            .replace("{language}", language);
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}
