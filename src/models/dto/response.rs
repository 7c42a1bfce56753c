use serde::Serialize;

use crate::models::domain::{GeneratedQuestion, Passage, Textbook, Unit};

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedQuestionsResponse {
    pub questions: Vec<GeneratedQuestion>,
    pub count: usize,
}

impl From<Vec<GeneratedQuestion>> for GeneratedQuestionsResponse {
    fn from(questions: Vec<GeneratedQuestion>) -> Self {
        let count = questions.len();
        Self { questions, count }
    }
}

#[derive(Debug, Serialize)]
pub struct VariablesResponse {
    pub variables: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub prompt: String,
    pub variables: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptLintEntry {
    pub id: String,
    pub label: String,
    pub has_passage_placeholder: bool,
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UnitNode {
    #[serde(flatten)]
    pub unit: Unit,
    pub passages: Vec<Passage>,
    pub children: Vec<UnitNode>,
}

#[derive(Debug, Serialize)]
pub struct TextbookTree {
    pub textbook: Textbook,
    pub units: Vec<UnitNode>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DedupeReport {
    pub scanned: usize,
    pub duplicate_groups: usize,
    pub removed_ids: Vec<String>,
    pub dry_run: bool,
}
