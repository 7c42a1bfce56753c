use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Returns the trimmed value when present and non-blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTextbookRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTextbookRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUnitRequest {
    #[serde(alias = "textbookId")]
    #[validate(length(min = 1))]
    pub textbook_id: String,

    #[serde(default, alias = "parentId")]
    pub parent_id: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default, alias = "orderIndex")]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitListQuery {
    #[serde(default, alias = "textbookId")]
    pub textbook_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitOrder {
    pub id: String,
    #[serde(alias = "orderIndex")]
    pub order_index: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderUnitsRequest {
    #[serde(default)]
    pub units: Option<Vec<UnitOrder>>,
}

impl ReorderUnitsRequest {
    pub fn into_units(self) -> AppResult<Vec<UnitOrder>> {
        self.units
            .ok_or_else(|| AppError::ValidationError("units array is required".to_string()))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePassageRequest {
    #[serde(default, alias = "unitId")]
    pub unit_id: Option<String>,

    #[validate(length(max = 300))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePassageRequest {
    #[serde(default, alias = "unitId")]
    pub unit_id: Option<String>,

    #[validate(length(max = 300))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassageListQuery {
    #[serde(default, alias = "unitId")]
    pub unit_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePromptRequest {
    #[validate(length(min = 1, max = 200))]
    pub label: String,

    #[validate(length(min = 1))]
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePromptRequest {
    #[validate(length(min = 1, max = 200))]
    pub label: Option<String>,

    #[validate(length(min = 1))]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPromptRequest {
    #[serde(default, alias = "passage_id")]
    pub passage_id: Option<String>,

    #[serde(default)]
    pub values: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionTypeRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(alias = "promptId")]
    #[validate(length(min = 1))]
    pub prompt_id: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteByPassageRequest {
    #[serde(default, alias = "passage_id")]
    pub passage_id: Option<String>,

    #[serde(default, alias = "question_type_id")]
    pub question_type_id: Option<String>,
}

impl DeleteByPassageRequest {
    /// Both ids must be present and non-blank.
    pub fn ids(&self) -> AppResult<(&str, &str)> {
        match (present(&self.passage_id), present(&self.question_type_id)) {
            (Some(passage_id), Some(question_type_id)) => Ok((passage_id, question_type_id)),
            _ => Err(AppError::ValidationError(
                "passageId and questionTypeId are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestionQuery {
    #[serde(default, alias = "passage_id")]
    pub passage_id: Option<String>,

    #[serde(default, alias = "question_type_id")]
    pub question_type_id: Option<String>,
}

impl GeneratedQuestionQuery {
    pub fn passage_id(&self) -> AppResult<&str> {
        present(&self.passage_id)
            .ok_or_else(|| AppError::ValidationError("passageId is required".to_string()))
    }

    pub fn question_type_id(&self) -> Option<&str> {
        present(&self.question_type_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionRequest {
    #[serde(default, alias = "passage_id")]
    pub passage_id: Option<String>,

    #[serde(default, alias = "question_type_id")]
    pub question_type_id: Option<String>,

    /// Extra placeholder values, e.g. `{ "grade": "7" }`.
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl GenerateQuestionRequest {
    pub fn ids(&self) -> AppResult<(&str, &str)> {
        match (present(&self.passage_id), present(&self.question_type_id)) {
            (Some(passage_id), Some(question_type_id)) => Ok((passage_id, question_type_id)),
            _ => Err(AppError::ValidationError(
                "passageId and questionTypeId are required".to_string(),
            )),
        }
    }
}
