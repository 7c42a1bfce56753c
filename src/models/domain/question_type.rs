use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionType {
    pub id: String,
    pub name: String,
    pub prompt_id: String, // template used to generate questions of this type
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuestionType {
    pub fn new(name: &str, prompt_id: &str, description: Option<String>) -> Self {
        QuestionType {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            prompt_id: prompt_id.to_string(),
            description,
            created_at: Some(Utc::now()),
        }
    }
}
