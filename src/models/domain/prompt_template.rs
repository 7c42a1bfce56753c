use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prompting;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptTemplate {
    pub id: String,
    pub label: String,
    pub prompt: String, // may contain [[name]] placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PromptTemplate {
    pub fn new(label: &str, prompt: &str) -> Self {
        PromptTemplate {
            id: Uuid::new_v4().to_string(),
            label: label.to_string(),
            prompt: prompt.to_string(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn variables(&self) -> Vec<String> {
        prompting::extract_variables(&self.prompt)
    }

    pub fn references(&self, placeholder: &str) -> bool {
        prompting::contains_placeholder(&self.prompt, placeholder)
    }
}
