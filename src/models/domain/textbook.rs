use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Textbook {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Textbook {
    pub fn new(title: &str, description: Option<String>) -> Self {
        Textbook {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            created_at: Some(Utc::now()),
        }
    }
}
