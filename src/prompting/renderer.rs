use std::collections::HashMap;

use regex::Captures;
use serde::Serialize;

use super::variables::PLACEHOLDER_REGEX;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPrompt {
    pub text: String,
    /// Placeholders left in `text` because no value was supplied.
    pub missing: Vec<String>,
}

impl RenderedPrompt {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

fn lookup<'a>(values: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    let key = name.trim();
    if let Some(value) = values.get(key) {
        return Some(value.as_str());
    }

    // several keys may differ only in case; the smallest one is used
    let lowered = key.to_lowercase();
    values
        .iter()
        .filter(|(candidate, _)| candidate.trim().to_lowercase() == lowered)
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, value)| value.as_str())
}

/// Substitutes every `[[name]]` with its value. Lookup uses the trimmed name,
/// exact first and then case-insensitive. Unknown placeholders are kept as-is.
pub fn render(template: &str, values: &HashMap<String, String>) -> RenderedPrompt {
    let mut missing: Vec<String> = Vec::new();

    let text = PLACEHOLDER_REGEX
        .replace_all(template, |captures: &Captures| match lookup(values, &captures[1]) {
            Some(value) => value.to_string(),
            None => {
                let name = captures[1].trim().to_string();
                if !missing.contains(&name) {
                    missing.push(name);
                }
                captures[0].to_string()
            }
        })
        .into_owned();

    RenderedPrompt { text, missing }
}

/// Like [`render`], but every placeholder must have a value.
pub fn render_strict(template: &str, values: &HashMap<String, String>) -> AppResult<String> {
    let rendered = render(template, values);
    if rendered.is_complete() {
        Ok(rendered.text)
    } else {
        Err(AppError::ValidationError(format!(
            "Missing values for placeholders: {}",
            rendered.missing.join(", ")
        )))
    }
}
