use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: SecretString,
    pub supabase_service_role_key: Option<SecretString>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub openai_api_key: Option<SecretString>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub passage_placeholder: String,
    pub http_timeout_secs: u64,
}

/// Reads `primary`, falling back to the variable name the admin frontend uses.
fn var_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    env::var(primary)
        .or_else(|_| env::var(fallback))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            supabase_url: var_with_fallback("SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL")
                .unwrap_or_else(|| "http://localhost:54321".to_string()),
            supabase_anon_key: SecretString::from(
                var_with_fallback("SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY")
                    .unwrap_or_else(|| "supabase_anon_key".to_string()),
            ),
            supabase_service_role_key: non_empty_var("SUPABASE_SERVICE_ROLE_KEY")
                .map(SecretString::from),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            passage_placeholder: non_empty_var("PASSAGE_PLACEHOLDER")
                .unwrap_or_else(|| "passage".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Key used for database requests: the privileged service-role key when
    /// configured, the anonymous key otherwise.
    pub fn database_key(&self) -> &SecretString {
        self.supabase_service_role_key
            .as_ref()
            .unwrap_or(&self.supabase_anon_key)
    }

    pub fn uses_service_role(&self) -> bool {
        self.supabase_service_role_key.is_some()
    }

    /// Fails when production-critical settings still carry development defaults.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.supabase_url.starts_with("http://localhost") {
            return Err(AppError::InternalError(
                "SUPABASE_URL is using the local default. Set SUPABASE_URL.".to_string(),
            ));
        }

        if self.supabase_anon_key.expose_secret() == "supabase_anon_key" {
            return Err(AppError::InternalError(
                "SUPABASE_ANON_KEY is using its default value. Set SUPABASE_ANON_KEY.".to_string(),
            ));
        }

        if self.supabase_service_role_key.is_none() {
            return Err(AppError::InternalError(
                "SUPABASE_SERVICE_ROLE_KEY must be set for the admin API.".to_string(),
            ));
        }

        if self.openai_api_key.is_none() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY must be set to generate questions.".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: SecretString::from("anon-test-key".to_string()),
            supabase_service_role_key: Some(SecretString::from("service-test-key".to_string())),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            openai_api_key: None,
            openai_base_url: "http://localhost:9999/v1".to_string(),
            openai_model: "test-model".to_string(),
            passage_placeholder: "passage".to_string(),
            http_timeout_secs: 5,
        }
    }
}
