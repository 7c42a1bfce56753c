use reqwest::{header, Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Client for the Supabase REST (PostgREST) interface.
///
/// Built once at startup and shared by every repository.
#[derive(Clone)]
pub struct Database {
    http: Client,
    rest_url: String,
    api_key: SecretString,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        if !config.uses_service_role() {
            log::warn!("SUPABASE_SERVICE_ROLE_KEY is not set, falling back to the anonymous key");
        }

        let db = Self::new(config)?;
        db.health_check().await?;

        log::info!("Successfully connected to Supabase at {}", config.supabase_url);

        Ok(db)
    }

    /// Builds the client without contacting the server.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            http,
            rest_url: rest_url(&config.supabase_url),
            api_key: config.database_key().clone(),
        })
    }

    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery {
            db: self,
            table: name.to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        let response = self
            .authorized(self.http.get(format!("{}/", self.rest_url)))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        request
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }
}

fn rest_url(supabase_url: &str) -> String {
    format!("{}/rest/v1", supabase_url.trim_end_matches('/'))
}

async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::DatabaseError(format!(
        "Supabase responded with {}: {}",
        status, body
    )))
}

/// One table request: filters, ordering and limit followed by a verb.
pub struct TableQuery<'a> {
    db: &'a Database,
    table: String,
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<usize>,
}

impl<'a> TableQuery<'a> {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn is_null(mut self, column: &str) -> Self {
        self.filters.push((column.to_string(), "is.null".to_string()));
        self
    }

    /// `column=in.(a,b,c)`; values are quoted so commas inside ids stay intact.
    pub fn in_list(mut self, column: &str, values: &[String]) -> Self {
        let quoted: Vec<String> = values
            .iter()
            .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
            .collect();
        self.filters
            .push((column.to_string(), format!("in.({})", quoted.join(","))));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order.push(format!("{}.{}", column, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs for this request, excluding `select`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.filters.clone();
        if !self.order.is_empty() {
            pairs.push(("order".to_string(), self.order.join(",")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    fn request(&self, method: Method) -> RequestBuilder {
        let url = format!("{}/{}", self.db.rest_url, self.table);
        self.db
            .authorized(self.db.http.request(method, url))
            .query(&self.query_pairs())
    }

    pub async fn select<T: DeserializeOwned>(self) -> AppResult<Vec<T>> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*")])
            .send()
            .await?;
        let rows = check_status(response).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    pub async fn first<T: DeserializeOwned>(self) -> AppResult<Option<T>> {
        let rows = self.limit(1).select::<T>().await?;
        Ok(rows.into_iter().next())
    }

    pub async fn insert<B, T>(self, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows = check_status(response).await?.json::<Vec<T>>().await?;
        rows.into_iter().next().ok_or_else(|| {
            AppError::DatabaseError(format!("Insert into '{}' returned no rows", self.table))
        })
    }

    /// PATCH with the current filters; returns the updated rows.
    pub async fn update<B, T>(self, body: &B) -> AppResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if self.filters.is_empty() {
            return Err(AppError::InternalError(format!(
                "Refusing unfiltered update on '{}'",
                self.table
            )));
        }

        let response = self
            .request(Method::PATCH)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows = check_status(response).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// DELETE with the current filters; returns how many rows were removed.
    pub async fn delete(self) -> AppResult<u64> {
        if self.filters.is_empty() {
            return Err(AppError::InternalError(format!(
                "Refusing unfiltered delete on '{}'",
                self.table
            )));
        }

        let response = self
            .request(Method::DELETE)
            .header("Prefer", "return=minimal, count=exact")
            .send()
            .await?;
        let response = check_status(response).await?;

        let range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|value| value.to_str().ok());
        content_range_total(range).ok_or_else(|| {
            AppError::DatabaseError(format!(
                "Delete on '{}' returned no usable Content-Range",
                self.table
            ))
        })
    }
}

/// Total from a PostgREST `Content-Range` header such as `*/3` or `0-2/3`.
fn content_range_total(value: Option<&str>) -> Option<u64> {
    value?.rsplit_once('/')?.1.trim().parse().ok()
}
