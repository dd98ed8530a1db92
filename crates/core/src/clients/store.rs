use asabank_primitives::error::{ApiError, StoreError};
use reqwest::{Client, Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the record store's REST surface. Queries and writes follow
/// PostgREST conventions: one table per request, filters and ordering in
/// the query string, write behavior selected through the Prefer header.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
    timeout: Duration,
}

impl StoreClient {
    pub fn new(
        http: Client,
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Config("Invalid record store base URL".into()))?;
        Ok(Self {
            http,
            base_url,
            api_key,
            timeout,
        })
    }

    /// Start a query or write against one table.
    pub fn from(&self, table: &str) -> QueryBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(["rest", "v1", table]);
        }

        QueryBuilder {
            http: self.http.clone(),
            url,
            api_key: self.api_key.clone(),
            timeout: self.timeout,
            bearer: None,
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
            on_conflict: None,
        }
    }
}

pub struct QueryBuilder {
    http: Client,
    url: Url,
    api_key: SecretString,
    timeout: Duration,
    bearer: Option<SecretString>,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<i64>,
    on_conflict: Option<String>,
}

impl QueryBuilder {
    /// Send the request under the given session token instead of the bare
    /// api key, so the store evaluates its row policies for that user.
    pub fn authorized(mut self, token: &SecretString) -> Self {
        self.bearer = Some(token.clone());
        self
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// PostgREST ordering syntax, e.g. "created_at.desc".
    pub fn order(mut self, ordering: &str) -> Self {
        self.order = Some(ordering.to_string());
        self
    }

    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn on_conflict(mut self, columns: &str) -> Self {
        self.on_conflict = Some(columns.to_string());
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        let request = self.request(Method::GET);
        let response = Self::execute(request).await?;
        Self::decode_rows(response).await
    }

    pub async fn fetch_optional<T: DeserializeOwned>(mut self) -> Result<Option<T>, StoreError> {
        self.limit = Some(1);
        let rows = self.fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Insert one row and return it as stored.
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        self,
        row: &T,
    ) -> Result<R, StoreError> {
        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(row);
        let response = Self::execute(request).await?;
        let rows: Vec<R> = Self::decode_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no representation".into()))
    }

    /// Insert one row, keeping the existing row untouched when the
    /// on_conflict key already exists.
    pub async fn insert_if_missing<T: Serialize>(self, row: &T) -> Result<(), StoreError> {
        let request = self
            .request(Method::POST)
            .header("Prefer", "resolution=ignore-duplicates")
            .json(row);
        Self::execute(request).await?;
        Ok(())
    }

    /// Insert-or-merge one row keyed by the on_conflict columns, returning
    /// the row as stored.
    pub async fn upsert<T: Serialize, R: DeserializeOwned>(
        self,
        row: &T,
    ) -> Result<R, StoreError> {
        let request = self
            .request(Method::POST)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(row);
        let response = Self::execute(request).await?;
        let rows: Vec<R> = Self::decode_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("upsert returned no representation".into()))
    }

    /// Patch every row matching the filters and return the updated rows.
    /// An empty result means no row matched, which is how a stale version
    /// filter shows up.
    pub async fn update<T: Serialize, R: DeserializeOwned>(
        self,
        patch: &T,
    ) -> Result<Vec<R>, StoreError> {
        let request = self
            .request(Method::PATCH)
            .header("Prefer", "return=representation")
            .json(patch);
        let response = Self::execute(request).await?;
        Self::decode_rows(response).await
    }

    /// Delete every row matching the filters and return what was removed.
    pub async fn delete<R: DeserializeOwned>(self) -> Result<Vec<R>, StoreError> {
        let request = self
            .request(Method::DELETE)
            .header("Prefer", "return=representation");
        let response = Self::execute(request).await?;
        Self::decode_rows(response).await
    }

    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        let mut url = self.url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(select) = &self.select {
                pairs.append_pair("select", select);
            }
            for (column, condition) in &self.filters {
                pairs.append_pair(column, condition);
            }
            if let Some(order) = &self.order {
                pairs.append_pair("order", order);
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(on_conflict) = &self.on_conflict {
                pairs.append_pair("on_conflict", on_conflict);
            }
        }

        let token = self.bearer.as_ref().unwrap_or(&self.api_key);
        self.http
            .request(method, url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(token.expose_secret())
            .timeout(self.timeout)
    }

    async fn execute(request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
                    .unwrap_or(body),
                Err(_) => "no response body".to_string(),
            };
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode_rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, StoreError> {
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
