//! REST client for the entry service.
//!
//! Wraps `POST/GET /api/entries` and `PUT/DELETE /api/entries/{id}` using
//! [`reqwest`], unwrapping the response envelope and normalizing entries.

use marquee_core::types::DbId;
use marquee_core::validation::FieldViolation;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    envelope_message, normalize_entry, normalize_page, unwrap_envelope, Deleted, EntryDraft,
    EntryPage, EntryPatch, Saved,
};

/// HTTP client for one entry service.
#[derive(Debug, Clone)]
pub struct EntriesClient {
    client: reqwest::Client,
    base_url: String,
}

impl EntriesClient {
    /// * `config` - base URL (with trailing slash) of the service.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// `POST /api/entries`.
    pub async fn create_entry(&self, draft: &EntryDraft) -> Result<Saved, ClientError> {
        let request = self.client.post(self.url("api/entries")).json(draft);
        let body = Self::send(request, "create entry").await?;
        Self::saved(&body)
    }

    /// `GET /api/entries?page=&limit=`.
    pub async fn get_entries(&self, page: u32, limit: u32) -> Result<EntryPage, ClientError> {
        let request = self
            .client
            .get(self.url("api/entries"))
            .query(&PageQuery { page, limit });
        let body = Self::send(request, "fetch entries").await?;
        normalize_page(&body, page, limit)
    }

    /// `PUT /api/entries/{id}` with only the supplied fields.
    pub async fn update_entry(&self, id: DbId, patch: &EntryPatch) -> Result<Saved, ClientError> {
        let request = self
            .client
            .put(self.url(&format!("api/entries/{id}")))
            .json(patch);
        let body = Self::send(request, "update entry").await?;
        Self::saved(&body)
    }

    /// `DELETE /api/entries/{id}`.
    pub async fn delete_entry(&self, id: DbId) -> Result<Deleted, ClientError> {
        let request = self.client.delete(self.url(&format!("api/entries/{id}")));
        let body = Self::send(request, "delete entry").await?;
        Ok(Deleted {
            message: envelope_message(&body),
        })
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn saved(body: &Value) -> Result<Saved, ClientError> {
        Ok(Saved {
            item: normalize_entry(unwrap_envelope(body))?,
            message: envelope_message(body),
        })
    }

    /// Send the request and return the parsed envelope, mapping every
    /// failure to a [`ClientError`] that keeps its category.
    async fn send(request: reqwest::RequestBuilder, action: &str) -> Result<Value, ClientError> {
        let result = Self::exchange(request).await;
        if let Err(e) = &result {
            tracing::warn!(action, error = %e, "Entry service request failed");
        }
        result
    }

    async fn exchange(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                ClientError::Malformed(e.to_string())
            } else {
                ClientError::Server {
                    status: status.as_u16(),
                    message: text.clone(),
                }
            }
        })?;

        let message = envelope_message(&body);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { message });
        }
        if status == reqwest::StatusCode::BAD_REQUEST && error_code(&body) == Some("VALIDATION_ERROR") {
            return Err(ClientError::Validation {
                message,
                fields: error_fields(&body),
            });
        }
        if !status.is_success() || body.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }
}

fn error_code(body: &Value) -> Option<&str> {
    body.get("error")?.get("code")?.as_str()
}

fn error_fields(body: &Value) -> Vec<FieldViolation> {
    body.get("error")
        .and_then(|e| e.get("fields"))
        .cloned()
        .and_then(|fields| serde_json::from_value(fields).ok())
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}
