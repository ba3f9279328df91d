//! HTTP plumbing shared by every resource client
//!
//! One fetch layer owns request construction (bearer auth, JSON bodies,
//! multipart forms) and response normalization, so every call in the
//! crate terminates in exactly one typed outcome:
//!
//! - 401/403 — the token store is cleared and [`Error::SessionExpired`]
//!   is raised; callers do not handle this case.
//! - 400 — the body is parsed and surfaced as [`Error::Validation`] with
//!   the raw payload attached for field-level mapping; an unparseable
//!   body degrades to a generic "Bad Request".
//! - other non-2xx — [`Error::Server`] with status and status text.
//! - 204 — empty success.
//! - 2xx with body — JSON-decoded, then image-bearing fields are
//!   rewritten to absolute URLs before the value is returned.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{multipart, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::TokenStore;
use crate::error::Error;
use crate::urls::{ResolveImageUrls, UrlResolver};

/// Shared request context handed to every resource client
#[derive(Debug, Clone)]
pub(crate) struct Http {
    client: Client,
    api_url: String,
    tokens: TokenStore,
    resolver: UrlResolver,
}

impl Http {
    pub(crate) fn new(client: Client, api_url: &str, tokens: TokenStore, resolver: UrlResolver) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens,
            resolver,
        }
    }

    fn request(&self, method: Method, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, method, path)
    }

    pub(crate) fn get(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::DELETE, path)
    }
}

/// Helper for building and executing one HTTP request
pub(crate) struct FetchBuilder<'a> {
    http: &'a Http,
    url: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    form: Option<multipart::Form>,
}

impl<'a> FetchBuilder<'a> {
    fn new(http: &'a Http, method: Method, path: &str) -> Self {
        Self {
            http,
            url: format!("{}{}", http.api_url, path),
            method,
            headers: HeaderMap::new(),
            body: None,
            form: None,
        }
    }

    /// Add a JSON body to the request
    pub(crate) fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.headers
            .insert("Content-Type", HeaderValue::from_static("application/json"));
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Attach a multipart form (file uploads); reqwest sets the boundary
    pub(crate) fn multipart(mut self, form: multipart::Form) -> Self {
        self.form = Some(form);
        self
    }

    fn build(mut self) -> Result<reqwest::RequestBuilder, Error> {
        let url = Url::parse(&self.url)?;

        // Bearer auth comes from the injected store, never from ambient state
        if let Some(token) = self.http.tokens.get() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                self.headers.insert("Authorization", value);
            }
        }

        let mut req = self.http.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(form) = self.form {
            req = req.multipart(form);
        } else if let Some(body) = self.body {
            req = req.body(body);
        }

        Ok(req)
    }

    async fn send(self) -> Result<reqwest::Response, Error> {
        let http = self.http;
        tracing::debug!(method = %self.method, url = %self.url, "dispatching request");
        let response = self.build()?.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::debug!(status = status.as_u16(), "auth rejected, voiding session");
            http.tokens.clear();
            return Err(Error::SessionExpired);
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            let text = response.text().await.unwrap_or_default();
            return Err(validation_error(&text));
        }

        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response)
    }

    /// Execute the request and decode the response body
    pub(crate) async fn execute<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned + ResolveImageUrls,
    {
        let http = self.http;
        let response = self.send().await?;
        let mut data = response.json::<T>().await?;
        data.resolve_image_urls(&http.resolver);
        Ok(data)
    }

    /// Execute the request, discarding any response body (204 included)
    pub(crate) async fn execute_empty(self) -> Result<(), Error> {
        self.send().await?;
        Ok(())
    }
}

/// Turn a 400 body into a validation error.
///
/// `message` wins over `details` for the display string; the whole
/// parsed body rides along for form-level feedback. An unparseable body
/// degrades to a generic "Bad Request" rather than an exception.
fn validation_error(body: &str) -> Error {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(parsed) => {
            let message = parsed
                .get("message")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .or_else(|| {
                    parsed.get("details").map(|d| match d.as_str() {
                        Some(s) => s.to_string(),
                        None => d.to_string(),
                    })
                })
                .unwrap_or_else(|| "Bad Request".to_string());
            Error::Validation {
                message,
                details: Some(parsed),
            }
        }
        Err(_) => Error::validation("Bad Request"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_prefers_message() {
        let err = validation_error(r#"{"message":"bad field","details":"other"}"#);
        match err {
            Error::Validation { message, details } => {
                assert_eq!(message, "bad field");
                assert_eq!(details.unwrap()["details"], "other");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_error_falls_back_to_details() {
        let err = validation_error(r#"{"details":"name is required"}"#);
        match err {
            Error::Validation { message, .. } => assert_eq!(message, "name is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_error_stringifies_structured_details() {
        let err = validation_error(r#"{"details":{"name":"required"}}"#);
        match err {
            Error::Validation { message, details } => {
                assert_eq!(message, r#"{"name":"required"}"#);
                assert!(details.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_degrades_to_generic_message() {
        let err = validation_error("<html>nope</html>");
        match err {
            Error::Validation { message, details } => {
                assert_eq!(message, "Bad Request");
                assert!(details.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
