//! Contact message operations
//!
//! `submit` is the public contact form; the rest of the surface is the
//! admin inbox and requires a bearer token.

use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::{ContactMessage, MessagePriority};

/// Client for the `/contact` resource
pub struct ContactClient {
    http: Http,
}

/// Payload for a public contact form submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Message body
    pub message: String,
}

/// Admin-side updates to a message (read flag, priority, status)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    /// Mark the message read or unread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,

    /// Admin-assigned priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<MessagePriority>,

    /// Handling status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ContactClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Submit a message through the public contact form
    pub async fn submit(&self, payload: &ContactPayload) -> Result<ContactMessage, Error> {
        self.http.post("/contact").json(payload)?.execute().await
    }

    /// Fetch the admin inbox
    pub async fn list(&self) -> Result<Vec<ContactMessage>, Error> {
        self.http.get("/contact").execute().await
    }

    /// Fetch a single message by id
    pub async fn get(&self, id: &str) -> Result<ContactMessage, Error> {
        self.http.get(&format!("/contact/{}", id)).execute().await
    }

    /// Update a message's read flag, priority or status
    pub async fn update(&self, id: &str, patch: &ContactPatch) -> Result<ContactMessage, Error> {
        self.http
            .put(&format!("/contact/{}", id))
            .json(patch)?
            .execute()
            .await
    }

    /// Delete a message
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/contact/{}", id))
            .execute_empty()
            .await
    }
}
