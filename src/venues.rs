//! Venue operations

use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::Venue;

/// Client for the `/venues` resource
pub struct VenuesClient {
    http: Http,
}

/// Payload for creating or updating a venue
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePayload {
    /// Venue name
    pub name: String,

    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Description text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Additional image paths
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Audience capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Embedded map markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed_html: Option<String>,
}

impl VenuesClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch all venues
    pub async fn list(&self) -> Result<Vec<Venue>, Error> {
        self.http.get("/venues").execute().await
    }

    /// Fetch a single venue by id
    pub async fn get(&self, id: &str) -> Result<Venue, Error> {
        self.http.get(&format!("/venues/{}", id)).execute().await
    }

    /// Create a new venue
    pub async fn create(&self, payload: &VenuePayload) -> Result<Venue, Error> {
        self.http.post("/venues").json(payload)?.execute().await
    }

    /// Update an existing venue
    pub async fn update(&self, id: &str, payload: &VenuePayload) -> Result<Venue, Error> {
        self.http
            .put(&format!("/venues/{}", id))
            .json(payload)?
            .execute()
            .await
    }

    /// Delete a venue
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/venues/{}", id))
            .execute_empty()
            .await
    }
}
