//! Event operations

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::{Event, EventStatus};

/// Client for the `/events` resource
pub struct EventsClient {
    http: Http,
}

/// Payload for creating or updating an event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Event title
    pub title: String,

    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Event date
    pub date: DateTime<Utc>,

    /// Doors-open time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// End time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Ticket price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<f64>,

    /// Total tickets available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tickets: Option<u32>,

    /// Poster image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// External ticket vendor link
    #[serde(rename = "billettoURL", skip_serializing_if = "Option::is_none")]
    pub billetto_url: Option<String>,

    /// Backend lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,

    /// Venue capacity override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Venue to host the event at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
}

impl EventsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch all events
    pub async fn list(&self) -> Result<Vec<Event>, Error> {
        self.http.get("/events").execute().await
    }

    /// Fetch a single event by id
    pub async fn get(&self, id: &str) -> Result<Event, Error> {
        self.http.get(&format!("/events/{}", id)).execute().await
    }

    /// Create a new event
    pub async fn create(&self, payload: &EventPayload) -> Result<Event, Error> {
        self.http.post("/events").json(payload)?.execute().await
    }

    /// Update an existing event
    pub async fn update(&self, id: &str, payload: &EventPayload) -> Result<Event, Error> {
        self.http
            .put(&format!("/events/{}", id))
            .json(payload)?
            .execute()
            .await
    }

    /// Delete an event
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/events/{}", id))
            .execute_empty()
            .await
    }
}
