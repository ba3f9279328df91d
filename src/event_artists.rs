//! Event-artist join records
//!
//! A join record links one event to one performing artist. Deletion is
//! addressed by the pair of ids rather than the record's own id.

use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::EventArtist;

/// Client for the `/event-artists` resource
pub struct EventArtistsClient {
    http: Http,
}

/// Payload linking an artist to an event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventArtist {
    /// Event id
    pub event_id: String,

    /// Artist id
    pub artist_id: String,
}

impl EventArtistsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch all join records
    pub async fn list(&self) -> Result<Vec<EventArtist>, Error> {
        self.http.get("/event-artists").execute().await
    }

    /// Link an artist to an event
    pub async fn create(&self, payload: &NewEventArtist) -> Result<EventArtist, Error> {
        self.http.post("/event-artists").json(payload)?.execute().await
    }

    /// Unlink an artist from an event
    pub async fn delete(&self, event_id: &str, artist_id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/event-artists/event/{}/artist/{}", event_id, artist_id))
            .execute_empty()
            .await
    }
}
