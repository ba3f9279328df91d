//! Artist roster operations

use reqwest::multipart;
use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::{Artist, Embedding, EmbedPlatform, SocialMediaLink, UploadedImage};

/// Client for the `/artists` resource
pub struct ArtistsClient {
    http: Http,
}

/// Payload for creating or updating an artist
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPayload {
    /// Display name
    pub name: String,

    /// Biography text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Profile image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// External website link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Social media links, always sent in the modern array shape
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_media: Vec<SocialMediaLink>,

    /// Musical genre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Whether the artist is available for booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bookable: Option<bool>,

    /// Linked booking contact user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_user_id: Option<String>,
}

/// Payload for creating or updating a media embed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingPayload {
    /// Source platform
    pub platform: EmbedPlatform,

    /// Raw embed markup from the platform
    pub embed_code: String,

    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ArtistsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch the full artist roster
    pub async fn list(&self) -> Result<Vec<Artist>, Error> {
        self.http.get("/artists").execute().await
    }

    /// Fetch a single artist by id
    pub async fn get(&self, id: &str) -> Result<Artist, Error> {
        self.http.get(&format!("/artists/{}", id)).execute().await
    }

    /// Create a new artist
    pub async fn create(&self, payload: &ArtistPayload) -> Result<Artist, Error> {
        self.http.post("/artists").json(payload)?.execute().await
    }

    /// Update an existing artist
    pub async fn update(&self, id: &str, payload: &ArtistPayload) -> Result<Artist, Error> {
        self.http
            .put(&format!("/artists/{}", id))
            .json(payload)?
            .execute()
            .await
    }

    /// Delete an artist
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/artists/{}", id))
            .execute_empty()
            .await
    }

    /// Attach a media embed to an artist
    pub async fn add_embedding(
        &self,
        artist_id: &str,
        payload: &EmbeddingPayload,
    ) -> Result<Embedding, Error> {
        self.http
            .post(&format!("/artists/{}/embeddings", artist_id))
            .json(payload)?
            .execute()
            .await
    }

    /// Update one of an artist's media embeds
    pub async fn update_embedding(
        &self,
        artist_id: &str,
        embedding_id: &str,
        payload: &EmbeddingPayload,
    ) -> Result<Embedding, Error> {
        self.http
            .put(&format!("/artists/{}/embeddings/{}", artist_id, embedding_id))
            .json(payload)?
            .execute()
            .await
    }

    /// Remove a media embed from an artist
    pub async fn delete_embedding(&self, artist_id: &str, embedding_id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/artists/{}/embeddings/{}", artist_id, embedding_id))
            .execute_empty()
            .await
    }

    /// Upload an artist image (multipart, bearer auth)
    pub async fn upload_image(&self, filename: &str, data: Vec<u8>) -> Result<UploadedImage, Error> {
        let form = multipart::Form::new().part(
            "image",
            multipart::Part::bytes(data).file_name(filename.to_string()),
        );
        self.http
            .post("/artists/upload-image")
            .multipart(form)
            .execute()
            .await
    }
}
