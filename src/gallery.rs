//! Gallery image operations

use reqwest::multipart;
use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::{GalleryCategory, GalleryImage};

/// Client for the `/gallery` resource
pub struct GalleryClient {
    http: Http,
}

/// Metadata payload for creating or updating a gallery image record
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImagePayload {
    /// Caption text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Event this image belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Photographer credit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,

    /// Free-form tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GalleryCategory>,

    /// Display sort key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,

    /// Whether the image is publicly visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl GalleryClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch all gallery images
    pub async fn list(&self) -> Result<Vec<GalleryImage>, Error> {
        self.http.get("/gallery").execute().await
    }

    /// Fetch a single gallery image by id
    pub async fn get(&self, id: &str) -> Result<GalleryImage, Error> {
        self.http.get(&format!("/gallery/{}", id)).execute().await
    }

    /// Create a gallery image record
    pub async fn create(&self, payload: &GalleryImagePayload) -> Result<GalleryImage, Error> {
        self.http.post("/gallery").json(payload)?.execute().await
    }

    /// Update a gallery image's metadata
    pub async fn update(&self, id: &str, payload: &GalleryImagePayload) -> Result<GalleryImage, Error> {
        self.http
            .put(&format!("/gallery/{}", id))
            .json(payload)?
            .execute()
            .await
    }

    /// Delete a gallery image
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/gallery/{}", id))
            .execute_empty()
            .await
    }

    /// Upload an image file (multipart, bearer auth)
    pub async fn upload(&self, filename: &str, data: Vec<u8>) -> Result<GalleryImage, Error> {
        let form = multipart::Form::new().part(
            "image",
            multipart::Part::bytes(data).file_name(filename.to_string()),
        );
        self.http.post("/gallery/upload").multipart(form).execute().await
    }
}
