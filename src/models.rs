//! Data transfer objects for the L8 Events REST backend
//!
//! All records are backend-owned; the client only holds ephemeral copies
//! and requests create/update/delete through the resource clients. Wire
//! names are camelCase. Each fetched model names its image-bearing
//! fields through [`ResolveImageUrls`] so asset paths come back absolute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::urls::{ResolveImageUrls, UrlResolver};

/// Third-party platforms an artist embed can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedPlatform {
    Spotify,
    Youtube,
    Soundcloud,
}

/// Backend-stored event lifecycle status.
///
/// Distinct from the derived temporal status (upcoming/past), which is
/// recomputed from the event date on every use and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// Gallery image categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Event,
    Venue,
    Artist,
    Other,
}

/// Admin-assigned priority on a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    Low,
    Medium,
    High,
}

/// A single social media link on an artist profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    /// Platform name as entered by the admin
    pub platform: String,
    /// Profile URL
    pub url: String,
}

/// Normalize the legacy shapes of the `socialMedia` field.
///
/// Accepted inputs: an array of `{platform, url}` objects (passed
/// through), a JSON-encoded string of such an array (parsed), a plain
/// string (wrapped as a single `"Legacy"` entry), anything else
/// (empty). Total over arbitrary JSON; never fails.
pub fn normalize_social_media(value: Option<&serde_json::Value>) -> Vec<SocialMediaLink> {
    match value {
        Some(array @ serde_json::Value::Array(_)) => {
            serde_json::from_value(array.clone()).unwrap_or_default()
        }
        Some(serde_json::Value::String(s)) => {
            if let Ok(links) = serde_json::from_str::<Vec<SocialMediaLink>>(s) {
                links
            } else if s.is_empty() {
                Vec::new()
            } else {
                vec![SocialMediaLink {
                    platform: "Legacy".to_string(),
                    url: s.clone(),
                }]
            }
        }
        _ => Vec::new(),
    }
}

fn deserialize_social_media<'de, D>(deserializer: D) -> Result<Vec<SocialMediaLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(normalize_social_media(value.as_ref()))
}

/// A stored third-party media embed associated with an artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embedding {
    /// Unique identifier
    pub id: String,

    /// Source platform
    pub platform: EmbedPlatform,

    /// Raw embed markup from the platform
    pub embed_code: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Display description
    #[serde(default)]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An artist on the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Biography text
    #[serde(default)]
    pub bio: Option<String>,

    /// Profile image path
    #[serde(default)]
    pub image_url: Option<String>,

    /// External website link
    #[serde(default)]
    pub website: Option<String>,

    /// Social media links; tolerates the legacy string encodings
    #[serde(default, deserialize_with = "deserialize_social_media")]
    pub social_media: Vec<SocialMediaLink>,

    /// Stored media embeds
    #[serde(default)]
    pub embeddings: Vec<Embedding>,

    /// Musical genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Whether the artist is available for booking
    #[serde(default)]
    pub is_bookable: bool,

    /// Linked booking contact user id
    #[serde(default)]
    pub booking_user_id: Option<String>,

    /// Linked booking contact, when expanded by the backend
    #[serde(default)]
    pub booking_user: Option<User>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A join record linking one event to one performing artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventArtist {
    /// Unique identifier of the join record
    #[serde(default)]
    pub id: Option<String>,

    /// Linked event id
    pub event_id: String,

    /// Linked artist id
    pub artist_id: String,

    /// The performing artist, when expanded by the backend
    #[serde(default)]
    pub artist: Option<Artist>,
}

/// An event produced by the business
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: String,

    /// Event title
    pub title: String,

    /// Long-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Event date; temporal status derives from this, never from storage
    pub date: DateTime<Utc>,

    /// Doors-open time
    #[serde(default)]
    pub start_time: Option<String>,

    /// End time
    #[serde(default)]
    pub end_time: Option<String>,

    /// Ticket price
    #[serde(default)]
    pub ticket_price: Option<f64>,

    /// Total tickets available
    #[serde(default)]
    pub total_tickets: Option<u32>,

    /// Tickets sold so far
    #[serde(default)]
    pub sold_tickets: Option<u32>,

    /// Poster image path
    #[serde(default)]
    pub image_url: Option<String>,

    /// External ticket vendor link
    #[serde(default, rename = "billettoURL")]
    pub billetto_url: Option<String>,

    /// Backend lifecycle status
    #[serde(default)]
    pub status: Option<EventStatus>,

    /// Venue capacity override
    #[serde(default)]
    pub capacity: Option<u32>,

    /// The venue, when expanded by the backend
    #[serde(default)]
    pub venue: Option<Venue>,

    /// Performing artists via join records
    #[serde(default)]
    pub event_artists: Vec<EventArtist>,

    /// Gallery images attached to this event
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A venue events are hosted at
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique identifier
    pub id: String,

    /// Venue name
    pub name: String,

    /// Street address
    #[serde(default)]
    pub address: Option<String>,

    /// City
    #[serde(default)]
    pub city: Option<String>,

    /// Description text
    #[serde(default)]
    pub description: Option<String>,

    /// Primary image path
    #[serde(default)]
    pub image_url: Option<String>,

    /// Additional image paths
    #[serde(default)]
    pub images: Vec<String>,

    /// Audience capacity
    #[serde(default)]
    pub capacity: Option<u32>,

    /// Embedded map markup
    #[serde(default)]
    pub map_embed_html: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A published or draft gallery image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// Unique identifier
    pub id: String,

    /// Stored filename
    #[serde(default)]
    pub filename: Option<String>,

    /// Full-size image path
    pub url: String,

    /// Thumbnail variant path
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Medium variant path
    #[serde(default)]
    pub medium_url: Option<String>,

    /// Large variant path
    #[serde(default)]
    pub large_url: Option<String>,

    /// Caption text
    #[serde(default)]
    pub caption: Option<String>,

    /// Event this image belongs to
    #[serde(default)]
    pub event_id: Option<String>,

    /// Photographer credit
    #[serde(default)]
    pub photographer: Option<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Categorization
    #[serde(default)]
    pub category: Option<GalleryCategory>,

    /// Display sort key, ascending
    #[serde(default)]
    pub order_index: i32,

    /// Whether the image is publicly visible
    #[serde(default)]
    pub is_published: bool,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A message submitted through the public contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Unique identifier
    pub id: String,

    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Subject line
    #[serde(default)]
    pub subject: Option<String>,

    /// Message body
    pub message: String,

    /// Whether an admin has read the message
    #[serde(default, alias = "read")]
    pub is_read: bool,

    /// Admin-assigned priority
    #[serde(default)]
    pub priority: Option<MessagePriority>,

    /// Message type
    #[serde(default, rename = "type")]
    pub message_type: Option<String>,

    /// Handling status
    #[serde(default)]
    pub status: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An admin or booking-contact user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,

    /// Email address
    pub email: String,

    /// Full display name
    #[serde(default)]
    pub name: Option<String>,

    /// First name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Postal address
    #[serde(default)]
    pub address: Option<String>,

    /// Avatar image path
    #[serde(default)]
    pub image_url: Option<String>,

    /// Role name
    #[serde(default)]
    pub role: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response from a multipart image upload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Path of the stored image
    pub url: String,

    /// Stored filename
    #[serde(default)]
    pub filename: Option<String>,
}

impl ResolveImageUrls for Artist {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        resolver.resolve_opt(&mut self.image_url);
        self.booking_user.resolve_image_urls(resolver);
    }
}

impl ResolveImageUrls for Embedding {
    // embeds carry third-party markup, no backend asset paths
    fn resolve_image_urls(&mut self, _resolver: &UrlResolver) {}
}

impl ResolveImageUrls for EventArtist {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        self.artist.resolve_image_urls(resolver);
    }
}

impl ResolveImageUrls for Event {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        resolver.resolve_opt(&mut self.image_url);
        self.venue.resolve_image_urls(resolver);
        self.event_artists.resolve_image_urls(resolver);
        self.gallery_images.resolve_image_urls(resolver);
    }
}

impl ResolveImageUrls for Venue {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        resolver.resolve_opt(&mut self.image_url);
        for image in &mut self.images {
            *image = resolver.resolve(image);
        }
    }
}

impl ResolveImageUrls for GalleryImage {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        self.url = resolver.resolve(&self.url);
        resolver.resolve_opt(&mut self.thumbnail_url);
        resolver.resolve_opt(&mut self.medium_url);
        resolver.resolve_opt(&mut self.large_url);
    }
}

impl ResolveImageUrls for ContactMessage {
    fn resolve_image_urls(&mut self, _resolver: &UrlResolver) {}
}

impl ResolveImageUrls for User {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        resolver.resolve_opt(&mut self.image_url);
    }
}

impl ResolveImageUrls for UploadedImage {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        self.url = resolver.resolve(&self.url);
    }
}
