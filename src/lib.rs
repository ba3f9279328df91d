//! L8 Events Rust Client Library
//!
//! A Rust client for the L8 Events platform, covering the public
//! marketing surface (events, artist roster, gallery, contact form) and
//! the authenticated admin console (events, artists, venues, gallery,
//! messages, account management) of its REST backend.

pub mod artists;
pub mod auth;
pub mod config;
pub mod contact;
pub mod error;
pub mod event_artists;
pub mod events;
pub mod gallery;
pub mod models;
pub mod resource;
pub mod urls;
pub mod users;
pub mod venues;
pub mod view;

mod fetch;

use std::future::Future;

use reqwest::Client;

use crate::artists::ArtistsClient;
use crate::auth::TokenStore;
use crate::config::{ClientOptions, PlatformChoice};
use crate::contact::ContactClient;
use crate::event_artists::EventArtistsClient;
use crate::events::EventsClient;
use crate::error::Error;
use crate::fetch::Http;
use crate::gallery::GalleryClient;
use crate::resource::Resource;
use crate::urls::UrlResolver;
use crate::users::UsersClient;
use crate::venues::VenuesClient;

/// The main entry point for the L8 Events client
pub struct L8Events {
    /// Resolved API base URL all resource paths are appended to
    pub api_url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Shared bearer-token store; the single source of truth for
    /// "is authenticated"
    pub tokens: TokenStore,
    /// Client options
    pub options: ClientOptions,
    resolver: UrlResolver,
}

impl L8Events {
    /// Create a client with default options (production backend)
    ///
    /// # Example
    ///
    /// ```
    /// use l8_events_client::L8Events;
    ///
    /// let client = L8Events::new();
    /// ```
    pub fn new() -> Self {
        Self::new_with_options(ClientOptions::default())
    }

    /// Create a client configured from `L8_API_URL`, `L8_BACKEND_URL`
    /// and `L8_PRODUCTION_BACKEND_URL`
    pub fn from_env() -> Self {
        Self::new_with_options(ClientOptions::from_env())
    }

    /// Create a client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use l8_events_client::{L8Events, config::ClientOptions};
    ///
    /// let options = ClientOptions::default().with_api_url("http://localhost:3000/api");
    /// let client = L8Events::new_with_options(options);
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_else(|_| Client::new());

        let api_url = resolve_api_url(&options);
        let resolver = UrlResolver::new(&options);

        Self {
            api_url,
            http_client,
            tokens: TokenStore::new(),
            options,
            resolver,
        }
    }

    /// The shared token store, for seeding or clearing the session
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Which sub-experience this client serves
    pub fn platform(&self) -> PlatformChoice {
        self.options.platform
    }

    /// Wrap a fetcher in a [`Resource`] that follows this client's
    /// configured retry policy
    pub fn resource<T, F, Fut>(&self, fetcher: F) -> Resource<T, F>
    where
        T: Clone,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        Resource::new(fetcher)
            .with_retry_policy(self.options.max_retries, self.options.retry_backoff)
    }

    fn http(&self) -> Http {
        Http::new(
            self.http_client.clone(),
            &self.api_url,
            self.tokens.clone(),
            self.resolver.clone(),
        )
    }

    /// Client for the artist roster
    pub fn artists(&self) -> ArtistsClient {
        ArtistsClient::new(self.http())
    }

    /// Client for events
    pub fn events(&self) -> EventsClient {
        EventsClient::new(self.http())
    }

    /// Client for venues
    pub fn venues(&self) -> VenuesClient {
        VenuesClient::new(self.http())
    }

    /// Client for gallery images
    pub fn gallery(&self) -> GalleryClient {
        GalleryClient::new(self.http())
    }

    /// Client for contact messages
    pub fn contact(&self) -> ContactClient {
        ContactClient::new(self.http())
    }

    /// Client for users and accounts
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.http())
    }

    /// Client for event-artist join records
    pub fn event_artists(&self) -> EventArtistsClient {
        EventArtistsClient::new(self.http())
    }
}

impl Default for L8Events {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the API base URL: an explicit override wins, a local origin
/// points at the local backend, anything else at production.
fn resolve_api_url(options: &ClientOptions) -> String {
    if let Some(api_url) = &options.api_url {
        return api_url.trim_end_matches('/').to_string();
    }
    if let Some(backend) = &options.backend_url {
        return format!("{}/api", backend.trim_end_matches('/'));
    }
    if options.is_local_origin() {
        return "http://localhost:3000/api".to_string();
    }
    format!(
        "{}/api",
        options.production_backend_url.trim_end_matches('/')
    )
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::TokenStore;
    pub use crate::config::{ClientOptions, PlatformChoice};
    pub use crate::error::Error;
    pub use crate::resource::{Mutation, OptimisticList, Resource};
    pub use crate::view::TemporalStatus;
    pub use crate::L8Events;
}
