//! Configuration options for the L8 Events client

use std::env;
use std::time::Duration;

/// Default production backend origin, used when no override is configured
/// and the client is not running against a local origin.
pub const DEFAULT_PRODUCTION_URL: &str = "https://l8events.dk";

/// Which sub-experience a visitor is shown.
///
/// Upstream this was derived from hostname sniffing with a query-parameter
/// escape hatch; here it is a plain configuration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformChoice {
    /// The public events experience
    #[default]
    Events,
    /// The artist-booking experience
    Booking,
}

/// Configuration options for the L8 Events client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Explicit API base URL; overrides all origin heuristics
    pub api_url: Option<String>,

    /// Backend origin to prepend to relative asset paths
    pub backend_url: Option<String>,

    /// Production backend origin used when nothing else is configured
    pub production_backend_url: String,

    /// The origin the client itself runs against, used for the
    /// localhost dev-proxy heuristic (relative paths stay relative)
    pub origin: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Extra attempts after a transient network failure
    pub max_retries: u32,

    /// Base backoff unit; attempt n waits n times this long
    pub retry_backoff: Duration,

    /// Which sub-experience this client serves
    pub platform: PlatformChoice,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: None,
            backend_url: None,
            production_backend_url: DEFAULT_PRODUCTION_URL.to_string(),
            origin: DEFAULT_PRODUCTION_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            max_retries: 2,
            retry_backoff: Duration::from_secs(1),
            platform: PlatformChoice::default(),
        }
    }
}

impl ClientOptions {
    /// Load options from the environment.
    ///
    /// Reads `L8_API_URL`, `L8_BACKEND_URL` and `L8_PRODUCTION_BACKEND_URL`;
    /// unset variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        options.api_url = env::var("L8_API_URL").ok().filter(|v| !v.is_empty());
        options.backend_url = env::var("L8_BACKEND_URL").ok().filter(|v| !v.is_empty());
        if let Ok(url) = env::var("L8_PRODUCTION_BACKEND_URL") {
            if !url.is_empty() {
                options.production_backend_url = url;
            }
        }
        options
    }

    /// Set the explicit API base URL
    pub fn with_api_url(mut self, value: &str) -> Self {
        self.api_url = Some(value.to_string());
        self
    }

    /// Set the backend origin for relative asset paths
    pub fn with_backend_url(mut self, value: &str) -> Self {
        self.backend_url = Some(value.to_string());
        self
    }

    /// Set the production backend origin
    pub fn with_production_backend_url(mut self, value: &str) -> Self {
        self.production_backend_url = value.to_string();
        self
    }

    /// Set the origin the client runs against
    pub fn with_origin(mut self, value: &str) -> Self {
        self.origin = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the number of extra attempts after a transient failure
    pub fn with_max_retries(mut self, value: u32) -> Self {
        self.max_retries = value;
        self
    }

    /// Set the base backoff unit between retries
    pub fn with_retry_backoff(mut self, value: Duration) -> Self {
        self.retry_backoff = value;
        self
    }

    /// Set the sub-experience this client serves
    pub fn with_platform(mut self, value: PlatformChoice) -> Self {
        self.platform = value;
        self
    }

    /// Whether the configured origin is a local development origin
    pub fn is_local_origin(&self) -> bool {
        self.origin.contains("localhost") || self.origin.contains("127.0.0.1")
    }
}
