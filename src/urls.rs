//! Backend URL resolution for API calls and image assets
//!
//! The backend returns image paths relative to its own origin. Which
//! origin that is depends on deployment: an explicit override, a local
//! dev proxy, or the production default. [`UrlResolver`] centralizes the
//! decision, and [`ResolveImageUrls`] maps it over the image-bearing
//! fields of each response model.

use crate::config::ClientOptions;

/// Resolves relative backend paths into absolute URLs
#[derive(Debug, Clone)]
pub struct UrlResolver {
    backend_url: Option<String>,
    production_backend_url: String,
    local_origin: bool,
}

impl UrlResolver {
    /// Build a resolver from client options; configured origins are
    /// normalized so a trailing slash never doubles up against the path
    pub fn new(options: &ClientOptions) -> Self {
        Self {
            backend_url: options
                .backend_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string()),
            production_backend_url: options
                .production_backend_url
                .trim_end_matches('/')
                .to_string(),
            local_origin: options.is_local_origin(),
        }
    }

    /// Resolve a backend-relative path into an absolute URL.
    ///
    /// Rules, in order: empty input stays empty; already-absolute input
    /// is returned unchanged; a configured backend origin is prepended;
    /// on a local origin the path stays relative (the dev proxy serves
    /// it); otherwise the production origin is prepended.
    ///
    /// Idempotent: resolving an already-resolved URL is a no-op.
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with("http") {
            return path.to_string();
        }
        if let Some(backend) = &self.backend_url {
            return format!("{}{}", backend, path);
        }
        if self.local_origin {
            return path.to_string();
        }
        format!("{}{}", self.production_backend_url, path)
    }

    /// Resolve an optional path in place
    pub fn resolve_opt(&self, path: &mut Option<String>) {
        if let Some(p) = path {
            *p = self.resolve(p);
        }
    }
}

/// Typed mapping from a model's image-bearing fields to URL resolution.
///
/// Each model names exactly the fields that carry backend asset paths
/// and recurses into nested models, so unrelated fields that happen to
/// be called `url` are never touched and no field is resolved twice.
pub trait ResolveImageUrls {
    /// Rewrite every image-bearing field through the resolver
    fn resolve_image_urls(&mut self, resolver: &UrlResolver);
}

impl<T: ResolveImageUrls> ResolveImageUrls for Vec<T> {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        for item in self {
            item.resolve_image_urls(resolver);
        }
    }
}

impl<T: ResolveImageUrls> ResolveImageUrls for Option<T> {
    fn resolve_image_urls(&mut self, resolver: &UrlResolver) {
        if let Some(item) = self {
            item.resolve_image_urls(resolver);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(options: ClientOptions) -> UrlResolver {
        UrlResolver::new(&options)
    }

    #[test]
    fn empty_path_stays_empty() {
        let r = resolver(ClientOptions::default());
        assert_eq!(r.resolve(""), "");
    }

    #[test]
    fn absolute_url_is_unchanged() {
        let r = resolver(ClientOptions::default());
        assert_eq!(r.resolve("http://x"), "http://x");
        assert_eq!(r.resolve("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn production_origin_is_prepended_by_default() {
        let r = resolver(ClientOptions::default());
        assert_eq!(r.resolve("/uploads/a.jpg"), "https://l8events.dk/uploads/a.jpg");
    }

    #[test]
    fn configured_backend_wins() {
        let r = resolver(ClientOptions::default().with_backend_url("https://api.example.com"));
        assert_eq!(r.resolve("/uploads/a.jpg"), "https://api.example.com/uploads/a.jpg");
    }

    #[test]
    fn local_origin_keeps_paths_relative() {
        let r = resolver(ClientOptions::default().with_origin("http://localhost:5173"));
        assert_eq!(r.resolve("/uploads/a.jpg"), "/uploads/a.jpg");
    }

    #[test]
    fn backend_override_beats_local_origin() {
        let r = resolver(
            ClientOptions::default()
                .with_origin("http://localhost:5173")
                .with_backend_url("http://localhost:3000"),
        );
        assert_eq!(r.resolve("/uploads/a.jpg"), "http://localhost:3000/uploads/a.jpg");
    }

    #[test]
    fn trailing_slashes_on_configured_origins_do_not_double() {
        let r = resolver(ClientOptions::default().with_backend_url("https://api.example.com/"));
        assert_eq!(r.resolve("/uploads/a.jpg"), "https://api.example.com/uploads/a.jpg");

        let r = resolver(ClientOptions::default().with_production_backend_url("https://x/"));
        assert_eq!(r.resolve("/uploads/a.jpg"), "https://x/uploads/a.jpg");
    }

    #[test]
    fn resolve_is_idempotent() {
        for options in [
            ClientOptions::default(),
            ClientOptions::default().with_backend_url("https://api.example.com"),
            ClientOptions::default().with_origin("http://127.0.0.1:8080"),
        ] {
            let r = resolver(options);
            for path in ["", "/uploads/a.jpg", "https://x/y.png"] {
                let once = r.resolve(path);
                assert_eq!(r.resolve(&once), once);
            }
        }
    }
}
