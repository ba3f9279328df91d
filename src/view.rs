//! Pure view-side derivations
//!
//! Everything here is recomputed on demand from backend data and never
//! written back: temporal event status, deterministic color tags, slug
//! generation and reverse lookup, and the public search filters.

use chrono::{DateTime, Utc};

use crate::models::{Artist, Event, GalleryCategory, GalleryImage};

/// Whether an event lies in the future or the past, derived from its
/// date on every use. Distinct from the stored lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalStatus {
    /// `date >= now`; an event happening this instant counts as upcoming
    Upcoming,
    /// `date < now`
    Past,
}

/// Classify an event date against a reference instant
pub fn temporal_status(date: DateTime<Utc>, now: DateTime<Utc>) -> TemporalStatus {
    if date >= now {
        TemporalStatus::Upcoming
    } else {
        TemporalStatus::Past
    }
}

impl Event {
    /// Derive this event's temporal status; never cached
    pub fn temporal_status(&self, now: DateTime<Utc>) -> TemporalStatus {
        temporal_status(self.date, now)
    }
}

/// Fixed ordered palette for event color tags
pub const EVENT_COLORS: [&str; 8] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
];

/// 32-bit signed string hash, compatible with the classic
/// `h = ((h << 5) - h + code) | 0` loop over UTF-16 code units.
fn string_hash(input: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(code as i32);
    }
    hash
}

/// Deterministic color tag for an id.
///
/// The same id always maps to the same palette entry, across processes
/// and sessions; there is no randomness or time-based seeding.
pub fn color_for_id(id: &str) -> &'static str {
    let index = string_hash(id).unsigned_abs() as usize % EVENT_COLORS.len();
    EVENT_COLORS[index]
}

/// URL slug for a name: lowercased, every whitespace run collapsed to a
/// single hyphen. Leading or trailing whitespace becomes a hyphen too;
/// reverse lookup uses the same function so the round trip holds.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Find the artist whose name slugifies to the given path segment.
///
/// Comparison is case-insensitive. Two distinct names can slugify
/// identically; the first match in roster order wins.
pub fn find_by_slug<'a>(artists: &'a [Artist], segment: &str) -> Option<&'a Artist> {
    artists
        .iter()
        .find(|artist| slug(&artist.name).eq_ignore_ascii_case(segment))
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Search and genre filter over the artist roster.
///
/// The search term matches case-insensitively as a substring of name,
/// bio or genre; the genre clause is an exact match, disabled by `None`
/// or the `"all"` sentinel. Clauses combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ArtistFilter {
    /// Free-text search term
    pub search: Option<String>,

    /// Exact genre to keep; `None` or `"all"` keeps every genre
    pub genre: Option<String>,
}

impl ArtistFilter {
    /// Whether one artist passes the filter
    pub fn matches(&self, artist: &Artist) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = artist.name.to_lowercase().contains(&term)
                || contains_ci(artist.bio.as_deref(), &term)
                || contains_ci(artist.genre.as_deref(), &term);
            if !hit {
                return false;
            }
        }
        if let Some(genre) = self
            .genre
            .as_deref()
            .filter(|g| !g.eq_ignore_ascii_case("all"))
        {
            if artist.genre.as_deref() != Some(genre) {
                return false;
            }
        }
        true
    }

    /// Filter a roster, preserving source order; the input is untouched
    pub fn apply<'a>(&self, artists: &'a [Artist]) -> Vec<&'a Artist> {
        artists.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Search and category filter over gallery images.
///
/// The search term matches caption, the owning event's title, or the
/// photographer credit; the category clause is exact, disabled by `None`.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    /// Free-text search term
    pub search: Option<String>,

    /// Category to keep; `None` keeps every category
    pub category: Option<GalleryCategory>,
}

impl GalleryFilter {
    /// Whether one image passes the filter; the owning event's title is
    /// supplied by the caller since images carry only the event id
    pub fn matches(&self, image: &GalleryImage, event_title: Option<&str>) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = contains_ci(image.caption.as_deref(), &term)
                || contains_ci(event_title, &term)
                || contains_ci(image.photographer.as_deref(), &term);
            if !hit {
                return false;
            }
        }
        if let Some(category) = self.category {
            if image.category != Some(category) {
                return false;
            }
        }
        true
    }

    /// Filter images, preserving source order; `event_title_for` maps an
    /// image to the title of its owning event
    pub fn apply<'a>(
        &self,
        images: &'a [GalleryImage],
        event_title_for: impl Fn(&GalleryImage) -> Option<String>,
    ) -> Vec<&'a GalleryImage> {
        images
            .iter()
            .filter(|image| self.matches(image, event_title_for(image).as_deref()))
            .collect()
    }
}

/// Order gallery images by their display sort key, ascending
pub fn sort_by_display_order(images: &mut [GalleryImage]) {
    images.sort_by_key(|image| image.order_index);
}

/// Order events by date, newest first
pub fn sort_events_newest_first(events: &mut [Event]) {
    events.sort_by(|a, b| b.date.cmp(&a.date));
}
