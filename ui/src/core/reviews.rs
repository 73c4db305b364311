//! Testimonials: one best-effort read of Google Places reviews, with the
//! compiled-in list as fallback.

use serde::Deserialize;
use thiserror::Error;

use crate::core::config::SiteConfig;
use crate::core::content::FALLBACK_TESTIMONIALS;
use crate::i18n::{tr, Lang};

pub const PLACES_BASE_URL: &str = "https://maps.googleapis.com";
pub const PLACE_DETAILS_PATH: &str = "/maps/api/place/details/json";
pub const PLACE_DETAILS_FIELDS: &str = "reviews,rating,user_ratings_total";
/// Upper bound on displayed live reviews.
pub const MAX_REVIEWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub author: String,
    /// 1..=5
    pub rating: u8,
    pub text: String,
    pub relative_time: String,
}

#[derive(Debug, Error)]
pub enum ReviewsError {
    #[error("places request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("places endpoint answered HTTP {0}")]
    Status(u16),

    #[error("places response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("places API status {status}: {message}")]
    Api { status: String, message: String },
}

/// Why the fallback list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    Unavailable,
    Empty,
}

/// Outcome of the one-shot read. `Live` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSet {
    Live(Vec<Testimonial>),
    Fallback(FallbackReason),
}

impl ReviewSet {
    /// The list to display: live reviews, or the localised fallback list.
    pub fn testimonials(&self, lang: Lang) -> Vec<Testimonial> {
        match self {
            ReviewSet::Live(list) => list.clone(),
            ReviewSet::Fallback(_) => fallback_testimonials(lang),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ReviewSet::Live(_))
    }
}

/// Testimonials section state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReviewsState {
    #[default]
    Loading,
    Loaded(ReviewSet),
}

impl From<Option<ReviewSet>> for ReviewsState {
    fn from(value: Option<ReviewSet>) -> Self {
        value.map_or(ReviewsState::Loading, ReviewsState::Loaded)
    }
}

pub fn fallback_testimonials(lang: Lang) -> Vec<Testimonial> {
    FALLBACK_TESTIMONIALS
        .iter()
        .map(|t| Testimonial {
            author: t.author.to_string(),
            rating: t.rating,
            text: tr(lang, t.text_key),
            relative_time: tr(lang, t.when_key),
        })
        .collect()
}

/// Credentials for the place-details read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    pub place_id: String,
    pub api_key: String,
}

impl PlaceQuery {
    /// `None` unless both the API key and the place id are configured.
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        Some(Self {
            place_id: config.place_id.clone()?,
            api_key: config.places_api_key.clone()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceDetails {
    #[serde(default)]
    reviews: Vec<PlaceReview>,
}

#[derive(Debug, Deserialize)]
struct PlaceReview {
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    text: String,
    #[serde(default)]
    relative_time_description: String,
}

impl From<PlaceReview> for Testimonial {
    fn from(review: PlaceReview) -> Self {
        Self {
            author: review.author_name,
            rating: review.rating.round().clamp(1.0, 5.0) as u8,
            text: review.text,
            relative_time: review.relative_time_description,
        }
    }
}

/// Thin client for the place-details endpoint.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for PlacesClient {
    fn default() -> Self {
        Self::new(PLACES_BASE_URL)
    }
}

impl PlacesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// One GET; at most [`MAX_REVIEWS`] reviews, in the order returned.
    pub async fn fetch(&self, query: &PlaceQuery) -> Result<Vec<Testimonial>, ReviewsError> {
        let url = format!("{}{PLACE_DETAILS_PATH}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("place_id", query.place_id.as_str()),
                ("fields", PLACE_DETAILS_FIELDS),
                ("key", query.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let details: PlaceDetailsResponse = serde_json::from_str(&body)?;
        match details.status.as_deref() {
            None | Some("OK") => {}
            Some(other) => {
                return Err(ReviewsError::Api {
                    status: other.to_string(),
                    message: details.error_message.unwrap_or_default(),
                })
            }
        }

        Ok(details
            .result
            .unwrap_or_default()
            .reviews
            .into_iter()
            .take(MAX_REVIEWS)
            .map(Testimonial::from)
            .collect())
    }
}

/// Resolve the testimonials for a page instance. Never fails: every problem
/// lands on [`ReviewSet::Fallback`].
pub async fn load_reviews(client: &PlacesClient, config: &SiteConfig) -> ReviewSet {
    let Some(query) = PlaceQuery::from_config(config) else {
        tracing::info!("reviews not configured; using fallback testimonials");
        return ReviewSet::Fallback(FallbackReason::NotConfigured);
    };

    match client.fetch(&query).await {
        Ok(list) if list.is_empty() => {
            tracing::info!("places returned no reviews; using fallback testimonials");
            ReviewSet::Fallback(FallbackReason::Empty)
        }
        Ok(list) => {
            tracing::info!(count = list.len(), "loaded live reviews");
            ReviewSet::Live(list)
        }
        Err(err) => {
            tracing::warn!(%err, "reviews unavailable; using fallback testimonials");
            ReviewSet::Fallback(FallbackReason::Unavailable)
        }
    }
}
