//! ==============================================================================
//! api.rs - client for the museum collection endpoint
//! ==============================================================================
//!
//! endpoints:
//!     GET    /museums?city=&name=   -> [Museum]
//!     POST   /museums               -> Museum | null
//!     PUT    /museums/:id           -> Museum | null
//!     DELETE /museums/:id
//!
//! every call is single-shot: no retry, no caching, no timeout.
//!
//! ==============================================================================

use gloo_net::http::{Request, Response};
use museum_shared::{Museum, MuseumDraft, MuseumId, MuseumQuery};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    /// the request never got a response
    #[error(transparent)]
    Transport(#[from] gloo_net::Error),

    #[error("Http failure response for {url}: {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("Http failure during parsing: {0}")]
    Decode(#[from] serde_json::Error),
}

// ==============================================================================
// transport contract
// ==============================================================================

/// the four operations the museums screen needs from the backend
///
/// `create` and `update` return `Ok(None)` when the backend answered
/// successfully but sent no record back. callers treat that as a failure.
#[allow(async_fn_in_trait)]
pub trait MuseumApi {
    async fn list(&self, query: &MuseumQuery) -> Result<Vec<Museum>, ApiError>;

    async fn create(&self, museum: &Museum) -> Result<Option<Museum>, ApiError>;

    async fn update(&self, draft: &MuseumDraft, id: MuseumId) -> Result<Option<Museum>, ApiError>;

    async fn remove(&self, id: MuseumId) -> Result<(), ApiError>;
}

// ==============================================================================
// gloo-net implementation
// ==============================================================================

#[derive(Debug, Clone, Default)]
pub struct HttpMuseumApi {
    config: ApiConfig,
}

impl HttpMuseumApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl MuseumApi for HttpMuseumApi {
    async fn list(&self, query: &MuseumQuery) -> Result<Vec<Museum>, ApiError> {
        log::debug!("GET museums city={:?} name={:?}", query.city, query.name);
        let response = Request::get(&self.config.collection_url())
            .query(query.pairs())
            .send()
            .await?;
        let body = checked_body(response).await?;
        decode_list(&body)
    }

    async fn create(&self, museum: &Museum) -> Result<Option<Museum>, ApiError> {
        log::debug!("POST museum {:?}", museum.name);
        let response = Request::post(&self.config.collection_url())
            .json(museum)?
            .send()
            .await?;
        let body = checked_body(response).await?;
        decode_optional(&body)
    }

    async fn update(&self, draft: &MuseumDraft, id: MuseumId) -> Result<Option<Museum>, ApiError> {
        log::debug!("PUT museum {}", id);
        let response = Request::put(&self.config.record_url(id))
            .json(draft)?
            .send()
            .await?;
        let body = checked_body(response).await?;
        decode_optional(&body)
    }

    async fn remove(&self, id: MuseumId) -> Result<(), ApiError> {
        log::debug!("DELETE museum {}", id);
        let response = Request::delete(&self.config.record_url(id)).send().await?;
        checked_body(response).await?;
        Ok(())
    }
}

/// read the body of a 2xx response, or turn the status into an error
async fn checked_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            url: response.url(),
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response.text().await?)
}

// ==============================================================================
// body decoding
// ==============================================================================

fn decode_list(body: &str) -> Result<Vec<Museum>, ApiError> {
    Ok(decode_nullable::<Vec<Museum>>(body)?.unwrap_or_default())
}

fn decode_optional(body: &str) -> Result<Option<Museum>, ApiError> {
    decode_nullable(body)
}

/// empty bodies and a bare `null` both decode to `None`
fn decode_nullable<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(body)?)
}

// ==============================================================================
// tests
// ==============================================================================
