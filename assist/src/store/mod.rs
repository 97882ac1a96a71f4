//! Listings repository: the read-only seam over the document store.
//!
//! The answering flow depends on [`ListingStore`] instead of a concrete
//! database client; implementations include [`InMemoryListingStore`] (tests,
//! demos) and [`HttpListingStore`] (document-store REST endpoint).
//!
//! Stores report failures honestly via [`StoreError`]. The "degrade to empty"
//! policy the tool contract requires lives one level up, in
//! [`GetInternshipsTool`](crate::tool::GetInternshipsTool), so that direct
//! callers of a store still see real errors.

mod http;
mod in_memory;

pub use http::HttpListingStore;
pub use in_memory::InMemoryListingStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::Listing;

/// An internship posting as the document store holds it.
///
/// Superset of [`Listing`]: carries the posting timestamp used for ordering.
/// `posted_at` is optional because legacy records may lack it; such records
/// sort after all dated ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Posting time; drives the newest-first ordering. Never exposed to the
    /// tool projection.
    #[serde(default, rename = "postedAt")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl StoredListing {
    /// Projects the stored record onto the declared tool output schema.
    pub fn project(&self) -> Listing {
        Listing {
            id: self.id.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// Errors from reading the listings store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network, permission, or timeout failure reaching the store.
    #[error("store transport error: {0}")]
    Transport(String),
    /// The store answered but the payload did not decode.
    #[error("store decode error: {0}")]
    Decode(String),
}

/// Read-only listings source.
///
/// Implementations must be stateless per call and idempotent: the model
/// runtime may invoke the bound tool zero, one, or several times per
/// question, and each invocation re-reads the current snapshot.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Lists open internship postings, newest first.
    async fn list_open(&self) -> Result<Vec<StoredListing>, StoreError>;
}

/// Sorts postings newest-first; records without `posted_at` sink to the end.
pub(crate) fn sort_newest_first(listings: &mut [StoredListing]) {
    listings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}
