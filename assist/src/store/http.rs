//! HTTP listings store: reads the document store's REST endpoint.
//!
//! Expects `GET {base_url}/internships` to return a JSON array of stored
//! postings. Ordering is enforced client-side so callers get newest-first
//! regardless of what the endpoint returns.

use async_trait::async_trait;
use tracing::debug;

use super::{sort_newest_first, ListingStore, StoreError, StoredListing};

/// [`ListingStore`] backed by the document store's HTTP endpoint.
pub struct HttpListingStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpListingStore {
    /// Creates a store for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn listings_url(&self) -> String {
        format!("{}/internships", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ListingStore for HttpListingStore {
    async fn list_open(&self) -> Result<Vec<StoredListing>, StoreError> {
        let url = self.listings_url();
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(StoreError::Transport(format!(
                "listings endpoint returned {status}: {body}"
            )));
        }
        let mut listings: Vec<StoredListing> = res
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        sort_newest_first(&mut listings);
        debug!(url = %url, count = listings.len(), "fetched open listings");
        Ok(listings)
    }
}
