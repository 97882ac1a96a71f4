//! In-memory listings store for tests and demos.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{sort_newest_first, ListingStore, StoreError, StoredListing};

/// Seedable in-memory [`ListingStore`].
///
/// Extras for tests: a fail switch that makes `list_open` return a transport
/// error (degradation-path tests) and a call counter so tests can assert how
/// often the tool actually hit the store.
#[derive(Default)]
pub struct InMemoryListingStore {
    listings: Mutex<Vec<StoredListing>>,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryListingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given postings.
    pub fn with_listings(listings: Vec<StoredListing>) -> Self {
        Self {
            listings: Mutex::new(listings),
            ..Self::default()
        }
    }

    /// Adds one posting.
    pub fn push(&self, listing: StoredListing) {
        self.listings.lock().expect("listings lock").push(listing);
    }

    /// When `true`, every `list_open` fails with a transport error.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `list_open` calls so far (including failed ones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn list_open(&self) -> Result<Vec<StoredListing>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("injected store failure".into()));
        }
        let mut listings = self.listings.lock().expect("listings lock").clone();
        sort_newest_first(&mut listings);
        Ok(listings)
    }
}
