//! Shared state handed to request handlers.

use std::sync::Arc;

use offerscope_pool::OfferPool;

/// State shared by every request: the pool read handle plus the
/// presentation flags resolved at startup.
///
/// Cloning is cheap; handlers only ever read through it.
#[derive(Clone)]
pub struct AppState {
    pool: Arc<dyn OfferPool>,
    include_sample_offer: bool,
}

impl AppState {
    /// Creates state over `pool`.
    pub fn new(pool: Arc<dyn OfferPool>, include_sample_offer: bool) -> Self {
        Self {
            pool,
            include_sample_offer,
        }
    }

    /// The offer pool read handle.
    pub fn pool(&self) -> &dyn OfferPool {
        self.pool.as_ref()
    }

    /// Whether the diagnostic sample offer is appended to responses.
    pub fn include_sample_offer(&self) -> bool {
        self.include_sample_offer
    }
}
