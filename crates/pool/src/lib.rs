//! The offer pool read boundary.
//!
//! Offer lifecycle (admission, matching, expiry) belongs to the
//! scheduler's offer tracker; this crate only fixes the read contract the
//! introspection endpoint depends on, plus an in-memory pool for the dev
//! server and tests. A snapshot is an ordered copy of whatever the pool
//! holds at call time, still in wire shape. No ordering is promised beyond
//! internal consistency at snapshot time.

use std::sync::RwLock;

use offerscope_types::wire;
use thiserror::Error;

/// Failure to read the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The pool could not serve a snapshot at all.
    #[error("offer pool unavailable: {reason}")]
    Unavailable { reason: String },
}

impl PoolError {
    /// Creates an unavailable error with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Read access to the offers a scheduler currently holds.
///
/// Implementations must tolerate concurrent callers; the read is expected
/// to be in-memory and fast. Callers never retain a snapshot beyond one
/// request.
pub trait OfferPool: Send + Sync {
    /// An ordered copy of the currently held offers.
    fn snapshot(&self) -> Result<Vec<wire::Offer>, PoolError>;
}

/// A pool backed by a guarded vector, for the dev server and tests.
#[derive(Debug, Default)]
pub struct InMemoryOfferPool {
    offers: RwLock<Vec<wire::Offer>>,
}

impl InMemoryOfferPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool preloaded with `offers`, kept in the given order.
    pub fn with_offers(offers: Vec<wire::Offer>) -> Self {
        Self {
            offers: RwLock::new(offers),
        }
    }

    /// Appends one offer at the end of the held collection.
    pub fn insert(&self, offer: wire::Offer) -> Result<(), PoolError> {
        let mut offers = self
            .offers
            .write()
            .map_err(|error| PoolError::unavailable(error.to_string()))?;
        offers.push(offer);
        Ok(())
    }

    /// Drops every held offer.
    pub fn clear(&self) -> Result<(), PoolError> {
        let mut offers = self
            .offers
            .write()
            .map_err(|error| PoolError::unavailable(error.to_string()))?;
        offers.clear();
        Ok(())
    }
}

impl OfferPool for InMemoryOfferPool {
    fn snapshot(&self) -> Result<Vec<wire::Offer>, PoolError> {
        let offers = self
            .offers
            .read()
            .map_err(|error| PoolError::unavailable(error.to_string()))?;
        Ok(offers.clone())
    }
}
