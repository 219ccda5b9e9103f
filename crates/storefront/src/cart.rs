//! Session-backed cart persistence.
//!
//! The cart state machine lives in `vitrine_core::cart`; this module loads
//! it from a per-visitor storage slot at the start of a request and writes
//! the snapshot back after every change. Storage failures never reach the
//! visitor: reads fall back to an empty cart and writes are logged.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tower_sessions::Session;
use tracing::{debug, warn};
use vitrine_core::{Cart, CartError, Product};

/// Session key holding the serialized cart snapshot.
pub const CART_SESSION_KEY: &str = "vitrine-cart";

/// Largest snapshot the session slot accepts.
pub const MAX_SNAPSHOT_BYTES: usize = 64 * 1024;

/// Errors from reading or writing the cart snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cart snapshot is {size} bytes, over the {limit} byte quota")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A single-slot store for the cart snapshot.
pub trait CartStorage: Send + Sync {
    /// Read the stored snapshot, if any.
    fn load(&self) -> impl Future<Output = Result<Option<String>, PersistenceError>> + Send;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: String) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Remove the stored snapshot.
    fn discard(&self) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

fn check_quota(snapshot: &str, limit: usize) -> Result<(), PersistenceError> {
    if snapshot.len() > limit {
        return Err(PersistenceError::QuotaExceeded {
            size: snapshot.len(),
            limit,
        });
    }
    Ok(())
}

impl CartStorage for Session {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.get::<String>(CART_SESSION_KEY).await?)
    }

    async fn save(&self, snapshot: String) -> Result<(), PersistenceError> {
        check_quota(&snapshot, MAX_SNAPSHOT_BYTES)?;
        self.insert(CART_SESSION_KEY, snapshot).await?;
        Ok(())
    }

    async fn discard(&self) -> Result<(), PersistenceError> {
        self.remove::<String>(CART_SESSION_KEY).await?;
        Ok(())
    }
}

/// In-process storage slot for code running outside a session, such as tests.
///
/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct MemoryCartStorage {
    slot: Arc<Mutex<Option<String>>>,
    limit: usize,
}

impl Default for MemoryCartStorage {
    fn default() -> Self {
        Self::with_limit(MAX_SNAPSHOT_BYTES)
    }
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects snapshots larger than `limit` bytes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            limit,
        }
    }

    /// Storage pre-seeded with a raw snapshot.
    #[must_use]
    pub fn seeded(snapshot: impl Into<String>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.slot.try_lock() {
            *slot = Some(snapshot.into());
        }
        storage
    }

    /// Current raw contents of the slot.
    pub async fn raw(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

impl CartStorage for MemoryCartStorage {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, snapshot: String) -> Result<(), PersistenceError> {
        check_quota(&snapshot, self.limit)?;
        *self.slot.lock().await = Some(snapshot);
        Ok(())
    }

    async fn discard(&self) -> Result<(), PersistenceError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// A cart bound to its storage slot.
///
/// Every successful mutation is persisted before the call returns.
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart from `storage`.
    ///
    /// A missing slot yields an empty cart. An unreadable or corrupt
    /// snapshot is logged, discarded and replaced by an empty cart.
    pub async fn open(storage: S) -> Self {
        let cart = match storage.load().await {
            Ok(Some(snapshot)) => match Cart::from_snapshot(&snapshot) {
                Ok(cart) => cart,
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable cart snapshot");
                    if let Err(e) = storage.discard().await {
                        warn!(error = %e, "Failed to discard cart snapshot");
                    }
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load cart snapshot");
                Cart::new()
            }
        };

        Self { storage, cart }
    }

    /// Current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The serialized form written to storage.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CorruptSnapshot` if serialization fails.
    pub fn snapshot(&self) -> Result<String, CartError> {
        self.cart.to_snapshot()
    }

    /// Add `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the product or quantity is
    /// rejected. The cart is left untouched in that case.
    pub async fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        if let Err(e) = self.cart.add_product(product, quantity) {
            warn!(error = %e, product_id = %product.id, "Rejected add to cart");
            return Err(e);
        }
        self.persist().await;
        Ok(())
    }

    /// Remove a line. Returns `false` if the product was not in the cart.
    pub async fn remove_product(&mut self, product_id: &str) -> bool {
        let removed = self.cart.remove_product(product_id);
        if removed {
            self.persist().await;
        }
        removed
    }

    /// Set a line's quantity; values below one remove the line.
    pub async fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(product_id, quantity);
        if changed {
            self.persist().await;
        }
        changed
    }

    pub async fn clear(&mut self) {
        self.cart.clear();
        self.persist().await;
    }

    /// Write the current snapshot, logging any failure.
    async fn persist(&self) {
        if let Err(e) = self.try_persist().await {
            match e {
                PersistenceError::QuotaExceeded { size, limit } => {
                    warn!(size, limit, "Cart snapshot exceeds storage quota, not saved");
                }
                other => warn!(error = %other, "Failed to save cart snapshot"),
            }
        }
    }

    async fn try_persist(&self) -> Result<(), PersistenceError> {
        let snapshot = self.cart.to_snapshot()?;
        debug!(bytes = snapshot.len(), "Saving cart snapshot");
        self.storage.save(snapshot).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64, currency: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{id}"),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            currency_code: currency.to_string(),
            thumbnail: String::new(),
            average_rating: 4.0,
            review_count: 10,
            sku: String::new(),
            categories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_open_empty_slot() {
        let store = CartStore::open(MemoryCartStorage::new()).await;
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let storage = MemoryCartStorage::new();
        let mut store = CartStore::open(storage.clone()).await;
        store.add_product(&product("1", 1000, "EUR"), 2).await.unwrap();

        let reopened = CartStore::open(storage.clone()).await;
        assert_eq!(reopened.cart().quantity_of("1"), 2);
        assert_eq!(reopened.cart().total_price(), 2000);
        assert_eq!(storage.raw().await, Some(store.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn test_rejected_add_leaves_slot_untouched() {
        let storage = MemoryCartStorage::new();
        let mut store = CartStore::open(storage.clone()).await;
        let result = store.add_product(&product("1", 1000, "EUR"), 0).await;

        assert!(matches!(result, Err(CartError::InvalidQuantity(0))));
        assert!(storage.raw().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_discarded() {
        let storage = MemoryCartStorage::seeded("{not json");
        let store = CartStore::open(storage.clone()).await;

        assert!(store.cart().is_empty());
        assert!(storage.raw().await.is_none());
    }

    #[tokio::test]
    async fn test_set_quantity_below_one_removes() {
        let storage = MemoryCartStorage::new();
        let mut store = CartStore::open(storage.clone()).await;
        store.add_product(&product("1", 500, "EUR"), 1).await.unwrap();

        assert!(store.set_quantity("1", 0).await);
        assert!(store.cart().is_empty());

        let reopened = CartStore::open(storage).await;
        assert!(reopened.cart().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_product_is_noop() {
        let mut store = CartStore::open(MemoryCartStorage::new()).await;
        assert!(!store.remove_product("missing").await);
    }

    #[tokio::test]
    async fn test_clear_persists_empty_cart() {
        let storage = MemoryCartStorage::new();
        let mut store = CartStore::open(storage.clone()).await;
        store.add_product(&product("1", 500, "EUR"), 3).await.unwrap();
        store.clear().await;

        assert_eq!(storage.raw().await.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_quota_exceeded_keeps_in_memory_state() {
        let storage = MemoryCartStorage::with_limit(16);
        let mut store = CartStore::open(storage.clone()).await;
        store.add_product(&product("1", 500, "EUR"), 1).await.unwrap();

        assert_eq!(store.cart().quantity_of("1"), 1);
        assert!(storage.raw().await.is_none());
    }

    #[test]
    fn test_check_quota() {
        assert!(check_quota("[]", 2).is_ok());
        assert!(matches!(
            check_quota("[1]", 2),
            Err(PersistenceError::QuotaExceeded { size: 3, limit: 2 })
        ));
    }
}
