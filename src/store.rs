//! The authoritative in-memory product container.
//!
//! Holds the product collection and the busy flag, shared between the UI
//! loop and the gateway worker. `set_all` and `set_loading` are the only
//! mutation points; everything else reads snapshots. Writers are the
//! gateway completion paths only.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::catalog::Product;
use crate::gateway::ProductGateway;

struct StoreInner {
    products: Vec<Product>,
    loading: bool,
}

/// Clone-able handle to the shared product state.
///
/// Subscribers observe changes through a generation counter on a watch
/// channel; every mutation bumps it.
#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<RwLock<StoreInner>>,
    changed: watch::Sender<u64>,
}

impl ProductStore {
    /// Create an empty store: no products, not loading.
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                products: Vec::new(),
                loading: false,
            })),
            changed,
        }
    }

    /// Snapshot of the current product collection, in server order.
    pub fn products(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    /// True exactly while a network operation the store depends on is in
    /// flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }

    /// Replace the product collection.
    pub fn set_all(&self, products: Vec<Product>) {
        self.inner.write().products = products;
        self.notify();
    }

    /// Toggle the busy indicator.
    pub fn set_loading(&self, loading: bool) {
        self.inner.write().loading = loading;
        self.notify();
    }

    /// Subscribe to change notifications. The receiver yields a generation
    /// counter; any bump means "re-read the store".
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    fn notify(&self) {
        self.changed.send_modify(|generation| *generation += 1);
    }

    /// Re-fetch the product collection from the gateway.
    ///
    /// Sets the busy flag for the duration of the call and releases it on
    /// both the success and failure paths; a failed fetch leaves the store
    /// holding the gateway's empty fallback.
    pub async fn refresh(&self, gateway: &ProductGateway) {
        self.set_loading(true);
        let _release = scopeguard::guard(self.clone(), |store| store.set_loading(false));
        let products = gateway.list().await;
        self.set_all(products);
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
