//! The gateway worker: the only place network calls execute.
//!
//! The controller enqueues [`GatewayCommand`]s; the worker runs them on
//! the async runtime, refreshes the store exactly once after each
//! successful mutation, and reports completions back to the UI loop as
//! [`AppEvent`]s. Commands run one at a time in arrival order; if the user
//! manages to enqueue overlapping mutations, each completion still updates
//! shared state independently and the last one wins.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;

use crate::catalog::Product;
use crate::gateway::ProductGateway;
use crate::store::ProductStore;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone)]
pub enum GatewayCommand {
    /// Re-fetch the product collection.
    Refresh,
    Create(Product),
    Update(Product),
    Delete(Product),
    /// Resolve the id-uniqueness flag for a draft id.
    CheckId(String),
}

/// Drain the command queue until every sender is dropped.
pub async fn run(
    gateway: ProductGateway,
    store: ProductStore,
    mut commands: Receiver<GatewayCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            GatewayCommand::Refresh => {
                store.refresh(&gateway).await;
            }
            GatewayCommand::Create(product) => {
                let result = gateway.create(&product).await;
                if result.is_some() {
                    store.refresh(&gateway).await;
                }
                if events.send(AppEvent::CreateFinished { result }).is_err() {
                    break;
                }
            }
            GatewayCommand::Update(product) => {
                let result = gateway.update(&product).await;
                if result.is_some() {
                    store.refresh(&gateway).await;
                }
                if events.send(AppEvent::UpdateFinished { result }).is_err() {
                    break;
                }
            }
            GatewayCommand::Delete(product) => {
                let ok = gateway.delete(&product).await.is_some();
                if ok {
                    store.refresh(&gateway).await;
                }
                if events.send(AppEvent::DeleteFinished { product, ok }).is_err() {
                    break;
                }
            }
            GatewayCommand::CheckId(id) => {
                let exists = gateway.id_exists(&id).await;
                if events.send(AppEvent::IdCheckResolved { id, exists }).is_err() {
                    break;
                }
            }
        }
    }
}

/// Bridge store change notifications into the UI event channel, so the
/// view re-reads the store whenever a gateway completion mutated it.
pub async fn forward_store_changes(
    mut changes: watch::Receiver<u64>,
    events: Sender<AppEvent>,
) {
    while changes.changed().await.is_ok() {
        if events.send(AppEvent::StoreChanged).is_err() {
            break;
        }
    }
}
