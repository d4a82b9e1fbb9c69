mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{list_body, sample_product};

use prodcat::config::ApiConfig;
use prodcat::gateway::ProductGateway;
use prodcat::store::ProductStore;

fn gateway_for(base_url: &str, store: ProductStore) -> ProductGateway {
    ProductGateway::new(
        &ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
        },
        store,
    )
}

#[tokio::test]
async fn refresh_populates_the_store_and_clears_loading() {
    let mock = MockApi::start().await;
    let products = vec![sample_product("A01", "Visa Gold")];
    mock.enqueue(MockResponse::json(&list_body(&products))).await;

    let store = ProductStore::new();
    let gateway = gateway_for(&mock.base_url(), store.clone());

    store.refresh(&gateway).await;

    assert_eq!(store.products(), products);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn refresh_failure_degrades_to_empty_and_clears_loading() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::error(500)).await;

    let store = ProductStore::new();
    // A previous fetch left data behind; the canonical answer replaces it.
    store.set_all(vec![sample_product("A01", "Visa Gold")]);

    let gateway = gateway_for(&mock.base_url(), store.clone());
    store.refresh(&gateway).await;

    assert!(store.products().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn refresh_notifies_subscribers() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&list_body(&[]))).await;

    let store = ProductStore::new();
    let changes = store.subscribe();
    let before = *changes.borrow();

    let gateway = gateway_for(&mock.base_url(), store.clone());
    store.refresh(&gateway).await;

    // Loading on, products set, loading off.
    assert!(*changes.borrow() >= before + 3);
}
