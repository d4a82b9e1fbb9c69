#![allow(dead_code)]

pub mod mock_api;

use chrono::NaiveDate;
use prodcat::catalog::{revision_for, Product};

/// A valid product for fixtures.
pub fn sample_product(id: &str, name: &str) -> Product {
    let release = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: "A credit card with extra benefits".to_string(),
        logo: "https://cdn.example.com/card.png".to_string(),
        date_release: release,
        date_revision: revision_for(release),
    }
}

/// JSON body for a `{ "data": [...] }` list response.
pub fn list_body(products: &[Product]) -> String {
    serde_json::json!({ "data": products }).to_string()
}
