use serde::Deserialize;

use crate::catalog::Product;

/// List response wrapper: `{ "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: Vec<Product>,
}

/// Create/update response body.
///
/// Deployments differ: some echo `{ "message": ..., "data": {product} }`,
/// others return the bare product. Both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MutationBody {
    Envelope {
        message: Option<String>,
        data: Product,
    },
    Bare(Product),
}

/// The server's echo of a successful create/update: the confirmed product
/// plus an optional human-readable message for the notice line. The store
/// re-fetches after every mutation, so the echoed product is informational
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echo {
    pub message: Option<String>,
    pub product: Product,
}

impl From<MutationBody> for Echo {
    fn from(body: MutationBody) -> Self {
        match body {
            MutationBody::Envelope { message, data } => Echo {
                message,
                product: data,
            },
            MutationBody::Bare(product) => Echo {
                message: None,
                product,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_body_accepts_enveloped_shape() {
        let json = serde_json::json!({
            "message": "Product added successfully",
            "data": {
                "id": "ABC123",
                "name": "Card Plus",
                "description": "A credit card with extra benefits",
                "logo": "logo.png",
                "date_release": "2026-08-06",
                "date_revision": "2027-08-06",
            }
        });
        let echo: Echo = serde_json::from_value::<MutationBody>(json).unwrap().into();
        assert_eq!(echo.message.as_deref(), Some("Product added successfully"));
        assert_eq!(echo.product.id, "ABC123");
    }

    #[test]
    fn mutation_body_accepts_bare_product() {
        let json = serde_json::json!({
            "id": "ABC123",
            "name": "Card Plus",
            "description": "A credit card with extra benefits",
            "logo": "logo.png",
            "date_release": "2026-08-06",
            "date_revision": "2027-08-06",
        });
        let echo: Echo = serde_json::from_value::<MutationBody>(json).unwrap().into();
        assert_eq!(echo.message, None);
        assert_eq!(echo.product.name, "Card Plus");
    }
}
