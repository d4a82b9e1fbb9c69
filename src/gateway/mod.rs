//! The CRUD gateway to the remote catalog API.
//!
//! Wraps every remote call and normalizes failures into safe fallback
//! values; transport errors never propagate past this boundary.

mod client;
mod error;
mod types;

pub use client::ProductGateway;
pub use error::GatewayError;
pub use types::Echo;
