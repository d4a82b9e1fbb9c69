//! Transient product-table parameters: search term, pagination, the
//! per-row action menu, and the delete-confirmation target.

mod intent;
mod reducer;
mod state;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{TableState, DEFAULT_PAGE_SIZE};
