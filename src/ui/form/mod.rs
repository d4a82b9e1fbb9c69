//! The product form state machine: add/edit modes, draft field editing,
//! derived revision date, and the async id-uniqueness flag.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{DraftFields, FormInput, FormMode, FormState, DATE_FORMAT};
