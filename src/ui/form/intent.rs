use chrono::NaiveDate;

use crate::catalog::{FieldErrors, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open the add form with a fresh draft. `today` seeds the release
    /// date; the reducer itself never reads the clock.
    OpenAdd { today: NaiveDate },
    /// Open the edit form populated from an existing product.
    OpenEdit { product: Product },
    FocusNext,
    FocusPrev,
    /// Type one character into the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// An id-uniqueness check came back. Applied only if `id` still
    /// matches the draft's id; a stale completion for an abandoned id is
    /// dropped.
    IdCheckResolved { id: String, exists: bool },
    /// Submission was rejected by validation; surface the error map and
    /// stay in the current mode.
    Reject { errors: FieldErrors },
    Close,
}

impl Intent for FormIntent {}
