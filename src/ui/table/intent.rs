use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// Replace the search term. Resets the page index so the view can't
    /// land past the end of the narrowed result set.
    SetSearch(String),
    /// Change the rows-per-page. Also resets the page index.
    SetPageSize(usize),
    /// Jump to a page. Deliberately unclamped: an out-of-range index
    /// renders as an empty page.
    GoToPage(usize),
    /// Toggle the action menu of a row: opens it, or closes it if it is
    /// already the open one.
    ToggleMenu(String),
    CloseMenu,
    /// Ask for delete confirmation. Closes the row menu.
    RequestDelete(Product),
    /// Dismiss the delete confirmation, whether cancelled or settled.
    ClearDeleteTarget,
}

impl Intent for TableIntent {}
