use crate::catalog::Product;
use crate::ui::mvi::UiState;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parameters the table view derives its page from, plus the two
/// independent UI surfaces anchored to rows: the action menu and the
/// delete-confirmation modal.
///
/// None of this is catalog data; the store owns that. These values only
/// select and slice what the store holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub search: String,
    pub page_index: usize,
    pub page_size: usize,
    /// Id of the row whose action menu is open, if any.
    pub menu_open: Option<String>,
    /// Product awaiting delete confirmation, if any.
    pub delete_target: Option<Product>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            menu_open: None,
            delete_target: None,
        }
    }
}

impl UiState for TableState {}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }
}
