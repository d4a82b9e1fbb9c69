use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::TableState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::SetSearch(search) => TableState {
                search,
                page_index: 0,
                ..state
            },
            TableIntent::SetPageSize(page_size) => TableState {
                page_size: page_size.max(1),
                page_index: 0,
                ..state
            },
            TableIntent::GoToPage(page_index) => TableState {
                page_index,
                ..state
            },
            TableIntent::ToggleMenu(id) => {
                let menu_open = if state.menu_open.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                TableState { menu_open, ..state }
            }
            TableIntent::CloseMenu => TableState {
                menu_open: None,
                ..state
            },
            TableIntent::RequestDelete(product) => TableState {
                delete_target: Some(product),
                menu_open: None,
                ..state
            },
            TableIntent::ClearDeleteTarget => TableState {
                delete_target: None,
                ..state
            },
        }
    }
}
