//! The interaction controller.
//!
//! `App` owns the UI-side state (form and table reducers, selection,
//! notice line), reads the shared product store, and turns user actions
//! into gateway commands. It never performs network work itself: commands
//! go to the worker, completions come back through `handle_event`.

use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;

use crate::catalog::{page_view, validate, PageView, Product};
use crate::config::ConfigStore;
use crate::store::ProductStore;
use crate::ui::events::AppEvent;
use crate::ui::form::{FormInput, FormIntent, FormMode, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::table::{TableIntent, TableReducer, TableState};
use crate::ui::worker::GatewayCommand;

pub type CommandSender = mpsc::Sender<GatewayCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: ConfigStore,
    store: ProductStore,
    form: FormState,
    table: TableState,
    /// Cursor row within the current page. View-transient; not part of the
    /// table parameters.
    selected: usize,
    /// True while keystrokes edit the search term instead of navigating.
    search_editing: bool,
    /// One-shot status message (the alert collaborator). Cleared on the
    /// next user action.
    notice: Option<String>,
    commands: Option<CommandSender>,
    last_dispatch_error: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore, store: ProductStore) -> Self {
        let table = TableState::with_page_size(config.get().table.page_size);
        Self {
            should_quit: false,
            config,
            store,
            form: FormState::default(),
            table,
            selected: 0,
            search_editing: false,
            notice: None,
            commands: None,
            last_dispatch_error: None,
        }
    }

    /// Wire up the gateway worker's command queue.
    pub fn attach_commands(&mut self, sender: CommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn api_base(&self) -> String {
        self.config.get().api.base_url
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Recompute the derived table view from the store snapshot and the
    /// current table parameters.
    pub fn page_view(&self) -> PageView {
        let products = self.store.products();
        page_view(
            &products,
            &self.table.search,
            self.table.page_index,
            self.table.page_size,
        )
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.page_view().rows.get(self.selected).cloned()
    }

    pub fn search_editing(&self) -> bool {
        self.search_editing
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn last_dispatch_error(&self) -> Option<&str> {
        self.last_dispatch_error.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn send(&mut self, command: GatewayCommand) {
        let Some(sender) = &self.commands else {
            self.last_dispatch_error = Some("gateway worker not attached".to_string());
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "Dropping gateway command, queue unavailable");
            self.last_dispatch_error = Some(err.to_string());
        }
    }

    /// Kick off the initial (or a manual) list fetch.
    pub fn request_refresh(&mut self) {
        self.send(GatewayCommand::Refresh);
    }

    // ----- form orchestration -----

    pub fn open_add_form(&mut self) {
        dispatch_mvi!(self, table, TableReducer, TableIntent::CloseMenu);
        dispatch_mvi!(
            self,
            form,
            FormReducer,
            FormIntent::OpenAdd { today: today() }
        );
    }

    /// Open the edit form for the selected row. Closes the row menu.
    pub fn open_edit_form(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        dispatch_mvi!(self, table, TableReducer, TableIntent::CloseMenu);
        dispatch_mvi!(self, form, FormReducer, FormIntent::OpenEdit { product });
    }

    pub fn close_form(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
    }

    pub fn form_focus_next(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusNext);
    }

    pub fn form_focus_prev(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusPrev);
    }

    pub fn form_input(&mut self, c: char) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Input(c));
        self.maybe_check_id();
    }

    pub fn form_backspace(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
        self.maybe_check_id();
    }

    /// Refresh the uniqueness flag while the user edits the id: fires for
    /// add-mode ids of at least three characters, the same floor the
    /// validation rule uses.
    fn maybe_check_id(&mut self) {
        let FormState::Open {
            mode: FormMode::Add,
            fields,
            focused: FormInput::Id,
            ..
        } = &self.form
        else {
            return;
        };
        if fields.id.chars().count() >= 3 {
            let id = fields.id.clone();
            self.send(GatewayCommand::CheckId(id));
        }
    }

    /// Validate the draft; reject with the error map, or hand the
    /// finalized product to the gateway worker. The form closes when the
    /// mutation's completion event arrives, not before.
    pub fn submit_form(&mut self) {
        let FormState::Open {
            mode,
            fields,
            id_exists,
            ..
        } = &self.form
        else {
            return;
        };

        let is_edit = *mode == FormMode::Edit;
        let draft = fields.to_draft();
        let errors = validate(&draft, is_edit, *id_exists, today());
        if !errors.is_empty() {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Reject { errors });
            return;
        }

        // An empty error map guarantees both dates parsed.
        let Some(product) = draft.build() else {
            return;
        };
        if is_edit {
            self.send(GatewayCommand::Update(product));
        } else {
            self.send(GatewayCommand::Create(product));
        }
    }

    // ----- table orchestration -----

    pub fn begin_search(&mut self) {
        self.search_editing = true;
    }

    pub fn end_search(&mut self) {
        self.search_editing = false;
    }

    pub fn search_input(&mut self, c: char) {
        let mut search = self.table.search.clone();
        search.push(c);
        dispatch_mvi!(self, table, TableReducer, TableIntent::SetSearch(search));
        self.selected = 0;
    }

    pub fn search_backspace(&mut self) {
        let mut search = self.table.search.clone();
        search.pop();
        dispatch_mvi!(self, table, TableReducer, TableIntent::SetSearch(search));
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let view = self.page_view();
        if view.page_index + 1 < view.total_pages {
            let target = view.page_index + 1;
            dispatch_mvi!(self, table, TableReducer, TableIntent::GoToPage(target));
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.table.page_index > 0 {
            let target = self.table.page_index - 1;
            dispatch_mvi!(self, table, TableReducer, TableIntent::GoToPage(target));
            self.selected = 0;
        }
    }

    pub fn grow_page_size(&mut self) {
        let size = self.table.page_size.saturating_add(5);
        dispatch_mvi!(self, table, TableReducer, TableIntent::SetPageSize(size));
        self.selected = 0;
    }

    pub fn shrink_page_size(&mut self) {
        let size = self.table.page_size.saturating_sub(5).max(1);
        dispatch_mvi!(self, table, TableReducer, TableIntent::SetPageSize(size));
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let rows = self.page_view().rows.len();
        if rows == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(rows - 1) as isize;
        self.selected = (current + delta).clamp(0, rows as isize - 1) as usize;
    }

    pub fn toggle_menu(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        dispatch_mvi!(self, table, TableReducer, TableIntent::ToggleMenu(product.id));
    }

    pub fn close_menu(&mut self) {
        dispatch_mvi!(self, table, TableReducer, TableIntent::CloseMenu);
    }

    pub fn menu_open(&self) -> bool {
        self.table.menu_open.is_some()
    }

    /// Open the delete-confirmation modal for the selected row.
    pub fn request_delete(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        dispatch_mvi!(self, table, TableReducer, TableIntent::RequestDelete(product));
    }

    pub fn cancel_delete(&mut self) {
        dispatch_mvi!(self, table, TableReducer, TableIntent::ClearDeleteTarget);
    }

    /// Confirm the pending delete. The modal stays up until the completion
    /// event clears the target.
    pub fn confirm_delete(&mut self) {
        if let Some(product) = self.table.delete_target.clone() {
            self.send(GatewayCommand::Delete(product));
        }
    }

    pub fn on_tick(&mut self) {}

    /// Apply a non-key event: gateway completions and store notifications.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StoreChanged => {
                // The collection may have shrunk under the cursor.
                let rows = self.page_view().rows.len();
                if rows == 0 {
                    self.selected = 0;
                } else {
                    self.selected = self.selected.min(rows - 1);
                }
            }
            AppEvent::IdCheckResolved { id, exists } => {
                dispatch_mvi!(
                    self,
                    form,
                    FormReducer,
                    FormIntent::IdCheckResolved { id, exists }
                );
            }
            AppEvent::CreateFinished { result } => match result {
                Some(echo) => {
                    self.notice =
                        Some(echo.message.unwrap_or_else(|| "Product added".to_string()));
                    dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
                }
                None => {
                    // Leave the form open so the user can retry.
                    self.notice = Some("Failed to add product".to_string());
                }
            },
            AppEvent::UpdateFinished { result } => match result {
                Some(echo) => {
                    self.notice =
                        Some(echo.message.unwrap_or_else(|| "Product updated".to_string()));
                    dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
                }
                None => {
                    self.notice = Some("Failed to update product".to_string());
                }
            },
            AppEvent::DeleteFinished { product, ok } => {
                self.notice = Some(if ok {
                    format!("Deleted {}", product.name)
                } else {
                    format!("Failed to delete {}", product.name)
                });
                dispatch_mvi!(self, table, TableReducer, TableIntent::ClearDeleteTarget);
            }
            // Keys, ticks and resizes are routed by the runtime loop.
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
