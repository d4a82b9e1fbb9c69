//! Keyboard routing.
//!
//! One surface owns the keyboard at a time, resolved in priority order:
//! delete modal, form, search editing, then the table itself.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Any keystroke dismisses the previous action's notice.
    app.clear_notice();

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.table().delete_target.is_some() {
        handle_delete_modal_key(app, key);
        return;
    }

    if app.form().is_open() {
        handle_form_key(app, key);
        return;
    }

    if app.search_editing() {
        handle_search_key(app, key);
        return;
    }

    handle_table_key(app, key);
}

fn handle_delete_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form_focus_prev(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(c);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input(c);
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    // With a row menu open, only its own actions and dismissal apply.
    if app.menu_open() {
        match key.code {
            KeyCode::Char('e') => app.open_edit_form(),
            KeyCode::Char('d') => app.request_delete(),
            KeyCode::Esc | KeyCode::Enter => app.close_menu(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('p') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Char('+') => app.grow_page_size(),
        KeyCode::Char('-') => app.shrink_page_size(),
        KeyCode::Enter => app.toggle_menu(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
