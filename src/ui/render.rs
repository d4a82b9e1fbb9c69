//! Frame rendering: the product table plus the form, menu and delete
//! popups. Pure read of the controller's state; never mutates it.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::{Field, FieldErrors, PageView, Product};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{DraftFields, FormInput, FormMode, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, POPUP_BORDER, ROW_HIGHLIGHT, STATUS_ERROR, STATUS_OK, TEXT, TEXT_DIM,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    let view = app.page_view();

    let header = Header::new();
    frame.render_widget(
        header.widget(&app.api_base(), app.is_loading(), view.total_results),
        header_area,
    );

    frame.render_widget(Clear, body);
    frame.render_widget(table_widget(app, &view, body), body);

    let footer = Footer::new();
    frame.render_widget(footer.widget(footer_area, hints_for(app)), footer_area);

    if app.menu_open() {
        draw_menu_popup(frame, body);
    }

    if let FormState::Open {
        mode,
        fields,
        focused,
        errors,
        ..
    } = app.form()
    {
        draw_form_popup(frame, body, *mode, fields, *focused, errors);
    }

    if let Some(target) = &app.table().delete_target {
        draw_delete_popup(frame, body, target);
    }
}

fn hints_for(app: &App) -> &'static str {
    if app.table().delete_target.is_some() {
        " y: Delete │ n: Cancel"
    } else if app.form().is_open() {
        " Enter: Save │ Tab: Next field │ Esc: Cancel"
    } else if app.search_editing() {
        " Type to search │ Enter/Esc: Done"
    } else if app.menu_open() {
        " e: Edit │ d: Delete │ Esc: Close menu"
    } else {
        " a: Add │ Enter: Menu │ /: Search │ ←/→: Page │ +/-: Page size │ r: Reload │ q: Quit"
    }
}

fn table_widget(app: &App, view: &PageView, area: Rect) -> Paragraph<'static> {
    let table = app.table();
    let mut lines = Vec::new();

    let search_style = if app.search_editing() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    lines.push(Line::from(vec![
        Span::styled(" Search: ", search_style),
        Span::styled(table.search.clone(), Style::default().fg(TEXT)),
        Span::styled(
            if app.search_editing() { "▏" } else { "" },
            Style::default().fg(ACCENT),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!(
            " {:<10}  {:<12}  {:<11}  {:<11}  Description",
            "ID", "Name", "Release", "Revision"
        ),
        Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
    )));

    if view.rows.is_empty() {
        let message = if app.is_loading() {
            " Loading products…"
        } else if view.total_results == 0 {
            " No products match."
        } else {
            " This page is empty."
        };
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(TEXT_DIM),
        )));
    }

    let description_width = (area.width as usize).saturating_sub(55).max(10);
    for (idx, product) in view.rows.iter().enumerate() {
        let mut line = Line::from(Span::styled(
            format!(
                " {:<10}  {:<12}  {:<11}  {:<11}  {}",
                clip(&product.id, 10),
                clip(&product.name, 12),
                product.date_release.format("%Y-%m-%d"),
                product.date_revision.format("%Y-%m-%d"),
                clip(&product.description, description_width),
            ),
            Style::default().fg(TEXT),
        ));
        if idx == app.selected() {
            line = line.style(Style::default().bg(ROW_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    let page_display = if view.total_pages == 0 {
        "0 of 0".to_string()
    } else {
        format!("{} of {}", view.page_index + 1, view.total_pages)
    };
    lines.push(Line::from(Span::styled(
        format!(
            " Page {page_display} · {} results · {} per page",
            view.total_results, view.page_size
        ),
        Style::default().fg(TEXT_DIM),
    )));

    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(STATUS_OK),
        )));
    }
    if let Some(error) = app.last_dispatch_error() {
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    Paragraph::new(lines)
}

fn draw_menu_popup(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from(Span::styled("  e  Edit", Style::default().fg(TEXT))),
        Line::from(Span::styled("  d  Delete", Style::default().fg(TEXT))),
    ];
    let area = centered_rect_by_size(body, 18, 4);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled("Actions", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_form_popup(
    frame: &mut Frame<'_>,
    body: Rect,
    mode: FormMode,
    fields: &DraftFields,
    focused: FormInput,
    errors: &FieldErrors,
) {
    let title = match mode {
        FormMode::Add => "Add product",
        FormMode::Edit => "Edit product",
    };

    let mut lines = Vec::new();
    for input in FormInput::ORDER {
        let field = input.field();
        let is_focused = input == focused;
        let label_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        let value_style = if mode == FormMode::Edit && input == FormInput::Id {
            Style::default().fg(TEXT_DIM)
        } else {
            Style::default().fg(TEXT)
        };

        lines.push(Line::from(vec![
            Span::styled(if is_focused { " > " } else { "   " }, label_style),
            Span::styled(format!("{:<13}", field.label()), label_style),
            Span::styled(fields.buffer(input).to_string(), value_style),
            Span::styled(if is_focused { "▏" } else { "" }, Style::default().fg(ACCENT)),
        ]));
        if let Some(message) = errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("     {message}"),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    // Derived, read-only revision date.
    lines.push(Line::from(vec![
        Span::styled("   ", Style::default()),
        Span::styled(format!("{:<13}", Field::DateRevision.label()), Style::default().fg(TEXT_DIM)),
        Span::styled(fields.date_revision.clone(), Style::default().fg(TEXT_DIM)),
        Span::styled("  (derived)", Style::default().fg(TEXT_DIM)),
    ]));
    if let Some(message) = errors.get(Field::DateRevision) {
        lines.push(Line::from(Span::styled(
            format!("     {message}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(48);
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_delete_popup(frame: &mut Frame<'_>, body: Rect, target: &Product) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" Delete \"{}\"?", target.name),
            Style::default().fg(TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(STATUS_ERROR)),
            Span::styled(": Delete   ", Style::default().fg(TEXT_DIM)),
            Span::styled("n", Style::default().fg(STATUS_OK)),
            Span::styled(": Cancel", Style::default().fg(TEXT_DIM)),
        ]),
    ];
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(body, content_width.saturating_add(4).max(30), 5);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled("Confirm delete", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}
