use crate::app::{App, InputMode};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "=== Todo List ===";
pub const EMPTY: &str = "No todos.";
pub const PROMPT: &str = "New task: ";
pub const CONTROLS: &str =
    "↑/↓: Navigate, n: Create, space: Mark, d: Delete, s: Save & Exit, q: Quit";

/// Draw the whole screen: title, list, separator, prompt, padding and the
/// control line pinned to the last row.
pub fn draw(f: &mut Frame, app: &App) {
    use Constraint::{Length, Min};

    let [body, controls_area] = Layout::vertical([Min(0), Length(1)]).areas(f.area());

    let prompt_h = u16::from(app.mode == InputMode::TextInput);
    let rows = u16::try_from(app.list.len().max(1)).unwrap_or(u16::MAX);
    let list_h = rows.min(body.height.saturating_sub(2 + prompt_h));

    let [title_area, list_area, _gap, prompt_area, _pad] =
        Layout::vertical([Length(1), Length(list_h), Length(1), Length(prompt_h), Min(0)])
            .areas(body);

    f.render_widget(Line::from(TITLE).bold(), title_area);
    draw_list(f, app, list_area);

    if app.mode == InputMode::TextInput {
        f.render_widget(Line::from(format!("{PROMPT}{}", app.input)), prompt_area);
        let x = prompt_area.x + cursor_x(&app.input);
        f.set_cursor_position((x.min(prompt_area.right().saturating_sub(1)), prompt_area.y));
    }

    f.render_widget(Line::from(CONTROLS).dim(), controls_area);
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    if app.list.is_empty() {
        f.render_widget(Paragraph::new(EMPTY), area);
        return;
    }

    let items: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .map(|t| {
            let style = if t.completed {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            let text = t.text.replace(['\r', '\n'], " ");
            ListItem::new(format!("{} {}", t.checkbox(), text)).style(style)
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always);
    let mut state = ListState::default().with_selected(Some(app.list.selected()));
    f.render_stateful_widget(list, area, &mut state);
}

/// Column just past the typed text on the prompt line.
fn cursor_x(input: &str) -> u16 {
    let w = UnicodeWidthStr::width(PROMPT) + UnicodeWidthStr::width(input);
    u16::try_from(w).unwrap_or(u16::MAX)
}
