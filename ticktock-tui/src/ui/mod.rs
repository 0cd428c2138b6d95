use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod entry_form;
mod table_view;
mod task_menu;
pub(super) mod utils;
mod week_view;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // navbar
            Constraint::Min(0),    // body
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    render_navbar(frame, root[0], app);

    match app.current_view {
        View::Timesheets => table_view::render_timesheets(frame, app, root[1]),
        View::Week => week_view::render_week(frame, app, root[1]),
    }

    render_status_line(frame, root[2], app);

    // Overlays render on top of the active view.
    if app.task_menu.is_some() {
        task_menu::render_task_menu(frame, app);
    }
    if app.entry_form.is_some() {
        entry_form::render_entry_form(frame, app);
    }
}

/// Static chrome: brand, section label, user. The throbber doubles as
/// a fetch-in-flight indicator.
fn render_navbar(frame: &mut Frame, area: Rect, app: &mut App) {
    let bar = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = bar.inner(area);
    frame.render_widget(bar, area);

    let throbber_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: 1,
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let label_area = Rect {
        x: throbber_area.x + 2,
        y: inner.y,
        width: inner.width.saturating_sub(3),
        height: 1,
    };
    let brand = Line::from(vec![
        Span::styled(
            "ticktock",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Timesheets", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(brand), label_area);

    let user = Paragraph::new(Line::from(vec![
        Span::styled("John Doe ", Style::default().fg(Color::Gray)),
        Span::styled("▾ ", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(user, label_area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Yellow),
            )),
            area,
        );
    }
}
