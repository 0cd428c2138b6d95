use super::*;
use crate::app::{Fetch, WeekCursor, WEEKLY_HOURS_TARGET};
use ratatui::widgets::{LineGauge, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ticktock_client::domain::{Category, Task};

pub fn render_week(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(5), // Header + progress
            Constraint::Min(0),    // Day sections
            Constraint::Length(3), // Controls
        ])
        .split(body);

    match &app.week {
        Fetch::Loading => {
            render_week_message(frame, body, "Loading timesheet...", Color::DarkGray);
        }
        Fetch::Error => {
            render_week_message(
                frame,
                body,
                "Failed to load timesheet or data not available.",
                Color::Red,
            );
        }
        Fetch::Loaded(_) => {
            render_header(frame, app, chunks[0]);
            render_days(frame, app, chunks[1]);
        }
    }

    render_controls(frame, app, chunks[2]);
}

fn render_week_message(frame: &mut Frame, body: Rect, message: &str, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(Span::styled(
                        " This week's timesheet ",
                        Style::default().fg(Color::White),
                    ))
                    .padding(Padding::horizontal(1)),
            ),
        chunks[0],
    );
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " This week's timesheet ",
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // date range + total
            Constraint::Length(1), // gauge label
            Constraint::Length(1), // gauge
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "21 - 26 January, 2024",
            Style::default().fg(Color::DarkGray),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{}/{} hrs", app.total_hours(), WEEKLY_HOURS_TARGET as u32),
            Style::default().fg(Color::White),
        ))
        .alignment(Alignment::Right),
        rows[0],
    );

    // The label above the bar always reads 100%; only the fill below
    // tracks the actual total.
    frame.render_widget(
        Paragraph::new(Span::styled("100%", Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        rows[1],
    );

    let gauge = LineGauge::default()
        .ratio(app.progress_ratio())
        .label("")
        .filled_symbol(ratatui::symbols::line::THICK_HORIZONTAL)
        .unfilled_symbol("╌")
        .filled_style(Style::default().fg(Color::Yellow))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, rows[2]);
}

enum DayRow<'a> {
    DayHeader(&'a str),
    Task {
        cursor: WeekCursor,
        task: &'a Task,
    },
    AddTask {
        cursor: WeekCursor,
    },
    Blank,
}

fn render_days(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(week) = app.week.loaded() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut rows: Vec<DayRow<'_>> = Vec::new();
    for (day_idx, day) in week.tasks.iter().enumerate() {
        rows.push(DayRow::DayHeader(&day.label));
        for (row_idx, task) in day.tasks.iter().enumerate() {
            rows.push(DayRow::Task {
                cursor: WeekCursor {
                    day: day_idx,
                    row: row_idx,
                },
                task,
            });
        }
        rows.push(DayRow::AddTask {
            cursor: WeekCursor {
                day: day_idx,
                row: day.tasks.len(),
            },
        });
        rows.push(DayRow::Blank);
    }

    let max_rows = inner.height as usize;
    let total_rows = rows.len();

    // Keep the focused row inside the visible window.
    let focused_row = app.week_cursor.and_then(|cur| {
        rows.iter().position(|r| match r {
            DayRow::Task { cursor, .. } | DayRow::AddTask { cursor } => *cursor == cur,
            _ => false,
        })
    });
    if let Some(focused) = focused_row {
        if focused >= app.week_scroll + max_rows {
            app.week_scroll = focused + 1 - max_rows;
        }
        if focused < app.week_scroll {
            app.week_scroll = focused;
        }
    }
    if max_rows < total_rows && app.week_scroll > total_rows - max_rows {
        app.week_scroll = total_rows - max_rows;
    }
    if total_rows <= max_rows {
        app.week_scroll = 0;
    }

    let content_width = if total_rows > max_rows {
        inner.width.saturating_sub(1)
    } else {
        inner.width
    };

    let mut row_y = inner.y;
    let mut rendered = 0;
    for (idx, row) in rows.iter().enumerate() {
        if idx < app.week_scroll {
            continue;
        }
        if rendered >= max_rows {
            break;
        }

        let is_focused = Some(idx) == focused_row;
        let line = match row {
            DayRow::DayHeader(label) => Line::from(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            DayRow::Task { task, .. } => build_task_row(task, is_focused),
            DayRow::AddTask { .. } => build_add_row(is_focused),
            DayRow::Blank => Line::from(""),
        };

        let row_rect = Rect::new(inner.x, row_y, content_width, 1);
        frame.render_widget(Paragraph::new(line), row_rect);
        row_y += 1;
        rendered += 1;
    }

    if total_rows > max_rows {
        let mut scrollbar_state = ScrollbarState::new(total_rows)
            .position(app.week_scroll)
            .viewport_content_length(max_rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
            &mut scrollbar_state,
        );
    }
}

fn build_task_row(task: &Task, is_focused: bool) -> Line<'_> {
    let project_display = format!("  {:<32}", task.project);
    let hours_display = format!("{:>2} hrs  ", task.hours);

    if is_focused {
        let text = format!("{}{}[Project Hours]", project_display, hours_display);
        return Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(vec![
        Span::styled(project_display, Style::default().fg(Color::Cyan)),
        Span::styled(hours_display, Style::default().fg(Color::Gray)),
        Span::styled(
            "[Project Hours]",
            Style::default().fg(category_color(Category::of(task))),
        ),
    ])
}

fn build_add_row(is_focused: bool) -> Line<'static> {
    let style = if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };
    Line::from(Span::styled("  + Add new task", style))
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Development => Color::Blue,
        Category::Design => Color::Magenta,
        Category::Meeting => Color::Green,
        Category::General => Color::Gray,
    }
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let controls_text = if app.week.loaded().is_some() {
        vec![
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(": Navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Open menu / Add task  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Back  "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ]
    } else {
        vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Back  "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ]
    };

    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(project: &str, category: Option<&str>) -> Task {
        Task {
            id: 1,
            project: project.to_string(),
            hours: 1,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn tag_colors_follow_the_classification() {
        assert_eq!(
            category_color(Category::of(&task("Homepage Development", None))),
            Color::Blue
        );
        assert_eq!(
            category_color(Category::of(&task("Dashboard Design", None))),
            Color::Magenta
        );
        assert_eq!(
            category_color(Category::of(&task("Standup meeting", None))),
            Color::Green
        );
        assert_eq!(
            category_color(Category::of(&task("API Integration", None))),
            Color::Gray
        );
    }
}
