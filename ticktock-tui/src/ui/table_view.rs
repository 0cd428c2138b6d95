use super::*;
use crate::app::Fetch;
use ratatui::widgets::{Row, Table, TableState};
use ticktock_client::domain::TimesheetStatus;

pub fn render_timesheets(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Your Timesheets ",
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));

    match &app.summaries {
        Fetch::Loading => {
            frame.render_widget(
                Paragraph::new("Loading timesheets...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                chunks[0],
            );
        }
        Fetch::Error => {
            frame.render_widget(
                Paragraph::new("Failed to load timesheets.")
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .block(block),
                chunks[0],
            );
        }
        Fetch::Loaded(rows) if rows.is_empty() => {
            frame.render_widget(
                Paragraph::new("No timesheet entries found.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                chunks[0],
            );
        }
        Fetch::Loaded(rows) => {
            let header = Row::new(["WEEK #", "DATE", "STATUS", "ACTIONS"])
                .style(Style::default().fg(Color::DarkGray))
                .bottom_margin(1);

            let table_rows: Vec<Row> = rows
                .iter()
                .map(|entry| {
                    Row::new(vec![
                        Line::from(entry.week.to_string()),
                        Line::from(entry.date.clone()),
                        Line::from(Span::styled(
                            entry.status.label(),
                            status_style(entry.status).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            entry.action.label(),
                            Style::default().fg(Color::Blue),
                        )),
                    ])
                })
                .collect();

            let table = Table::new(
                table_rows,
                [
                    Constraint::Length(8),
                    Constraint::Min(24),
                    Constraint::Length(12),
                    Constraint::Length(10),
                ],
            )
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

            let mut table_state = TableState::default();
            table_state.select(Some(app.table_index));
            frame.render_stateful_widget(table, chunks[0], &mut table_state);
        }
    }

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Open week  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ]))
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
    frame.render_widget(controls, chunks[1]);
}

/// Status pill coloring. The terminal palette stands in for the web
/// one: completed green, incomplete orange (yellow here), missing
/// red, anything unrecognized neutral gray.
pub(super) fn status_style(status: TimesheetStatus) -> Style {
    match status {
        TimesheetStatus::Completed => Style::default().fg(Color::Green),
        TimesheetStatus::Incomplete => Style::default().fg(Color::Yellow),
        TimesheetStatus::Missing => Style::default().fg(Color::Red),
        TimesheetStatus::Unknown => Style::default().fg(Color::DarkGray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_follow_the_pill_mapping() {
        assert_eq!(
            status_style(TimesheetStatus::Completed).fg,
            Some(Color::Green)
        );
        assert_eq!(
            status_style(TimesheetStatus::Incomplete).fg,
            Some(Color::Yellow)
        );
        assert_eq!(status_style(TimesheetStatus::Missing).fg, Some(Color::Red));
        assert_eq!(
            status_style(TimesheetStatus::Unknown).fg,
            Some(Color::DarkGray)
        );
    }
}
