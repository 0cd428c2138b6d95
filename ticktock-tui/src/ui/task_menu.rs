use super::utils::centered_rect;
use super::*;
use crate::app::MenuItem;

pub fn render_task_menu(frame: &mut Frame, app: &App) {
    let Some(menu) = &app.task_menu else {
        return;
    };

    let area = centered_rect(24, 6, frame.area());
    frame.render_widget(Clear, area);

    let item = |label: &str, color: Color, selected: bool| {
        if selected {
            Line::from(Span::styled(
                format!("▸ {}", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}", label),
                Style::default().fg(color),
            ))
        }
    };

    let text = vec![
        item("Edit", Color::White, menu.selected == MenuItem::Edit),
        item("Delete", Color::Red, menu.selected == MenuItem::Delete),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Close"),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Task ")
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(paragraph, area);
}
