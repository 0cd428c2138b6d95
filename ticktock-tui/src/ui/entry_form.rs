use super::utils::centered_rect;
use super::*;
use crate::app::{EntryForm, FormField};

pub fn render_entry_form(frame: &mut Frame, app: &App) {
    let Some(form) = &app.entry_form else {
        return;
    };

    let area = centered_rect(58, 19, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        field_label("Select Project", form, FormField::Project),
        select_value(
            form.project_label(),
            form.focused_field == FormField::Project,
        ),
        Line::from(""),
        field_label("Type of Work", form, FormField::WorkType),
        select_value(
            form.work_type_label(),
            form.focused_field == FormField::WorkType,
        ),
        Line::from(""),
        field_label("Task description", form, FormField::Description),
        description_value(form),
        Line::from(""),
        field_label("Hours", form, FormField::Hours),
        hours_value(form),
        Line::from(""),
        footer(form),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Add New Entry ",
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}

fn field_label(name: &str, form: &EntryForm, field: FormField) -> Line<'static> {
    let label_style = if form.focused_field == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(name.to_string(), label_style),
        Span::styled(" *", Style::default().fg(Color::Red)),
    ])
}

fn select_value(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("  [ {} ", label), style),
        Span::styled("▾ ]", Style::default().fg(Color::DarkGray)),
    ])
}

fn description_value(form: &EntryForm) -> Line<'static> {
    let focused = form.focused_field == FormField::Description;
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    if focused {
        let (before, after) = form.description.split_at_cursor();
        Line::from(Span::styled(format!("  [ {}█{} ]", before, after), style))
    } else if form.description.is_empty() {
        Line::from(Span::styled(
            "  [ Write task here... ]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("  [ {} ]", form.description.value),
            style,
        ))
    }
}

fn hours_value(form: &EntryForm) -> Line<'static> {
    let focused = form.focused_field == FormField::Hours;
    // Stepper buttons gray out at the bounds, where they stop doing
    // anything.
    let minus_style = if form.hours <= crate::app::MIN_HOURS {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let plus_style = if form.hours >= crate::app::MAX_HOURS {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled("[-]", minus_style),
        Span::styled(format!(" {:>2} ", form.hours), value_style),
        Span::styled("[+]", plus_style),
    ])
}

fn footer(form: &EntryForm) -> Line<'static> {
    let submit_style = if form.is_complete() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::raw(": Change  "),
        Span::styled("Enter", submit_style),
        Span::raw(": Add entry  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ])
}
