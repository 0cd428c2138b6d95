use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_entry_form_key(key: KeyEvent, app: &mut App) {
    let Some(form) = app.entry_form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Down => form.next_field(),
        KeyCode::Up => form.prev_field(),
        KeyCode::Left => {
            if form.focused_field == FormField::Description {
                form.description.move_left();
            } else {
                form.select_prev();
            }
        }
        KeyCode::Right => {
            if form.focused_field == FormField::Description {
                form.description.move_right();
            } else {
                form.select_next();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            match form.focused_field {
                FormField::Description => form.description.insert(c),
                FormField::Hours if c == '+' => form.increment_hours(),
                FormField::Hours if c == '-' => form.decrement_hours(),
                _ => {}
            }
        }
        KeyCode::Backspace => {
            if form.focused_field == FormField::Description {
                form.description.backspace();
            }
        }
        KeyCode::Enter => {
            // Submit fires the one callback and closes; while the
            // gate holds, Enter does nothing at all.
            if let Some(entry) = form.new_entry() {
                let day = form.day.clone();
                app.close_entry_form();
                app.apply_add_entry(&day, entry);
            }
        }
        KeyCode::Esc => app.close_entry_form(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Fetch, View};
    use ticktock_client::domain::{DayTasks, Task, WeekData};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_open_form() -> App {
        let mut app = App::new();
        app.current_view = View::Week;
        app.week = Fetch::Loaded(WeekData {
            start_date: "2024-01-21".to_string(),
            end_date: "2024-01-26".to_string(),
            tasks: vec![DayTasks {
                label: "Mon".to_string(),
                tasks: vec![Task {
                    id: 1,
                    project: "Homepage Development".to_string(),
                    hours: 4,
                    category: None,
                }],
            }],
        });
        app.open_entry_form("Mon".to_string());
        app
    }

    fn fill_form(app: &mut App) {
        let form = app.entry_form.as_mut().unwrap();
        form.project = Some(2);
        form.work_type = Some(0);
        for c in "hook up the client".chars() {
            form.description.insert(c);
        }
        form.hours = 3;
    }

    #[test]
    fn enter_on_a_complete_form_adds_the_task_and_closes() {
        let mut app = app_with_open_form();
        fill_form(&mut app);

        handle_entry_form_key(key(KeyCode::Enter), &mut app);

        assert!(app.entry_form.is_none());
        let week = app.week.loaded().unwrap();
        let mon = week.day("Mon").unwrap();
        assert_eq!(mon.tasks.len(), 2);
        assert_eq!(mon.tasks[1].project, "API Integration");
        assert_eq!(mon.tasks[1].hours, 3);
        assert_eq!(week.total_hours(), 7);
    }

    #[test]
    fn enter_on_an_incomplete_form_does_nothing() {
        let mut app = app_with_open_form();

        handle_entry_form_key(key(KeyCode::Enter), &mut app);

        assert!(app.entry_form.is_some());
        assert_eq!(app.week.loaded().unwrap().total_hours(), 4);
    }

    #[test]
    fn escape_discards_typed_input() {
        let mut app = app_with_open_form();
        fill_form(&mut app);

        handle_entry_form_key(key(KeyCode::Esc), &mut app);

        assert!(app.entry_form.is_none());
        assert_eq!(app.week.loaded().unwrap().total_hours(), 4);

        // Reopening starts from a blank form.
        app.open_entry_form("Mon".to_string());
        let form = app.entry_form.as_ref().unwrap();
        assert_eq!(form.project, None);
        assert!(form.description.is_empty());
        assert_eq!(form.hours, 1);
    }

    #[test]
    fn typing_reaches_the_description_field_only_when_focused() {
        let mut app = app_with_open_form();

        // Focus starts on the project select; characters are ignored.
        handle_entry_form_key(key(KeyCode::Char('x')), &mut app);
        assert!(app.entry_form.as_ref().unwrap().description.is_empty());

        handle_entry_form_key(key(KeyCode::Tab), &mut app);
        handle_entry_form_key(key(KeyCode::Tab), &mut app);
        handle_entry_form_key(key(KeyCode::Char('x')), &mut app);
        assert_eq!(app.entry_form.as_ref().unwrap().description.value, "x");

        handle_entry_form_key(key(KeyCode::Backspace), &mut app);
        assert!(app.entry_form.as_ref().unwrap().description.is_empty());
    }

    #[test]
    fn plus_and_minus_adjust_hours_within_bounds() {
        let mut app = app_with_open_form();
        let form = app.entry_form.as_mut().unwrap();
        form.focused_field = FormField::Hours;

        handle_entry_form_key(key(KeyCode::Char('-')), &mut app);
        assert_eq!(app.entry_form.as_ref().unwrap().hours, 1);

        for _ in 0..15 {
            handle_entry_form_key(key(KeyCode::Char('+')), &mut app);
        }
        assert_eq!(app.entry_form.as_ref().unwrap().hours, 12);
    }
}
