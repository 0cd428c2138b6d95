use crate::app::{App, WeekRow};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_week_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.week_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.week_cursor_down(),
        KeyCode::Enter => {
            let row = match app.week_cursor_row() {
                Some(WeekRow::Task { day, task }) => Some((day.to_string(), Some(task.id))),
                Some(WeekRow::AddTask { day }) => Some((day.to_string(), None)),
                None => None,
            };
            match row {
                Some((day, Some(task_id))) => app.open_task_menu(day, task_id),
                Some((day, None)) => app.open_entry_form(day),
                None => {}
            }
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
            // Leaving the week re-enters the list view, which fetches
            // afresh; any local add/delete is gone for good.
            app.back_to_timesheets();
            enqueue_action(action_tx, Action::LoadTimesheets);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Fetch, View, WeekCursor};
    use crossterm::event::KeyModifiers;
    use ticktock_client::domain::{DayTasks, Task, WeekData};

    use super::super::super::action_queue::action_channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn week_app() -> App {
        let mut app = App::new();
        app.current_view = View::Week;
        app.selected_week = Some("2".to_string());
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
        app
    }

    #[test]
    fn enter_on_a_task_row_opens_the_menu() {
        let mut app = week_app();
        app.week_cursor = Some(WeekCursor { day: 0, row: 0 });
        let (tx, _rx) = action_channel();

        handle_week_key(key(KeyCode::Enter), &mut app, &tx);

        let menu = app.task_menu.as_ref().expect("menu opened");
        assert_eq!(menu.day, "Mon");
        assert_eq!(menu.task_id, 1);
    }

    #[test]
    fn enter_on_the_add_row_opens_the_form_for_that_day() {
        let mut app = week_app();
        app.week_cursor = Some(WeekCursor { day: 0, row: 1 });
        let (tx, _rx) = action_channel();

        handle_week_key(key(KeyCode::Enter), &mut app, &tx);

        let form = app.entry_form.as_ref().expect("form opened");
        assert_eq!(form.day, "Mon");
    }

    #[test]
    fn escape_goes_back_and_refetches_the_list() {
        let mut app = week_app();
        let (tx, mut rx) = action_channel();

        handle_week_key(key(KeyCode::Esc), &mut app, &tx);

        assert_eq!(app.current_view, View::Timesheets);
        assert!(matches!(rx.try_recv(), Ok(Action::LoadTimesheets)));
    }
}
