use crate::app::{App, MenuItem};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_task_menu_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
            if let Some(menu) = app.task_menu.as_mut() {
                menu.selected = menu.selected.toggled();
            }
        }
        KeyCode::Enter => {
            let Some(menu) = app.task_menu.take() else {
                return;
            };
            match menu.selected {
                // Edit has no behavior yet; choosing it only closes
                // the menu.
                MenuItem::Edit => {}
                // No confirmation step: the entry is gone as soon as
                // Delete is chosen.
                MenuItem::Delete => {
                    app.apply_delete_task(&menu.day, menu.task_id);
                    app.set_status("Entry deleted".to_string());
                }
            }
        }
        KeyCode::Esc | KeyCode::Char('m') => app.close_task_menu(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Fetch, View, WeekCursor};
    use crossterm::event::KeyModifiers;
    use ticktock_client::domain::{DayTasks, Task, WeekData};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_open_menu() -> App {
        let mut app = App::new();
        app.current_view = View::Week;
        app.week = Fetch::Loaded(WeekData {
            start_date: "2024-01-21".to_string(),
            end_date: "2024-01-26".to_string(),
            tasks: vec![DayTasks {
                label: "Mon".to_string(),
                tasks: vec![
                    Task {
                        id: 1,
                        project: "Homepage Development".to_string(),
                        hours: 4,
                        category: None,
                    },
                    Task {
                        id: 2,
                        project: "Dashboard Design".to_string(),
                        hours: 3,
                        category: None,
                    },
                ],
            }],
        });
        app.week_cursor = Some(WeekCursor { day: 0, row: 0 });
        app.open_task_menu("Mon".to_string(), 1);
        app
    }

    #[test]
    fn delete_removes_the_task_and_closes_the_menu() {
        let mut app = app_with_open_menu();
        handle_task_menu_key(key(KeyCode::Down), &mut app);
        handle_task_menu_key(key(KeyCode::Enter), &mut app);

        assert!(app.task_menu.is_none());
        let week = app.week.loaded().unwrap();
        assert!(!week.contains_id(1));
        assert_eq!(week.day("Mon").unwrap().tasks.len(), 1);
    }

    #[test]
    fn edit_is_a_stub_that_only_closes_the_menu() {
        let mut app = app_with_open_menu();
        handle_task_menu_key(key(KeyCode::Enter), &mut app);

        assert!(app.task_menu.is_none());
        let week = app.week.loaded().unwrap();
        assert!(week.contains_id(1));
        assert_eq!(week.day("Mon").unwrap().tasks.len(), 2);
    }

    #[test]
    fn escape_dismisses_without_touching_tasks() {
        let mut app = app_with_open_menu();
        handle_task_menu_key(key(KeyCode::Esc), &mut app);

        assert!(app.task_menu.is_none());
        assert_eq!(app.week.loaded().unwrap().day("Mon").unwrap().tasks.len(), 2);
    }
}
