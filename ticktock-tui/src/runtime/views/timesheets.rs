use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timesheets_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.table_select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.table_select_next(),
        KeyCode::Enter => {
            let selected = app
                .summaries
                .loaded()
                .and_then(|rows| rows.get(app.table_index))
                .map(|row| row.week.to_string());
            if let Some(week) = selected {
                app.open_week(week.clone());
                enqueue_action(action_tx, Action::LoadWeek { week });
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
