use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod entry_form;
mod task_menu;
mod timesheets;
mod week;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Overlays capture input before the view underneath.
    if app.entry_form.is_some() {
        entry_form::handle_entry_form_key(key, app);
        return;
    }
    if app.task_menu.is_some() {
        task_menu::handle_task_menu_key(key, app);
        return;
    }

    match app.current_view {
        View::Timesheets => timesheets::handle_timesheets_key(key, app, action_tx),
        View::Week => week::handle_week_key(key, app, action_tx),
    }
}
