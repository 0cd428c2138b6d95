use crate::api::Api;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{action_channel, result_channel, Action};
use super::actions::{apply_result, run_action};
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: &Api,
) -> Result<()> {
    let (action_tx, mut action_rx) = action_channel();
    let (result_tx, mut result_rx) = result_channel();

    // Initial load of the week list.
    let _ = action_tx.send(Action::LoadTimesheets);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, api, &result_tx);
        }

        while let Ok(result) = result_rx.try_recv() {
            apply_result(result, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
