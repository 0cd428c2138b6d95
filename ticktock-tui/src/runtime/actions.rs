use crate::api::Api;
use crate::app::{App, Fetch};

use super::action_queue::{Action, FetchResult, ResultTx};

/// Issue the work an action asks for. Fetches run as background
/// tasks; their completions come back through the result channel.
pub(super) fn run_action(action: Action, app: &mut App, api: &Api, result_tx: &ResultTx) {
    match action {
        Action::LoadTimesheets => {
            app.summaries = Fetch::Loading;
            app.summaries_seq += 1;
            app.is_loading = true;

            let seq = app.summaries_seq;
            let api = api.clone();
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let outcome = api.week_summaries().await;
                let _ = tx.send(FetchResult::Summaries { seq, outcome });
            });
        }
        Action::LoadWeek { week } => {
            app.week = Fetch::Loading;
            app.week_seq += 1;
            app.is_loading = true;

            let seq = app.week_seq;
            let api = api.clone();
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let outcome = api.week(&week).await;
                let _ = tx.send(FetchResult::Week { seq, outcome });
            });
        }
    }
}

/// Fold a fetch completion into app state. Latest request wins:
/// anything older than the current sequence for its target is
/// discarded unseen.
pub(super) fn apply_result(result: FetchResult, app: &mut App) {
    match result {
        FetchResult::Summaries { seq, outcome } => {
            if seq != app.summaries_seq {
                return;
            }
            app.is_loading = false;
            match outcome {
                Ok(rows) => {
                    app.table_index = app.table_index.min(rows.len().saturating_sub(1));
                    app.summaries = Fetch::Loaded(rows);
                }
                Err(e) => {
                    tracing::error!("failed to fetch timesheets: {e}");
                    app.summaries = Fetch::Error;
                }
            }
        }
        FetchResult::Week { seq, outcome } => {
            if seq != app.week_seq {
                return;
            }
            app.is_loading = false;
            match outcome {
                Ok(week) => {
                    app.week = Fetch::Loaded(week);
                    app.week_cursor = None;
                    app.week_scroll = 0;
                }
                Err(e) => {
                    tracing::error!("failed to fetch timesheet week: {e}");
                    app.week = Fetch::Error;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticktock_client::domain::WeekData;
    use ticktock_client::FetchError;

    fn week_payload() -> WeekData {
        WeekData {
            start_date: "2024-01-21".to_string(),
            end_date: "2024-01-26".to_string(),
            tasks: vec![],
        }
    }

    #[test]
    fn stale_week_completion_is_dropped() {
        let mut app = App::new();
        app.week_seq = 3;
        app.week = Fetch::Loading;

        apply_result(
            FetchResult::Week {
                seq: 2,
                outcome: Ok(week_payload()),
            },
            &mut app,
        );
        assert!(app.week.is_loading());

        apply_result(
            FetchResult::Week {
                seq: 3,
                outcome: Ok(week_payload()),
            },
            &mut app,
        );
        assert!(app.week.loaded().is_some());
    }

    #[test]
    fn stale_error_cannot_clobber_a_newer_request() {
        let mut app = App::new();
        app.week_seq = 5;
        app.week = Fetch::Loading;

        apply_result(
            FetchResult::Week {
                seq: 4,
                outcome: Err(FetchError::Status(500)),
            },
            &mut app,
        );
        assert!(app.week.is_loading());
        assert!(!app.week.is_error());
    }

    #[test]
    fn non_2xx_outcome_becomes_the_error_state() {
        let mut app = App::new();
        app.summaries_seq = 1;

        apply_result(
            FetchResult::Summaries {
                seq: 1,
                outcome: Err(FetchError::Status(404)),
            },
            &mut app,
        );
        assert!(app.summaries.is_error());
    }

    #[test]
    fn table_index_is_clamped_on_reload() {
        let mut app = App::new();
        app.table_index = 7;
        app.summaries_seq = 1;

        apply_result(
            FetchResult::Summaries {
                seq: 1,
                outcome: Ok(vec![]),
            },
            &mut app,
        );
        assert_eq!(app.table_index, 0);
    }
}
