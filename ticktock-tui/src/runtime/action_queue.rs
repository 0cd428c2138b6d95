use ticktock_client::domain::{WeekData, WeekSummary};
use ticktock_client::FetchError;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    LoadTimesheets,
    LoadWeek { week: String },
}

/// A fetch completion, tagged with the sequence number of the request
/// that produced it. The event loop drops completions whose sequence
/// is older than the latest issued for that target, so a slow
/// response can never overwrite a newer selection.
#[derive(Debug)]
pub(super) enum FetchResult {
    Summaries {
        seq: u64,
        outcome: Result<Vec<WeekSummary>, FetchError>,
    },
    Week {
        seq: u64,
        outcome: Result<WeekData, FetchError>,
    },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;
pub(super) type ResultTx = UnboundedSender<FetchResult>;
pub(super) type ResultRx = UnboundedReceiver<FetchResult>;

pub(super) fn action_channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

pub(super) fn result_channel() -> (ResultTx, ResultRx) {
    mpsc::unbounded_channel()
}
