use serde::Deserialize;

/// One row of the week-list endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekSummary {
    pub week: u32,
    pub date: String,
    pub status: TimesheetStatus,
    pub action: WeekAction,
}

/// Submission status of a week. Unrecognized wire values decode to
/// `Unknown` instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimesheetStatus {
    Completed,
    Incomplete,
    Missing,
    #[serde(other)]
    Unknown,
}

impl TimesheetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimesheetStatus::Completed => "COMPLETED",
            TimesheetStatus::Incomplete => "INCOMPLETE",
            TimesheetStatus::Missing => "MISSING",
            TimesheetStatus::Unknown => "UNKNOWN",
        }
    }
}

/// The navigation label the list shows for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum WeekAction {
    View,
    Update,
    Create,
}

impl WeekAction {
    pub fn label(&self) -> &'static str {
        match self {
            WeekAction::View => "View",
            WeekAction::Update => "Update",
            WeekAction::Create => "Create",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(json: &str) -> WeekSummary {
        serde_json::from_str(json).expect("valid summary")
    }

    #[test]
    fn decodes_known_statuses() {
        let row = summary(r#"{"week":1,"date":"1 - 5 January, 2024","status":"COMPLETED","action":"View"}"#);
        assert_eq!(row.status, TimesheetStatus::Completed);
        assert_eq!(row.action, WeekAction::View);

        let row = summary(r#"{"week":3,"date":"28 - 31 January, 2024","status":"MISSING","action":"Create"}"#);
        assert_eq!(row.status, TimesheetStatus::Missing);
        assert_eq!(row.action, WeekAction::Create);
    }

    #[test]
    fn unknown_status_decodes_to_catch_all() {
        let row = summary(r#"{"week":4,"date":"x","status":"PENDING","action":"Update"}"#);
        assert_eq!(row.status, TimesheetStatus::Unknown);
    }
}
