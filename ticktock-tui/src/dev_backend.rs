use ticktock_client::domain::{DayTasks, Task, TimesheetStatus, WeekAction, WeekData, WeekSummary};
use ticktock_client::FetchError;

/// In-memory stand-in for the timesheet backend, used by the `dev`
/// subcommand. Read-only, like the real contract: adds and deletes
/// never reach a backend.
#[derive(Debug, Clone)]
pub struct DevBackend;

impl DevBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn week_summaries(&self) -> Vec<WeekSummary> {
        let summary = |week, date: &str, status, action| WeekSummary {
            week,
            date: date.to_string(),
            status,
            action,
        };

        vec![
            summary(
                1,
                "1 - 5 January, 2024",
                TimesheetStatus::Completed,
                WeekAction::View,
            ),
            summary(
                2,
                "21 - 26 January, 2024",
                TimesheetStatus::Completed,
                WeekAction::View,
            ),
            summary(
                3,
                "28 - 31 January, 2024",
                TimesheetStatus::Incomplete,
                WeekAction::Update,
            ),
            summary(
                4,
                "5 - 9 February, 2024",
                TimesheetStatus::Missing,
                WeekAction::Create,
            ),
            summary(
                5,
                "12 - 16 February, 2024",
                TimesheetStatus::Missing,
                WeekAction::Create,
            ),
        ]
    }

    /// Weeks without seeded data answer 404, which exercises the
    /// error display the same way the real backend would.
    pub fn week(&self, week: &str) -> Result<WeekData, FetchError> {
        match week {
            "1" => Ok(seed_week(
                "2024-01-01",
                "2024-01-05",
                &["Mon", "Tue", "Wed", "Thu", "Fri"],
                &[
                    ("Mon", 1, "Homepage Development", 8),
                    ("Tue", 2, "Homepage Development", 8),
                    ("Wed", 3, "Dashboard Design", 8),
                    ("Thu", 4, "API Integration", 8),
                    ("Fri", 5, "Team meeting", 8),
                ],
            )),
            "2" => Ok(seed_week(
                "2024-01-21",
                "2024-01-26",
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
                &[
                    ("Mon", 1, "Homepage Development", 4),
                    ("Mon", 2, "Dashboard Design", 3),
                    ("Tue", 3, "API Integration", 5),
                    ("Wed", 4, "Homepage Development", 6),
                    ("Thu", 5, "Sprint meeting", 2),
                    ("Fri", 6, "Dashboard Design", 7),
                ],
            )),
            "3" => Ok(seed_week(
                "2024-01-28",
                "2024-01-31",
                &["Mon", "Tue", "Wed"],
                &[
                    ("Mon", 1, "API Integration", 6),
                    ("Tue", 2, "Homepage Development", 4),
                ],
            )),
            _ => Err(FetchError::Status(404)),
        }
    }
}

fn seed_week(
    start_date: &str,
    end_date: &str,
    days: &[&str],
    tasks: &[(&str, i64, &str, u32)],
) -> WeekData {
    WeekData {
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        tasks: days
            .iter()
            .map(|day| DayTasks {
                label: day.to_string(),
                tasks: tasks
                    .iter()
                    .filter(|(d, _, _, _)| d == day)
                    .map(|(_, id, project, hours)| Task {
                        id: *id,
                        project: project.to_string(),
                        hours: *hours,
                        category: None,
                    })
                    .collect(),
            })
            .collect(),
    }
}
