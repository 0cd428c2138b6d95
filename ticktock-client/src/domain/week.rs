use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;

/// A single logged unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project: String,
    pub hours: u32,
    #[serde(default)]
    pub category: Option<String>,
}

/// The tasks logged under one day label, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTasks {
    pub label: String,
    pub tasks: Vec<Task>,
}

/// One week's timesheet as returned by `GET /api/timesheets/{week}`.
///
/// The wire format keys tasks by day label; key order is the server's
/// day order and is preserved here. A week is replaced wholesale on
/// every fetch, and mutations build a fresh value instead of editing
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekData {
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "ordered_days")]
    pub tasks: Vec<DayTasks>,
}

impl WeekData {
    pub fn day(&self, label: &str) -> Option<&DayTasks> {
        self.tasks.iter().find(|d| d.label == label)
    }

    /// Sum of all entries' hours across the week. Recomputed on
    /// demand, never stored.
    pub fn total_hours(&self) -> u32 {
        self.tasks
            .iter()
            .flat_map(|d| &d.tasks)
            .map(|t| t.hours)
            .sum()
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.tasks
            .iter()
            .flat_map(|d| &d.tasks)
            .any(|t| t.id == id)
    }

    /// Returns a new week with `task` appended to `day`. Days are
    /// never created client-side: an unknown label leaves the week
    /// unchanged.
    pub fn with_task_added(&self, day: &str, task: Task) -> WeekData {
        WeekData {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            tasks: self
                .tasks
                .iter()
                .map(|d| {
                    let mut tasks = d.tasks.clone();
                    if d.label == day {
                        tasks.push(task.clone());
                    }
                    DayTasks {
                        label: d.label.clone(),
                        tasks,
                    }
                })
                .collect(),
        }
    }

    /// Returns a new week with the task matching `id` removed from
    /// `day`. Removing an absent id is a no-op.
    pub fn with_task_removed(&self, day: &str, id: i64) -> WeekData {
        WeekData {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            tasks: self
                .tasks
                .iter()
                .map(|d| {
                    let mut tasks = d.tasks.clone();
                    if d.label == day {
                        tasks.retain(|t| t.id != id);
                    }
                    DayTasks {
                        label: d.label.clone(),
                        tasks,
                    }
                })
                .collect(),
        }
    }
}

fn ordered_days<'de, D>(deserializer: D) -> Result<Vec<DayTasks>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DayMapVisitor;

    impl<'de> Visitor<'de> for DayMapVisitor {
        type Value = Vec<DayTasks>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of day labels to task arrays")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut days = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, tasks)) = map.next_entry::<String, Vec<Task>>()? {
                days.push(DayTasks { label, tasks });
            }
            Ok(days)
        }
    }

    deserializer.deserialize_map(DayMapVisitor)
}

/// Id source for locally added tasks: the millisecond clock, forced
/// strictly increasing so ids stay unique within a session even when
/// two entries land in the same millisecond.
#[derive(Debug, Default)]
pub struct EntryIdGen {
    last: i64,
}

impl EntryIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> i64 {
        let now_millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        self.last = now_millis.max(self.last + 1);
        self.last
    }
}
