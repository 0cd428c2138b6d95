use ticktock_client::domain::{EntryIdGen, Task, WeekData, WeekSummary};

mod form;
mod state;

pub use form::{
    EntryForm, FormField, NewEntry, MAX_HOURS, MIN_HOURS, PROJECT_OPTIONS, PROJECT_PLACEHOLDER,
    WORK_TYPE_OPTIONS, WORK_TYPE_PLACEHOLDER,
};
pub use state::{
    Fetch, MenuItem, TaskMenu, TextInput, View, WeekCursor, WEEKLY_HOURS_TARGET,
};

/// A row the week-view cursor can rest on.
#[derive(Debug, Clone, PartialEq)]
pub enum WeekRow<'a> {
    Task { day: &'a str, task: &'a Task },
    AddTask { day: &'a str },
}

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Week list
    pub summaries: Fetch<Vec<WeekSummary>>,
    pub table_index: usize,

    // Week detail
    pub selected_week: Option<String>,
    pub week: Fetch<WeekData>,
    pub week_cursor: Option<WeekCursor>,
    pub week_scroll: usize,
    pub task_menu: Option<TaskMenu>,
    pub entry_form: Option<EntryForm>,

    // Ids for locally added tasks
    pub entry_ids: EntryIdGen,

    // Fetch sequencing: a completion older than the latest issued
    // request for its target is dropped.
    pub summaries_seq: u64,
    pub week_seq: u64,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Timesheets,
            status_message: None,
            summaries: Fetch::Loading,
            table_index: 0,
            selected_week: None,
            week: Fetch::Loading,
            week_cursor: None,
            week_scroll: 0,
            task_menu: None,
            entry_form: None,
            entry_ids: EntryIdGen::new(),
            summaries_seq: 0,
            week_seq: 0,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // --- Week list navigation ---

    pub fn table_select_next(&mut self) {
        if let Some(rows) = self.summaries.loaded() {
            if self.table_index + 1 < rows.len() {
                self.table_index += 1;
            }
        }
    }

    pub fn table_select_previous(&mut self) {
        if self.table_index > 0 {
            self.table_index -= 1;
        }
    }

    /// Switch to the detail view for `week`. The caller issues the
    /// fetch; until it completes the view shows the loading state.
    pub fn open_week(&mut self, week: String) {
        self.selected_week = Some(week);
        self.current_view = View::Week;
        self.week = Fetch::Loading;
        self.week_cursor = None;
        self.week_scroll = 0;
        self.task_menu = None;
        self.entry_form = None;
        self.clear_status();
    }

    pub fn back_to_timesheets(&mut self) {
        self.selected_week = None;
        self.current_view = View::Timesheets;
        self.week_cursor = None;
        self.task_menu = None;
        self.entry_form = None;
        self.clear_status();
    }

    // --- Week detail navigation ---

    pub fn week_cursor_down(&mut self) {
        let Some(week) = self.week.loaded() else {
            return;
        };
        if week.tasks.is_empty() {
            return;
        }
        let Some(cur) = self.week_cursor else {
            self.week_cursor = Some(WeekCursor { day: 0, row: 0 });
            return;
        };
        let day_rows = week.tasks[cur.day].tasks.len();
        if cur.row < day_rows {
            self.week_cursor = Some(WeekCursor {
                day: cur.day,
                row: cur.row + 1,
            });
        } else if cur.day + 1 < week.tasks.len() {
            self.week_cursor = Some(WeekCursor {
                day: cur.day + 1,
                row: 0,
            });
        }
    }

    pub fn week_cursor_up(&mut self) {
        let Some(week) = self.week.loaded() else {
            return;
        };
        let Some(cur) = self.week_cursor else {
            return;
        };
        if cur.row > 0 {
            self.week_cursor = Some(WeekCursor {
                day: cur.day,
                row: cur.row - 1,
            });
        } else if cur.day > 0 {
            let prev_day = cur.day - 1;
            self.week_cursor = Some(WeekCursor {
                day: prev_day,
                row: week.tasks[prev_day].tasks.len(),
            });
        }
    }

    /// The row under the cursor, if any.
    pub fn week_cursor_row(&self) -> Option<WeekRow<'_>> {
        let week = self.week.loaded()?;
        let cur = self.week_cursor?;
        let day = week.tasks.get(cur.day)?;
        match day.tasks.get(cur.row) {
            Some(task) => Some(WeekRow::Task {
                day: &day.label,
                task,
            }),
            None if cur.row == day.tasks.len() => Some(WeekRow::AddTask { day: &day.label }),
            None => None,
        }
    }

    // --- Overlays ---

    pub fn open_task_menu(&mut self, day: String, task_id: i64) {
        self.task_menu = Some(TaskMenu {
            day,
            task_id,
            selected: MenuItem::Edit,
        });
    }

    pub fn close_task_menu(&mut self) {
        self.task_menu = None;
    }

    pub fn open_entry_form(&mut self, day: String) {
        self.entry_form = Some(EntryForm::new(day));
    }

    /// Discards in-progress input with no confirmation.
    pub fn close_entry_form(&mut self) {
        self.entry_form = None;
    }

    // --- Local mutations ---
    //
    // These touch only the in-memory week snapshot; the backend has
    // no write endpoints, so they are lost on the next fetch.

    pub fn apply_add_entry(&mut self, day: &str, entry: NewEntry) {
        let Some(week) = self.week.loaded() else {
            return;
        };
        // Only project and hours have a column in the week payload;
        // the submitted work type and description are not stored.
        let task = Task {
            id: self.entry_ids.next_id(),
            project: entry.project,
            hours: entry.hours,
            category: None,
        };
        let updated = week.with_task_added(day, task);
        self.week = Fetch::Loaded(updated);
    }

    pub fn apply_delete_task(&mut self, day: &str, task_id: i64) {
        let Some(week) = self.week.loaded() else {
            return;
        };
        let updated = week.with_task_removed(day, task_id);
        self.week = Fetch::Loaded(updated);
        self.clamp_week_cursor();
    }

    fn clamp_week_cursor(&mut self) {
        let Some(week) = self.week.loaded() else {
            return;
        };
        if let Some(cur) = self.week_cursor {
            let day = cur.day.min(week.tasks.len().saturating_sub(1));
            let row = cur.row.min(week.tasks[day].tasks.len());
            self.week_cursor = Some(WeekCursor { day, row });
        }
    }

    // --- Aggregates ---

    pub fn total_hours(&self) -> u32 {
        self.week.loaded().map(WeekData::total_hours).unwrap_or(0)
    }

    /// Progress bar fill, clamped to 100%.
    pub fn progress_ratio(&self) -> f64 {
        (self.total_hours() as f64 / WEEKLY_HOURS_TARGET).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticktock_client::domain::DayTasks;

    fn task(id: i64, project: &str, hours: u32) -> Task {
        Task {
            id,
            project: project.to_string(),
            hours,
            category: None,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.current_view = View::Week;
        app.selected_week = Some("2".to_string());
        app.week = Fetch::Loaded(WeekData {
            start_date: "2024-01-21".to_string(),
            end_date: "2024-01-26".to_string(),
            tasks: vec![
                DayTasks {
                    label: "Mon".to_string(),
                    tasks: vec![task(1, "Homepage Development", 4)],
                },
                DayTasks {
                    label: "Tue".to_string(),
                    tasks: vec![task(2, "Dashboard Design", 3), task(3, "API Integration", 5)],
                },
            ],
        });
        app
    }

    fn entry(hours: u32) -> NewEntry {
        NewEntry {
            project: "API Integration".to_string(),
            work_type: "Development".to_string(),
            description: "wire up endpoints".to_string(),
            hours,
        }
    }

    #[test]
    fn add_grows_the_day_by_one_with_a_fresh_id() {
        let mut app = loaded_app();
        let before = app.total_hours();

        app.apply_add_entry("Mon", entry(2));

        let week = app.week.loaded().unwrap();
        let mon = week.day("Mon").unwrap();
        assert_eq!(mon.tasks.len(), 2);
        let added = mon.tasks.last().unwrap();
        assert!(added.id > 3);
        assert_eq!(app.total_hours(), before + 2);

        // The work type and description were emitted but not stored.
        assert_eq!(added.project, "API Integration");
        assert_eq!(added.category, None);
    }

    #[test]
    fn repeated_adds_get_distinct_ids() {
        let mut app = loaded_app();
        app.apply_add_entry("Mon", entry(1));
        app.apply_add_entry("Mon", entry(1));

        let week = app.week.loaded().unwrap();
        let mon = &week.day("Mon").unwrap().tasks;
        assert_eq!(mon.len(), 3);
        assert_ne!(mon[1].id, mon[2].id);
    }

    #[test]
    fn delete_removes_the_id_and_its_hours() {
        let mut app = loaded_app();
        let before = app.total_hours();

        app.apply_delete_task("Tue", 2);

        let week = app.week.loaded().unwrap();
        assert!(!week.contains_id(2));
        assert_eq!(app.total_hours(), before - 3);

        // Deleting an id that is gone is a no-op.
        app.apply_delete_task("Tue", 2);
        assert_eq!(app.total_hours(), before - 3);
    }

    #[test]
    fn progress_ratio_is_clamped() {
        let mut app = loaded_app();
        assert_eq!(app.total_hours(), 12);

        app.apply_add_entry("Mon", entry(8));
        assert_eq!(app.total_hours(), 20);
        assert!((app.progress_ratio() - 0.5).abs() < f64::EPSILON);

        app.apply_add_entry("Tue", entry(12));
        app.apply_add_entry("Tue", entry(12));
        assert_eq!(app.total_hours(), 44);
        assert!((app.progress_ratio() - 1.0).abs() < f64::EPSILON);

        app.week = Fetch::Loaded(WeekData {
            start_date: String::new(),
            end_date: String::new(),
            tasks: vec![],
        });
        assert_eq!(app.progress_ratio(), 0.0);
    }

    #[test]
    fn cursor_walks_task_rows_and_add_rows() {
        let mut app = loaded_app();
        app.week_cursor_down();
        assert_eq!(app.week_cursor, Some(WeekCursor { day: 0, row: 0 }));
        assert!(matches!(
            app.week_cursor_row(),
            Some(WeekRow::Task { day: "Mon", .. })
        ));

        app.week_cursor_down();
        assert!(matches!(
            app.week_cursor_row(),
            Some(WeekRow::AddTask { day: "Mon" })
        ));

        app.week_cursor_down();
        assert!(matches!(
            app.week_cursor_row(),
            Some(WeekRow::Task { day: "Tue", .. })
        ));

        // Walk to the very end: the last day's add row.
        for _ in 0..10 {
            app.week_cursor_down();
        }
        assert!(matches!(
            app.week_cursor_row(),
            Some(WeekRow::AddTask { day: "Tue" })
        ));

        app.week_cursor_up();
        assert!(matches!(
            app.week_cursor_row(),
            Some(WeekRow::Task { day: "Tue", .. })
        ));
    }

    #[test]
    fn cursor_is_clamped_after_delete() {
        let mut app = loaded_app();
        // Rest on Tue's add row (rows: 2 tasks, add row at 2).
        app.week_cursor = Some(WeekCursor { day: 1, row: 2 });
        app.apply_delete_task("Tue", 3);
        assert_eq!(app.week_cursor, Some(WeekCursor { day: 1, row: 1 }));
    }
}
