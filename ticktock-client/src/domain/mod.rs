mod category;
mod week;
mod week_summary;

pub use category::Category;
pub use week::{DayTasks, EntryIdGen, Task, WeekData};
pub use week_summary::{TimesheetStatus, WeekAction, WeekSummary};
