use super::state::TextInput;

/// Projects the entry form offers for selection.
pub const PROJECT_OPTIONS: [&str; 3] = [
    "Homepage Development",
    "Dashboard Design",
    "API Integration",
];

/// Work types the entry form offers for selection.
pub const WORK_TYPE_OPTIONS: [&str; 4] = ["Development", "Design", "Testing", "Meeting"];

/// Display label for an unselected project.
pub const PROJECT_PLACEHOLDER: &str = "Project Name";

/// Display label for an unselected work type. Reads like a real
/// category but maps to no selection.
pub const WORK_TYPE_PLACEHOLDER: &str = "Bug fixes";

pub const MIN_HOURS: u32 = 1;
pub const MAX_HOURS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Project,
    WorkType,
    Description,
    Hours,
}

/// What a completed form emits upward. The parent decides what to do
/// with it; the form itself performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub project: String,
    pub work_type: String,
    pub description: String,
    pub hours: u32,
}

/// The "Add New Entry" overlay form, scoped to one day of the week
/// being viewed. The day is carried here so the parent can associate
/// the submitted entry; the form fields themselves know nothing about
/// dates.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub day: String,
    pub project: Option<usize>,
    pub work_type: Option<usize>,
    pub description: TextInput,
    pub hours: u32,
    pub focused_field: FormField,
}

impl EntryForm {
    pub fn new(day: String) -> Self {
        Self {
            day,
            project: None,
            work_type: None,
            description: TextInput::new(),
            hours: MIN_HOURS,
            focused_field: FormField::Project,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Project => FormField::WorkType,
            FormField::WorkType => FormField::Description,
            FormField::Description => FormField::Hours,
            FormField::Hours => FormField::Project,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Project => FormField::Hours,
            FormField::WorkType => FormField::Project,
            FormField::Description => FormField::WorkType,
            FormField::Hours => FormField::Description,
        };
    }

    /// Advance the focused select to its next option (wrapping back
    /// to unselected), or increment hours.
    pub fn select_next(&mut self) {
        match self.focused_field {
            FormField::Project => {
                self.project = cycle_forward(self.project, PROJECT_OPTIONS.len());
            }
            FormField::WorkType => {
                self.work_type = cycle_forward(self.work_type, WORK_TYPE_OPTIONS.len());
            }
            FormField::Hours => self.increment_hours(),
            FormField::Description => {}
        }
    }

    /// The reverse of `select_next`.
    pub fn select_prev(&mut self) {
        match self.focused_field {
            FormField::Project => {
                self.project = cycle_backward(self.project, PROJECT_OPTIONS.len());
            }
            FormField::WorkType => {
                self.work_type = cycle_backward(self.work_type, WORK_TYPE_OPTIONS.len());
            }
            FormField::Hours => self.decrement_hours(),
            FormField::Description => {}
        }
    }

    /// Saturates at the upper bound.
    pub fn increment_hours(&mut self) {
        if self.hours < MAX_HOURS {
            self.hours += 1;
        }
    }

    /// Saturates at the lower bound.
    pub fn decrement_hours(&mut self) {
        if self.hours > MIN_HOURS {
            self.hours -= 1;
        }
    }

    pub fn project_label(&self) -> &'static str {
        self.project
            .map(|i| PROJECT_OPTIONS[i])
            .unwrap_or(PROJECT_PLACEHOLDER)
    }

    pub fn work_type_label(&self) -> &'static str {
        self.work_type
            .map(|i| WORK_TYPE_OPTIONS[i])
            .unwrap_or(WORK_TYPE_PLACEHOLDER)
    }

    /// Submit gate: all four fields must be non-empty/non-zero.
    pub fn is_complete(&self) -> bool {
        self.project.is_some()
            && self.work_type.is_some()
            && !self.description.is_empty()
            && self.hours > 0
    }

    /// The submit callback's payload, or None while the gate holds.
    pub fn new_entry(&self) -> Option<NewEntry> {
        if !self.is_complete() {
            return None;
        }
        Some(NewEntry {
            project: PROJECT_OPTIONS[self.project?].to_string(),
            work_type: WORK_TYPE_OPTIONS[self.work_type?].to_string(),
            description: self.description.value.clone(),
            hours: self.hours,
        })
    }
}

fn cycle_forward(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        Some(_) => None,
    }
}

fn cycle_backward(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None => Some(len - 1),
        Some(0) => None,
        Some(i) => Some(i - 1),
    }
}
