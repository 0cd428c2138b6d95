use crate::domain::Task;

/// Work classification driving row tag coloring. One source of
/// truth: the task's explicit category tag when present, otherwise a
/// keyword match over the project name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Development,
    Design,
    Meeting,
    General,
}

impl Category {
    pub fn of(task: &Task) -> Category {
        if let Some(tag) = task.category.as_deref() {
            return Self::from_tag(tag);
        }
        Self::from_keywords(&task.project).unwrap_or(Category::General)
    }

    fn from_tag(tag: &str) -> Category {
        match tag.to_lowercase().as_str() {
            "development" => Category::Development,
            "design" => Category::Design,
            "meeting" => Category::Meeting,
            _ => Category::General,
        }
    }

    fn from_keywords(s: &str) -> Option<Category> {
        let s = s.to_lowercase();
        if s.contains("development") {
            Some(Category::Development)
        } else if s.contains("design") {
            Some(Category::Design)
        } else if s.contains("meeting") {
            Some(Category::Meeting)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(project: &str, category: Option<&str>) -> Task {
        Task {
            id: 1,
            project: project.to_string(),
            hours: 1,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn explicit_tag_wins_over_project_keywords() {
        let t = task("Homepage Development", Some("Meeting"));
        assert_eq!(Category::of(&t), Category::Meeting);
    }

    #[test]
    fn project_keywords_are_the_fallback() {
        assert_eq!(
            Category::of(&task("Homepage Development", None)),
            Category::Development
        );
        assert_eq!(
            Category::of(&task("Dashboard Design", None)),
            Category::Design
        );
        assert_eq!(
            Category::of(&task("Sprint meeting notes", None)),
            Category::Meeting
        );
    }

    #[test]
    fn unmatched_projects_are_general() {
        assert_eq!(Category::of(&task("API Integration", None)), Category::General);
        assert_eq!(
            Category::of(&task("API Integration", Some("Testing"))),
            Category::General
        );
    }
}
