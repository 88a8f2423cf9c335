//! Visibility Filter
//!
//! Selects which subset of the task list is displayed.

use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl VisibilityFilter {
    /// All filters in display order
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::All,
        VisibilityFilter::Active,
        VisibilityFilter::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityFilter::All => "ALL",
            VisibilityFilter::Active => "ACTIVE",
            VisibilityFilter::Completed => "COMPLETED",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::All => "All",
            VisibilityFilter::Active => "Active",
            VisibilityFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Active => !task.completed,
            VisibilityFilter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn test_filter_strings() {
        let names: Vec<&str> = VisibilityFilter::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["ALL", "ACTIVE", "COMPLETED"]);
        assert_eq!(VisibilityFilter::default(), VisibilityFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new(TaskId(0), "a");
        assert!(VisibilityFilter::All.matches(&task));
        assert!(VisibilityFilter::Active.matches(&task));
        assert!(!VisibilityFilter::Completed.matches(&task));

        task.completed = true;
        assert!(VisibilityFilter::All.matches(&task));
        assert!(!VisibilityFilter::Active.matches(&task));
        assert!(VisibilityFilter::Completed.matches(&task));
    }
}
