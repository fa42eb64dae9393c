//! Renderer
//!
//! What the list view shows for a given task list and filter. Row
//! visibility is computed per row so switching filters never rebuilds rows.

use crate::filter::Filter;
use crate::models::Task;
use crate::task_list::TaskList;

pub const EMPTY_PLACEHOLDER: &str = "No tasks yet.";

/// Rows in display order
pub fn rows(tasks: &TaskList) -> Vec<Task> {
    tasks.iter().cloned().collect()
}

/// The single placeholder row shown instead of task rows
pub fn placeholder(tasks: &TaskList) -> Option<&'static str> {
    tasks.is_empty().then_some(EMPTY_PLACEHOLDER)
}

/// Whether a row is visually hidden under `filter`
pub fn row_hidden(filter: Filter, done: bool) -> bool {
    !filter.matches(done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hidden_count(tasks: &TaskList, filter: Filter) -> usize {
        rows(tasks).iter().filter(|row| row_hidden(filter, row.done)).count()
    }

    #[test]
    fn test_placeholder_only_when_empty() {
        let mut tasks = TaskList::new();
        assert_eq!(placeholder(&tasks), Some("No tasks yet."));
        assert!(rows(&tasks).is_empty());

        tasks.add("Buy milk");
        assert_eq!(placeholder(&tasks), None);
        assert_eq!(rows(&tasks).len(), 1);

        tasks.remove(0);
        assert_eq!(placeholder(&tasks), Some("No tasks yet."));
    }

    #[test]
    fn test_rows_follow_list_order() {
        let mut tasks = TaskList::new();
        let a = tasks.add("first");
        let b = tasks.add("second");
        let ids: Vec<_> = rows(&tasks).iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[rstest]
    #[case(Filter::All, 0)]
    #[case(Filter::Active, 1)]
    #[case(Filter::Done, 2)]
    fn test_hidden_rows_per_filter(#[case] filter: Filter, #[case] hidden: usize) {
        let mut tasks = TaskList::new();
        tasks.add("done one");
        tasks.add("open one");
        tasks.add("open two");
        tasks.toggle(0, true);
        assert_eq!(hidden_count(&tasks, filter), hidden);
    }

    #[test]
    fn test_filter_stays_applied_after_toggle() {
        let mut tasks = TaskList::new();
        tasks.add("Buy milk");
        let filter = Filter::Active;
        assert_eq!(hidden_count(&tasks, filter), 0);

        tasks.toggle(0, true);
        assert_eq!(hidden_count(&tasks, filter), 1);
    }
}
