//! Task store behavior tests.
//!
//! These tests verify:
//! - Splice-and-append semantics of the three move/remove operations
//! - The empty-name no-op on add
//! - Loud rejection of out-of-range positions, with state untouched
//! - Copy-on-read queries and stable task identity

#[cfg(test)]
pub mod tests {
    use pretty_assertions::assert_eq;

    use crate::bus::event_types;
    use crate::store::{StoreError, TaskSeed, TaskStatus, TaskStore};
    use crate::tests::{names, record_events, seeded_store};
    use std::sync::Arc;

    #[test]
    fn marking_completed_moves_the_task_across() {
        let (_bus, store) = seeded_store();

        store.mark_task_completed(1).unwrap();

        assert_eq!(names(&store.incomplete_tasks()), vec!["waste time", "blow up house"]);
        assert_eq!(
            names(&store.completed_tasks()),
            vec!["code", "sleep", "eat", "trouble neighbour"]
        );
    }

    #[test]
    fn round_trip_returns_the_task_to_the_end_of_its_source_list() {
        let (_bus, store) = seeded_store();
        let moved = store.incomplete_tasks()[0].clone();

        store.mark_task_completed(0).unwrap();
        let completed = store.completed_tasks();
        assert_eq!(completed.last().unwrap().id, moved.id);

        store.mark_task_incomplete(completed.len() - 1).unwrap();
        let incomplete = store.incomplete_tasks();
        assert_eq!(incomplete.last().unwrap(), &moved);
        assert_eq!(
            names(&incomplete),
            vec!["trouble neighbour", "blow up house", "waste time"]
        );
    }

    #[test]
    fn adding_an_empty_name_changes_nothing_and_stays_silent() {
        let (bus, store) = seeded_store();
        let log = record_events(&bus, event_types::ADD_TASK);

        store.add_task("");

        assert_eq!(
            names(&store.incomplete_tasks()),
            vec!["waste time", "trouble neighbour", "blow up house"]
        );
        assert_eq!(store.completed_tasks().len(), 3);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn adding_a_task_appends_and_publishes_exactly_one_event() {
        let (bus, store) = seeded_store();
        let add_log = record_events(&bus, event_types::ADD_TASK);
        let other_logs = [
            record_events(&bus, event_types::MARK_TASK_COMPLETED),
            record_events(&bus, event_types::MARK_TASK_INCOMPLETE),
            record_events(&bus, event_types::REMOVE_TASK),
        ];

        store.add_task("wash dishes");

        assert_eq!(
            names(&store.incomplete_tasks()),
            vec!["waste time", "trouble neighbour", "blow up house", "wash dishes"]
        );
        let add_events = add_log.lock().unwrap();
        assert_eq!(add_events.len(), 1);
        assert_eq!(add_events[0].event_type, event_types::ADD_TASK);
        assert!(add_events[0].payload.is_null());
        for log in &other_logs {
            assert!(log.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn removing_the_first_completed_task_shifts_the_rest_left() {
        let (_bus, store) = seeded_store();

        store.remove_task(0, TaskStatus::Completed).unwrap();

        assert_eq!(names(&store.completed_tasks()), vec!["sleep", "eat"]);
        assert_eq!(store.incomplete_tasks().len(), 3);
    }

    #[test]
    fn out_of_range_positions_are_rejected_with_state_untouched() {
        let (bus, store) = seeded_store();
        let log = record_events(&bus, event_types::MARK_TASK_COMPLETED);

        let err = store.mark_task_completed(3).unwrap_err();

        assert!(matches!(
            err,
            StoreError::IndexOutOfRange {
                index: 3,
                len: 3,
                status: TaskStatus::Incomplete
            }
        ));
        assert_eq!(store.incomplete_tasks().len(), 3);
        assert_eq!(store.completed_tasks().len(), 3);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_removal_is_rejected_on_the_named_list() {
        let (bus, store) = seeded_store();
        let log = record_events(&bus, event_types::REMOVE_TASK);

        let err = store.remove_task(7, TaskStatus::Incomplete).unwrap_err();

        assert!(matches!(
            err,
            StoreError::IndexOutOfRange {
                index: 7,
                len: 3,
                status: TaskStatus::Incomplete
            }
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn queries_return_copies() {
        let (_bus, store) = seeded_store();

        let mut snapshot = store.completed_tasks();
        snapshot[0].name = "hacked".to_string();
        snapshot.remove(1);

        assert_eq!(names(&store.completed_tasks()), vec!["code", "sleep", "eat"]);
    }

    #[test]
    fn ids_are_unique_across_both_lists() {
        let (_bus, store) = seeded_store();

        let mut ids: Vec<_> = store
            .completed_tasks()
            .iter()
            .chain(store.incomplete_tasks().iter())
            .map(|task| task.id)
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn duplicate_names_are_kept_as_distinct_tasks() {
        let (_bus, store) = seeded_store();

        store.add_task("waste time");

        let incomplete = store.incomplete_tasks();
        assert_eq!(
            names(&incomplete),
            vec!["waste time", "trouble neighbour", "blow up house", "waste time"]
        );
        assert_ne!(incomplete[0].id, incomplete[3].id);
    }

    #[test]
    fn an_empty_store_accepts_its_first_task() {
        let bus = Arc::new(crate::bus::EventBus::new());
        let store = TaskStore::new(Arc::clone(&bus), TaskSeed::empty());

        store.add_task("wash dishes");

        assert_eq!(names(&store.incomplete_tasks()), vec!["wash dishes"]);
        assert!(store.completed_tasks().is_empty());
    }
}
