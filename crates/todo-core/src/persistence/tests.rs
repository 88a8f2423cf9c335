//! Persistence Integration Tests
//!
//! Exercises TodoSession against MemoryStorage.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, DomainResult, Task, TaskId, TaskRecord, VisibilityFilter};
    use crate::persistence::{decode, encode, MemoryStorage, SlotStorage, TodoSession};
    use crate::input::submitted_title;
    use crate::DEFAULT_STORAGE_KEY;

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn setup_session(raw: Option<&str>) -> TodoSession<MemoryStorage> {
        init_logging();
        let storage = match raw {
            Some(value) => MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, value),
            None => MemoryStorage::new(),
        };
        TodoSession::open(storage, DEFAULT_STORAGE_KEY)
    }

    fn slot(session: &TodoSession<MemoryStorage>) -> Option<String> {
        session.storage().read(DEFAULT_STORAGE_KEY).expect("memory read")
    }

    /// Storage that refuses every write
    struct ReadOnlyStorage;

    impl SlotStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage(format!("{} is read-only", key)))
        }
    }

    #[test]
    fn test_open_missing_slot_is_empty() {
        let session = setup_session(None);
        assert!(session.list().tasks().is_empty());
        assert_eq!(session.storage().write_count(), 0);
    }

    #[test]
    fn test_open_invalid_slot_is_empty() {
        for raw in ["", "{", "42", r#"{"title":"a","completed":false}"#, r#"[{"completed":true}]"#] {
            let session = setup_session(Some(raw));
            assert!(session.list().tasks().is_empty(), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_every_list_mutation_rewrites_slot() {
        let mut session = setup_session(None);
        let milk = session.add("buy milk");
        assert_eq!(slot(&session).as_deref(), Some(r#"[{"title":"buy milk","completed":false}]"#));

        session.toggle(milk).unwrap();
        assert_eq!(slot(&session).as_deref(), Some(r#"[{"title":"buy milk","completed":true}]"#));

        session.add("walk dog");
        session.clear_completed();
        assert_eq!(slot(&session).as_deref(), Some(r#"[{"title":"walk dog","completed":false}]"#));
        assert_eq!(session.storage().write_count(), 4);
    }

    #[test]
    fn test_view_changes_do_not_write() {
        let mut session = setup_session(Some(r#"[{"title":"x","completed":false}]"#));
        let id = session.list().tasks()[0].id;

        session.set_filter(VisibilityFilter::Completed);
        session.begin_edit(id).unwrap();
        session.set_draft("y");
        session.cancel_edit();
        assert_eq!(session.storage().write_count(), 0);

        session.begin_edit(id).unwrap();
        session.set_draft("y");
        session.commit_edit().unwrap();
        assert_eq!(session.storage().write_count(), 1);
        assert_eq!(slot(&session).as_deref(), Some(r#"[{"title":"y","completed":false}]"#));
    }

    #[test]
    fn test_reload_restores_list() {
        let mut session = setup_session(None);
        let a = session.add("a");
        session.add("b");
        session.toggle(a).unwrap();

        let reopened = TodoSession::open(session.storage().clone(), DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.list().records(), session.list().records());
        assert_eq!(reopened.list().remaining_count(), 1);
    }

    #[test]
    fn test_round_trip_is_field_wise_and_byte_identical() {
        let tasks = vec![
            Task { id: TaskId(0), title: "a \"quoted\" title".into(), completed: true },
            Task { id: TaskId(5), title: "日本語".into(), completed: false },
            Task { id: TaskId(9), title: String::new(), completed: false },
        ];
        let json = encode(&tasks).unwrap();
        let restored: Vec<Task> = decode(&json)
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, record)| Task::from_record(TaskId(i as u32), record))
            .collect();

        assert_eq!(restored.len(), tasks.len());
        assert!(restored.iter().zip(&tasks).all(|(a, b)| a.same_record(b)));
        assert_eq!(encode(&restored).unwrap(), json);
    }

    #[test]
    fn test_unmutated_slot_is_preserved_byte_for_byte() {
        let raw = r#"[{"title":"a","completed":false},{"title":"b","completed":true}]"#;
        let session = setup_session(Some(raw));
        session.persist().unwrap();
        assert_eq!(slot(&session).as_deref(), Some(raw));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        init_logging();
        let mut session = TodoSession::open(ReadOnlyStorage, "todos");
        session.add("a");
        session.toggle_all();
        assert_eq!(session.list().records(), vec![TaskRecord::new("a", true)]);
        assert!(session.persist().is_err());
    }

    #[test]
    fn test_unknown_id_leaves_slot_untouched() {
        let mut session = setup_session(None);
        session.add("a");
        let writes = session.storage().write_count();
        assert!(session.toggle(TaskId(99)).is_err());
        assert!(session.remove(TaskId(99)).is_err());
        assert_eq!(session.storage().write_count(), writes);
    }

    #[test]
    fn test_externally_cleared_slot_reopens_empty() {
        let mut session = setup_session(None);
        session.add("a");
        session.storage().clear();

        let reopened = TodoSession::open(session.storage().clone(), DEFAULT_STORAGE_KEY);
        assert!(reopened.list().tasks().is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let storage = MemoryStorage::new();
        let mut work = TodoSession::open(storage.clone(), "work");
        work.add("report");
        let home = TodoSession::open(storage, "home");
        assert!(home.list().tasks().is_empty());
    }

    #[test]
    fn test_submitted_title_is_stored_as_typed() {
        let mut session = setup_session(None);
        let title = submitted_title("  buy milk ").expect("non-blank input");
        session.add(title);
        assert_eq!(slot(&session).as_deref(), Some(r#"[{"title":"  buy milk ","completed":false}]"#));
    }
}
