//! Tests for the session module.

use std::io;

use serde_json::{json, Value};
use tempfile::TempDir;

use super::*;
use crate::{
    export::{ClipboardSink, WriterSink},
    params::{ClearProgram, Id, ListCourses, LoadProgram},
    program::{EventLog, ProgramEvent},
    store::MemoryStore,
    ProgramError, Result,
};

/// Store whose every operation fails.
struct BrokenStore;

impl PersistentStore for BrokenStore {
    fn write(&self, _key: &str, _blob: &Value) -> Result<()> {
        Err(ProgramError::Configuration {
            message: "disk full".to_string(),
        })
    }

    fn read(&self, _key: &str) -> Result<Option<Value>> {
        Err(ProgramError::Configuration {
            message: "unreadable".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<bool> {
        Err(ProgramError::Configuration {
            message: "read-only".to_string(),
        })
    }
}

/// Sink whose writes always fail.
struct BrokenSink;

impl ClipboardSink for BrokenSink {
    fn write_text(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::other("clipboard unavailable"))
    }
}

/// Helper function to create a session over a shared in-memory store
async fn create_test_session(store: Arc<MemoryStore>) -> Session {
    SessionBuilder::new()
        .with_catalog(Catalog::sample())
        .with_store(store)
        .build()
        .await
        .expect("Failed to create session")
}

fn add(session: &mut Session, ids: &[u64]) {
    for id in ids {
        session
            .add_course_by_id(&Id { id: *id })
            .expect("Failed to add course");
    }
}

#[tokio::test]
async fn test_add_course_by_id_resolves_catalog_courses() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;

    let course = session
        .add_course_by_id(&Id { id: 1 })
        .expect("Failed to add course");
    assert_eq!(course.id, 1);
    assert_eq!(session.program().course_ids(), vec![1]);

    let err = session
        .add_course_by_id(&Id { id: 999 })
        .expect_err("unknown course");
    assert!(matches!(err, ProgramError::CourseNotFound { id: 999 }));
    assert_eq!(session.program().len(), 1);
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;
    add(&mut session, &[1, 2]);

    let err = session
        .clear_program(&ClearProgram { confirmed: false })
        .expect_err("unconfirmed clear");
    assert!(matches!(err, ProgramError::InvalidInput { .. }));
    assert_eq!(session.program().len(), 2);

    let removed = session
        .clear_program(&ClearProgram { confirmed: true })
        .expect("Failed to clear");
    assert_eq!(removed, 2);
    assert!(session.program().is_empty());
}

#[tokio::test]
async fn test_load_predefined_program_reports_program() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;

    let (program, loaded) = session
        .load_predefined_program(&LoadProgram {
            name: "basic".to_string(),
        })
        .expect("Failed to load program");
    assert_eq!(program.name, "Basic program");
    assert_eq!(loaded, 3);
    assert_eq!(session.program().course_ids(), vec![1, 2, 10]);
    assert_eq!(session.summary().total_duration, 165);

    let err = session
        .load_predefined_program(&LoadProgram {
            name: "nope".to_string(),
        })
        .expect_err("unknown program");
    assert!(matches!(err, ProgramError::ProgramNotFound { .. }));
    assert_eq!(session.program().course_ids(), vec![1, 2, 10]);
}

#[tokio::test]
async fn test_move_and_remove_by_id() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;
    add(&mut session, &[1, 6, 10]);

    assert!(session.move_course_up(&Id { id: 10 }));
    assert!(!session.move_course_up(&Id { id: 1 }));
    assert!(session.move_course_down(&Id { id: 1 }));
    assert_eq!(session.program().course_ids(), vec![10, 1, 6]);

    let blocked = session.remove_course(&Id { id: 1 });
    assert!(matches!(
        blocked,
        Err(ProgramError::BlockedByDependents { id: 1, .. })
    ));

    let removed = session
        .remove_course(&Id { id: 6 })
        .expect("Failed to remove");
    assert_eq!(removed.map(|course| course.id), Some(6));
    assert!(session
        .remove_course(&Id { id: 6 })
        .expect("Failed to remove")
        .is_none());
}

#[tokio::test]
async fn test_list_courses_uses_catalog() {
    let session = create_test_session(Arc::new(MemoryStore::new())).await;
    let advanced = session
        .list_courses(&ListCourses {
            difficulty: Some("advanced".to_string()),
            ..Default::default()
        })
        .expect("Failed to list courses");
    assert_eq!(advanced.len(), 1);
    assert_eq!(advanced[0].id, 8);

    let programs = session.predefined_programs();
    let ids: Vec<&str> = programs.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec!["advanced", "basic", "intensive"]);
}

#[tokio::test]
async fn test_save_and_restore_between_sessions() {
    let store = Arc::new(MemoryStore::new());

    let mut first = create_test_session(Arc::clone(&store)).await;
    add(&mut first, &[1, 2, 3]);
    assert!(first.move_course_down(&Id { id: 1 }));
    assert!(first.save_program().await);

    let saved = store
        .read(DEFAULT_STORAGE_KEY)
        .expect("read")
        .expect("snapshot saved");
    assert_eq!(saved["totalDuration"], json!(195));
    assert!(saved["createdAt"].is_string());

    let mut second = create_test_session(Arc::clone(&store)).await;
    let log = EventLog::new();
    second.subscribe(log.clone());

    assert!(second.restore_saved_program().await);
    assert_eq!(second.program().course_ids(), vec![2, 1, 3]);
    let events = log.take();
    assert_eq!(events.len(), 4);
    assert_eq!(events.last(), Some(&ProgramEvent::ProgramMutated));
}

#[tokio::test]
async fn test_save_empty_program_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let session = create_test_session(Arc::clone(&store)).await;

    assert!(!session.save_program().await);
    assert!(store.read(DEFAULT_STORAGE_KEY).expect("read").is_none());
}

#[tokio::test]
async fn test_restore_without_snapshot_keeps_program() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;
    add(&mut session, &[1]);

    assert!(!session.restore_saved_program().await);
    assert_eq!(session.program().course_ids(), vec![1]);
}

#[tokio::test]
async fn test_restore_malformed_snapshot_keeps_program() {
    let store = Arc::new(MemoryStore::new());
    store
        .write(DEFAULT_STORAGE_KEY, &json!({ "courses": [] }))
        .expect("write");

    let mut session = create_test_session(Arc::clone(&store)).await;
    add(&mut session, &[1, 10]);

    assert!(!session.restore_saved_program().await);
    assert_eq!(session.program().course_ids(), vec![1, 10]);
}

#[tokio::test]
async fn test_store_failures_become_false() {
    let mut session = SessionBuilder::new()
        .with_catalog(Catalog::sample())
        .with_store(Arc::new(BrokenStore))
        .build()
        .await
        .expect("Failed to create session");
    add(&mut session, &[1]);

    assert!(!session.save_program().await);
    assert!(!session.restore_saved_program().await);
    assert!(!session.discard_saved_program().await);
    assert_eq!(session.program().course_ids(), vec![1]);
}

#[tokio::test]
async fn test_discard_saved_program() {
    let store = Arc::new(MemoryStore::new());
    let mut session = create_test_session(Arc::clone(&store)).await;
    add(&mut session, &[1]);
    assert!(session.save_program().await);

    assert!(session.discard_saved_program().await);
    assert!(!session.discard_saved_program().await);
    assert!(store.read(DEFAULT_STORAGE_KEY).expect("read").is_none());
}

#[tokio::test]
async fn test_storage_key_isolates_programs() {
    let store = Arc::new(MemoryStore::new());
    let mut alice = SessionBuilder::new()
        .with_catalog(Catalog::sample())
        .with_store(Arc::clone(&store) as Arc<dyn PersistentStore>)
        .with_storage_key("alice")
        .build()
        .await
        .expect("Failed to create session");
    add(&mut alice, &[1]);
    assert!(alice.save_program().await);

    let mut other = create_test_session(Arc::clone(&store)).await;
    assert!(!other.restore_saved_program().await);
    assert_eq!(alice.storage_key(), "alice");
}

#[tokio::test]
async fn test_blank_storage_key_is_rejected() {
    let result = SessionBuilder::new()
        .with_store(Arc::new(MemoryStore::new()))
        .with_storage_key("  ")
        .build()
        .await;
    assert!(matches!(result, Err(ProgramError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_export_program_to_sinks() {
    let mut session = create_test_session(Arc::new(MemoryStore::new())).await;

    let mut clipboard = String::from("untouched");
    assert!(!session.export_program(&mut clipboard));
    assert_eq!(clipboard, "untouched");

    add(&mut session, &[1]);
    assert!(session.export_program(&mut clipboard));
    assert_eq!(clipboard, session.export_text());

    let mut writer = WriterSink(Vec::new());
    assert!(session.export_program(&mut writer));
    assert!(writer.0.starts_with(b"TRAINING PROGRAM"));

    assert!(!session.export_program(&mut BrokenSink));
}

#[tokio::test]
async fn test_sqlite_backed_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(Catalog::sample())
        .build()
        .await
        .expect("Failed to create session");
    assert_eq!(session.catalog_source(), &CatalogSource::Provided);
    add(&mut session, &[1, 2]);
    assert!(session.save_program().await);
    assert!(db_path.exists());

    let mut reopened = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(Catalog::sample())
        .build()
        .await
        .expect("Failed to reopen session");
    assert!(reopened.restore_saved_program().await);
    assert_eq!(reopened.program().course_ids(), vec![1, 2]);
}

#[tokio::test]
async fn test_missing_catalog_file_falls_back_to_sample() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("courses.json");

    let session = SessionBuilder::new()
        .with_catalog_path(Some(&missing))
        .with_store(Arc::new(MemoryStore::new()))
        .build()
        .await
        .expect("Failed to create session");
    assert!(matches!(
        session.catalog_source(),
        CatalogSource::Fallback { path, .. } if path == &missing
    ));
    assert_eq!(session.catalog().len(), 10);
}
