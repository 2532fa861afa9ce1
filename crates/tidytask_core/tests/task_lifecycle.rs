//! End-to-end lifecycle walkthroughs across auth, tasks and the recycle bin.

use rusqlite::Connection;
use tidytask_core::db::open_db_in_memory;
use tidytask_core::{
    CredentialStore, SqliteCredentialStore, SqliteRecycleBinRepository, SqliteTaskRepository,
    TaskService, TaskStatus,
};

fn service(
    conn: &Connection,
) -> TaskService<SqliteTaskRepository<'_>, SqliteRecycleBinRepository<'_>> {
    TaskService::new(
        SqliteTaskRepository::new(conn),
        SqliteRecycleBinRepository::new(conn),
    )
}

#[test]
fn full_session_walkthrough() {
    let conn = open_db_in_memory().unwrap();
    let auth = SqliteCredentialStore::new(&conn);
    assert!(auth.register("alice", "open sesame 42").unwrap());
    let alice = auth
        .authenticate("alice", "open sesame 42")
        .unwrap()
        .expect("freshly registered account should log in");

    let service = service(&conn);

    // Add: appears pending in the list.
    let task = service.add_task(alice.id, "Buy milk").unwrap();
    let tasks = service.list_tasks(alice.id).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "Buy milk");
    assert_eq!(tasks[0].status, TaskStatus::Pending);

    // Toggle: now done.
    service.toggle_status(task.id).unwrap();
    assert_eq!(service.list_tasks(alice.id).unwrap()[0].status, TaskStatus::Done);

    // Delete: list empties, bin gains one matching entry.
    service.delete_task(task.id).unwrap();
    assert!(service.list_tasks(alice.id).unwrap().is_empty());
    let bin = service.list_recycle_bin(alice.id).unwrap();
    assert_eq!(bin.len(), 1);
    assert_eq!(bin[0].description, "Buy milk");
    assert_eq!(bin[0].original_id, task.id);

    // Restore: one pending "Buy milk" under a new id, bin empty again.
    service.restore_task(task.id).unwrap();
    let restored = service.list_tasks(alice.id).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].description, "Buy milk");
    assert_eq!(restored[0].status, TaskStatus::Pending);
    assert_ne!(restored[0].id, task.id);
    assert!(service.list_recycle_bin(alice.id).unwrap().is_empty());
}

#[test]
fn delete_then_delete_again_cannot_double_book_the_bin() {
    let conn = open_db_in_memory().unwrap();
    let auth = SqliteCredentialStore::new(&conn);
    assert!(auth.register("alice", "open sesame 42").unwrap());
    let alice = auth.authenticate("alice", "open sesame 42").unwrap().unwrap();

    let service = service(&conn);
    let task = service.add_task(alice.id, "only once").unwrap();

    service.delete_task(task.id).unwrap();
    // The task no longer exists, so a second delete is a no-op: at most one
    // live bin entry per original id.
    service.delete_task(task.id).unwrap();

    assert_eq!(service.list_recycle_bin(alice.id).unwrap().len(), 1);
}
