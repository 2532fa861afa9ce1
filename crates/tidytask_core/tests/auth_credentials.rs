use rusqlite::Connection;
use tidytask_core::db::open_db_in_memory;
use tidytask_core::{CredentialStore, SqliteCredentialStore};

#[test]
fn register_then_authenticate_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&conn);

    assert!(store.register("alice", "correct horse battery").unwrap());

    let user = store
        .authenticate("alice", "correct horse battery")
        .unwrap()
        .expect("valid credentials should authenticate");
    assert_eq!(user.username, "alice");
    assert!(user.id > 0);
}

#[test]
fn duplicate_username_is_reported_not_raised() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&conn);

    assert!(store.register("alice", "first password").unwrap());
    assert!(!store.register("alice", "second password").unwrap());

    // The original account keeps its original password.
    assert!(store
        .authenticate("alice", "first password")
        .unwrap()
        .is_some());
    assert!(store
        .authenticate("alice", "second password")
        .unwrap()
        .is_none());
}

#[test]
fn wrong_password_and_unknown_user_return_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&conn);

    store.register("alice", "right one").unwrap();

    assert!(store.authenticate("alice", "wrong one").unwrap().is_none());
    assert!(store.authenticate("mallory", "anything").unwrap().is_none());
}

#[test]
fn stored_hash_is_salted_and_never_plaintext() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&conn);

    store.register("alice", "hunter2hunter2").unwrap();
    store.register("bob", "hunter2hunter2").unwrap();

    let load_hash = |username: &str| -> String {
        conn.query_row(
            "SELECT password_hash FROM users WHERE username = ?1;",
            [username],
            |row| row.get(0),
        )
        .unwrap()
    };

    let alice_hash = load_hash("alice");
    let bob_hash = load_hash("bob");

    assert!(alice_hash.starts_with("$argon2"));
    assert!(!alice_hash.contains("hunter2hunter2"));
    // Per-password random salts: same password, different hashes.
    assert_ne!(alice_hash, bob_hash);
}
