//! Tests for the shared session handle.

use botcommand_core::Session;

#[test]
fn test_in_memory_session_starts_signed_out() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.bearer_header(), None);
}

#[test]
fn test_clones_share_state() {
    let session = Session::in_memory();
    let other = session.clone();
    session.store_token("shared").unwrap();
    assert_eq!(other.token().as_deref(), Some("shared"));
    other.clear().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_expire_clears_and_flags_once() {
    let session = Session::in_memory();
    session.store_token("t").unwrap();
    session.expire().unwrap();
    assert!(!session.is_authenticated());
    assert!(session.take_expired());
    assert!(!session.take_expired());
}

#[test]
fn test_store_token_resets_expiry() {
    let session = Session::in_memory();
    session.expire().unwrap();
    session.store_token("fresh").unwrap();
    assert!(!session.take_expired());
}

#[test]
fn test_persistent_session_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("token");

    let session = Session::persistent(&path).unwrap();
    assert!(!session.is_authenticated());
    session.store_token("mock-token-12345").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "mock-token-12345");

    let reopened = Session::persistent(&path).unwrap();
    assert_eq!(reopened.token().as_deref(), Some("mock-token-12345"));

    reopened.clear().unwrap();
    assert!(!path.exists());
    assert!(!Session::persistent(&path).unwrap().is_authenticated());
}

#[test]
fn test_expire_removes_persisted_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    let session = Session::persistent(&path).unwrap();
    session.store_token("abc").unwrap();
    session.expire().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_blank_token_file_is_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  \n").unwrap();
    assert!(!Session::persistent(&path).unwrap().is_authenticated());
}
