//! Tests for the session lifecycle and route gating
//!
//! Covers save/load/clear against both backends and the end-to-end gate
//! scenarios: anonymous, wrong role, allowed role, logout, corrupt storage.

use std::fs;
use std::io;
use std::sync::Arc;

use crate::{
    AuthError, FileStore, KeyValueStore, Location, MemoryStore, NavShell, Navigation, Role, RoleSet,
    RouteGate, RouteGuard, RouteTable, Session, SessionStore, TOKEN_KEY, USER_KEY, UserProfile,
    View,
};

fn memory_session() -> SessionStore<Arc<MemoryStore>> {
    SessionStore::new(Arc::new(MemoryStore::new()))
}

fn ana() -> UserProfile {
    UserProfile::new("64f0c2", "ana@example.com", Role::Admin).with_name("Ana", "Pérez")
}

fn admin_or_manager() -> RouteGate {
    RouteGate::new(RouteGuard::new(RoleSet::of(&[Role::Admin, Role::Manager])))
}

// =============================================================================
// Session store
// =============================================================================

#[test]
fn test_empty_storage_loads_empty_session() {
    let store = memory_session();
    let session = store.load();
    assert_eq!(session, Session::empty());
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}

#[test]
fn test_save_then_load_roundtrip() {
    let store = memory_session();
    let user = ana();

    store.save("eyJhbGciOiJIUzI1NiJ9.abc.def", &user).unwrap();

    let session = store.load();
    assert_eq!(session.token(), Some("eyJhbGciOiJIUzI1NiJ9.abc.def"));
    assert_eq!(session.user.as_ref(), Some(&user));
    assert!(session.is_authenticated());
}

#[test]
fn test_save_writes_expected_layout() {
    let store = memory_session();
    store.save("abc", &ana()).unwrap();

    let raw_token = store.storage().get(TOKEN_KEY).unwrap();
    assert_eq!(raw_token.as_deref(), Some("abc"));

    let raw_user = store.storage().get(USER_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw_user).unwrap();
    assert_eq!(value["id"], "64f0c2");
    assert_eq!(value["role"], "Admin");
}

#[test]
fn test_clear_is_idempotent() {
    let store = memory_session();
    store.save("abc", &ana()).unwrap();

    store.clear().unwrap();
    assert_eq!(store.load(), Session::empty());

    store.clear().unwrap();
    assert_eq!(store.load(), Session::empty());
    assert!(store.storage().is_empty());
}

#[test]
fn test_token_without_user_is_empty() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_user_without_token_is_empty() {
    let store = memory_session();
    store
        .storage()
        .set(USER_KEY, &serde_json::to_string(&ana()).unwrap())
        .unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_empty_token_is_empty() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "").unwrap();
    store.storage().set(USER_KEY, &serde_json::to_string(&ana()).unwrap()).unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_save_rejects_empty_token() {
    let store = memory_session();
    let err = store.save("", &ana()).unwrap_err();
    assert!(matches!(err, AuthError::EmptyToken));
    assert!(store.storage().is_empty());
    assert_eq!(store.load(), Session::empty());
}

/// Storage that refuses to write the user profile
#[derive(Default)]
struct ProfileWriteFails {
    inner: MemoryStore,
}

impl KeyValueStore for ProfileWriteFails {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        if key == USER_KEY {
            return Err(AuthError::io_error(
                "/tmp/session.json",
                io::Error::new(io::ErrorKind::StorageFull, "disk full"),
            ));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> crate::Result<()> {
        self.inner.remove(key)
    }
}

#[test]
fn test_partial_save_keeps_token_and_loads_empty() {
    let store = SessionStore::new(ProfileWriteFails::default());

    let err = store.save("abc", &ana()).unwrap_err();
    assert!(matches!(err, AuthError::IoError { .. }));

    // no rollback: the token stays written
    assert_eq!(store.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    assert_eq!(store.storage().get(USER_KEY).unwrap(), None);
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_malformed_user_json_is_empty() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "abc").unwrap();
    store.storage().set(USER_KEY, "{not json").unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_unknown_role_is_empty() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "abc").unwrap();
    store
        .storage()
        .set(
            USER_KEY,
            r#"{"id":"1","first_name":"A","last_name":"B","email":"a@b.c","role":"Root"}"#,
        )
        .unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_empty_user_object_is_empty() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "abc").unwrap();
    store.storage().set(USER_KEY, "{}").unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_file_backed_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".eval360").join("session.json");

    let store = SessionStore::new(FileStore::new(&path));
    store.save("abc", &ana()).unwrap();

    let reopened = SessionStore::new(FileStore::new(&path));
    assert_eq!(reopened.load(), Session::new("abc", ana()));

    reopened.clear().unwrap();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "\u{0}\u{1}garbage").unwrap();

    let store = SessionStore::new(FileStore::new(&path));
    assert_eq!(store.load(), Session::empty());

    // Logging in again recovers
    store.save("abc", &ana()).unwrap();
    assert!(store.load().is_authenticated());
}

// =============================================================================
// Gate scenarios
// =============================================================================

#[test]
fn test_scenario_a_empty_session_redirects() {
    let store = memory_session();
    let outcome = admin_or_manager().check(&store, Location::new("/dashboard-admin"), "stats");

    let redirect = outcome.redirect().expect("should redirect");
    assert_eq!(redirect.to, "/home");
    assert_eq!(redirect.from, Location::new("/dashboard-admin"));
}

#[test]
fn test_scenario_b_employee_denied_admin_route() {
    let store = memory_session();
    store
        .save("abc", &UserProfile::new("7", "e@example.com", Role::Employee))
        .unwrap();

    let gate = RouteGate::new(RouteGuard::new(RoleSet::of(&[Role::Admin])));
    let outcome = gate.check(&store, Location::new("/dashboard-admin/admin/users/create"), ());
    assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/home"));
}

#[test]
fn test_scenario_c_admin_renders() {
    let store = memory_session();
    store.save("abc", &ana()).unwrap();

    let outcome = admin_or_manager().check(&store, Location::new("/dashboard-admin"), "stats");
    assert_eq!(outcome.into_content(), Some("stats"));
}

#[test]
fn test_scenario_d_logout_clears_storage() {
    let storage = Arc::new(MemoryStore::new());
    let mut shell = NavShell::new(SessionStore::new(Arc::clone(&storage)));
    shell.store().save("abc", &ana()).unwrap();

    shell.logout().unwrap();

    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert_eq!(SessionStore::new(storage).load(), Session::empty());
}

#[test]
fn test_scenario_e_malformed_user_redirects() {
    let store = memory_session();
    store.storage().set(TOKEN_KEY, "abc").unwrap();
    store.storage().set(USER_KEY, "{\"role\": ").unwrap();

    let outcome = admin_or_manager().check(&store, Location::new("/dashboard-admin"), ());
    assert!(!outcome.is_render());
}

#[test]
fn test_gate_reevaluates_after_login() {
    let store = memory_session();
    let gate = admin_or_manager();

    assert!(!gate.check(&store, Location::new("/dashboard-admin"), ()).is_render());
    store.save("abc", &ana()).unwrap();
    assert!(gate.check(&store, Location::new("/dashboard-admin"), ()).is_render());
    store.clear().unwrap();
    assert!(!gate.check(&store, Location::new("/dashboard-admin"), ()).is_render());
}

// =============================================================================
// Route table navigation
// =============================================================================

#[test]
fn test_navigate_manager_read_only() {
    let store = memory_session();
    store
        .save("abc", &UserProfile::new("3", "m@example.com", Role::Manager))
        .unwrap();
    let session = store.load();
    let table = RouteTable::app();

    match table.navigate(&session, Location::parse("/dashboard-admin/admin/evaluations")) {
        Navigation::Render(m) => assert_eq!(m.view(), View::EvaluationTable),
        other => panic!("expected render, got {other:?}"),
    }

    match table.navigate(&session, Location::parse("/dashboard-admin/admin/evaluations/create")) {
        Navigation::Redirect(r) => {
            assert_eq!(r.to, "/home");
            assert_eq!(r.from.path, "/dashboard-admin/admin/evaluations/create");
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn test_navigate_public_route_anonymous() {
    let table = RouteTable::app();
    match table.navigate(&Session::empty(), Location::parse("/register")) {
        Navigation::Render(m) => assert_eq!(m.view(), View::Register),
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn test_navigate_admin_edit_keeps_params() {
    let table = RouteTable::app();
    let session = Session::new("abc", ana());
    match table.navigate(&session, Location::parse("/dashboard-admin/admin/users/edit/42?tab=2")) {
        Navigation::Render(m) => {
            assert_eq!(m.view(), View::EditUser);
            assert_eq!(m.param("id"), Some("42"));
            assert_eq!(m.location.query.as_deref(), Some("tab=2"));
        }
        other => panic!("expected render, got {other:?}"),
    }
}
