use orienta_core::{
    open_store_in_memory, ActivityKind, ProfileService, SqliteDocumentRepository,
    SqliteSessionRepository,
};
use rusqlite::Connection;

const SEED_USER: u64 = 1;
const SEED_EMAIL: &str = "demo@orienta.app";
const SEED_PASSWORD: &str = "Demo1234";

#[test]
fn no_session_reads_as_signed_out() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    assert!(service.active_user().unwrap().is_none());
    assert!(!service.sign_out().unwrap());
}

#[test]
fn set_active_user_stores_a_snapshot_copy() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let user = service.find_user(SEED_USER).unwrap().unwrap();
    service.set_active_user(&user).unwrap();

    let snapshot = service.active_user().unwrap().unwrap();
    assert_eq!(snapshot, user);
}

#[test]
fn snapshot_drifts_until_update_active_user_resyncs() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let user = service.find_user(SEED_USER).unwrap().unwrap();
    service.set_active_user(&user).unwrap();

    // Document mutation on its own leaves the snapshot behind.
    service.toggle_favorite_career(SEED_USER, 3).unwrap();
    let stale = service.active_user().unwrap().unwrap();
    assert!(stale.favorite_careers.is_empty());

    // update_active_user writes both slots consistently.
    let mut fresh = service.find_user(SEED_USER).unwrap().unwrap();
    fresh.profile = "Perfil actualizado".to_string();
    service.update_active_user(&fresh).unwrap();

    let snapshot = service.active_user().unwrap().unwrap();
    assert_eq!(snapshot.profile, "Perfil actualizado");
    assert_eq!(snapshot.favorite_careers, vec![3]);

    let stored = service.find_user(SEED_USER).unwrap().unwrap();
    assert_eq!(stored.profile, "Perfil actualizado");
}

#[test]
fn sign_in_sets_session_and_records_activity() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let user = service.sign_in(SEED_EMAIL, SEED_PASSWORD).unwrap().unwrap();
    assert_eq!(user.id, SEED_USER);

    let snapshot = service.active_user().unwrap().unwrap();
    assert_eq!(snapshot.id, SEED_USER);
    assert_eq!(snapshot.activity_log.len(), 1);
    assert_eq!(snapshot.activity_log[0].kind, ActivityKind::SignIn);
}

#[test]
fn sign_in_with_wrong_credentials_is_none_and_leaves_session_alone() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    assert!(service
        .sign_in(SEED_EMAIL, "ClaveIncorrecta1")
        .unwrap()
        .is_none());
    assert!(service.sign_in("nadie@example.com", "Da igual1").unwrap().is_none());
    assert!(service.active_user().unwrap().is_none());
}

#[test]
fn sign_out_clears_the_snapshot() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    service.sign_in(SEED_EMAIL, SEED_PASSWORD).unwrap().unwrap();
    assert!(service.sign_out().unwrap());
    assert!(service.active_user().unwrap().is_none());
    assert!(!service.sign_out().unwrap());
}

fn profile_service(
    conn: &Connection,
) -> ProfileService<SqliteDocumentRepository<'_>, SqliteSessionRepository<'_>> {
    ProfileService::new(
        SqliteDocumentRepository::new(conn),
        SqliteSessionRepository::new(conn),
    )
}
