use orienta_core::store::migrations::latest_version;
use orienta_core::{
    open_store, open_store_in_memory, read_slot_json, read_slot_text, remove_slot,
    write_slot_text, SlotRead, StoreError,
};
use rusqlite::Connection;
use serde_json::json;

#[test]
fn open_store_in_memory_applies_all_migrations() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "slots");
}

#[test]
fn opening_same_store_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orienta.db");

    let conn_first = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    write_slot_text(&conn_first, "probe", "persisted").unwrap();
    drop(conn_first);

    let conn_second = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(
        read_slot_text(&conn_second, "probe").unwrap().as_deref(),
        Some("persisted")
    );
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    match err {
        StoreError::UnsupportedSchemaVersion {
            store_version,
            latest_supported,
        } => {
            assert_eq!(store_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn slot_write_read_remove_roundtrip() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(read_slot_text(&conn, "reportConfig").unwrap(), None);

    write_slot_text(&conn, "reportConfig", "first").unwrap();
    write_slot_text(&conn, "reportConfig", "second").unwrap();
    assert_eq!(
        read_slot_text(&conn, "reportConfig").unwrap().as_deref(),
        Some("second")
    );

    assert!(remove_slot(&conn, "reportConfig").unwrap());
    assert!(!remove_slot(&conn, "reportConfig").unwrap());
    assert_eq!(read_slot_text(&conn, "reportConfig").unwrap(), None);
}

#[test]
fn typed_slot_read_distinguishes_absent_corrupt_and_value() {
    let conn = open_store_in_memory().unwrap();

    assert!(matches!(
        read_slot_json::<serde_json::Value>(&conn, "academicInfo").unwrap(),
        SlotRead::Absent
    ));

    write_slot_text(&conn, "academicInfo", "{not json").unwrap();
    let corrupt = read_slot_json::<serde_json::Value>(&conn, "academicInfo").unwrap();
    assert!(matches!(corrupt, SlotRead::Corrupt));
    assert_eq!(corrupt.into_option(), None);

    write_slot_text(&conn, "academicInfo", "{\"semester\": 3}").unwrap();
    match read_slot_json::<serde_json::Value>(&conn, "academicInfo").unwrap() {
        SlotRead::Value(value) => assert_eq!(value, json!({"semester": 3})),
        other => panic!("unexpected read result: {other:?}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
