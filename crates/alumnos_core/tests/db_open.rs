use alumnos_core::{SqlValue, Store};
use rusqlite::Connection;

#[test]
fn open_in_memory_creates_alumno_table() {
    let store = Store::open_in_memory().unwrap();

    let rows = store
        .all(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            &[SqlValue::Text("alumno".to_string())],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn reopening_same_file_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BasePA.s3db");

    let first = Store::open(&path).unwrap();
    first
        .run(
            "INSERT INTO alumno (anio, nombre, apellido) VALUES (2024, 'Ana', 'Ruiz');",
            &[],
        )
        .unwrap();
    drop(first);

    let second = Store::open(&path).unwrap();
    let rows = second.all("SELECT * FROM alumno;", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("nombre"), Some(&SqlValue::Text("Ana".to_string())));
}

#[test]
fn opening_file_with_preexisting_table_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.s3db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE alumno (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            anio INTEGER,
            nombre TEXT,
            apellido TEXT
        );
        INSERT INTO alumno (anio, nombre, apellido) VALUES (2020, 'Eva', 'Sol');",
    )
    .unwrap();
    drop(conn);

    let store = Store::open(&path).unwrap();
    let row = store
        .get("SELECT * FROM alumno WHERE id = 1;", &[])
        .unwrap()
        .unwrap();
    assert_eq!(row.get("apellido"), Some(&SqlValue::Text("Sol".to_string())));
}

#[test]
fn opening_a_directory_path_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Store::open(dir.path()).is_err());
}
