use alumnos_core::{
    AlumnoPatch, AlumnoRepository, NewAlumno, RepoError, SqlValue, SqliteAlumnoRepository, Store,
};
use std::sync::Arc;

fn repo() -> (Arc<Store>, SqliteAlumnoRepository) {
    let store = Arc::new(Store::open_in_memory().unwrap());
    let repo = SqliteAlumnoRepository::new(Arc::clone(&store));
    (store, repo)
}

#[test]
fn insert_and_get_roundtrip() {
    let (_store, repo) = repo();

    let result = repo.insert(&NewAlumno::new(2024, "Ana", "Ruiz")).unwrap();
    assert_eq!(result.changes, 1);

    let loaded = repo.get(result.last_insert_rowid).unwrap().unwrap();
    assert_eq!(loaded.id, result.last_insert_rowid);
    assert_eq!(loaded.anio, 2024);
    assert_eq!(loaded.nombre, "Ana");
    assert_eq!(loaded.apellido, "Ruiz");
}

#[test]
fn get_missing_id_returns_none() {
    let (_store, repo) = repo();
    assert!(repo.get(42).unwrap().is_none());
}

#[test]
fn get_all_counts_inserts_minus_deletes_in_id_order() {
    let (_store, repo) = repo();

    let mut ids = Vec::new();
    for (anio, nombre) in [(2021, "A"), (2022, "B"), (2023, "C"), (2024, "D")] {
        ids.push(
            repo.insert(&NewAlumno::new(anio, nombre, "X"))
                .unwrap()
                .last_insert_rowid,
        );
    }
    repo.delete(ids[1]).unwrap();
    repo.delete(ids[3]).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, ids[0]);
    assert_eq!(all[1].id, ids[2]);
}

#[test]
fn get_all_on_empty_table_is_empty() {
    let (_store, repo) = repo();
    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn update_overwrites_all_fields() {
    let (_store, repo) = repo();
    let id = repo
        .insert(&NewAlumno::new(2020, "Luis", "Vega"))
        .unwrap()
        .last_insert_rowid;

    let result = repo
        .update(id, &NewAlumno::new(2025, "Lucia", "Mora"))
        .unwrap();
    assert_eq!(result.changes, 1);

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.anio, 2025);
    assert_eq!(loaded.nombre, "Lucia");
    assert_eq!(loaded.apellido, "Mora");
}

#[test]
fn update_missing_id_reports_zero_changes() {
    let (_store, repo) = repo();
    let result = repo.update(7, &NewAlumno::new(2025, "N", "A")).unwrap();
    assert_eq!(result.changes, 0);
}

#[test]
fn patch_changes_only_the_named_column() {
    let (_store, repo) = repo();
    let id = repo
        .insert(&NewAlumno::new(2024, "Ana", "Ruiz"))
        .unwrap()
        .last_insert_rowid;

    let result = repo
        .patch(id, &AlumnoPatch::Nombre("X".to_string()))
        .unwrap();
    assert_eq!(result.changes, 1);

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.nombre, "X");
    assert_eq!(loaded.anio, 2024);
    assert_eq!(loaded.apellido, "Ruiz");

    repo.patch(id, &AlumnoPatch::Anio(2030)).unwrap();
    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.anio, 2030);
    assert_eq!(loaded.nombre, "X");
}

#[test]
fn patch_missing_id_reports_zero_changes() {
    let (_store, repo) = repo();
    let result = repo
        .patch(3, &AlumnoPatch::Apellido("Z".to_string()))
        .unwrap();
    assert_eq!(result.changes, 0);
}

#[test]
fn delete_then_get_yields_none() {
    let (_store, repo) = repo();
    let id = repo
        .insert(&NewAlumno::new(2024, "Ana", "Ruiz"))
        .unwrap()
        .last_insert_rowid;

    assert_eq!(repo.delete(id).unwrap().changes, 1);
    assert!(repo.get(id).unwrap().is_none());
    assert_eq!(repo.delete(id).unwrap().changes, 0);
}

#[test]
fn rows_with_wrong_column_types_are_rejected() {
    let (store, repo) = repo();
    store
        .run(
            "INSERT INTO alumno (anio, nombre, apellido) VALUES (?1, 'Ana', 'Ruiz');",
            &[SqlValue::Text("segundo".to_string())],
        )
        .unwrap();

    let err = repo.get(1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("alumno.anio")));
    assert!(matches!(repo.get_all(), Err(RepoError::InvalidData(_))));
}

#[test]
fn repository_surfaces_store_errors() {
    let (store, repo) = repo();
    store.run("DROP TABLE alumno;", &[]).unwrap();

    assert!(matches!(repo.get_all(), Err(RepoError::Db(_))));
    assert!(matches!(
        repo.insert(&NewAlumno::new(2024, "Ana", "Ruiz")),
        Err(RepoError::Db(_))
    ));
}
