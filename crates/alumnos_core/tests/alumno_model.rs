use alumnos_core::{parse_year, Alumno, AlumnoPatch, AlumnoValidationError, NewAlumno};

#[test]
fn patch_parse_accepts_known_columns() {
    assert_eq!(
        AlumnoPatch::parse("nombre", "Ana").unwrap(),
        AlumnoPatch::Nombre("Ana".to_string())
    );
    assert_eq!(
        AlumnoPatch::parse(" Apellido ", "Ruiz").unwrap(),
        AlumnoPatch::Apellido("Ruiz".to_string())
    );
    assert_eq!(
        AlumnoPatch::parse("ANIO", " 2024 ").unwrap(),
        AlumnoPatch::Anio(2024)
    );
}

#[test]
fn patch_parse_rejects_unknown_columns() {
    let err = AlumnoPatch::parse("id", "5").unwrap_err();
    assert_eq!(err, AlumnoValidationError::UnknownField("id".to_string()));

    let injected = AlumnoPatch::parse("nombre = 'x', apellido", "y").unwrap_err();
    assert!(matches!(injected, AlumnoValidationError::UnknownField(_)));
}

#[test]
fn patch_parse_rejects_non_integer_year() {
    let err = AlumnoPatch::parse("anio", "dos mil").unwrap_err();
    assert_eq!(err, AlumnoValidationError::InvalidYear("dos mil".to_string()));
    assert!(err.to_string().contains("integer"));
}

#[test]
fn patch_column_names_match_table() {
    assert_eq!(AlumnoPatch::Anio(1).column(), "anio");
    assert_eq!(AlumnoPatch::Nombre(String::new()).column(), "nombre");
    assert_eq!(AlumnoPatch::Apellido(String::new()).column(), "apellido");
}

#[test]
fn parse_year_trims_whitespace() {
    assert_eq!(parse_year(" 2024\n").unwrap(), 2024);
    assert!(parse_year("").is_err());
}

#[test]
fn alumno_serialization_uses_column_names() {
    let alumno = Alumno {
        id: 1,
        anio: 2024,
        nombre: "Ana".to_string(),
        apellido: "Ruiz".to_string(),
    };

    let json = serde_json::to_value(&alumno).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "anio": 2024, "nombre": "Ana", "apellido": "Ruiz"})
    );

    let decoded: Alumno = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, alumno);
}

#[test]
fn new_alumno_holds_writable_fields() {
    let fields = NewAlumno::new(2023, "Luis", String::from("Vega"));
    assert_eq!(fields.anio, 2023);
    assert_eq!(fields.nombre, "Luis");
    assert_eq!(fields.apellido, "Vega");
}
