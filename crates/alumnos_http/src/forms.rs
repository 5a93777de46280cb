//! Static HTML pages for trying the API from a browser.

pub const WELCOME_PAGE: &str = r#"
    <h1>Bienvenido al Sistema de Alumnos</h1>
    <h3>Pruebe las rutas siguientes:</h3>
    <ul>
      <li><a href="/getAll">GET /getAll</a>: Lista de alumnos</li>
      <li><a href="/insertForm">Formulario para insertar alumno</a></li>
      <li><a href="/updateForm">Formulario para actualizar alumno</a></li>
      <li><a href="/patchForm">Formulario para actualizar un campo específico de alumno</a></li>
      <li><a href="/deleteForm">Formulario para borrar un alumno</a></li>
    </ul>
"#;

pub const INSERT_FORM: &str = r#"
    <h2>Formulario para insertar alumno</h2>
    <form action="/insert" method="POST">
      <label for="anio">Año:</label>
      <input type="number" name="anio" required>
      <label for="nombre">Nombre:</label>
      <input type="text" name="nombre" required>
      <label for="apellido">Apellido:</label>
      <input type="text" name="apellido" required>
      <button type="submit">Insertar</button>
    </form>
"#;

pub const UPDATE_FORM: &str = r#"
    <h2>Formulario para actualizar alumno</h2>
    <form action="/put" method="POST">
      <label for="id">ID del Alumno:</label>
      <input type="number" name="id" required>
      <label for="anio">Año:</label>
      <input type="number" name="anio" required>
      <label for="nombre">Nombre:</label>
      <input type="text" name="nombre" required>
      <label for="apellido">Apellido:</label>
      <input type="text" name="apellido" required>
      <button type="submit">Actualizar</button>
    </form>
"#;

// `campo` is a closed list; the server rejects any other column.
pub const PATCH_FORM: &str = r#"
    <h2>Formulario para actualizar un campo específico de alumno</h2>
    <form action="/patch" method="POST">
      <label for="id">ID del Alumno:</label>
      <input type="number" name="id" required>
      <label for="campo">Campo:</label>
      <select name="campo" required>
        <option value="anio">anio</option>
        <option value="nombre">nombre</option>
        <option value="apellido">apellido</option>
      </select>
      <label for="valor">Nuevo valor:</label>
      <input type="text" name="valor" required>
      <button type="submit">Actualizar Campo</button>
    </form>
"#;

pub const DELETE_FORM: &str = r#"
    <h2>Formulario para eliminar alumno</h2>
    <form action="/delete" method="POST">
      <label for="id">ID del Alumno:</label>
      <input type="number" name="id" required>
      <button type="submit">Eliminar</button>
    </form>
"#;
