//! # Archivos Estáticos
//! src/handlers/static_files.rs
//!
//! Sirve cualquier path que no sea de la API desde el directorio raíz
//! configurado (`/` → `/index.html`).
//!
//! ## Resolución del path
//!
//! 1. Se normalizan `.` y `..` de forma léxica contra la raíz canonicalizada.
//!    Si el resultado queda fuera → 403, exista o no el archivo.
//! 2. Si el archivo existe se canonicaliza de nuevo (resuelve symlinks) y
//!    tiene que seguir dentro de la raíz → si no, 403.
//! 3. Si no es un archivo regular → 404.
//!
//! No pretende ser un sandbox.

use crate::error::AppError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::state::AppState;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub fn static_handler(req: &Request, state: &AppState) -> Result<Response, AppError> {
    if !matches!(req.method(), Method::GET | Method::HEAD) {
        return Err(AppError::MethodNotAllowed);
    }

    let file = resolve_path(state.static_root(), req.path())?;
    let bytes = fs::read(&file)?;

    tracing::debug!(file = %file.display(), bytes = bytes.len(), "serving static file");

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", mime_type(&file))
        .with_body_bytes(bytes))
}

/// Traduce el path de la URL a un archivo dentro de `root`
pub fn resolve_path(root: &Path, url_path: &str) -> Result<PathBuf, AppError> {
    let relative = match url_path.trim_start_matches('/') {
        "" => "index.html",
        rest => rest,
    };

    let root = fs::canonicalize(root)?;
    let mut resolved = root.clone();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::RootDir | Component::Prefix(_) => return Err(AppError::Forbidden),
        }
    }

    if !resolved.starts_with(&root) {
        return Err(AppError::Forbidden);
    }

    if !resolved.exists() {
        return Err(AppError::FileNotFound);
    }

    let canonical = fs::canonicalize(&resolved)?;
    if !canonical.starts_with(&root) {
        return Err(AppError::Forbidden);
    }

    if !canonical.is_file() {
        return Err(AppError::FileNotFound);
    }

    Ok(canonical)
}

/// Content-Type según la extensión (sin distinguir mayúsculas)
pub fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("png") => "image/png",
        _ => "text/plain; charset=utf-8",
    }
}
