//! # Errores de la Aplicación
//! src/error.rs
//!
//! Todos los handlers retornan `Result<Response, AppError>`. El router
//! convierte el error en respuesta en un único punto, así ningún handler
//! arma a mano un 500.
//!
//! | Variante | Status | Body |
//! |---|---|---|
//! | `Validation` | 400 | `{"error":"..."}` |
//! | `NotFound` | 404 | `{"error":"..."}` |
//! | `FileNotFound` | 404 | `Not Found` |
//! | `Forbidden` | 403 | `Forbidden` |
//! | `MethodNotAllowed` | 405 | `Method Not Allowed` |
//! | internos | 500 | `Server error` |

use crate::codec::date::DateError;
use crate::codec::json::JsonError;
use crate::http::{Response, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Campo faltante, fecha mal formada, parámetro inválido
    #[error("{0}")]
    Validation(String),

    /// Registro inexistente (empleado)
    #[error("{0}")]
    NotFound(String),

    /// Archivo estático inexistente o que no es un archivo regular
    #[error("Not Found")]
    FileNotFound,

    /// Ruta estática que escapa del directorio servido
    #[error("Forbidden")]
    Forbidden,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Un thread hizo panic con el lock tomado
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),

    /// El handler hizo panic; el router lo atrapa
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BadRequest,
            AppError::NotFound(_) | AppError::FileNotFound => StatusCode::NotFound,
            AppError::Forbidden => StatusCode::Forbidden,
            AppError::MethodNotAllowed => StatusCode::MethodNotAllowed,
            AppError::Io(_)
            | AppError::Encode(_)
            | AppError::LockPoisoned(_)
            | AppError::Panicked(_) => StatusCode::InternalServerError,
        }
    }

    /// Convierte el error en la respuesta que ve el cliente
    ///
    /// Los errores internos se loguean completos pero al cliente solo le
    /// llega "Server error".
    pub fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Validation(message) | AppError::NotFound(message) => {
                Response::error(status, message)
            }
            AppError::FileNotFound | AppError::Forbidden | AppError::MethodNotAllowed => {
                Response::text(status, &self.to_string())
            }
            AppError::Io(_)
            | AppError::Encode(_)
            | AppError::LockPoisoned(_)
            | AppError::Panicked(_) => {
                tracing::error!(error = %self, "internal fault while handling request");
                Response::text(status, "Server error")
            }
        }
    }
}

impl From<JsonError> for AppError {
    fn from(error: JsonError) -> Self {
        AppError::Validation(error.to_string())
    }
}

impl From<DateError> for AppError {
    fn from(error: DateError) -> Self {
        AppError::Validation(error.to_string())
    }
}
