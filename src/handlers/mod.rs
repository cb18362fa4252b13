//! # Handlers
//!
//! Un handler por grupo de rutas:
//!
//! - **employees**: `/api/employees` (GET, POST, DELETE)
//! - **attendance**: `/api/attendance` (GET, POST)
//! - **report**: `/api/report` (GET)
//! - **static_files**: cualquier otro path (GET, HEAD)
//!
//! Todos tienen la firma `fn(&Request, &AppState) -> Result<Response, AppError>`.
//! Los headers CORS y la respuesta a OPTIONS los agrega el router.

pub mod attendance;
pub mod employees;
pub mod report;
pub mod static_files;

pub use attendance::attendance_handler;
pub use employees::employees_handler;
pub use report::report_handler;
pub use static_files::static_handler;

use crate::error::AppError;
use crate::store::EmployeeId;

/// Parsea un ID de empleado que llega como texto (query o body)
fn parse_employee_id(text: &str, message: &str) -> Result<EmployeeId, AppError> {
    text.trim()
        .parse()
        .map_err(|_| AppError::validation(message))
}
