//! # Handler del Reporte
//! src/handlers/report.rs
//!
//! `GET /api/report`
//!
//! # Ejemplo de response
//! ```json
//! {"departmentCounts":{"Eng":1},"attendanceCounts":{"1":1}}
//! ```

use crate::codec::json::encode;
use crate::error::AppError;
use crate::http::{Method, Request, Response};
use crate::report;
use crate::state::AppState;

pub fn report_handler(req: &Request, state: &AppState) -> Result<Response, AppError> {
    if req.method() != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let report = report::generate(state)?;
    Ok(Response::json(&encode(&report)?))
}
