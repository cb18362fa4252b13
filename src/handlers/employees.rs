//! # Handlers de Empleados
//! src/handlers/employees.rs
//!
//! - `GET /api/employees` → array de empleados
//! - `POST /api/employees` con `{name, department, joiningDate}` → 201 + empleado
//! - `DELETE /api/employees?id=N` → `{"status":"deleted"}` o 404

use super::parse_employee_id;
use crate::codec::date::parse_date;
use crate::codec::json::{decode_flat_object, encode, required_field};
use crate::error::AppError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::state::AppState;

pub fn employees_handler(req: &Request, state: &AppState) -> Result<Response, AppError> {
    match req.method() {
        Method::GET => list_employees(state),
        Method::POST => create_employee(req, state),
        Method::DELETE => delete_employee(req, state),
        _ => Err(AppError::MethodNotAllowed),
    }
}

fn list_employees(state: &AppState) -> Result<Response, AppError> {
    let employees = state.employees().list()?;
    Ok(Response::json(&encode(&employees)?))
}

/// Los campos faltantes se validan antes que el formato de la fecha
///
/// # Ejemplo de response
/// ```json
/// {"id":1,"name":"Alice","department":"Eng","joiningDate":"01-03-2024"}
/// ```
fn create_employee(req: &Request, state: &AppState) -> Result<Response, AppError> {
    let fields = decode_flat_object(req.body())?;

    let (Some(name), Some(department), Some(joining_date)) = (
        required_field(&fields, "name"),
        required_field(&fields, "department"),
        required_field(&fields, "joiningDate"),
    ) else {
        return Err(AppError::validation("Missing fields"));
    };

    let joining_date = parse_date(joining_date)?;
    let employee = state.employees().create(name, department, joining_date)?;

    Ok(Response::json_with_status(
        StatusCode::Created,
        &encode(&employee)?,
    ))
}

fn delete_employee(req: &Request, state: &AppState) -> Result<Response, AppError> {
    let id = req
        .query_param("id")
        .ok_or_else(|| AppError::validation("Missing id"))?;
    let id = parse_employee_id(id, "Invalid id")?;

    if state.employees().delete(id)? {
        Ok(Response::json(r#"{"status":"deleted"}"#))
    } else {
        Err(AppError::not_found("not found"))
    }
}
