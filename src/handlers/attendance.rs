//! # Handlers de Asistencia
//! src/handlers/attendance.rs
//!
//! - `POST /api/attendance` con `{employeeId, date}` → 201
//! - `GET /api/attendance[?employeeId=N]` → array de `{employeeId, date}`
//!
//! Comprobar que el empleado existe y agregar el registro son dos pasos
//! con locks distintos: un DELETE concurrente entre ambos puede dejar un
//! registro apuntando a un empleado ya eliminado, y eso se acepta.

use super::parse_employee_id;
use crate::codec::date::parse_date;
use crate::codec::json::{decode_flat_object, encode, required_field};
use crate::error::AppError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::state::AppState;

pub fn attendance_handler(req: &Request, state: &AppState) -> Result<Response, AppError> {
    match req.method() {
        Method::POST => record_attendance(req, state),
        Method::GET => list_attendance(req, state),
        _ => Err(AppError::MethodNotAllowed),
    }
}

fn record_attendance(req: &Request, state: &AppState) -> Result<Response, AppError> {
    let fields = decode_flat_object(req.body())?;

    let (Some(employee_id), Some(date)) = (
        required_field(&fields, "employeeId"),
        required_field(&fields, "date"),
    ) else {
        return Err(AppError::validation("Missing fields"));
    };

    let employee_id = parse_employee_id(employee_id, "Invalid employeeId")?;
    let date = parse_date(date)?;

    if !state.employees().exists(employee_id)? {
        return Err(AppError::not_found("Employee not found"));
    }
    state.attendance().create(employee_id, date)?;

    Ok(Response::json_with_status(
        StatusCode::Created,
        r#"{"status":"attendance recorded"}"#,
    ))
}

/// Un `employeeId` que no es entero no coincide con ningún registro: `[]`
fn list_attendance(req: &Request, state: &AppState) -> Result<Response, AppError> {
    let records = match req.query_param("employeeId") {
        None => state.attendance().list(None)?,
        Some(text) => match parse_employee_id(text, "Invalid employeeId") {
            Ok(employee_id) => state.attendance().list(Some(employee_id))?,
            Err(_) => Vec::new(),
        },
    };

    Ok(Response::json(&encode(&records)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(raw: &str) -> Request {
        Request::parse(raw.as_bytes()).unwrap()
    }

    fn post(body: &str) -> Request {
        request(&format!(
            "POST /api/attendance HTTP/1.0\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ))
    }

    fn state_with_employee() -> AppState {
        let state = AppState::new(".");
        state
            .employees()
            .create("Alice", "Eng", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .unwrap();
        state
    }

    #[test]
    fn test_record_with_string_id() {
        let state = state_with_employee();
        let response = attendance_handler(&post(r#"{"employeeId":"1","date":"02-03-2024"}"#), &state)
            .unwrap();

        assert_eq!(response.status(), StatusCode::Created);
        assert_eq!(response.body(), br#"{"status":"attendance recorded"}"#);
        assert_eq!(state.attendance().count().unwrap(), 1);
    }

    #[test]
    fn test_record_with_numeric_id() {
        let state = state_with_employee();
        attendance_handler(&post(r#"{"employeeId":1,"date":"02-03-2024"}"#), &state).unwrap();

        assert_eq!(state.attendance().list(Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_employee_does_not_mutate() {
        let state = state_with_employee();
        let error = attendance_handler(&post(r#"{"employeeId":"9","date":"02-03-2024"}"#), &state)
            .unwrap_err();

        assert!(matches!(error, AppError::NotFound(ref m) if m == "Employee not found"));
        assert_eq!(state.attendance().count().unwrap(), 0);
    }

    #[test]
    fn test_missing_and_invalid_fields() {
        let state = state_with_employee();

        let missing = attendance_handler(&post(r#"{"employeeId":"1"}"#), &state).unwrap_err();
        assert!(matches!(missing, AppError::Validation(ref m) if m == "Missing fields"));

        let bad_date =
            attendance_handler(&post(r#"{"employeeId":"1","date":"2024-03-02"}"#), &state)
                .unwrap_err();
        assert!(
            matches!(bad_date, AppError::Validation(ref m) if m == "Invalid date format, use dd-MM-yyyy")
        );

        let bad_id = attendance_handler(&post(r#"{"employeeId":"one","date":"02-03-2024"}"#), &state)
            .unwrap_err();
        assert!(matches!(bad_id, AppError::Validation(ref m) if m == "Invalid employeeId"));

        assert_eq!(state.attendance().count().unwrap(), 0);
    }

    #[test]
    fn test_list_with_and_without_filter() {
        let state = state_with_employee();
        state
            .employees()
            .create("Bob", "Ops", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .unwrap();
        for body in [
            r#"{"employeeId":"1","date":"02-03-2024"}"#,
            r#"{"employeeId":"2","date":"02-03-2024"}"#,
            r#"{"employeeId":"1","date":"03-03-2024"}"#,
        ] {
            attendance_handler(&post(body), &state).unwrap();
        }

        let all = attendance_handler(&request("GET /api/attendance HTTP/1.0\r\n\r\n"), &state)
            .unwrap();
        let all: serde_json::Value = serde_json::from_slice(all.body()).unwrap();
        assert_eq!(all.as_array().unwrap().len(), 3);

        let filtered = attendance_handler(
            &request("GET /api/attendance?employeeId=1 HTTP/1.0\r\n\r\n"),
            &state,
        )
        .unwrap();
        assert_eq!(
            filtered.body(),
            br#"[{"employeeId":1,"date":"02-03-2024"},{"employeeId":1,"date":"03-03-2024"}]"#
        );
    }

    #[test]
    fn test_list_non_integer_filter_matches_nothing() {
        let state = state_with_employee();
        attendance_handler(&post(r#"{"employeeId":"1","date":"02-03-2024"}"#), &state).unwrap();

        for query in ["employeeId=x", "employeeId=", "employeeId=1.5"] {
            let response = attendance_handler(
                &request(&format!("GET /api/attendance?{} HTTP/1.0\r\n\r\n", query)),
                &state,
            )
            .unwrap();

            assert_eq!(response.status(), StatusCode::Ok, "{}", query);
            assert_eq!(response.body(), b"[]", "{}", query);
        }
    }

    #[test]
    fn test_attendance_survives_employee_delete() {
        let state = state_with_employee();
        attendance_handler(&post(r#"{"employeeId":"1","date":"02-03-2024"}"#), &state).unwrap();
        state.employees().delete(1).unwrap();

        assert_eq!(state.attendance().list(Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_method_not_allowed() {
        let state = state_with_employee();
        let error = attendance_handler(&request("DELETE /api/attendance HTTP/1.0\r\n\r\n"), &state)
            .unwrap_err();

        assert!(matches!(error, AppError::MethodNotAllowed));
    }
}
