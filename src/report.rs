//! # Reporte
//! src/report.rs
//!
//! Dos tablas de frecuencia: empleados por departamento y registros de
//! asistencia por ID de empleado. Cada store se lee por separado, así que
//! el reporte puede mezclar momentos distintos de uno y otro.

use crate::state::AppState;
use crate::error::AppError;
use crate::store::{AttendanceRecord, Employee, EmployeeId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub department_counts: BTreeMap<String, usize>,
    /// serde_json escribe las claves numéricas como strings: `{"1":2}`
    pub attendance_counts: BTreeMap<EmployeeId, usize>,
}

impl Report {
    /// Construye el reporte a partir de dos snapshots
    pub fn from_records(employees: &[Employee], attendance: &[AttendanceRecord]) -> Self {
        let mut report = Report::default();

        for employee in employees {
            *report
                .department_counts
                .entry(employee.department.clone())
                .or_insert(0) += 1;
        }

        for record in attendance {
            *report.attendance_counts.entry(record.employee_id).or_insert(0) += 1;
        }

        report
    }
}

/// Genera el reporte sobre el estado actual
pub fn generate(state: &AppState) -> Result<Report, AppError> {
    let employees = state.employees().list()?;
    let attendance = state.attendance().list(None)?;

    Ok(Report::from_records(&employees, &attendance))
}
