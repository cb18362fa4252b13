//! # Store de Asistencia
//! src/store/attendance.rs
//!
//! Lista de registros de asistencia con su propio lock, independiente del
//! de empleados. Los registros nunca se modifican ni se eliminan.

use super::employee::EmployeeId;
use crate::codec::date::format_date;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "crate::codec::date::serialize")]
    pub date: NaiveDate,
}

#[derive(Debug, Default)]
pub struct AttendanceStore {
    records: Mutex<Vec<AttendanceRecord>>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<AttendanceRecord>>, AppError> {
        self.records
            .lock()
            .map_err(|_| AppError::LockPoisoned("attendance"))
    }

    /// Agrega un registro sin validar
    ///
    /// Quien llama debe haber comprobado antes que el empleado existe.
    pub fn create(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> Result<AttendanceRecord, AppError> {
        let record = AttendanceRecord { employee_id, date };
        self.lock()?.push(record.clone());

        tracing::debug!(employee_id, date = %format_date(&date), "attendance recorded");
        Ok(record)
    }

    /// Registros en orden de inserción, opcionalmente filtrados por empleado
    pub fn list(&self, employee_id: Option<EmployeeId>) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = self.lock()?;

        Ok(records
            .iter()
            .filter(|record| employee_id.map_or(true, |id| record.employee_id == id))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_create_and_list_all() {
        let store = AttendanceStore::new();
        store.create(1, day(1)).unwrap();
        store.create(2, day(1)).unwrap();
        store.create(1, day(2)).unwrap();

        let all = store.list(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], AttendanceRecord { employee_id: 1, date: day(2) });
    }

    #[test]
    fn test_filter_keeps_insertion_order() {
        let store = AttendanceStore::new();
        store.create(1, day(5)).unwrap();
        store.create(2, day(1)).unwrap();
        store.create(1, day(3)).unwrap();

        let filtered = store.list(Some(1)).unwrap();
        assert_eq!(
            filtered,
            vec![
                AttendanceRecord { employee_id: 1, date: day(5) },
                AttendanceRecord { employee_id: 1, date: day(3) },
            ]
        );
    }

    #[test]
    fn test_filter_without_matches() {
        let store = AttendanceStore::new();
        store.create(1, day(1)).unwrap();

        assert!(store.list(Some(9)).unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = AttendanceStore::new();
        store.create(1, day(1)).unwrap();
        store.create(1, day(1)).unwrap();

        assert_eq!(store.list(Some(1)).unwrap().len(), 2);
    }

    #[test]
    fn test_serialization_shape() {
        let record = AttendanceRecord { employee_id: 4, date: day(2) };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"employeeId":4,"date":"02-03-2024"}"#
        );
    }
}
