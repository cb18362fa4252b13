//! # Store de Empleados
//! src/store/employee.rs
//!
//! Lista ordenada de empleados más el contador de IDs, ambos detrás de un
//! único `Mutex`. Asignar el ID y hacer el append ocurren en la misma
//! sección crítica, así el orden de inserción coincide con el orden de IDs.

use crate::codec::date;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Identificador de empleado (positivo, nunca se reutiliza)
pub type EmployeeId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    #[serde(serialize_with = "date::serialize")]
    pub joining_date: NaiveDate,
}

/// Datos protegidos por el lock
#[derive(Debug)]
struct EmployeeList {
    records: Vec<Employee>,
    next_id: EmployeeId,
}

/// Store thread-safe de empleados
#[derive(Debug)]
pub struct EmployeeStore {
    inner: Mutex<EmployeeList>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(EmployeeList {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, EmployeeList>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::LockPoisoned("employee"))
    }

    /// Copia de todos los empleados en orden de inserción
    pub fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.lock()?.records.clone())
    }

    /// Crea un empleado con el siguiente ID disponible
    pub fn create(
        &self,
        name: &str,
        department: &str,
        joining_date: NaiveDate,
    ) -> Result<Employee, AppError> {
        let mut list = self.lock()?;

        let employee = Employee {
            id: list.next_id,
            name: name.to_string(),
            department: department.to_string(),
            joining_date,
        };
        list.next_id += 1;
        list.records.push(employee.clone());

        tracing::debug!(id = employee.id, department = %employee.department, "employee created");
        Ok(employee)
    }

    /// Elimina el empleado con ese ID. Retorna si se eliminó algo.
    ///
    /// No toca los registros de asistencia que lo referencian.
    pub fn delete(&self, id: EmployeeId) -> Result<bool, AppError> {
        let mut list = self.lock()?;

        match list.records.iter().position(|e| e.id == id) {
            Some(index) => {
                list.records.remove(index);
                tracing::debug!(id, "employee deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn exists(&self, id: EmployeeId) -> Result<bool, AppError> {
        Ok(self.lock()?.records.iter().any(|e| e.id == id))
    }

    pub fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.records.len())
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
