//! # Estado de la Aplicación
//! src/state.rs
//!
//! Agrupa todo lo que comparten los handlers: los dos stores y el
//! directorio servido como estático. El servidor lo envuelve en un `Arc`
//! y cada thread de conexión recibe una referencia.

use crate::store::{AttendanceStore, EmployeeStore};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppState {
    employees: EmployeeStore,
    attendance: AttendanceStore,
    static_root: PathBuf,
}

impl AppState {
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self {
            employees: EmployeeStore::new(),
            attendance: AttendanceStore::new(),
            static_root: static_root.into(),
        }
    }

    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }

    pub fn attendance(&self) -> &AttendanceStore {
        &self.attendance
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }
}
