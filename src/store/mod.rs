//! # Stores en memoria
//!
//! Dos colecciones ordenadas, cada una con su propio `Mutex`. Nunca se
//! toman los dos locks a la vez: las operaciones que cruzan stores (crear
//! asistencia, generar el reporte) los adquieren y liberan por separado.
//!
//! No hay persistencia: reiniciar el proceso borra todo.

pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStore};
pub use employee::{Employee, EmployeeId, EmployeeStore};
