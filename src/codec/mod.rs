//! # Codecs
//!
//! Conversión entre el texto del wire y los tipos del dominio:
//!
//! - **json**: objetos JSON planos de los bodies y serialización de respuestas
//! - **query**: query strings `a=b&c=d`
//! - **date**: fechas `dd-MM-yyyy`

pub mod date;
pub mod json;
pub mod query;
