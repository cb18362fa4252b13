//! # Employee Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 de empleados y asistencia, con datos en memoria y
//! archivos estáticos. Implementado sobre `std::net` con un thread por
//! conexión.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing y construcción de mensajes HTTP
//! - `codec`: JSON plano, query strings y fechas `dd-MM-yyyy`
//! - `store`: Stores de empleados y asistencia (un `Mutex` cada uno)
//! - `report`: Tablas de frecuencia por departamento y por empleado
//! - `state`: Estado compartido que recibe cada handler
//! - `handlers`: Los cuatro grupos de rutas
//! - `router`: Enrutamiento, CORS y conversión de errores
//! - `server`: Servidor TCP concurrente
//! - `config`, `logging`, `error`: configuración, tracing y errores
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use employee_server::config::Config;
//! use employee_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod report;
pub mod router;
pub mod server;
pub mod state;
pub mod store;
