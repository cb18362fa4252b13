//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con un layer de formato y un `EnvFilter`.
//! `RUST_LOG` tiene prioridad sobre la verbosidad elegida por CLI.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Nivel de detalle de los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Solo errores
    Quiet,
    /// info y superiores
    #[default]
    Normal,
    /// debug y superiores
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Instala el subscriber global
///
/// Se puede llamar más de una vez: si ya hay uno instalado no hace nada.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("employee_server={}", verbosity.to_level());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(false)
            .with_thread_ids(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
