//! # Configuración del Servidor
//! src/config.rs
//!
//! Argumentos CLI con respaldo en variables de entorno. Sin argumentos el
//! servidor escucha en `0.0.0.0:8000` y sirve el directorio actual.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./employee_server --port 9000 --static-root public -v
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=9000 STATIC_ROOT=public ./employee_server
//! ```

use crate::logging::Verbosity;
use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor de empleados
#[derive(Debug, Clone, Parser)]
#[command(name = "employee_server")]
#[command(about = "Servidor HTTP de empleados y asistencia en memoria")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (todas las interfaces por defecto)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio que se sirve como archivos estáticos
    #[arg(long = "static-root", default_value = ".", env = "STATIC_ROOT")]
    pub static_root: PathBuf,

    /// Tamaño máximo de un request completo (headers + body) en bytes
    #[arg(long = "max-request-bytes", default_value = "1048576", env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Más detalle en los logs (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Solo errores en los logs
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use employee_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Verbose,
            (false, _) => Verbosity::Trace,
        }
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.max_request_bytes == 0 {
            return Err("Max request bytes must be >= 1".to_string());
        }
        if self.static_root.as_os_str().is_empty() {
            return Err("Static root must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            static_root: PathBuf::from("."),
            max_request_bytes: 1_048_576,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.static_root, PathBuf::from("."));
        assert_eq!(config.max_request_bytes, 1_048_576);
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = Config::try_parse_from(["employee_server"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.static_root, default.static_root);
        assert_eq!(parsed.max_request_bytes, default.max_request_bytes);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "employee_server",
            "-p",
            "9000",
            "--host",
            "127.0.0.1",
            "--static-root",
            "public",
            "--max-request-bytes",
            "4096",
            "-vv",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.static_root, PathBuf::from("public"));
        assert_eq!(config.max_request_bytes, 4096);
        assert_eq!(config.verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Config::try_parse_from(["employee_server", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let mut config = Config::default();
        assert_eq!(config.verbosity(), Verbosity::Normal);
        config.verbose = 1;
        assert_eq!(config.verbosity(), Verbosity::Verbose);
        config.verbose = 0;
        config.quiet = true;
        assert_eq!(config.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.max_request_bytes = 0;
        assert!(config.validate().unwrap_err().contains("Max request bytes"));

        let mut config = Config::default();
        config.static_root = PathBuf::new();
        assert!(config.validate().unwrap_err().contains("Static root"));
    }
}
