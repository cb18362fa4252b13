//! # Employee Server - Entry Point
//! src/main.rs

use employee_server::config::Config;
use employee_server::logging::init_logging;
use employee_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Employee & Attendance Server");
    println!("=================================\n");

    // CLI + variables de entorno
    let config = Config::new();
    init_logging(config.verbosity());

    if let Err(e) = config.validate() {
        tracing::error!("invalid configuration: {}", e);
        std::process::exit(2);
    }

    println!("⚙️  Configuración:");
    println!("   Dirección:    {}", config.address());
    println!("   Estáticos:    {}", config.static_root.display());
    println!("   Máx. request: {} bytes", config.max_request_bytes);
    println!();

    let server = Server::new(config);

    // Bloquea el thread principal atendiendo conexiones
    if let Err(e) = server.run() {
        tracing::error!("fatal server error: {}", e);
        std::process::exit(1);
    }
}
