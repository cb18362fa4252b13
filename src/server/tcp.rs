//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. Cada thread lee un request completo (headers +
//! `Content-Length` bytes de body), lo pasa al router y cierra la conexión.
//! No hay timeouts ni reintentos.

use crate::config::Config;
use crate::http::request::{find_subsequence, HEADER_TERMINATOR};
use crate::http::{Request, Response, StatusCode};
use crate::router::{add_common_headers, Router};
use crate::state::AppState;
use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, info_span, warn};

const READ_CHUNK: usize = 8192;

/// Servidor HTTP/1.0 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    state: Arc<AppState>,
}

/// Resultado de leer un request del socket
#[derive(Debug, PartialEq, Eq)]
enum ReadOutcome {
    /// El cliente cerró sin mandar nada
    Closed,
    Complete(Vec<u8>),
    TooLarge,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(config.static_root.clone());

        Self {
            config,
            router: Arc::new(Router::with_default_routes()),
            state: Arc::new(state),
        }
    }

    /// Hace bind en la dirección configurada y atiende conexiones para siempre
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;

        info!(
            address = %address,
            static_root = %self.config.static_root.display(),
            "server listening (one thread per connection)"
        );

        self.serve(listener)
    }

    /// Atiende conexiones de un listener ya creado
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let state = Arc::clone(&self.state);
                    let max_request_bytes = self.config.max_request_bytes;

                    thread::spawn(move || {
                        if let Err(e) =
                            Self::handle_connection(stream, &router, &state, max_request_bytes)
                        {
                            warn!(error = %e, "connection failed");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    fn handle_connection(
        mut stream: TcpStream,
        router: &Router,
        state: &AppState,
        max_request_bytes: usize,
    ) -> io::Result<()> {
        let start = Instant::now();

        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let span = info_span!("request", peer = %peer_addr);
        let _guard = span.enter();

        let (response, method, path) = match read_request(&mut stream, max_request_bytes)? {
            ReadOutcome::Closed => return Ok(()),
            ReadOutcome::TooLarge => {
                let mut response = Response::text(StatusCode::PayloadTooLarge, "Payload Too Large");
                add_common_headers(&mut response);
                (response, "-", "-".to_string())
            }
            ReadOutcome::Complete(bytes) => match Request::parse(&bytes) {
                Ok(request) => {
                    let response = router.route(&request, state);
                    (response, request.method().as_str(), request.path().to_string())
                }
                Err(e) => {
                    let mut response =
                        Response::error(StatusCode::BadRequest, &format!("Invalid: {}", e));
                    add_common_headers(&mut response);
                    (response, "-", "-".to_string())
                }
            },
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        info!(
            method,
            path = %path,
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "request handled"
        );

        Ok(())
    }
}

/// Lee headers hasta `\r\n\r\n` y después exactamente `Content-Length` bytes
///
/// Si el peer cierra antes de terminar los headers se devuelve lo leído y
/// el parser decide si sirve.
fn read_request(stream: &mut impl Read, max_bytes: usize) -> io::Result<ReadOutcome> {
    let mut buffer = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    let header_end = loop {
        if let Some(pos) = find_subsequence(&buffer, HEADER_TERMINATOR) {
            break Some(pos);
        }
        if buffer.len() > max_bytes {
            return Ok(ReadOutcome::TooLarge);
        }

        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break None;
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    let Some(header_end) = header_end else {
        return Ok(if buffer.is_empty() {
            ReadOutcome::Closed
        } else {
            ReadOutcome::Complete(buffer)
        });
    };

    let body_start = header_end + HEADER_TERMINATOR.len();
    let body_len = content_length(&buffer[..header_end]).unwrap_or(0);
    let total = body_start.saturating_add(body_len);
    if total > max_bytes {
        return Ok(ReadOutcome::TooLarge);
    }

    while buffer.len() < total {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    buffer.truncate(total);

    Ok(ReadOutcome::Complete(buffer))
}

/// Valor de `Content-Length` en la cabecera cruda, si existe y es válido
fn content_length(head: &[u8]) -> Option<usize> {
    let head = std::str::from_utf8(head).ok()?;

    head.split("\r\n").skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}
