//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea paths HTTP a handlers.
//!
//! ```text
//! Request → Router → Handler → Result<Response, AppError> → Response
//! ```
//!
//! - Los paths registrados se comparan exactos; todo lo demás va al
//!   handler de fallback (los archivos estáticos).
//! - `OPTIONS` en cualquier path responde 204 sin llegar al handler.
//! - Los errores se convierten en respuesta aquí, en un único punto. Un
//!   panic dentro del handler también termina en 500 `Server error`.
//! - Toda respuesta lleva los headers CORS, incluidas las de error.

use crate::error::AppError;
use crate::handlers;
use crate::http::{Method, Request, Response, StatusCode};
use crate::state::AppState;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Un handler recibe el Request y el estado compartido
pub type Handler = fn(&Request, &AppState) -> Result<Response, AppError>;

pub struct Router {
    routes: Vec<(String, Handler)>,
    fallback: Handler,
}

impl Router {
    /// Crea un router vacío con el handler de fallback dado
    pub fn new(fallback: Handler) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Router con las rutas de la API y los estáticos como fallback
    pub fn with_default_routes() -> Self {
        let mut router = Router::new(handlers::static_handler);
        router.register("/api/employees", handlers::employees_handler);
        router.register("/api/attendance", handlers::attendance_handler);
        router.register("/api/report", handlers::report_handler);
        router
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use employee_server::error::AppError;
    /// use employee_server::http::{Request, Response};
    /// use employee_server::router::Router;
    /// use employee_server::state::AppState;
    ///
    /// fn hello_handler(_req: &Request, _state: &AppState) -> Result<Response, AppError> {
    ///     Ok(Response::json(r#"{"message":"hello"}"#))
    /// }
    ///
    /// let mut router = Router::with_default_routes();
    /// router.register("/hello", hello_handler);
    /// ```
    pub fn register(&mut self, path: &str, handler: Handler) {
        self.routes.push((path.to_string(), handler));
    }

    fn handler_for(&self, path: &str) -> Handler {
        self.routes
            .iter()
            .find(|(route_path, _)| route_path == path)
            .map(|(_, handler)| *handler)
            .unwrap_or(self.fallback)
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request, state: &AppState) -> Response {
        let mut response = if request.method() == Method::OPTIONS {
            Response::new(StatusCode::NoContent)
        } else {
            let handler = self.handler_for(request.path());
            panic::catch_unwind(AssertUnwindSafe(|| handler(request, state)))
                .unwrap_or_else(|payload| Err(AppError::Panicked(panic_message(payload.as_ref()))))
                .unwrap_or_else(AppError::into_response)
        };

        if request.method() == Method::HEAD {
            response.strip_body();
        }

        add_common_headers(&mut response);
        response
    }
}

/// Headers que lleva toda respuesta, incluidas las que no pasan por un handler
pub fn add_common_headers(response: &mut Response) {
    response.add_header("Server", "employee-server");
    response.add_header("Connection", "close");
    response.add_header("Access-Control-Allow-Origin", "*");
    response.add_header("Access-Control-Allow-Methods", "GET, POST, DELETE, OPTIONS");
    response.add_header("Access-Control-Allow-Headers", "Content-Type");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_handler(_req: &Request, _state: &AppState) -> Result<Response, AppError> {
        Ok(Response::json(r#"{"test":"ok"}"#))
    }

    fn fallback_handler(_req: &Request, _state: &AppState) -> Result<Response, AppError> {
        Err(AppError::FileNotFound)
    }

    fn failing_handler(_req: &Request, _state: &AppState) -> Result<Response, AppError> {
        Err(AppError::LockPoisoned("employee"))
    }

    fn panicking_handler(_req: &Request, _state: &AppState) -> Result<Response, AppError> {
        panic!("handler blew up")
    }

    fn route(router: &Router, raw: &str) -> Response {
        let state = AppState::new(".");
        router.route(&Request::parse(raw.as_bytes()).unwrap(), &state)
    }

    #[test]
    fn test_register_route() {
        let mut router = Router::new(fallback_handler);
        router.register("/test", ok_handler);
        assert_eq!(router.routes.len(), 1);
    }

    #[test]
    fn test_route_found() {
        let mut router = Router::new(fallback_handler);
        router.register("/test", ok_handler);

        let response = route(&router, "GET /test HTTP/1.0\r\n\r\n");
        assert_eq!(response.status(), StatusCode::Ok);
    }

    #[test]
    fn test_exact_match_only() {
        let mut router = Router::new(fallback_handler);
        router.register("/test", ok_handler);

        let response = route(&router, "GET /test/extra HTTP/1.0\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"Not Found");
    }

    #[test]
    fn test_options_short_circuits() {
        let mut router = Router::new(fallback_handler);
        router.register("/fail", failing_handler);

        for path in ["/fail", "/anything", "/api/employees"] {
            let response = route(&router, &format!("OPTIONS {} HTTP/1.0\r\n\r\n", path));
            assert_eq!(response.status(), StatusCode::NoContent);
            assert!(response.body().is_empty());
            assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        }
    }

    #[test]
    fn test_cors_on_errors() {
        let mut router = Router::new(fallback_handler);
        router.register("/fail", failing_handler);

        let response = route(&router, "GET /fail HTTP/1.0\r\n\r\n");

        assert_eq!(response.status(), StatusCode::InternalServerError);
        assert_eq!(response.body(), b"Server error");
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET, POST, DELETE, OPTIONS")
        );
        assert_eq!(response.header("Access-Control-Allow-Headers"), Some("Content-Type"));
    }

    #[test]
    fn test_head_strips_body() {
        let mut router = Router::new(fallback_handler);
        router.register("/test", ok_handler);

        let response = route(&router, "HEAD /test HTTP/1.0\r\n\r\n");

        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("13"));
    }

    #[test]
    fn test_default_routes() {
        let router = Router::with_default_routes();

        let report = route(&router, "GET /api/report HTTP/1.0\r\n\r\n");
        assert_eq!(report.status(), StatusCode::Ok);

        let employees = route(&router, "PATCH /api/employees HTTP/1.0\r\n\r\n");
        assert_eq!(employees.status(), StatusCode::MethodNotAllowed);
        assert_eq!(employees.body(), b"Method Not Allowed");
    }

    #[test]
    fn test_panic_becomes_server_error() {
        let mut router = Router::new(fallback_handler);
        router.register("/boom", panicking_handler);

        let response = route(&router, "GET /boom HTTP/1.0\r\n\r\n");

        assert_eq!(response.status(), StatusCode::InternalServerError);
        assert_eq!(response.body(), b"Server error");
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));

        // El router sigue atendiendo después del panic
        let after = route(&router, "GET /other HTTP/1.0\r\n\r\n");
        assert_eq!(after.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_unknown_method_reaches_handler() {
        let router = Router::with_default_routes();

        let response = route(&router, "TRACE /api/employees HTTP/1.0\r\n\r\n");
        assert_eq!(response.status(), StatusCode::MethodNotAllowed);
        assert_eq!(response.body(), b"Method Not Allowed");
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(panic_message(&"plain"), "plain");
        assert_eq!(panic_message(&"owned".to_string()), "owned");
        assert_eq!(panic_message(&42u8), "unknown panic");
    }
}
