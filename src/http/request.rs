//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser HTTP/1.0 (y HTTP/1.1 básico) escrito desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /api/employees HTTP/1.0\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 62\r\n
//! \r\n
//! {"name":"Alice","department":"Eng","joiningDate":"01-03-2024"}
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path?query HTTP/1.0`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: bytes crudos después de la línea vacía (cualquier método)

use crate::codec::query::parse_query_string;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Separador entre headers y body
pub(crate) const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP reconocidos
///
/// Que un método se reconozca no significa que una ruta lo acepte:
/// cada grupo de rutas responde 405 a los que no soporta. Un token bien
/// formado que no está en la lista (`TRACE`, `BREW`...) queda como `Other`
/// para que también llegue al handler y reciba 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    OPTIONS,
    PATCH,
    Other,
}

impl FromStr for Method {
    type Err = ParseError;

    /// Sin distinguir mayúsculas: `get` es `GET`
    ///
    /// # Errores
    ///
    /// Solo si el token tiene caracteres que no pueden formar un método
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if !token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(ParseError::InvalidMethod(token.to_string()));
        }

        let method = match token.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Other,
        };
        Ok(method)
    }
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other => "OTHER",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Path sin query string (ej: "/api/employees")
    path: String,

    /// Query parameters parseados (ej: {"id": "3"})
    query_params: HashMap<String, String>,

    headers: HashMap<String, String>,

    body: Vec<u8>,
}

/// Errores del parser; el servidor responde 400 con `Invalid: <mensaje>`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid request line format")]
    InvalidRequestLine,

    /// Token de método con caracteres inválidos
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Versión que no es 1.0 ni 1.1
    #[error("Invalid HTTP version: {0}")]
    InvalidHttpVersion(String),

    /// Header sin ':'
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Empty request")]
    EmptyRequest,
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// El buffer debe contener el request completo (headers + body); el
    /// servidor TCP se encarga de leer `Content-Length` bytes de body.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use employee_server::http::Request;
    ///
    /// let raw = b"DELETE /api/employees?id=3 HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/api/employees");
    /// assert_eq!(request.query_param("id"), Some("3"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Separar la cabecera del body a nivel de bytes: el body puede no ser UTF-8
        let (head, body) = match find_subsequence(buffer, HEADER_TERMINATOR) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEADER_TERMINATOR.len()..]),
            None => (buffer, &[][..]),
        };

        let head = std::str::from_utf8(head).map_err(|_| ParseError::InvalidRequestLine)?;

        if head.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let mut lines = head.split("\r\n");
        let request_line = lines.next().ok_or(ParseError::EmptyRequest)?;

        let (method, path, query_params) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines)?;

        Ok(Request {
            method,
            path,
            query_params,
            headers,
            body: body.to_vec(),
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path?query HTTP/1.0`
    fn parse_request_line(
        line: &str,
    ) -> Result<(Method, String, HashMap<String, String>), ParseError> {
        let mut tokens = line.split_whitespace();
        let (Some(method), Some(target), Some(version), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseError::InvalidRequestLine);
        };

        let method: Method = method.parse()?;
        let (path, query_params) = Self::parse_path_and_query(target);

        if !matches!(version, "HTTP/1.0" | "HTTP/1.1") {
            return Err(ParseError::InvalidHttpVersion(version.to_string()));
        }

        Ok((method, path, query_params))
    }

    /// Ejemplo: "/api/attendance?employeeId=1"
    /// Retorna: ("/api/attendance", {"employeeId": "1"})
    fn parse_path_and_query(path_with_query: &str) -> (String, HashMap<String, String>) {
        match path_with_query.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query_string(query)),
            None => (path_with_query.to_string(), HashMap::new()),
        }
    }

    /// Parsea los headers HTTP hasta la primera línea vacía
    fn parse_headers<'a>(
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.trim().is_empty() {
                break;
            }

            match line.split_once(':') {
                Some((name, value)) => {
                    headers.insert(name.trim().to_string(), value.trim().to_string());
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene un query parameter específico
    ///
    /// # Ejemplo
    /// ```
    /// use employee_server::http::Request;
    ///
    /// let raw = b"GET /api/attendance?employeeId=7 HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.query_param("employeeId"), Some("7"));
    /// assert_eq!(request.query_param("missing"), None);
    /// ```
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|s| s.as_str())
    }

    /// Obtiene un header (sin distinguir mayúsculas/minúsculas en el nombre)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Busca la primera aparición de `needle` dentro de `haystack`
pub(crate) fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
