//! # JSON plano
//! src/codec/json.rs
//!
//! Los bodies de `POST /api/employees` y `POST /api/attendance` son objetos
//! JSON planos: `{"clave": valor, ...}`. Se parsean con serde_json y se
//! reducen a un mapa `String -> String`:
//!
//! - strings tal cual, números y booleanos a su texto (`1` → `"1"`)
//! - `null` cuenta como campo ausente
//! - objetos o arrays anidados se rechazan (no se aceptan a medias)
//! - body vacío equivale a `{}`
//!
//! La codificación de respuestas usa `serde::Serialize` en los tipos de
//! registro, así que todo el escapado lo hace serde_json.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Objeto JSON plano decodificado
pub type FlatObject = HashMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("Invalid JSON body")]
    Malformed,

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Nested JSON values are not supported: {0}")]
    Nested(String),
}

/// Decodifica un body JSON plano
///
/// # Ejemplo
/// ```
/// use employee_server::codec::json::decode_flat_object;
///
/// let fields = decode_flat_object(br#"{"employeeId": 1, "date": "02-03-2024"}"#).unwrap();
/// assert_eq!(fields["employeeId"], "1");
/// assert_eq!(fields["date"], "02-03-2024");
/// ```
pub fn decode_flat_object(body: &[u8]) -> Result<FlatObject, JsonError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FlatObject::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| JsonError::Malformed)?;
    let Value::Object(object) = value else {
        return Err(JsonError::NotAnObject);
    };

    let mut fields = FlatObject::with_capacity(object.len());
    for (key, value) in object {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(JsonError::Nested(key)),
        };
        fields.insert(key, text);
    }

    Ok(fields)
}

/// Campo de texto requerido: presente y no vacío tras `trim`
pub fn required_field<'a>(fields: &'a FlatObject, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Serializa un valor a JSON compacto
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
