//! # Query Strings
//! src/codec/query.rs
//!
//! Convierte `a=b&c=d` en un `HashMap`. Lo usa el parser de requests para
//! `?id=3` y `?employeeId=1`.

use std::collections::HashMap;

/// Parsea una query string en un HashMap
///
/// - Los segmentos vacíos (`a=1&&b=2`) se ignoran.
/// - Un parámetro sin `=` queda con valor vacío.
/// - Si una clave se repite, gana la última.
///
/// # Ejemplo
/// ```
/// use employee_server::codec::query::parse_query_string;
///
/// let params = parse_query_string("id=3&debug");
/// assert_eq!(params.get("id").map(String::as_str), Some("3"));
/// assert_eq!(params.get("debug").map(String::as_str), Some(""));
/// ```
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for param in query.split('&') {
        if param.is_empty() {
            continue;
        }

        match param.split_once('=') {
            Some((key, value)) => {
                params.insert(url_decode(key), url_decode(value));
            }
            None => {
                params.insert(url_decode(param), String::new());
            }
        }
    }

    params
}

/// Decodifica `+` a espacio y cada `%xx` a su byte
///
/// Un `%` que no va seguido de dos dígitos hexadecimales se deja tal cual.
/// Los bytes que no forman UTF-8 válido se reemplazan por U+FFFD.
fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => match bytes.get(i + 1..i + 3).and_then(hex_byte) {
                Some(byte) => {
                    decoded.push(byte);
                    i += 3;
                }
                None => {
                    decoded.push(b'%');
                    i += 1;
                }
            },
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let high = (pair[0] as char).to_digit(16)?;
    let low = (pair[1] as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}
