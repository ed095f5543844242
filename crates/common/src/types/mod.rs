use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform response body returned by every catalog endpoint.
///
/// `datos` carries the payload on success and is `null` on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub ok: bool,
    pub datos: Option<T>,
    pub mensaje: String,
}

impl<T> Envelope<T> {
    pub fn success(datos: T, mensaje: impl Into<String>) -> Self {
        Self { ok: true, datos: Some(datos), mensaje: mensaje.into() }
    }

    pub fn failure(mensaje: impl Into<String>) -> Self {
        Self { ok: false, datos: None, mensaje: mensaje.into() }
    }
}
