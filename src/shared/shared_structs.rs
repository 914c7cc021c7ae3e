// src/shared/shared_structs.rs

use serde::Serialize;

/// Cuerpo estándar de error de la API: `{"message": "..."}`.
/// Los endpoints de borrado responden además con la fila eliminada, pero
/// todo error se reduce a este mensaje.
#[derive(Serialize)]
pub struct MensajeResponse {
    pub message: String,
}

impl MensajeResponse {
    pub fn nuevo(message: &str) -> Self {
        MensajeResponse {
            message: message.to_string(),
        }
    }
}
