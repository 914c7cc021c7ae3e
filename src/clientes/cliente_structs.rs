// src/clientes/cliente_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de la tabla `cliente`.
/// Deriva FromRow para el mapeo directo de resultados SQL.
#[derive(Serialize, FromRow)]
pub struct Cliente {
    pub cliente_id: i32,
    pub nombre_cliente: String,
    pub telefono: String,
    pub telefono_celular: String,
}

/// Cuerpo de las peticiones POST/PUT de clientes.
///
/// `nombre` se valida en el alta (no puede faltar ni estar vacío); los
/// teléfonos son opcionales y se coercen a cadena vacía al guardar.
#[derive(Deserialize)]
pub struct ClienteBody {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub telefono_celular: Option<String>,
}

impl ClienteBody {
    /// El alta exige un nombre presente y no vacío.
    pub fn nombre_valido(&self) -> bool {
        self.nombre.as_deref().map_or(false, |n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefonos_omitidos_deserializan_como_none() {
        let body: ClienteBody = serde_json::from_str(r#"{"nombre": "Ana"}"#).unwrap();
        assert_eq!(body.nombre.as_deref(), Some("Ana"));
        assert!(body.telefono.is_none());
        assert!(body.telefono_celular.is_none());
    }

    #[test]
    fn telefonos_null_tambien_deserializan() {
        let body: ClienteBody =
            serde_json::from_str(r#"{"nombre": "Ana", "telefono": null}"#).unwrap();
        assert!(body.telefono.is_none());
    }

    #[test]
    fn nombre_vacio_no_es_valido() {
        let body: ClienteBody = serde_json::from_str(r#"{"nombre": ""}"#).unwrap();
        assert!(!body.nombre_valido());
    }

    #[test]
    fn nombre_ausente_no_es_valido() {
        let body: ClienteBody = serde_json::from_str("{}").unwrap();
        assert!(!body.nombre_valido());
    }

    #[test]
    fn cliente_serializa_con_los_nombres_de_columna() {
        let cliente = Cliente {
            cliente_id: 7,
            nombre_cliente: "Ana".to_string(),
            telefono: String::new(),
            telefono_celular: "8112345678".to_string(),
        };
        let json = serde_json::to_value(&cliente).unwrap();
        assert_eq!(json["cliente_id"], 7);
        assert_eq!(json["nombre_cliente"], "Ana");
        assert_eq!(json["telefono"], "");
    }
}
