// src/productos/producto_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de la tabla `producto`.
/// El precio es NUMERIC en el banco y viaja como BigDecimal, que serializa
/// en JSON como cadena decimal.
#[derive(Serialize, FromRow)]
pub struct Producto {
    pub producto_id: i32,
    pub nombre_producto: String,
    pub descripcion: String,
    pub stock_disponible: i32,
    pub precio_unitario: BigDecimal,
}

/// Cuerpo de las peticiones POST/PUT de productos.
///
/// No hay validación de campos: lo que falte se pasa al banco como NULL y
/// son las restricciones NOT NULL de la tabla las que rechazan la fila
/// (el handler lo reporta como 500 genérico).
#[derive(Deserialize)]
pub struct ProductoBody {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub stock_disponible: Option<i32>,
    pub precio_unitario: Option<BigDecimal>,
}
