// src/detalles/detalle_structs.rs

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de la tabla `detalle_cp`: una línea de venta por producto.
/// Las filas son append-only; nunca se actualizan ni se borran por la API.
#[derive(Serialize, FromRow)]
pub struct Detalle {
    pub detalle_id: i32,
    pub cliente_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
    pub subtotal: BigDecimal,
    pub iva_porcentaje: BigDecimal,
    pub total: BigDecimal,
}

/// Línea del ticket: un detalle junto con el nombre del producto, resultado
/// del join con `producto`. Si el producto fue eliminado, el join omite la
/// línea.
#[derive(Serialize, FromRow)]
pub struct TicketLinea {
    pub detalle_id: i32,
    pub cliente_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
    pub subtotal: BigDecimal,
    pub iva_porcentaje: BigDecimal,
    pub total: BigDecimal,
    pub nombre_producto: String,
}

/// Cuerpo del POST de detalle de venta.
///
/// El subtotal y el total vienen calculados por el cliente y se guardan
/// tal cual: aquí solo se valida presencia y positividad, nunca que
/// `total == subtotal * (1 + iva)`.
#[derive(Deserialize)]
pub struct NuevoDetalle {
    pub cliente_id: Option<i32>,
    pub producto_id: Option<i32>,
    pub cantidad: Option<i32>,
    pub subtotal: Option<BigDecimal>,
    pub iva_porcentaje: Option<BigDecimal>,
    pub total: Option<BigDecimal>,
}

impl NuevoDetalle {
    /// Validación mínima: ids y cantidad presentes y distintos de cero,
    /// cantidad positiva, subtotal y total presentes y distintos de cero.
    /// El iva_porcentaje no se revisa (cero o negativo pasan).
    pub fn es_valido(&self) -> bool {
        let ids_presentes = self.cliente_id.map_or(false, |id| id != 0)
            && self.producto_id.map_or(false, |id| id != 0);
        let cantidad_positiva = self.cantidad.map_or(false, |c| c > 0);
        let montos_presentes = self.subtotal.as_ref().map_or(false, |s| !s.is_zero())
            && self.total.as_ref().map_or(false, |t| !t.is_zero());

        ids_presentes && cantidad_positiva && montos_presentes
    }
}
