// src/detalles/detalle_store.rs

use sqlx::{query_as, PgPool};

use super::detalle_structs::{Detalle, NuevoDetalle, TicketLinea};
use crate::shared::store_error::StoreError;

/// Inserta una línea de venta y devuelve la fila creada.
/// El handler ya validó presencia y positividad; los montos se guardan
/// tal como los calculó el cliente.
pub async fn insertar(pool: &PgPool, body: &NuevoDetalle) -> Result<Detalle, StoreError> {
    let detalle = query_as::<_, Detalle>(
        "INSERT INTO detalle_cp (cliente_id, producto_id, cantidad, subtotal, iva_porcentaje, total)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING detalle_id, cliente_id, producto_id, cantidad, subtotal, iva_porcentaje, total",
    )
    .bind(body.cliente_id)
    .bind(body.producto_id)
    .bind(body.cantidad)
    .bind(&body.subtotal)
    .bind(&body.iva_porcentaje)
    .bind(&body.total)
    .fetch_one(pool)
    .await?;

    Ok(detalle)
}

/// Reconstruye el ticket de un cliente: todas sus líneas de venta con el
/// nombre del producto, en orden de inserción. El join interno omite las
/// líneas cuyo producto ya no existe.
pub async fn ticket_por_cliente(
    pool: &PgPool,
    cliente_id: i32,
) -> Result<Vec<TicketLinea>, StoreError> {
    let lineas = query_as::<_, TicketLinea>(
        "SELECT d.detalle_id, d.cliente_id, d.producto_id, d.cantidad,
                d.subtotal, d.iva_porcentaje, d.total, p.nombre_producto
         FROM detalle_cp d
         JOIN producto p ON d.producto_id = p.producto_id
         WHERE d.cliente_id = $1
         ORDER BY d.detalle_id ASC",
    )
    .bind(cliente_id)
    .fetch_all(pool)
    .await?;

    Ok(lineas)
}

/// Devuelve todas las líneas de venta de todos los clientes, sin filtrar.
pub async fn listar_todos(pool: &PgPool) -> Result<Vec<Detalle>, StoreError> {
    let detalles = query_as::<_, Detalle>(
        "SELECT detalle_id, cliente_id, producto_id, cantidad, subtotal, iva_porcentaje, total
         FROM detalle_cp",
    )
    .fetch_all(pool)
    .await?;

    Ok(detalles)
}
