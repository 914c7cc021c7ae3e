// src/productos/producto_store.rs

use sqlx::{query_as, PgPool};

use super::producto_structs::{Producto, ProductoBody};
use crate::shared::store_error::StoreError;

/// Devuelve todos los productos ordenados por id.
pub async fn listar(pool: &PgPool) -> Result<Vec<Producto>, StoreError> {
    let productos = query_as::<_, Producto>(
        "SELECT producto_id, nombre_producto, descripcion, stock_disponible, precio_unitario
         FROM producto ORDER BY producto_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(productos)
}

/// Busca un producto por id.
pub async fn buscar_por_id(pool: &PgPool, id: i32) -> Result<Producto, StoreError> {
    query_as::<_, Producto>(
        "SELECT producto_id, nombre_producto, descripcion, stock_disponible, precio_unitario
         FROM producto WHERE producto_id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}

/// Inserta un producto y devuelve la fila creada.
/// Los campos ausentes se bindean como NULL; la tabla es quien los rechaza.
pub async fn crear(pool: &PgPool, body: &ProductoBody) -> Result<Producto, StoreError> {
    let producto = query_as::<_, Producto>(
        "INSERT INTO producto (nombre_producto, descripcion, stock_disponible, precio_unitario)
         VALUES ($1, $2, $3, $4)
         RETURNING producto_id, nombre_producto, descripcion, stock_disponible, precio_unitario",
    )
    .bind(&body.nombre)
    .bind(&body.descripcion)
    .bind(body.stock_disponible)
    .bind(&body.precio_unitario)
    .fetch_one(pool)
    .await?;

    Ok(producto)
}

/// Reemplazo completo de los cuatro campos mutables.
pub async fn actualizar(
    pool: &PgPool,
    id: i32,
    body: &ProductoBody,
) -> Result<Producto, StoreError> {
    query_as::<_, Producto>(
        "UPDATE producto
         SET nombre_producto = $1,
             descripcion = $2,
             stock_disponible = $3,
             precio_unitario = $4
         WHERE producto_id = $5
         RETURNING producto_id, nombre_producto, descripcion, stock_disponible, precio_unitario",
    )
    .bind(&body.nombre)
    .bind(&body.descripcion)
    .bind(body.stock_disponible)
    .bind(&body.precio_unitario)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}

/// Elimina un producto y devuelve la fila eliminada.
/// No hay guarda referencial: un producto con ventas registradas se elimina
/// igual, y el join del ticket simplemente omite esas líneas.
pub async fn eliminar(pool: &PgPool, id: i32) -> Result<Producto, StoreError> {
    query_as::<_, Producto>(
        "DELETE FROM producto WHERE producto_id = $1
         RETURNING producto_id, nombre_producto, descripcion, stock_disponible, precio_unitario",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}
