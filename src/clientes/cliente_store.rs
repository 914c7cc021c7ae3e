// src/clientes/cliente_store.rs

use sqlx::{query_as, PgPool};

use super::cliente_structs::{Cliente, ClienteBody};
use crate::shared::store_error::StoreError;

/// Devuelve todos los clientes ordenados por id.
pub async fn listar(pool: &PgPool) -> Result<Vec<Cliente>, StoreError> {
    let clientes = query_as::<_, Cliente>(
        "SELECT cliente_id, nombre_cliente, telefono, telefono_celular
         FROM cliente ORDER BY cliente_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(clientes)
}

/// Busca un cliente por id.
pub async fn buscar_por_id(pool: &PgPool, id: i32) -> Result<Cliente, StoreError> {
    query_as::<_, Cliente>(
        "SELECT cliente_id, nombre_cliente, telefono, telefono_celular
         FROM cliente WHERE cliente_id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}

/// Inserta un cliente nuevo y devuelve la fila creada.
/// Los teléfonos ausentes se guardan como cadena vacía.
pub async fn crear(pool: &PgPool, body: &ClienteBody) -> Result<Cliente, StoreError> {
    let cliente = query_as::<_, Cliente>(
        "INSERT INTO cliente (nombre_cliente, telefono, telefono_celular)
         VALUES ($1, $2, $3)
         RETURNING cliente_id, nombre_cliente, telefono, telefono_celular",
    )
    .bind(&body.nombre)
    .bind(body.telefono.clone().unwrap_or_default())
    .bind(body.telefono_celular.clone().unwrap_or_default())
    .fetch_one(pool)
    .await?;

    Ok(cliente)
}

/// Reemplazo completo: sobrescribe los tres campos mutables con lo que
/// venga en el cuerpo, sin semántica de actualización parcial.
pub async fn actualizar(pool: &PgPool, id: i32, body: &ClienteBody) -> Result<Cliente, StoreError> {
    query_as::<_, Cliente>(
        "UPDATE cliente
         SET nombre_cliente = $1, telefono = $2, telefono_celular = $3
         WHERE cliente_id = $4
         RETURNING cliente_id, nombre_cliente, telefono, telefono_celular",
    )
    .bind(&body.nombre)
    .bind(body.telefono.clone().unwrap_or_default())
    .bind(body.telefono_celular.clone().unwrap_or_default())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}

/// Elimina un cliente y devuelve la fila eliminada.
/// Si el cliente tiene detalles de venta, la llave foránea de `detalle_cp`
/// hace que el borrado falle con `StoreError::Conflicto`.
pub async fn eliminar(pool: &PgPool, id: i32) -> Result<Cliente, StoreError> {
    query_as::<_, Cliente>(
        "DELETE FROM cliente WHERE cliente_id = $1
         RETURNING cliente_id, nombre_cliente, telefono, telefono_celular",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NoEncontrado)
}
