// src/shared/store_error.rs

use thiserror::Error;

/// Error tipado de la capa de acceso a datos.
///
/// La clasificación del error del driver ocurre en un único punto (el
/// `From<sqlx::Error>` de abajo); los handlers hacen pattern-matching sobre
/// estas variantes en vez de inspeccionar códigos SQLSTATE por su cuenta.
#[derive(Debug, Error)]
pub enum StoreError {
    /// La consulta no encontró ninguna fila.
    #[error("registro no encontrado")]
    NoEncontrado,
    /// La operación viola una restricción de integridad referencial
    /// (SQLSTATE 23503), p. ej. eliminar un cliente con ventas registradas.
    #[error("restricción de integridad referencial")]
    Conflicto,
    /// Cualquier otra falla del almacén o del driver. El detalle se registra
    /// en el log del servidor y nunca viaja al cliente.
    #[error("fallo interno del almacén: {0}")]
    Interno(sqlx::Error),
}

// Código SQLSTATE de violación de llave foránea en PostgreSQL.
const CODIGO_FK: &str = "23503";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NoEncontrado,
            sqlx::Error::Database(db) if db.code().as_deref() == Some(CODIGO_FK) => {
                StoreError::Conflicto
            }
            _ => StoreError::Interno(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_se_clasifica_como_no_encontrado() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::NoEncontrado));
    }

    #[test]
    fn otros_errores_del_driver_son_internos() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Interno(_)));
    }

    #[test]
    fn el_mensaje_de_interno_incluye_la_causa() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(err.to_string().contains("fallo interno"));
    }
}
