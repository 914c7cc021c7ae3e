// src/productos/producto_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use super::producto_store;
use super::producto_structs::ProductoBody;

use crate::shared::shared_structs::MensajeResponse;
use crate::shared::store_error::StoreError;

// Importa el AppState del módulo raíz (lib.rs)
use crate::AppState;

/// Ruta para obtener todos los productos, ordenados por id.
#[get("/api/productos")]
pub async fn obtener_productos(data: web::Data<AppState>) -> impl Responder {
    match producto_store::listar(&data.db_pool).await {
        Ok(productos) => HttpResponse::Ok().json(productos),
        Err(err) => {
            log::error!("Error al obtener productos: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al obtener productos"))
        }
    }
}

/// Ruta para buscar un producto por id. Responde 404 si no existe.
#[get("/api/productos/{id}")]
pub async fn obtener_producto_por_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    match producto_store::buscar_por_id(&data.db_pool, id).await {
        Ok(producto) => HttpResponse::Ok().json(producto),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Producto no encontrado"))
        }
        Err(err) => {
            log::error!("Error al buscar producto {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al buscar producto"))
        }
    }
}

/// Ruta para dar de alta un producto.
/// Sin validación de campos: lo ausente llega como NULL al banco y la
/// falla resultante se reporta como 500 genérico.
#[post("/api/productos")]
pub async fn crear_producto(
    data: web::Data<AppState>,
    item: web::Json<ProductoBody>,
) -> HttpResponse {
    match producto_store::crear(&data.db_pool, &item).await {
        Ok(producto) => HttpResponse::Created().json(producto),
        Err(err) => {
            log::error!("Error al crear producto: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al crear producto"))
        }
    }
}

/// Ruta para actualizar un producto por id (reemplazo completo).
#[put("/api/productos/{id}")]
pub async fn actualizar_producto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<ProductoBody>,
) -> HttpResponse {
    let id = path.into_inner();
    match producto_store::actualizar(&data.db_pool, id, &item).await {
        Ok(producto) => HttpResponse::Ok().json(producto),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Producto no encontrado"))
        }
        Err(err) => {
            log::error!("Error al actualizar producto {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al actualizar producto"))
        }
    }
}

/// Ruta para eliminar un producto por id. Responde con la fila eliminada.
#[delete("/api/productos/{id}")]
pub async fn eliminar_producto(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    match producto_store::eliminar(&data.db_pool, id).await {
        Ok(producto) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Producto eliminado",
            "producto": producto,
        })),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Producto no encontrado"))
        }
        Err(err) => {
            log::error!("Error al eliminar producto {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al eliminar producto"))
        }
    }
}
