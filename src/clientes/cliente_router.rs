// src/clientes/cliente_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

// Importa las structs y el store del propio módulo de clientes
use super::cliente_store;
use super::cliente_structs::ClienteBody;

use crate::shared::shared_structs::MensajeResponse;
use crate::shared::store_error::StoreError;

// Importa el AppState del módulo raíz (lib.rs)
use crate::AppState;

/// Ruta para obtener todos los clientes, ordenados por id.
#[get("/api/clientes")]
pub async fn obtener_clientes(data: web::Data<AppState>) -> impl Responder {
    match cliente_store::listar(&data.db_pool).await {
        Ok(clientes) => HttpResponse::Ok().json(clientes),
        Err(err) => {
            log::error!("Error al obtener clientes: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al obtener clientes"))
        }
    }
}

/// Ruta para buscar un cliente por id. Responde 404 si no existe.
#[get("/api/clientes/{id}")]
pub async fn obtener_cliente_por_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    match cliente_store::buscar_por_id(&data.db_pool, id).await {
        Ok(cliente) => HttpResponse::Ok().json(cliente),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Cliente no encontrado"))
        }
        Err(err) => {
            log::error!("Error al buscar cliente {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al buscar cliente"))
        }
    }
}

/// Ruta para dar de alta un cliente.
///
/// El nombre es obligatorio; los teléfonos son opcionales y se guardan
/// como cadena vacía cuando no vienen en el cuerpo.
#[post("/api/clientes")]
pub async fn crear_cliente(
    data: web::Data<AppState>,
    item: web::Json<ClienteBody>,
) -> HttpResponse {
    if !item.nombre_valido() {
        return HttpResponse::BadRequest()
            .json(MensajeResponse::nuevo("El nombre es obligatorio"));
    }

    match cliente_store::crear(&data.db_pool, &item).await {
        Ok(cliente) => HttpResponse::Created().json(cliente),
        Err(err) => {
            log::error!("Error al crear cliente: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al crear cliente"))
        }
    }
}

/// Ruta para actualizar un cliente por id.
/// Es un reemplazo completo de los tres campos mutables.
#[put("/api/clientes/{id}")]
pub async fn actualizar_cliente(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<ClienteBody>,
) -> HttpResponse {
    let id = path.into_inner();
    match cliente_store::actualizar(&data.db_pool, id, &item).await {
        Ok(cliente) => HttpResponse::Ok().json(cliente),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Cliente no encontrado"))
        }
        Err(err) => {
            log::error!("Error al actualizar cliente {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al actualizar cliente"))
        }
    }
}

/// Ruta para eliminar un cliente por id.
///
/// Responde con la fila eliminada. Si el cliente tiene ventas registradas,
/// el store reporta `Conflicto` y la petición se rechaza con 400.
#[delete("/api/clientes/{id}")]
pub async fn eliminar_cliente(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    match cliente_store::eliminar(&data.db_pool, id).await {
        Ok(cliente) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Cliente eliminado",
            "cliente": cliente,
        })),
        Err(StoreError::NoEncontrado) => {
            HttpResponse::NotFound().json(MensajeResponse::nuevo("Cliente no encontrado"))
        }
        Err(StoreError::Conflicto) => HttpResponse::BadRequest().json(MensajeResponse::nuevo(
            "No se puede eliminar el cliente porque tiene ventas registradas.",
        )),
        Err(err) => {
            log::error!("Error al eliminar cliente {}: {:?}", id, err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al eliminar cliente"))
        }
    }
}
