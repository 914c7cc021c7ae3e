// src/detalles/detalle_router.rs

use actix_web::{get, post, web, HttpResponse};

use super::detalle_store;
use super::detalle_structs::NuevoDetalle;

use crate::shared::shared_structs::MensajeResponse;

// Importa el AppState del módulo raíz (lib.rs)
use crate::AppState;

/// Ruta para registrar una línea de venta (una fila por producto).
///
/// Este es el contrato más delicado del sistema: el subtotal y el total los
/// calcula el cliente y se persisten sin recomputar contra el precio del
/// producto. Aquí solo se valida presencia y positividad.
#[post("/api/detalle_cp")]
pub async fn registrar_detalle(
    data: web::Data<AppState>,
    item: web::Json<NuevoDetalle>,
) -> HttpResponse {
    // Validaciones mínimas
    if !item.es_valido() {
        return HttpResponse::BadRequest()
            .json(MensajeResponse::nuevo("Datos incompletos o inválidos"));
    }

    match detalle_store::insertar(&data.db_pool, &item).await {
        Ok(detalle) => HttpResponse::Created().json(detalle),
        Err(err) => {
            log::error!("Error al guardar detalle de venta: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al guardar detalle de venta"))
        }
    }
}

/// Ruta para obtener el ticket de compra de un cliente: todas sus líneas
/// de venta con nombre de producto, en orden de inserción.
///
/// Responde 404 cuando no hay líneas, sin distinguir entre "cliente sin
/// compras" y "cliente inexistente": la existencia del cliente nunca se
/// consulta por separado.
#[get("/api/detalle_cp/{cliente_id}")]
pub async fn obtener_ticket_por_cliente(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let cliente_id = path.into_inner();
    match detalle_store::ticket_por_cliente(&data.db_pool, cliente_id).await {
        Ok(lineas) if lineas.is_empty() => HttpResponse::NotFound().json(MensajeResponse::nuevo(
            "No hay productos registrados para este cliente.",
        )),
        Ok(lineas) => HttpResponse::Ok().json(lineas),
        Err(err) => {
            log::error!(
                "Error al obtener detalles del cliente {}: {:?}",
                cliente_id,
                err
            );
            HttpResponse::InternalServerError().json(MensajeResponse::nuevo(
                "Error al obtener detalles del cliente",
            ))
        }
    }
}
