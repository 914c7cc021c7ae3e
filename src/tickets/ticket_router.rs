// src/tickets/ticket_router.rs

use actix_web::{get, web, HttpResponse};

// Reutiliza el store de detalles: un "ticket" no es una entidad almacenada,
// solo una proyección sobre detalle_cp.
use crate::detalles::detalle_store;
use crate::shared::shared_structs::MensajeResponse;
use crate::AppState;

/// Ruta para obtener todas las líneas de venta registradas, sin filtrar
/// por cliente.
#[get("/api/tickets")]
pub async fn obtener_tickets(data: web::Data<AppState>) -> HttpResponse {
    match detalle_store::listar_todos(&data.db_pool).await {
        Ok(detalles) => HttpResponse::Ok().json(detalles),
        Err(err) => {
            log::error!("Error al obtener tickets: {:?}", err);
            HttpResponse::InternalServerError()
                .json(MensajeResponse::nuevo("Error al obtener tickets"))
        }
    }
}
