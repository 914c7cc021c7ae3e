// src/lib.rs

use actix_web::web;
use sqlx::{Pool, Postgres};

// Importa los módulos
//
// Un módulo por entidad: cada uno contiene sus structs, su capa de acceso
// a datos (store) y sus rutas HTTP.
pub mod clientes;  // Módulo de clientes
pub mod productos; // Módulo de productos
pub mod detalles;  // Módulo de detalles de venta (detalle_cp)
pub mod tickets;   // Módulo de tickets
pub mod shared;    // Módulo shared

/// Estado compartido de la aplicación.
/// El pool de conexiones es la única autoridad sobre los datos; los
/// handlers no guardan ningún estado propio.
pub struct AppState {
    pub db_pool: Pool<Postgres>,
}

/// Registra todas las rutas de la API sobre un `ServiceConfig`.
///
/// Se usa tanto desde el binario (`main.rs`) como desde las pruebas de
/// integración, para garantizar que ambas monten exactamente la misma
/// tabla de rutas.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    // Módulo de Clientes
    cfg.service(clientes::cliente_router::obtener_clientes)
        .service(clientes::cliente_router::obtener_cliente_por_id)
        .service(clientes::cliente_router::crear_cliente)
        .service(clientes::cliente_router::actualizar_cliente)
        .service(clientes::cliente_router::eliminar_cliente)
        // Módulo de Productos
        .service(productos::producto_router::obtener_productos)
        .service(productos::producto_router::obtener_producto_por_id)
        .service(productos::producto_router::crear_producto)
        .service(productos::producto_router::actualizar_producto)
        .service(productos::producto_router::eliminar_producto)
        // Módulo de Detalles de venta
        .service(detalles::detalle_router::registrar_detalle)
        .service(detalles::detalle_router::obtener_ticket_por_cliente)
        // Módulo de Tickets
        .service(tickets::ticket_router::obtener_tickets);
}
