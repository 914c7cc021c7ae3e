// src/main.rs

use actix_web::{web, App, HttpServer};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use sis_fime::{configurar_rutas, AppState};

// Función principal de la aplicación Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Carga variables desde .env si el archivo existe.
    dotenv::dotenv().ok();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Configuración: únicamente el puerto y la contraseña del banco vienen
    // del entorno; el resto de los parámetros de conexión es fijo.
    let puerto: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let password = std::env::var("DB_PASSWORD")
        .expect("DB_PASSWORD debe estar definida en el entorno");

    // Asegúrate de que las columnas de dinero (subtotal, total, precio_unitario)
    // sean NUMERIC/DECIMAL en PostgreSQL para que sean compatibles con
    // bigdecimal::BigDecimal.
    let opciones = PgConnectOptions::new()
        .host("localhost")
        .port(5432)
        .username("postgres")
        .password(&password)
        .database("sis_fime");

    // Conecta a PostgreSQL usando un pool de conexiones.
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(opciones)
        .await
        .expect("Fallo al conectar con PostgreSQL");

    // Guardamos una copia del pool para cerrarlo cuando el servidor termine.
    let pool_cierre = db_pool.clone();

    // web::Data comparte el estado inmutable entre todas las rutas.
    let app_state = web::Data::new(AppState { db_pool });

    log::info!("Servidor corriendo en http://localhost:{}", puerto);

    // Configura y arranca el servidor HTTP.
    HttpServer::new(move || {
        App::new()
            // .clone() es necesario porque la closure se ejecuta una vez
            // por worker.
            .app_data(app_state.clone())
            .configure(configurar_rutas)
    })
    .bind(("127.0.0.1", puerto))?
    .run()
    .await?;

    // El servidor ya drenó las peticiones en curso; cerramos el pool para
    // terminar limpiamente las conexiones con el banco.
    pool_cierre.close().await;

    Ok(())
}
