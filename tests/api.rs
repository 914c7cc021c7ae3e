// tests/api.rs
//
// Pruebas de integración sobre la tabla de rutas real. El pool se crea en
// modo perezoso (connect_lazy), así que los caminos de validación, que
// responden antes de tocar el banco, se pueden ejercitar sin PostgreSQL.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use sis_fime::{configurar_rutas, AppState};

fn estado_de_prueba() -> web::Data<AppState> {
    let opciones = PgConnectOptions::new()
        .host("localhost")
        .port(5432)
        .username("postgres")
        .database("sis_fime");
    let db_pool = PgPoolOptions::new().connect_lazy_with(opciones);
    web::Data::new(AppState { db_pool })
}

macro_rules! app_de_prueba {
    () => {
        test::init_service(
            App::new()
                .app_data(estado_de_prueba())
                .configure(configurar_rutas),
        )
        .await
    };
}

#[actix_web::test]
async fn crear_cliente_sin_nombre_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/clientes")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "El nombre es obligatorio");
}

#[actix_web::test]
async fn crear_cliente_con_nombre_vacio_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/clientes")
        .set_json(json!({ "nombre": "", "telefono": "8311111111" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn detalle_con_cantidad_cero_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/detalle_cp")
        .set_json(json!({
            "cliente_id": 1,
            "producto_id": 1,
            "cantidad": 0,
            "subtotal": 10.0,
            "iva_porcentaje": 0.16,
            "total": 11.6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Datos incompletos o inválidos");
}

#[actix_web::test]
async fn detalle_con_cantidad_negativa_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/detalle_cp")
        .set_json(json!({
            "cliente_id": 1,
            "producto_id": 1,
            "cantidad": -2,
            "subtotal": 10.0,
            "iva_porcentaje": 0.16,
            "total": 11.6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn detalle_sin_subtotal_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/detalle_cp")
        .set_json(json!({
            "cliente_id": 1,
            "producto_id": 1,
            "cantidad": 2,
            "iva_porcentaje": 0.16,
            "total": 11.6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn detalle_con_total_cero_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/detalle_cp")
        .set_json(json!({
            "cliente_id": 1,
            "producto_id": 1,
            "cantidad": 2,
            "subtotal": 10.0,
            "iva_porcentaje": 0.16,
            "total": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn detalle_con_cuerpo_vacio_responde_400() {
    let app = app_de_prueba!();

    let req = test::TestRequest::post()
        .uri("/api/detalle_cp")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Datos incompletos o inválidos");
}
