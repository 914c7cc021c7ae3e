// src/detalles/mod.rs

// Declara el submódulo con las structs de detalles de venta
pub mod detalle_structs;
// Declara el submódulo con las consultas parametrizadas de detalles
pub mod detalle_store;
// Declara el submódulo con las rutas HTTP de detalles
pub mod detalle_router;
