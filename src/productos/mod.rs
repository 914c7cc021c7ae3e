// src/productos/mod.rs

// Declara el submódulo con las structs de productos
pub mod producto_structs;
// Declara el submódulo con las consultas parametrizadas de productos
pub mod producto_store;
// Declara el submódulo con las rutas HTTP de productos
pub mod producto_router;
