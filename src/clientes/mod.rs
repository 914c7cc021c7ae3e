// src/clientes/mod.rs

// Declara el submódulo con las structs de clientes
pub mod cliente_structs;
// Declara el submódulo con las consultas parametrizadas de clientes
pub mod cliente_store;
// Declara el submódulo con las rutas HTTP de clientes
pub mod cliente_router;
