// src/shared/mod.rs

// Declara el submódulo con las structs compartidas de respuesta
pub mod shared_structs;
// Declara el submódulo con el error tipado de la capa de acceso a datos
pub mod store_error;
