// src/tickets/mod.rs

// Declara el submódulo con la ruta global de tickets
pub mod ticket_router;
