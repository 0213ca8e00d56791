// src/handlers/mod.rs
pub mod dashboard;
pub mod error;
pub mod ga4;
pub mod hubspot;
pub mod params;
pub mod search_console;
