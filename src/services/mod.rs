// src/services/mod.rs
pub mod clients;
pub mod data_sources;
pub mod generator;
pub mod overview;
pub mod store;
