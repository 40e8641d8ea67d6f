pub mod config;
pub mod dashboard;
pub mod errors;
pub mod generation;
pub mod models;
pub mod routes;
pub mod screening;
