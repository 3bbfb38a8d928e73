pub mod commands;
pub mod config;
pub mod routes;
pub mod state;
