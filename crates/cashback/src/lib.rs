pub mod client;
pub mod config;
pub mod errors;
pub mod handler;
pub mod service;
pub mod state;
