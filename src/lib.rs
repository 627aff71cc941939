pub mod config;
pub mod db;
pub mod desktop;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod utils;
pub mod views;
