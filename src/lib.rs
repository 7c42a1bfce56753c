pub mod app_state;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod prompting;
pub mod repositories;
pub mod services;
