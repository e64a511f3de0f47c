pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;

pub use server::{AppState, ServerSettings};
