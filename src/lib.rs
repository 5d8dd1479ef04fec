pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod middleware;

pub use app::{app, serve};
pub use context::AppContext;
