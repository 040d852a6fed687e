//! Biblioteca: library management web application
//!
//! Serves the catalog, student, loan and statistics pages as JSON view models and
//! proxies the remote library REST API through typed procedures.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub context: Arc<store::AppContext>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            context: Arc::new(store::AppContext::new()),
        }
    }
}
