pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use services::PermissionResolver;
use std::sync::Arc;
use utils::jwt::TokenVerifier;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PermissionResolver>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(resolver: Arc<PermissionResolver>, verifier: Arc<TokenVerifier>) -> Self {
        Self { resolver, verifier }
    }
}
