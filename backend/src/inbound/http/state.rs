//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`; the store inside is
//! the single instance built at startup.

use std::sync::Arc;

use crate::domain::DemoStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub store: Arc<DemoStore>,
}

impl HttpState {
    pub fn new(store: Arc<DemoStore>) -> Self {
        Self { store }
    }
}
