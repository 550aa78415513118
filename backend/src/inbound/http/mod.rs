//! HTTP inbound adapter exposing the shell's REST endpoints.

use actix_web::{Scope, web};

pub mod error;
pub mod health;
pub mod navigation;
pub mod notifications;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
pub use state::HttpState;

/// Every `/api/v1` route. Handlers expect `web::Data<HttpState>` in app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use ecosystem_shell::domain::{DemoStore, NotificationTtl, StoreRuntime};
/// use ecosystem_shell::inbound::http::{HttpState, api_scope};
///
/// let store = Arc::new(DemoStore::new(StoreRuntime::default(), NotificationTtl::default()));
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::new(store)))
///     .service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(session::get_session)
        .service(session::select_role)
        .service(session::logout)
        .service(session::login)
        .service(session::signup)
        .service(navigation::get_navigation)
        .service(notifications::list_notifications)
        .service(notifications::create_notification)
        .service(notifications::dismiss_notification)
        .service(notifications::trigger_action)
}
