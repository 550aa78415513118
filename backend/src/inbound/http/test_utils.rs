//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::{HttpState, api_scope};
use crate::domain::{DemoStore, NotificationTtl, StoreRuntime};
use crate::test_support::{MutableClock, PendingSleeper};

/// Store on a frozen clock whose expiry tasks never fire.
pub fn frozen_store() -> (Arc<MutableClock>, Arc<DemoStore>) {
    let clock = Arc::new(MutableClock::epoch());
    let store = DemoStore::new(
        StoreRuntime {
            clock: clock.clone(),
            sleeper: Arc::new(PendingSleeper),
        },
        NotificationTtl::default(),
    );
    (clock, Arc::new(store))
}

/// The `/api/v1` scope wired to `store`.
pub fn test_app(
    store: Arc<DemoStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(store)))
        .service(api_scope())
}
