//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every inbound handler and the payload schemas they
//! exchange. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    BasicDetails, Error, ErrorCode, MenuEntry, NavIcon, NavigationItem, NavigationMenu,
    Notification, NotificationId, RoleDetails, Session, Severity, ShellProfile, WorkType,
};
use crate::inbound::http::notifications::{ActionRequest, Enqueued, NewNotification};
use crate::inbound::http::session::{LoginRequest, RoleSelection, SessionView, SignupRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ecosystem shell API",
        description = "Session, navigation, and notification state for the ecosystem shell."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::session::get_session,
        crate::inbound::http::session::select_role,
        crate::inbound::http::session::logout,
        crate::inbound::http::session::login,
        crate::inbound::http::session::signup,
        crate::inbound::http::navigation::get_navigation,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::create_notification,
        crate::inbound::http::notifications::dismiss_notification,
        crate::inbound::http::notifications::trigger_action,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Session,
        ShellProfile,
        SessionView,
        RoleSelection,
        LoginRequest,
        SignupRequest,
        BasicDetails,
        RoleDetails,
        WorkType,
        NavIcon,
        NavigationItem,
        MenuEntry,
        NavigationMenu,
        Notification,
        NotificationId,
        Severity,
        NewNotification,
        ActionRequest,
        Enqueued,
    )),
    tags(
        (name = "session", description = "Sign-in, sign-out, and signup"),
        (name = "navigation", description = "Role-conditioned menus"),
        (name = "notifications", description = "Self-expiring toasts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
