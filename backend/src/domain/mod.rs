//! Domain model for the ecosystem shell.
//!
//! Purpose: hold the role catalog, sessions, navigation menus, the sign-in
//! wizard, and the self-expiring notification queue. Nothing here knows about
//! HTTP; adapters in `inbound` translate to and from these types.
//!
//! Public surface:
//! - `DemoStore` owns the current session and the notification queue.
//! - `Role`, `Session`, `ShellProfile` describe who is signed in.
//! - `navigation::resolve` maps a session to its menu.
//! - `SignupFlow` drives the login / signup wizard.
//! - `Error` / `ErrorCode` form the error envelope adapters render.

mod auth;
mod error;
pub mod navigation;
mod notification;
mod notification_queue;
pub mod ports;
mod role;
mod session;
mod signup;
mod store;
mod trace_id;

pub use self::auth::{CREDENTIAL_LOGIN_ROLE, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::navigation::{MenuEntry, NavIcon, NavigationItem, NavigationMenu};
pub use self::notification::{
    DEFAULT_NOTIFICATION_TTL, MAX_NOTIFICATION_TTL, Notification, NotificationId, NotificationTtl,
    Severity, TtlError,
};
pub use self::notification_queue::NotificationQueue;
pub use self::role::{Role, UnknownRole};
pub use self::session::{Session, ShellProfile};
pub use self::signup::{BasicDetails, RoleDetails, SignupError, SignupFlow, SignupStep, SignupView, WorkType};
pub use self::store::{ActionError, DemoStore, LOGOUT_MESSAGE, StoreRuntime};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("message must not be empty"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
