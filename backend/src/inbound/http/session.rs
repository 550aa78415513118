//! Session, login, and signup handlers.
//!
//! ```text
//! GET    /api/v1/session
//! POST   /api/v1/session {"role":"ARCHITECT"}
//! DELETE /api/v1/session
//! POST   /api/v1/login   {"username":"neo","password":"matrix"}
//! POST   /api/v1/signup  {"basic":{...},"role":"SUPPLIER","details":{...}}
//! ```

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    BasicDetails, DemoStore, Error, LoginCredentials, LoginValidationError, Role, RoleDetails,
    Session, ShellProfile, SignupError, SignupFlow, SignupStep, UnknownRole,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Current session plus the profile badge shown in the shell header.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// `null` while browsing as a guest.
    pub session: Option<Session>,
    pub profile: ShellProfile,
}

impl SessionView {
    fn of(store: &DemoStore) -> Self {
        let session = store.current_session();
        let profile = ShellProfile::for_session(session.as_ref());
        Self { session, profile }
    }
}

/// Body for `POST /api/v1/session`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleSelection {
    /// Catalog key or id, e.g. `ARCHITECT` or `architect`.
    #[schema(example = "ARCHITECT")]
    pub role: String,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Signup request body for `POST /api/v1/signup`.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub basic: BasicDetails,
    #[schema(example = "SUPPLIER")]
    pub role: String,
    /// Required for architects and suppliers; ignored for customers.
    #[serde(default)]
    pub details: Option<RoleDetails>,
}

/// Read the current session.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = 200, description = "Current session", body = SessionView)),
    tags = ["session"],
    operation_id = "getSession"
)]
#[get("/session")]
pub async fn get_session(state: web::Data<HttpState>) -> web::Json<SessionView> {
    web::Json(SessionView::of(&state.store))
}

/// Sign in with a role picked from the catalog.
///
/// Unknown roles leave the session untouched and return the unchanged view.
#[utoipa::path(
    post,
    path = "/api/v1/session",
    request_body = RoleSelection,
    responses((status = 200, description = "Session after the switch", body = SessionView)),
    tags = ["session"],
    operation_id = "selectRole"
)]
#[post("/session")]
pub async fn select_role(
    state: web::Data<HttpState>,
    payload: web::Json<RoleSelection>,
) -> web::Json<SessionView> {
    state.store.login_by_id(&payload.role);
    web::Json(SessionView::of(&state.store))
}

/// Return to the guest state.
#[utoipa::path(
    delete,
    path = "/api/v1/session",
    responses((status = 200, description = "Guest view", body = SessionView)),
    tags = ["session"],
    operation_id = "logout"
)]
#[delete("/session")]
pub async fn logout(state: web::Data<HttpState>) -> web::Json<SessionView> {
    state.store.logout();
    web::Json(SessionView::of(&state.store))
}

/// Mock credential sign-in; any well-formed pair becomes a customer session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionView),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["session"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionView>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    debug!(username = credentials.username(), "credential login");
    let step = SignupFlow::new().submit_login().map_err(map_signup_error)?;
    complete(&state.store, step)
}

/// Run the signup wizard end to end and sign the new account in.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created and signed in", body = SessionView),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["session"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<SessionView>> {
    let SignupRequest {
        basic,
        role,
        details,
    } = payload.into_inner();
    let role = Role::parse(&role).map_err(map_unknown_role)?;

    let mut flow = SignupFlow::new();
    flow.toggle();
    flow.submit_basic(basic).map_err(map_signup_error)?;
    let step = match flow.select_role(role).map_err(map_signup_error)? {
        step @ SignupStep::Complete(_) => step,
        SignupStep::Show(_) => {
            let details = details.ok_or_else(|| {
                Error::invalid_request(format!("details are required for {role}"))
                    .with_details(json!({ "field": "details", "code": "missing_details" }))
            })?;
            flow.submit_details(&details).map_err(map_signup_error)?
        }
    };
    complete(&state.store, step)
}

fn complete(store: &DemoStore, step: SignupStep) -> ApiResult<web::Json<SessionView>> {
    match step {
        SignupStep::Complete(role) => {
            store.login(role);
            Ok(web::Json(SessionView::of(store)))
        }
        SignupStep::Show(view) => Err(Error::internal(format!(
            "sign-in flow stopped early on {view:?}"
        ))),
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

fn map_unknown_role(err: UnknownRole) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "role", "code": "unknown_role" }))
}

fn map_signup_error(err: SignupError) -> Error {
    let message = err.to_string();
    match err {
        SignupError::PasswordMismatch => Error::invalid_request(message).with_details(
            json!({ "field": "confirmPassword", "code": "password_mismatch" }),
        ),
        SignupError::MissingField { field } => Error::invalid_request(message)
            .with_details(json!({ "field": field, "code": "missing_field" })),
        SignupError::DetailsMismatch { .. } => Error::invalid_request(message)
            .with_details(json!({ "field": "details", "code": "details_mismatch" })),
        SignupError::UnexpectedView { .. } => Error::internal(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LOGOUT_MESSAGE;
    use crate::inbound::http::test_utils::{frozen_store, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    fn basic_json(confirm: &str) -> Value {
        json!({
            "firstName": "Thomas",
            "lastName": "Anderson",
            "email": "neo@matrix.com",
            "password": "secret",
            "confirmPassword": confirm,
        })
    }

    async fn send(
        store: std::sync::Arc<DemoStore>,
        request: actix_test::TestRequest,
    ) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(store)).await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value = serde_json::from_slice(&body).expect("json body");
        (status, value)
    }

    #[actix_web::test]
    async fn guest_view_has_no_session() {
        let (_, store) = frozen_store();
        let (status, body) = send(store, actix_test::TestRequest::get().uri("/api/v1/session")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["session"].is_null());
        assert_eq!(body["profile"]["name"], "Guest");
        assert_eq!(body["profile"]["mode"], "Visitor Mode");
    }

    #[rstest]
    #[case("ARCHITECT", "ARCHITECT", "Architect / Creator User")]
    #[case("supplier", "SUPPLIER", "Supply Node User")]
    #[actix_web::test]
    async fn selecting_a_role_signs_in(
        #[case] raw: &str,
        #[case] key: &str,
        #[case] display_name: &str,
    ) {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({ "role": raw }));
        let (status, body) = send(store.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["role"], key);
        assert_eq!(body["session"]["displayName"], display_name);
        assert_eq!(store.notifications().len(), 1);
    }

    #[actix_web::test]
    async fn unknown_role_returns_unchanged_view() {
        let (_, store) = frozen_store();
        store.login(Role::Customer);
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({ "role": "UNKNOWN_ROLE" }));
        let (status, body) = send(store.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["role"], "CUSTOMER");
        assert_eq!(store.notifications().len(), 1);
    }

    #[actix_web::test]
    async fn logout_returns_guest_and_toasts() {
        let (_, store) = frozen_store();
        store.login(Role::Supplier);
        let (status, body) =
            send(store.clone(), actix_test::TestRequest::delete().uri("/api/v1/session")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["session"].is_null());
        let last = store.notifications().pop().expect("logout toast");
        assert_eq!(last.message, LOGOUT_MESSAGE);
    }

    #[rstest]
    #[case("   ", "pw", "username", "empty_username")]
    #[case("neo", "", "password", "empty_password")]
    #[actix_web::test]
    async fn login_rejects_blank_fields(
        #[case] username: &str,
        #[case] password: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(LoginRequest {
                username: username.into(),
                password: password.into(),
            });
        let (status, body) = send(store.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
        assert!(store.current_session().is_none());
    }

    #[actix_web::test]
    async fn credential_login_becomes_customer() {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "neo", "password": "matrix" }));
        let (status, body) = send(store, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["role"], "CUSTOMER");
        assert_eq!(body["profile"]["mode"], "customer Mode");
    }

    #[actix_web::test]
    async fn customer_signup_needs_no_details() {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(json!({ "basic": basic_json("secret"), "role": "CUSTOMER" }));
        let (status, body) = send(store, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["role"], "CUSTOMER");
    }

    #[actix_web::test]
    async fn supplier_signup_with_details_signs_in() {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(json!({
                "basic": basic_json("secret"),
                "role": "SUPPLIER",
                "details": { "kind": "supplier", "companyName": "Zion Fabrication" },
            }));
        let (status, body) = send(store, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["role"], "SUPPLIER");
    }

    #[rstest]
    #[case(json!({ "basic": basic_json("other"), "role": "CUSTOMER" }), "password_mismatch")]
    #[case(json!({ "basic": basic_json("secret"), "role": "ARCHITECT" }), "missing_details")]
    #[case(json!({ "basic": basic_json("secret"), "role": "PILOT" }), "unknown_role")]
    #[case(
        json!({
            "basic": basic_json("secret"),
            "role": "ARCHITECT",
            "details": { "kind": "supplier", "companyName": "Zion" },
        }),
        "details_mismatch"
    )]
    #[actix_web::test]
    async fn signup_rejections_leave_guest(#[case] payload: Value, #[case] code: &str) {
        let (_, store) = frozen_store();
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(payload);
        let (status, body) = send(store.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["code"], code);
        assert!(store.current_session().is_none());
        assert!(store.notifications().is_empty());
    }
}
