//! Notification and action handlers.
//!
//! ```text
//! GET    /api/v1/notifications
//! POST   /api/v1/notifications {"message":"Saved","severity":"success"}
//! DELETE /api/v1/notifications/{id}
//! POST   /api/v1/actions       {"name":"Deploy Agent"}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{ActionError, Error, Notification, NotificationId, Severity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body for `POST /api/v1/notifications`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

/// Body for `POST /api/v1/actions`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    #[schema(example = "Deploy Agent")]
    pub name: String,
}

/// Identifier of a freshly queued toast.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enqueued {
    pub id: NotificationId,
}

/// Toasts still inside their lifetime, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses((status = 200, description = "Visible notifications", body = [Notification])),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list_notifications(state: web::Data<HttpState>) -> web::Json<Vec<Notification>> {
    web::Json(state.store.notifications())
}

/// Queue a toast.
#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    request_body = NewNotification,
    responses(
        (status = 201, description = "Queued", body = Enqueued),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "createNotification"
)]
#[post("/notifications")]
pub async fn create_notification(
    state: web::Data<HttpState>,
    payload: web::Json<NewNotification>,
) -> ApiResult<HttpResponse> {
    let NewNotification { message, severity } = payload.into_inner();
    if message.trim().is_empty() {
        return Err(Error::invalid_request("message must not be empty")
            .with_details(json!({ "field": "message", "code": "empty_message" })));
    }
    let id = state.store.enqueue(message, severity);
    Ok(HttpResponse::Created().json(Enqueued { id }))
}

/// Remove a toast before it expires. Unknown ids are ignored.
#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{id}",
    params(("id" = u64, Path, description = "Notification id")),
    responses((status = 204, description = "Dismissed or already gone")),
    tags = ["notifications"],
    operation_id = "dismissNotification"
)]
#[delete("/notifications/{id}")]
pub async fn dismiss_notification(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> HttpResponse {
    state.store.dismiss(NotificationId::new(path.into_inner()));
    HttpResponse::NoContent().finish()
}

/// Echo a named UI command back as a success toast.
#[utoipa::path(
    post,
    path = "/api/v1/actions",
    request_body = ActionRequest,
    responses(
        (status = 202, description = "Action accepted", body = Enqueued),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "triggerAction"
)]
#[post("/actions")]
pub async fn trigger_action(
    state: web::Data<HttpState>,
    payload: web::Json<ActionRequest>,
) -> ApiResult<HttpResponse> {
    let id = state
        .store
        .trigger_action(&payload.name)
        .map_err(map_action_error)?;
    Ok(HttpResponse::Accepted().json(Enqueued { id }))
}

fn map_action_error(err: ActionError) -> Error {
    match err {
        ActionError::EmptyName => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "name", "code": "empty_name" })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{frozen_store, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;
    use std::time::Duration;

    #[actix_web::test]
    async fn create_then_list_in_insertion_order() {
        let (_, store) = frozen_store();
        let app = actix_test::init_service(test_app(store)).await;

        for (message, severity) in [("first", "info"), ("second", "success")] {
            let request = actix_test::TestRequest::post()
                .uri("/api/v1/notifications")
                .set_json(json!({ "message": message, "severity": severity }))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        let listed = body.as_array().expect("array");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["message"], "first");
        assert_eq!(listed[1]["severity"], "success");
        assert!(listed[0]["id"].as_u64() < listed[1]["id"].as_u64());
    }

    #[actix_web::test]
    async fn severity_defaults_to_info() {
        let (_, store) = frozen_store();
        let app = actix_test::init_service(test_app(store.clone())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/notifications")
            .set_json(json!({ "message": "plain" }))
            .to_request();
        let created: Enqueued = actix_test::call_and_read_body_json(&app, request).await;
        let toast = store.notifications().pop().expect("queued");
        assert_eq!(toast.id, created.id);
        assert_eq!(toast.severity, Severity::Info);
    }

    #[rstest]
    #[case("/api/v1/notifications", json!({ "message": "  " }), "message")]
    #[case("/api/v1/actions", json!({ "name": "" }), "name")]
    #[actix_web::test]
    async fn blank_text_is_rejected(
        #[case] uri: &str,
        #[case] payload: Value,
        #[case] field: &str,
    ) {
        let (_, store) = frozen_store();
        let app = actix_test::init_service(test_app(store.clone())).await;
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["field"], field);
        assert!(store.notifications().is_empty());
    }

    #[actix_web::test]
    async fn dismiss_is_idempotent() {
        let (_, store) = frozen_store();
        let id = store.enqueue("closable", Severity::Info);
        let app = actix_test::init_service(test_app(store.clone())).await;
        for _ in 0..2 {
            let request = actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/notifications/{id}"))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
        assert!(store.notifications().is_empty());
    }

    #[actix_web::test]
    async fn action_is_accepted_and_toasted() {
        let (_, store) = frozen_store();
        let app = actix_test::init_service(test_app(store.clone())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/actions")
            .set_json(ActionRequest {
                name: "Deploy Agent".into(),
            })
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let toast = store.notifications().pop().expect("queued");
        assert_eq!(toast.message, "Command Executed: Deploy Agent");
    }

    #[actix_web::test]
    async fn expired_toasts_drop_out_of_the_listing() {
        let (clock, store) = frozen_store();
        store.enqueue("fleeting", Severity::Info);
        clock.advance(Duration::from_secs(3));
        let app = actix_test::init_service(test_app(store)).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, json!([]));
    }
}
