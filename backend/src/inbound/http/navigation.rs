//! Navigation menu handler.
//!
//! ```text
//! GET /api/v1/navigation?path=/studio
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::NavigationMenu;
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/v1/navigation`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NavigationQuery {
    /// Route currently displayed; the matching entry is flagged active.
    pub path: Option<String>,
}

/// Menu for the current session.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(NavigationQuery),
    responses((status = 200, description = "Role-conditioned menu", body = NavigationMenu)),
    tags = ["navigation"],
    operation_id = "getNavigation"
)]
#[get("/navigation")]
pub async fn get_navigation(
    state: web::Data<HttpState>,
    query: web::Query<NavigationQuery>,
) -> web::Json<NavigationMenu> {
    web::Json(NavigationMenu::for_path(
        state.store.navigation(),
        query.path.as_deref(),
    ))
}
