//! Display preference endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Theme;

/// Current or requested theme
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// Get the current theme
#[utoipa::path(
    get,
    path = "/preferences/theme",
    tag = "preferences",
    responses(
        (status = 200, description = "Current theme", body = ThemeBody)
    )
)]
pub async fn get_theme(State(state): State<crate::AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.services.preferences.theme(),
    })
}

/// Set the theme
#[utoipa::path(
    put,
    path = "/preferences/theme",
    tag = "preferences",
    request_body = ThemeBody,
    responses(
        (status = 200, description = "Theme updated", body = ThemeBody),
        (status = 422, description = "Unknown theme")
    )
)]
pub async fn update_theme(
    State(state): State<crate::AppState>,
    Json(request): Json<ThemeBody>,
) -> Json<ThemeBody> {
    state.services.preferences.set_theme(request.theme);
    Json(ThemeBody {
        theme: state.services.preferences.theme(),
    })
}

/// Flip between light and dark
#[utoipa::path(
    post,
    path = "/preferences/theme/toggle",
    tag = "preferences",
    responses(
        (status = 200, description = "Theme after toggling", body = ThemeBody)
    )
)]
pub async fn toggle_theme(State(state): State<crate::AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.services.preferences.toggle(),
    })
}
