use axum::{extract::State, Json};

use crate::state::AppState;
use shared::config::ClientConfig;

pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config.as_ref().clone())
}
