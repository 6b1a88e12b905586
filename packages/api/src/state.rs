use std::sync::Arc;

use shared::config::ClientConfig;
use shared::services::game_service::GameService;
use shared::services::session_service::SessionService;

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub session_service: Arc<SessionService>,
    pub client_config: Arc<ClientConfig>,
}
