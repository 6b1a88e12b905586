use std::env::set_var;
use std::sync::Arc;

use lambda_http::{run, tracing, Error};

use api::state::AppState;
use shared::config::{AppConfig, ConfigError, StorageBackend};
use shared::repositories::game_repository::{DynamoDbGameRepository, GameRepository};
use shared::repositories::in_memory_game_repository::InMemoryGameRepository;
use shared::services::game_service::GameService;
use shared::services::round_service::RoundService;
use shared::services::session_service::SessionService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let config = AppConfig::from_env()?;

    let repository: Arc<dyn GameRepository + Send + Sync> = match config.storage {
        StorageBackend::DynamoDb => {
            let table_name = config
                .games_table
                .clone()
                .ok_or(ConfigError::Missing("GAMES_TABLE"))?;
            let aws_config = aws_config::load_from_env().await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            Arc::new(DynamoDbGameRepository::new(client, table_name))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory game storage, games are lost on restart");
            Arc::new(InMemoryGameRepository::new())
        }
    };

    let round_service = RoundService::with_winning_score(config.winning_score);
    let game_service = Arc::new(GameService::new(repository, round_service));
    let session_service = Arc::new(SessionService::with_ttl_hours(
        config.jwt_secret.clone(),
        config.session_ttl_hours,
    ));

    let app_state = AppState {
        game_service,
        session_service,
        client_config: Arc::new(config.client.clone()),
    };

    let app = api::create_app(app_state);

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        run(app).await
    } else {
        let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
        tracing::info!("Listening on {}", config.bind_addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
