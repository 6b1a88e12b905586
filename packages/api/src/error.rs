use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lambda_http::tracing::error;
use shared::models::game::responses::ErrorResponse;
use shared::services::errors::{
    game_service_errors::GameServiceError, session_service_errors::SessionServiceError,
};

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    SessionService(SessionServiceError),
    BadRequest(String),
    Unauthorized,
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<SessionServiceError> for ApiError {
    fn from(error: SessionServiceError) -> Self {
        ApiError::SessionService(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(
                GameServiceError::ValidationError(_) | GameServiceError::InvalidState(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::PlayerNotInGame) => StatusCode::FORBIDDEN,
            ApiError::GameService(GameServiceError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::SessionService(
                SessionServiceError::InvalidToken | SessionServiceError::ExpiredToken,
            ) => StatusCode::UNAUTHORIZED,
            ApiError::SessionService(SessionServiceError::JwtError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::GameService(err) => err.to_string(),
            ApiError::SessionService(err) => err.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Unauthorized => "No active session".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("Internal error: {}", self.message());
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.message()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::repositories::errors::game_repository_errors::GameRepositoryError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(GameServiceError::GameNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(GameServiceError::InvalidState("full".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(GameServiceError::PlayerNotInGame).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(GameServiceError::Conflict("busy".to_string())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(SessionServiceError::ExpiredToken).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let error = ApiError::from(GameServiceError::RepositoryError(
            GameRepositoryError::DynamoDb("table games-prod unreachable".to_string()),
        ));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
    }
}
