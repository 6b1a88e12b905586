use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::game::PlayerSlot;
use crate::models::session::{SessionClaims, SessionToken};
use crate::services::errors::session_service_errors::SessionServiceError;

pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Issues and verifies the signed tokens that bind a caller to one seat in one game.
pub struct SessionService {
    jwt_secret: String,
    ttl: Duration,
}

impl SessionService {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self::with_ttl_hours(jwt_secret, DEFAULT_SESSION_TTL_HOURS)
    }

    pub fn with_ttl_hours(jwt_secret: impl Into<String>, ttl_hours: i64) -> Self {
        SessionService {
            jwt_secret: jwt_secret.into(),
            ttl: Duration::hours(ttl_hours.max(1)),
        }
    }

    pub fn issue_token(
        &self,
        game_id: &str,
        player: PlayerSlot,
        player_name: &str,
    ) -> Result<SessionToken, SessionServiceError> {
        let now = Utc::now();
        let exp = (now + self.ttl).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = SessionClaims {
            sub: player_name.to_string(),
            game_id: game_id.to_string(),
            player,
            exp,
            iat,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| SessionServiceError::JwtError(format!("{:#?}", e)))?;

        Ok(SessionToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl.num_seconds(),
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, SessionServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<SessionClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let now = Utc::now().timestamp() as usize;
                if token_data.claims.exp < now {
                    Err(SessionServiceError::ExpiredToken)
                } else {
                    Ok(token_data.claims)
                }
            }
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(SessionServiceError::ExpiredToken)
                }
                _ => Err(SessionServiceError::InvalidToken),
            },
        }
    }
}
