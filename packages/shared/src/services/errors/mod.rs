pub mod game_service_errors;
pub mod round_service_errors;
pub mod session_service_errors;
