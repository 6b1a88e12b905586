pub mod errors;
pub mod game_service;
pub mod round_service;
pub mod session_service;
