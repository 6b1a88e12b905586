pub mod game;
pub mod session;
