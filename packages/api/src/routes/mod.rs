pub mod auth;
pub mod client;
pub mod config;
pub mod game;
pub mod health;
