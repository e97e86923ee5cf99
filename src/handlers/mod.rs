pub mod auth;
pub mod health;
pub mod home;
pub mod progress;
pub mod routine;
pub mod train;
