pub mod app;
pub mod discord;
pub mod guard;
