pub mod bot;
pub mod commands;
pub mod configs;
pub mod context;
pub mod dbs;
pub mod dispatch;
pub mod events;
pub mod macros;
pub mod services;
pub mod utils;
