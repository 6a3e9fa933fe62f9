pub mod embed;
pub mod env;
