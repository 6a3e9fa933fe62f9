pub mod health;
pub mod latency;
pub mod membership;
pub mod moderation;
