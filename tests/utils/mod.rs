#![allow(dead_code)]

pub mod event;
pub mod mock_http;

use std::sync::Arc;

use leave_guard::configs::guard::GuardConfig;
use leave_guard::context::{Context, ContextBuilder};
use leave_guard::dbs::MembershipStore;
use leave_guard::services::moderation::Moderation;
use tempfile::TempDir;
use twilight_http::Client;

pub const THRESHOLD_SECS: u64 = 300;

pub fn guard_config(dir: &TempDir) -> GuardConfig {
    GuardConfig {
        admin_contact: "@moderator".into(),
        ban_threshold: std::time::Duration::from_secs(THRESHOLD_SECS),
        data_file: dir.path().join("members.json"),
        ..GuardConfig::default()
    }
}

pub async fn open_store(config: &GuardConfig) -> MembershipStore {
    MembershipStore::open(&config.data_file)
        .await
        .expect("failed to open store")
}

/// Context wired to `moderator` and a store inside `dir`. No request reaches Discord.
pub async fn build_context(dir: &TempDir, moderator: Arc<dyn Moderation>) -> Arc<Context> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    let ctx = ContextBuilder::new()
        .http(Client::new(String::new()))
        .config(guard_config(dir))
        .moderator(moderator)
        .build()
        .await
        .expect("failed to build Context");
    Arc::new(ctx)
}
