use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use twilight_http::Client;
use twilight_http::request::AuditLogReason;
use twilight_model::id::Id;

use crate::open_dm;

const BAN_REASON: &str = "Left the server right after joining";

/// Platform actions the leave evaluator needs. Failures are returned, never retried.
#[async_trait]
pub trait Moderation: Send + Sync {
    async fn ban_member(
        &self,
        chat_id: u64,
        user_id: u64,
        revoke_recent_messages: bool,
    ) -> anyhow::Result<()>;

    async fn send_direct_message(&self, user_id: u64, text: &str) -> anyhow::Result<()>;
}

pub struct DiscordModerator {
    http: Arc<Client>,
    delete_message_seconds: u32,
    timeout: Duration,
}

impl DiscordModerator {
    pub fn new(http: Arc<Client>, delete_message_seconds: u32, timeout: Duration) -> Self {
        Self { http, delete_message_seconds, timeout }
    }
}

#[async_trait]
impl Moderation for DiscordModerator {
    async fn ban_member(
        &self,
        chat_id: u64,
        user_id: u64,
        revoke_recent_messages: bool,
    ) -> anyhow::Result<()> {
        let guild_id = Id::new_checked(chat_id).context("guild id must be non-zero")?;
        let user_id = Id::new_checked(user_id).context("user id must be non-zero")?;

        bounded(self.timeout, "ban request", async {
            let mut request = self.http.create_ban(guild_id, user_id).reason(BAN_REASON);
            if revoke_recent_messages {
                request = request.delete_message_seconds(self.delete_message_seconds);
            }
            request.await?;
            Ok::<_, anyhow::Error>(())
        })
        .await
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> anyhow::Result<()> {
        let user_id = Id::new_checked(user_id).context("user id must be non-zero")?;

        bounded(self.timeout, "direct message", async {
            let channel = open_dm!(self.http, user_id).await?;
            self.http.create_message(channel.id).content(text).await?;
            Ok::<_, anyhow::Error>(())
        })
        .await
    }
}

async fn bounded<F>(limit: Duration, what: &'static str, fut: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| anyhow::anyhow!("{what} timed out after {}ms", limit.as_millis()))?
}
