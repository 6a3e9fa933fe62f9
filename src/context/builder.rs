use std::sync::Arc;

use twilight_cache_inmemory::{DefaultInMemoryCache, ResourceType};
use twilight_http::Client;

use crate::configs::discord::DISCORD_CONFIGS;
use crate::configs::guard::{GUARD_CONFIGS, GuardConfig};
use crate::dbs::MembershipStore;
use crate::services::moderation::{DiscordModerator, Moderation};

use super::Context;

pub struct ContextBuilder {
    http: Option<Client>,
    cache: Option<DefaultInMemoryCache>,
    config: Option<GuardConfig>,
    moderator: Option<Arc<dyn Moderation>>,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self { http: None, cache: None, config: None, moderator: None }
    }

    pub fn http(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn cache(mut self, cache: DefaultInMemoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn moderator(mut self, moderator: Arc<dyn Moderation>) -> Self {
        self.moderator = Some(moderator);
        self
    }

    pub async fn build(self) -> anyhow::Result<Context> {
        let http = Arc::new(
            self.http
                .unwrap_or_else(|| Client::new(DISCORD_CONFIGS.discord_token.clone())),
        );

        let cache = self.cache.unwrap_or_else(|| {
            DefaultInMemoryCache::builder()
                .resource_types(ResourceType::GUILD | ResourceType::USER_CURRENT)
                .build()
        });

        let config = self.config.unwrap_or_else(|| GUARD_CONFIGS.clone());
        config.validate()?;

        let store = MembershipStore::open(&config.data_file).await?;
        let moderator: Arc<dyn Moderation> = match self.moderator {
            Some(moderator) => moderator,
            None => Arc::new(DiscordModerator::new(
                http.clone(),
                config.delete_message_seconds,
                config.request_timeout,
            )),
        };

        Ok(Context { http, cache, store, moderator, config })
    }
}
