use std::sync::LazyLock;

use crate::utils::env::parse_env;

pub struct DiscordConfigs {
    pub discord_token: String,
}

impl DiscordConfigs {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("DISCORD_TOKEN is missing");
        }
        Ok(())
    }
}

pub static DISCORD_CONFIGS: LazyLock<DiscordConfigs> = LazyLock::new(|| DiscordConfigs {
    discord_token: parse_env("DISCORD_TOKEN", ""),
});
