use leave_guard::{
    bot::Bot,
    configs::{app::APP_CONFIG, discord::DISCORD_CONFIGS, guard::GUARD_CONFIGS},
    context::ContextBuilder,
    services::health::HealthService,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use twilight_gateway::{Intents, Shard, ShardId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls crypto provider"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = DISCORD_CONFIGS.validate().and_then(|_| GUARD_CONFIGS.validate()) {
        tracing::error!(error = %e, "refusing to start");
        return Err(e);
    }

    let shard = Shard::new(
        ShardId::ONE,
        DISCORD_CONFIGS.discord_token.clone(),
        Intents::GUILDS | Intents::GUILD_MEMBERS,
    );

    let shutdown = CancellationToken::new();
    let ctx = Arc::new(ContextBuilder::new().build().await?);
    tracing::info!(
        data_file = %ctx.store.path().display(),
        threshold_secs = ctx.config.ban_threshold.as_secs(),
        "membership store ready"
    );

    let health_shutdown = shutdown.clone();
    HealthService::spawn(&APP_CONFIG.health_addr, async move {
        health_shutdown.cancelled().await;
    })
    .await?;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_token.cancel(),
            Err(e) => tracing::error!(error = %e, "failed to listen for ctrl-c"),
        }
    });

    let bot = Bot::new(ctx, shard).await?;
    bot.run(shutdown).await?;
    tracing::info!("shutdown complete");
    Ok(())
}
