use std::sync::Arc;

use twilight_model::gateway::payload::incoming::Ready;

use crate::context::Context;
use crate::services::health::HealthService;

pub async fn handle(ctx: Arc<Context>, event: Ready) {
    let pending = ctx.store.load().await.len();
    tracing::info!(
        user = %event.user.name,
        guilds = event.guilds.len(),
        pending_joins = pending,
        "logged in"
    );

    HealthService::set_ready(true);
    HealthService::set_discord(true);
}
