use std::sync::Arc;

use twilight_model::gateway::payload::incoming::MemberRemove;

use crate::context::Context;
use crate::services::membership::{self, evaluator};

pub async fn handle(ctx: Arc<Context>, event: MemberRemove) {
    let member = super::member_event(event.guild_id, &event.user, None);
    evaluator::handle_leave(
        &ctx.store,
        ctx.moderator.as_ref(),
        &ctx.config,
        &member,
        membership::now(),
    )
    .await;
}
