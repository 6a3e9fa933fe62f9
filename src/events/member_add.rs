use std::sync::Arc;

use twilight_model::gateway::payload::incoming::MemberAdd;

use crate::context::Context;
use crate::services::membership::{self, tracker};

pub async fn handle(ctx: Arc<Context>, event: MemberAdd) {
    let member = super::member_event(
        event.guild_id,
        &event.member.user,
        event.member.nick.as_deref(),
    );
    tracker::record_join(&ctx.store, &member, membership::now()).await;
}
