use std::sync::Arc;
use twilight_gateway::Event;

use crate::{
    context::Context,
    events::{interaction_create, member_add, member_remove, ready},
};

pub async fn handle_interaction_fast(ctx: Arc<Context>, event: Event) {
    let Event::InteractionCreate(boxed) = event else {
        return;
    };
    interaction_create::handle(ctx, (*boxed).0).await
}

pub async fn dispatch_event(ctx: Arc<Context>, event: Event) {
    match event {
        Event::Ready(boxed) => ready::handle(ctx, *boxed).await,
        Event::MemberAdd(boxed) => member_add::handle(ctx, *boxed).await,
        Event::MemberRemove(event) => member_remove::handle(ctx, event).await,
        _ => {}
    }
}
