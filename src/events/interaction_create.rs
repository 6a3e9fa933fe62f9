use std::mem;
use std::sync::Arc;

use twilight_model::application::interaction::{Interaction, InteractionData};

use crate::commands::{help::HelpCommand, ping::PingCommand, start::StartCommand};
use crate::context::Context;

pub async fn handle(ctx: Arc<Context>, interaction: Interaction) {
    let Some(user) = interaction.author() else {
        return;
    };
    if user.bot || user.system.unwrap_or_default() {
        return;
    }

    let mut interaction = interaction;

    let data = match mem::take(&mut interaction.data) {
        Some(InteractionData::ApplicationCommand(data)) => *data,
        _ => {
            tracing::warn!("ignoring non-command interaction");
            return;
        }
    };

    match &*data.name {
        "start" => StartCommand::handle(ctx, interaction, data).await,
        "help" => HelpCommand::handle(ctx, interaction, data).await,
        "ping" => PingCommand::handle(ctx, interaction, data).await,
        other => tracing::debug!(command = other, "unknown command"),
    }
}
