use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use crate::{context::Context, handle_ephemeral, utils::embed};
use std::sync::Arc;

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "start", desc = "Welcome message and bot info")]
pub struct StartCommand {}

impl StartCommand {
    pub async fn handle(ctx: Arc<Context>, interaction: Interaction, _data: CommandData) {
        if let Some(user) = interaction.author() {
            tracing::info!(user_id = user.id.get(), name = %user.name, "received /start");
        }
        handle_ephemeral!(ctx.http, interaction, "StartCommand", {
            embed::start_embed(ctx.config.ban_threshold, &ctx.config.admin_contact)?
        });
    }
}
