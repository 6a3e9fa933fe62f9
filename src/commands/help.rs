use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use crate::{context::Context, handle_ephemeral, utils::embed};
use std::sync::Arc;

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "help", desc = "Show bot commands")]
pub struct HelpCommand {}

impl HelpCommand {
    pub async fn handle(ctx: Arc<Context>, interaction: Interaction, _data: CommandData) {
        let guild_name = interaction
            .guild_id
            .and_then(|id| ctx.cache.guild(id).map(|g| g.name().to_owned()));
        handle_ephemeral!(ctx.http, interaction, "HelpCommand", {
            embed::help_embed(guild_name.as_deref())?
        });
    }
}
