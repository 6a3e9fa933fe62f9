use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use crate::context::Context;
use crate::handle_ephemeral;
use crate::services::latency::LatencyService;
use crate::utils::embed;
use std::sync::Arc;

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "ping", desc = "Show bot latency")]
pub struct PingCommand {}

impl PingCommand {
    pub async fn handle(ctx: Arc<Context>, interaction: Interaction, _data: CommandData) {
        handle_ephemeral!(ctx.http, interaction, "PingCommand", {
            embed::pong_embed(LatencyService::get())?
        });
    }
}
