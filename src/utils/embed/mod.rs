use std::time::Duration;

use twilight_model::channel::message::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use crate::services::membership::notice::format_window;

pub(super) const COLOR: u32 = 0x5865F2;

pub mod general;

pub use general::pong_embed;

pub fn start_embed(window: Duration, admin_contact: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(COLOR)
        .title("Hello! 👋")
        .description(format!(
            "I manage server memberships. Anyone who leaves a server within **{}** of joining is banned automatically.\n\n\
             If you have any issues, please contact my admin: {admin_contact}\n\n\
             Use `/help` to see available commands.",
            format_window(window),
        ))
        .validate()?
        .build();
    Ok(embed)
}

pub fn help_embed(guild_name: Option<&str>) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .color(COLOR)
        .title("Available commands")
        .field(EmbedFieldBuilder::new("/start", "Welcome message and bot info"))
        .field(EmbedFieldBuilder::new("/help", "Shows this help message"))
        .field(EmbedFieldBuilder::new("/ping", "Shows gateway latency"))
        .field(EmbedFieldBuilder::new(
            "Setup",
            "Invite me with the **Ban Members** permission and keep my role above the members I should moderate.",
        ));
    if let Some(name) = guild_name {
        builder = builder.footer(EmbedFooterBuilder::new(name).build());
    }
    Ok(builder.validate()?.build())
}
