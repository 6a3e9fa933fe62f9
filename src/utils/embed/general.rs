use twilight_model::channel::message::Embed;
use twilight_util::builder::embed::EmbedBuilder;

use super::COLOR;

pub fn pong_embed(latency_ms: Option<u64>) -> anyhow::Result<Embed> {
    let desc = match latency_ms {
        Some(ms) => format!("Latency: {ms}ms"),
        None => "Latency: N/A".to_string(),
    };
    let embed = EmbedBuilder::new()
        .color(COLOR)
        .title("Pong!")
        .description(desc)
        .validate()?
        .build();
    Ok(embed)
}
