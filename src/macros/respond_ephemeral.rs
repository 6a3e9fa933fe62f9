/// Answers `$interaction` with a single embed only the invoking user can see.
#[macro_export]
macro_rules! respond_ephemeral {
    ($http:expr, $interaction:expr, $embed:expr) => {{
        use twilight_model::channel::message::MessageFlags;
        use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
        use twilight_util::builder::InteractionResponseDataBuilder;
        async {
            let data = InteractionResponseDataBuilder::new()
                .embeds([$embed])
                .flags(MessageFlags::EPHEMERAL)
                .build();
            $http
                .interaction($interaction.application_id)
                .create_response(
                    $interaction.id,
                    &$interaction.token,
                    &InteractionResponse {
                        kind: InteractionResponseType::ChannelMessageWithSource,
                        data: Some(data),
                    },
                )
                .await?;
            Ok::<_, anyhow::Error>(())
        }
    }};
}
