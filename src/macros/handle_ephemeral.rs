/// Runs `$body`, which evaluates to an embed, and replies with it
/// ephemerally. Errors are logged inside a `command` span.
#[macro_export]
macro_rules! handle_ephemeral {
    ($http:expr, $interaction:ident, $name:literal, $body:block) => {{
        use tracing::Instrument;
        async move {
            let result = async {
                let embed: twilight_model::channel::message::Embed = $body;
                $crate::respond_ephemeral!($http, &$interaction, embed).await
            }
            .await;
            if let Err(e) = result {
                tracing::error!(error = %e, "error handling {}", $name);
            }
        }
        .instrument(tracing::info_span!("command", name = $name))
        .await;
    }};
}
