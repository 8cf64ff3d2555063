use crate::{
    bot::{
        commands::reply,
        embed::style::{colors, icons, styled},
    },
    error::AppError,
    state::Context,
};

/// Show the gateway latency.
#[poise::command(prefix_command, slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let latency = ctx.ping().await;

    let description = if latency.is_zero() {
        "The gateway latency has not been measured yet.".to_string()
    } else {
        format!("Gateway latency: {} ms", latency.as_millis())
    };

    reply(
        ctx,
        styled(colors::DISCORD, icons::INFORMATION, "Pong!", description),
    )
    .await
}
