use serenity::all::{Client, GatewayIntents, GuildId};

use crate::{
    bot::{commands, error::on_error, handler::Handler},
    error::AppError,
    state::Data,
};

/// Builds the Discord client with the poise framework and event handler attached.
///
/// Commands are registered as slash commands in the configured guild once the
/// framework is set up. The returned client is started by the caller, which
/// blocks until shutdown.
///
/// # Arguments
/// - `data` - Shared state handed to commands and the event handler
///
/// # Returns
/// - `Ok(Client)` - The client, ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(data: Data) -> Result<Client, AppError> {
    // GUILD_MEMBERS, GUILD_PRESENCES and MESSAGE_CONTENT are privileged intents and
    // must be enabled in the Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_PRESENCES;

    let token = data.config.token.clone();
    let guild_id = GuildId::new(data.config.guild);
    let setup_data = data.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(data.config.prefix.clone()),
                mention_as_prefix: true,
                case_insensitive_commands: true,
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    tracing::debug!(
                        "{} invoked '{}'",
                        ctx.author().name,
                        ctx.invocation_string()
                    );
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;
                tracing::info!(
                    "Registered {} commands in guild {}",
                    framework.options().commands.len(),
                    guild_id
                );
                Ok(setup_data)
            })
        })
        .build();

    let client = Client::builder(&token, intents)
        .framework(framework)
        .event_handler(Handler::new(data))
        .await?;

    Ok(client)
}
