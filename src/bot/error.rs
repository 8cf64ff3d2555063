//! Rendering of command failures.
//!
//! Every failure surfaced by the framework is mapped to a [`CommandFailure`] and
//! replied to the invoker as an error embed. Failures that are not the user's
//! fault are logged as well.

use poise::{CreateReply, FrameworkError};
use serenity::{
    all::CreateEmbed,
    utils::{GuildChannelParseError, MemberParseError, RoleParseError, UserParseError},
};

use crate::{
    bot::embed::{
        style::{colors, icons, styled},
        EmbedStyle,
    },
    error::AppError,
    state::{Context, Data},
};

/// What the user is told when a command fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    /// Too few or too many arguments.
    BadArgumentCount,
    /// An argument could not be parsed, or was parsed but is unacceptable.
    InvalidArgument(Option<String>),
    NotFound(Option<String>),
    AccessDenied(Option<String>),
    /// A domain rule rejected the action.
    Rejected { title: String, description: String },
    Other,
}

impl CommandFailure {
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::NotFound(msg) => CommandFailure::NotFound(Some(msg.clone())),
            AppError::AccessDenied(msg) => CommandFailure::AccessDenied(Some(msg.clone())),
            AppError::BadRequest(msg) => CommandFailure::InvalidArgument(Some(msg.clone())),
            AppError::Rejected { title, description } => CommandFailure::Rejected {
                title: title.clone(),
                description: description.clone(),
            },
            _ => CommandFailure::Other,
        }
    }

    /// Classifies an argument parse error by its concrete type.
    pub fn from_parse_error(error: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        if error.is::<poise::TooFewArguments>() || error.is::<poise::TooManyArguments>() {
            return CommandFailure::BadArgumentCount;
        }

        if error.is::<MemberParseError>()
            || error.is::<UserParseError>()
            || error.is::<RoleParseError>()
            || error.is::<GuildChannelParseError>()
        {
            return CommandFailure::NotFound(None);
        }

        CommandFailure::InvalidArgument(None)
    }

    pub fn title(&self) -> &str {
        match self {
            CommandFailure::BadArgumentCount => "Invalid use of command",
            CommandFailure::InvalidArgument(_) => "Invalid argument",
            CommandFailure::NotFound(_) => "Not found",
            CommandFailure::AccessDenied(_) => "Access denied",
            CommandFailure::Rejected { title, .. } => title,
            CommandFailure::Other => "An error occurred",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CommandFailure::BadArgumentCount => "Please provide the correct amount of parameters.",
            CommandFailure::InvalidArgument(msg) => msg
                .as_deref()
                .unwrap_or("One of the arguments could not be understood."),
            CommandFailure::NotFound(msg) => msg
                .as_deref()
                .unwrap_or("The requested object could not be found."),
            CommandFailure::AccessDenied(msg) => msg
                .as_deref()
                .unwrap_or("You are not allowed to use this command."),
            CommandFailure::Rejected { description, .. } => description,
            CommandFailure::Other => "Something went wrong while executing this command.",
        }
    }

    pub fn embed(&self) -> CreateEmbed {
        match self {
            CommandFailure::AccessDenied(_) => styled(
                colors::ERROR,
                icons::RESTRICTED,
                self.title(),
                self.description(),
            ),
            _ => EmbedStyle::Error.embed(self.title(), self.description()),
        }
    }
}

/// Framework error handler.
///
/// Unknown commands are ignored. Errors without a command context are delegated
/// to poise's default handler, which logs them.
pub async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    let (ctx, failure): (Context<'_>, CommandFailure) = match error {
        FrameworkError::Command { error, ctx, .. } => {
            let failure = CommandFailure::from_app_error(&error);
            if failure == CommandFailure::Other {
                tracing::error!(
                    "Command '{}' failed: {:?}",
                    ctx.command().qualified_name,
                    error
                );
            }
            (ctx, failure)
        }
        FrameworkError::ArgumentParse { error, ctx, .. } => {
            (ctx, CommandFailure::from_parse_error(error.as_ref()))
        }
        FrameworkError::CommandStructureMismatch { ctx, description, .. } => {
            tracing::warn!("Slash command structure mismatch: {}", description);
            (poise::Context::Application(ctx), CommandFailure::BadArgumentCount)
        }
        FrameworkError::CommandCheckFailed { error: Some(error), ctx, .. } => {
            (ctx, CommandFailure::from_app_error(&error))
        }
        FrameworkError::CommandCheckFailed { error: None, ctx, .. }
        | FrameworkError::MissingUserPermissions { ctx, .. }
        | FrameworkError::NotAnOwner { ctx, .. }
        | FrameworkError::GuildOnly { ctx, .. } => (ctx, CommandFailure::AccessDenied(None)),
        FrameworkError::UnknownCommand { .. } => return,
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Failed to handle framework error: {:?}", e);
            }
            return;
        }
    };

    if let Err(e) = ctx
        .send(CreateReply::default().embed(failure.embed()).ephemeral(true))
        .await
    {
        tracing::error!("Failed to send error reply: {:?}", e);
    }
}
